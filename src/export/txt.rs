//! Raw text writer.

use std::path::Path;

pub fn write_txt(path: &Path, text: &str) -> Result<(), String> {
    std::fs::write(path, text).map_err(|e| e.to_string())
}
