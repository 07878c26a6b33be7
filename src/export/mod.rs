//! Export the displayed transcript to disk.

mod document;
mod txt;

use std::path::Path;

/// Title line for the paginated document, per displayed variant.
pub fn document_title(polished: bool) -> &'static str {
    if polished {
        "Kotha Lipi AI Refined Transcription"
    } else {
        "Kotha Lipi Original Transcription"
    }
}

/// Export the transcript verbatim as plain text.
pub fn export_txt(path: &Path, text: &str) -> Result<(), String> {
    txt::write_txt(path, text)
}

/// Export the transcript as a paginated, titled document.
pub fn export_document(path: &Path, title: &str, text: &str) -> Result<(), String> {
    document::write_document(path, title, text)
}
