//! Path utilities for the app data, history, and exports directories.

use std::path::PathBuf;
use tauri::{AppHandle, Manager};

/// Get the app data directory (e.g. %APPDATA%/kotha-lipi on Windows).
pub fn app_data_dir(app: &AppHandle) -> Result<PathBuf, String> {
    app.path().app_data_dir().map_err(|e| e.to_string())
}

/// Fixed slot for the persisted history collection.
pub fn history_path(app: &AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_dir(app)?.join("history.json"))
}

/// Get the exports directory, creating it if necessary.
pub fn exports_dir(app: &AppHandle) -> Result<PathBuf, String> {
    let dir = app_data_dir(app)?.join("exports");
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

/// Get the log file path (e.g. %APPDATA%/kotha-lipi/logs/kotha-lipi.log).
pub fn log_file_path(app: &AppHandle) -> Result<PathBuf, String> {
    let dir = app_data_dir(app)?.join("logs");
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir.join("kotha-lipi.log"))
}

/// Ensure all app directories exist.
pub fn ensure_directories(app: &AppHandle) -> Result<(), String> {
    let dir = app_data_dir(app)?;
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    exports_dir(app)?;
    let _ = log_file_path(app);
    Ok(())
}
