mod audio;
mod export;
mod history;
mod i18n;
mod paths;
mod progress;
mod sanitize;
mod state;
mod transcription;

use std::sync::atomic::Ordering;

use log::{info, warn};
use tauri::Manager;

use audio::AudioInput;
use i18n::{translations, Locale, Translations};
use progress::ProgressTicker;
use state::{AppState, Status, TranscriptionResult};
use transcription::GeminiConfig;

#[tauri::command]
fn get_app_data_dir(app: tauri::AppHandle) -> Result<String, String> {
    paths::app_data_dir(&app).map(|p| p.to_string_lossy().into_owned())
}

#[tauri::command]
fn get_log_file_path(app: tauri::AppHandle) -> Result<String, String> {
    paths::log_file_path(&app).map(|p| p.to_string_lossy().into_owned())
}

#[tauri::command]
fn get_exports_dir(app: tauri::AppHandle) -> Result<String, String> {
    paths::exports_dir(&app).map(|p| p.to_string_lossy().into_owned())
}

#[tauri::command]
fn set_locale(state: tauri::State<'_, AppState>, locale: Locale) -> Result<(), String> {
    *state.locale.lock().unwrap() = locale;
    Ok(())
}

#[tauri::command]
fn get_locale(state: tauri::State<'_, AppState>) -> Result<Locale, String> {
    Ok(*state.locale.lock().unwrap())
}

#[tauri::command]
fn get_translations(locale: Locale) -> Result<Translations, String> {
    Ok(translations(locale).clone())
}

/// Validate and stash the user's file selection. Replacing the selection
/// releases the previous one and resets the result for the new file.
#[tauri::command]
fn select_audio(state: tauri::State<'_, AppState>, path: String) -> Result<AudioInput, String> {
    let locale = *state.locale.lock().unwrap();
    let input = AudioInput::from_path(std::path::Path::new(&path))
        .ok_or_else(|| translations(locale).unsupported_format.to_string())?;
    *state.audio.lock().unwrap() = Some(input.clone());
    *state.result.lock().unwrap() = TranscriptionResult::idle();
    state.generation.fetch_add(1, Ordering::SeqCst);
    Ok(input)
}

#[tauri::command]
fn clear_audio(state: tauri::State<'_, AppState>) -> Result<(), String> {
    *state.audio.lock().unwrap() = None;
    *state.result.lock().unwrap() = TranscriptionResult::idle();
    state.generation.fetch_add(1, Ordering::SeqCst);
    Ok(())
}

#[tauri::command]
fn get_result(state: tauri::State<'_, AppState>) -> Result<TranscriptionResult, String> {
    Ok(state.result.lock().unwrap().clone())
}

/// Run the full pipeline for the selected file: simulated progress,
/// one model call, sanitization, then archive and publish the result.
#[tauri::command]
async fn transcribe(app: tauri::AppHandle) -> Result<TranscriptionResult, String> {
    let state = app.state::<AppState>();
    let locale = *state.locale.lock().unwrap();
    let t = translations(locale);

    if state.transcribing.swap(true, Ordering::SeqCst) {
        return Err("Transcription already in progress".to_string());
    }

    let selected = state.audio.lock().unwrap().clone();
    let input = match selected {
        Some(input) => input,
        None => {
            state.transcribing.store(false, Ordering::SeqCst);
            return Err("No audio file selected".to_string());
        }
    };
    let generation = state.generation.load(Ordering::SeqCst);

    *state.result.lock().unwrap() = TranscriptionResult::processing();
    info!("Transcribing {} ({})", input.file_name, input.mime_type);

    let ticker = ProgressTicker::start(&app, t.uploading.to_string(), t.ai_working.to_string());

    let outcome = async {
        let config = GeminiConfig::from_env()?;
        transcription::transcribe_audio(&config, &input.path, input.mime_type).await
    }
    .await;

    let result = match outcome {
        Ok(raw) => {
            let text = sanitize::sanitize_transcript(&raw);
            ticker.finish(&app, t.done);
            tokio::time::sleep(std::time::Duration::from_millis(
                progress::COMPLETION_DELAY_MS,
            ))
            .await;
            TranscriptionResult::completed(text)
        }
        Err(err) => {
            warn!("Transcription failed: {}", err);
            ticker.cancel();
            TranscriptionResult::error(t.error_msg.to_string())
        }
    };

    // The user may have cleared the session while the call was in flight;
    // a stale result must not resurrect it.
    if state.generation.load(Ordering::SeqCst) != generation {
        state.transcribing.store(false, Ordering::SeqCst);
        return Ok(TranscriptionResult::idle());
    }

    *state.result.lock().unwrap() = result.clone();

    if result.status == Status::Completed {
        let mut history = state.history.lock().unwrap();
        history.append(result.text.clone(), input.file_name.clone());
        match paths::history_path(&app) {
            Ok(path) => {
                if let Err(e) = history.persist(&path) {
                    warn!("Failed to persist history: {}", e);
                }
            }
            Err(e) => warn!("No history path: {}", e),
        }
    }

    state.transcribing.store(false, Ordering::SeqCst);
    Ok(result)
}

/// Polish the completed transcript. On failure the prior original view
/// stays active: nothing in state changes and the error is logged.
#[tauri::command]
async fn polish(app: tauri::AppHandle) -> Result<String, String> {
    let state = app.state::<AppState>();

    let original = {
        let result = state.result.lock().unwrap();
        if result.status != Status::Completed || result.text.trim().is_empty() {
            return Err("Nothing to polish".to_string());
        }
        result.text.clone()
    };

    if state.polishing.swap(true, Ordering::SeqCst) {
        return Err("Polish already in progress".to_string());
    }

    let outcome = async {
        let config = GeminiConfig::from_env()?;
        transcription::polish_transcript(&config, &original).await
    }
    .await;

    state.polishing.store(false, Ordering::SeqCst);

    match outcome {
        Ok(polished) => Ok(polished),
        Err(err) => {
            warn!("Polishing failed: {}", err);
            Err(err.to_string())
        }
    }
}

#[tauri::command]
fn list_history(state: tauri::State<'_, AppState>) -> Result<Vec<history::HistoryEntry>, String> {
    Ok(state.history.lock().unwrap().entries().to_vec())
}

/// Bring an archived transcript back as the live result, replacing any
/// current selection.
#[tauri::command]
fn load_history_entry(
    state: tauri::State<'_, AppState>,
    id: String,
) -> Result<TranscriptionResult, String> {
    let text = state
        .history
        .lock()
        .unwrap()
        .get(&id)
        .map(|e| e.text.clone())
        .ok_or("History entry not found")?;
    *state.audio.lock().unwrap() = None;
    state.generation.fetch_add(1, Ordering::SeqCst);
    let result = TranscriptionResult::completed(text);
    *state.result.lock().unwrap() = result.clone();
    Ok(result)
}

#[tauri::command]
fn remove_history_entry(app: tauri::AppHandle, id: String) -> Result<(), String> {
    let state = app.state::<AppState>();
    let mut history = state.history.lock().unwrap();
    history.remove(&id);
    history.persist(&paths::history_path(&app)?)
}

/// Empty the archive. The UI asks the user first; the flag carries their
/// answer.
#[tauri::command]
fn clear_history(app: tauri::AppHandle, confirmed: bool) -> Result<(), String> {
    if !confirmed {
        return Err("History clear requires confirmation".to_string());
    }
    let state = app.state::<AppState>();
    let mut history = state.history.lock().unwrap();
    history.clear();
    history.persist(&paths::history_path(&app)?)
}

#[tauri::command]
fn copy_to_clipboard(app: tauri::AppHandle, text: String) -> Result<(), String> {
    use tauri_plugin_clipboard_manager::ClipboardExt;
    app.clipboard().write_text(text).map_err(|e| e.to_string())
}

#[tauri::command]
fn export_transcript(
    path: String,
    format: String,
    polished: bool,
    text: String,
) -> Result<(), String> {
    let p = std::path::Path::new(&path);
    match format.as_str() {
        "txt" => export::export_txt(p, &text),
        "doc" => export::export_document(p, export::document_title(polished), &text),
        _ => Err(format!("Unsupported format: {}", format)),
    }
}

/// Log directory resolved without an AppHandle (the logger starts before
/// Tauri does).
fn log_dir_path() -> std::path::PathBuf {
    dirs::data_dir()
        .map(|d| d.join("kotha-lipi").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".").join("logs"))
}

fn init_logger() -> Result<std::path::PathBuf, fern::InitError> {
    let log_dir = log_dir_path();
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = log_dir.join("kotha-lipi.log");

    let format = |out: fern::FormatCallback<'_>,
                  message: &std::fmt::Arguments<'_>,
                  record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .level_for("reqwest", log::LevelFilter::Info)
        .level_for("hyper", log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _log_path = init_logger().ok();

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().skip_logger().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(AppState::default())
        .setup(|app| {
            paths::ensure_directories(app.handle())?;
            if let Ok(path) = paths::history_path(app.handle()) {
                let store = history::HistoryStore::load(&path);
                info!("Loaded {} history entries", store.len());
                *app.state::<AppState>().history.lock().unwrap() = store;
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_app_data_dir,
            get_log_file_path,
            get_exports_dir,
            set_locale,
            get_locale,
            get_translations,
            select_audio,
            clear_audio,
            get_result,
            transcribe,
            polish,
            list_history,
            load_history_entry,
            remove_history_entry,
            clear_history,
            copy_to_clipboard,
            export_transcript,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
