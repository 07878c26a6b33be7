//! Shared application state, managed by Tauri.
//!
//! One container instead of ambient globals: the live result, the selected
//! audio, the locale, and the in-flight guards all live here. Mutations
//! that should orphan an in-flight call bump `generation`.

use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::audio::AudioInput;
use crate::history::HistoryStore;
use crate::i18n::Locale;

/// Lifecycle of the live transcription result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Processing,
    Completed,
    Error,
}

/// The session's single transcription result. Replaced wholesale on each
/// attempt; never partially mutated mid-flight.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranscriptionResult {
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            status: Status::Idle,
            error: None,
        }
    }

    pub fn processing() -> Self {
        Self {
            text: String::new(),
            status: Status::Processing,
            error: None,
        }
    }

    pub fn completed(text: String) -> Self {
        Self {
            text,
            status: Status::Completed,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            text: String::new(),
            status: Status::Error,
            error: Some(message),
        }
    }
}

pub struct AppState {
    pub history: Mutex<HistoryStore>,
    pub audio: Mutex<Option<AudioInput>>,
    pub result: Mutex<TranscriptionResult>,
    pub locale: Mutex<Locale>,
    /// At most one transcription / one polish in flight per session.
    pub transcribing: AtomicBool,
    pub polishing: AtomicBool,
    /// Bumped when the session is cleared or reselected, so a result that
    /// lands afterwards is dropped instead of misapplied.
    pub generation: AtomicU64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            history: Mutex::new(HistoryStore::default()),
            audio: Mutex::new(None),
            result: Mutex::new(TranscriptionResult::idle()),
            locale: Mutex::new(Locale::default()),
            transcribing: AtomicBool::new(false),
            polishing: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Status::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(serde_json::to_string(&Status::Idle).unwrap(), "\"idle\"");
    }

    #[test]
    fn error_result_carries_message_only() {
        let result = TranscriptionResult::error("সংযোগ বিচ্ছিন্ন".into());
        assert_eq!(result.status, Status::Error);
        assert!(result.text.is_empty());
        assert_eq!(result.error.as_deref(), Some("সংযোগ বিচ্ছিন্ন"));
    }

    #[test]
    fn completed_result_has_no_error() {
        let json =
            serde_json::to_value(TranscriptionResult::completed("কথা".into())).unwrap();
        assert_eq!(json["status"], "completed");
        assert!(json.get("error").is_none());
    }
}
