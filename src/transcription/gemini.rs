//! Gemini generateContent client for the transcription and polish calls.
//!
//! Each operation is one request/response: no streaming, no retry, no
//! partial results. Failures propagate to the caller uninterpreted.

use std::path::Path;

use base64::Engine as _;
use serde_json::{json, Value};

use super::instructions;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const TRANSCRIBE_MODEL: &str = "gemini-3-flash-preview";
const POLISH_MODEL: &str = "gemini-3-pro-preview";

/// Failure modes of the two model calls.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("failed to read audio file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("model returned no text")]
    EmptyResponse,
}

/// Configuration for the Gemini calls. The credential comes from the
/// environment; model names can be overridden the same way.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub transcribe_model: String,
    pub polish_model: String,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, TranscribeError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TranscribeError::MissingApiKey)?;
        Ok(Self {
            api_key,
            transcribe_model: std::env::var("GEMINI_TRANSCRIBE_MODEL")
                .unwrap_or_else(|_| TRANSCRIBE_MODEL.to_string()),
            polish_model: std::env::var("GEMINI_POLISH_MODEL")
                .unwrap_or_else(|_| POLISH_MODEL.to_string()),
        })
    }
}

/// Transcribe an audio file: the bytes go inline, base64-encoded, next to
/// the fixed transcription instruction. Returns the raw model text.
pub async fn transcribe_audio(
    config: &GeminiConfig,
    audio_path: &Path,
    mime_type: &str,
) -> Result<String, TranscribeError> {
    let bytes = std::fs::read(audio_path)?;
    let data = base64::engine::general_purpose::STANDARD.encode(bytes);
    let body = json!({
        "contents": [{
            "parts": [
                { "inline_data": { "mime_type": mime_type, "data": data } },
                { "text": instructions::TRANSCRIPTION }
            ]
        }],
        "generationConfig": { "temperature": 0, "topP": 0.1, "topK": 1 }
    });
    generate_content(config, &config.transcribe_model, body).await
}

/// Polish a sanitized transcript with the higher-capability model. The
/// result is for display and export only; it is never archived.
pub async fn polish_transcript(
    config: &GeminiConfig,
    original_text: &str,
) -> Result<String, TranscribeError> {
    let prompt = format!(
        "{}\n\nমূল টেক্সট:\n{}",
        instructions::POLISH,
        original_text
    );
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "temperature": 0.1, "topP": 0.1 }
    });
    generate_content(config, &config.polish_model, body).await
}

async fn generate_content(
    config: &GeminiConfig,
    model: &str,
    body: Value,
) -> Result<String, TranscribeError> {
    let url = format!("{}/models/{}:generateContent", API_BASE, model);
    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(TranscribeError::Api { status, body });
    }

    let json: Value = response.json().await?;
    extract_text(&json).ok_or(TranscribeError::EmptyResponse)
}

/// Concatenated candidate text from a generateContent response, or `None`
/// when the model returned nothing usable.
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "বাংলা " }, { "text": "কথা" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("বাংলা কথা"));
    }

    #[test]
    fn empty_candidates_is_none() {
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn whitespace_only_text_is_none() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "  \n " }] } }]
        });
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn non_text_parts_are_skipped() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inline_data": { "data": "aaaa" } }, { "text": "কথা" }]
                }
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("কথা"));
    }
}
