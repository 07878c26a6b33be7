//! Hosted model calls: transcription and polish.

mod gemini;
mod instructions;

pub use gemini::{polish_transcript, transcribe_audio, GeminiConfig, TranscribeError};
