//! Audio input selection and the supported-format whitelist.
//!
//! Playback preview runs in the webview over the asset protocol; the
//! backend owns which file is selected and validates it before anything is
//! uploaded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

lazy_static::lazy_static! {
    /// Extension -> MIME type, restricted to what the transcription
    /// service accepts.
    static ref SUPPORTED_FORMATS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("mp3", "audio/mpeg");
        m.insert("wav", "audio/wav");
        m.insert("m4a", "audio/x-m4a");
        m.insert("ogg", "audio/ogg");
        m.insert("aac", "audio/aac");
        m
    };
}

/// MIME type for a path, or `None` when the format is not supported.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_FORMATS.get(ext.as_str()).copied()
}

/// A validated, user-selected audio file. Replacing the selection releases
/// the previous one; the file itself is only read at transcription time.
#[derive(Debug, Clone, Serialize)]
pub struct AudioInput {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl AudioInput {
    pub fn from_path(path: &Path) -> Option<Self> {
        let mime_type = mime_type_for(path)?;
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whitelisted_extensions() {
        assert_eq!(mime_type_for(Path::new("waz.mp3")), Some("audio/mpeg"));
        assert_eq!(mime_type_for(Path::new("a/b/khutba.WAV")), Some("audio/wav"));
        assert_eq!(mime_type_for(Path::new("talk.m4a")), Some("audio/x-m4a"));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(mime_type_for(Path::new("video.mp4")), None);
        assert_eq!(mime_type_for(Path::new("notes.txt")), None);
        assert_eq!(mime_type_for(Path::new("no_extension")), None);
    }

    #[test]
    fn from_path_carries_file_name() {
        let input = AudioInput::from_path(Path::new("/tmp/waz_2024.ogg")).unwrap();
        assert_eq!(input.file_name, "waz_2024.ogg");
        assert_eq!(input.mime_type, "audio/ogg");
    }

    #[test]
    fn from_path_rejects_unsupported() {
        assert!(AudioInput::from_path(Path::new("/tmp/talk.flac")).is_none());
    }
}
