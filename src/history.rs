//! Transcription history: newest-first, capped, persisted as one JSON slot.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Max entries kept; appending past the cap evicts the oldest.
pub const HISTORY_CAP: usize = 50;

/// One archived transcription. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    pub file_name: String,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
}

/// In-memory history collection. Every mutation is followed by a
/// whole-collection `persist`, so the file always mirrors memory.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Read the persisted collection. Malformed or unreadable data is
    /// discarded with a warning; there is no partial recovery.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to read history file: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<HistoryEntry>>(&json) {
            Ok(entries) => Self { entries },
            Err(e) => {
                log::warn!("Discarding malformed history file: {}", e);
                Self::default()
            }
        }
    }

    /// Overwrite the persisted slot with the full current collection.
    pub fn persist(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Prepend a new entry with a fresh id and current timestamp,
    /// truncating to the cap.
    pub fn append(&mut self, text: String, file_name: String) -> HistoryEntry {
        let entry = HistoryEntry {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            file_name,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.entries.insert(0, entry.clone());
        self.entries.truncate(HISTORY_CAP);
        entry
    }

    /// Delete by id. No-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_prepends_newest_first() {
        let mut store = HistoryStore::default();
        store.append("প্রথম".into(), "a.mp3".into());
        store.append("দ্বিতীয়".into(), "b.mp3".into());
        store.append("তৃতীয়".into(), "c.mp3".into());
        let texts: Vec<&str> = store.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["তৃতীয়", "দ্বিতীয়", "প্রথম"]);
    }

    #[test]
    fn append_past_cap_evicts_oldest() {
        let mut store = HistoryStore::default();
        for i in 0..51 {
            store.append(format!("entry {}", i), "waz.mp3".into());
        }
        assert_eq!(store.len(), HISTORY_CAP);
        // Newest survives at the front, entry 0 is gone.
        assert_eq!(store.entries()[0].text, "entry 50");
        assert_eq!(store.entries()[HISTORY_CAP - 1].text, "entry 1");
    }

    #[test]
    fn never_grows_beyond_cap() {
        let mut store = HistoryStore::default();
        for i in 0..200 {
            store.append(format!("{}", i), "f.wav".into());
            assert!(store.len() <= HISTORY_CAP);
        }
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut store = HistoryStore::default();
        store.append("কথা".into(), "a.mp3".into());
        store.remove("no-such-id");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut store = HistoryStore::default();
        let kept = store.append("রাখা".into(), "a.mp3".into());
        let gone = store.append("মুছে".into(), "b.mp3".into());
        store.remove(&gone.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, kept.id);
        assert!(store.get(&gone.id).is_none());
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut store = HistoryStore::default();
        for _ in 0..5 {
            store.append("x".into(), "f.mp3".into());
        }
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::default();
        store.append("বাংলা কথা".into(), "khutba.mp3".into());
        store.append("আরো কথা".into(), "waz.ogg".into());
        store.persist(&path).unwrap();

        let loaded = HistoryStore::load(&path);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].text, "আরো কথা");
        assert_eq!(loaded.entries()[1].file_name, "khutba.mp3");
    }

    #[test]
    fn malformed_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json at all").unwrap();
        assert!(HistoryStore::load(&path).is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HistoryStore::load(&dir.path().join("absent.json")).is_empty());
    }
}
