//! 検索語の保存ファイル
//!
//! `~/.config/nasa-gallery/state.json` に `{"searchTerm": "..."}` を書く。
//! 読めない・壊れている場合は空として扱う。

use crate::error::Result;
use nasa_gallery_common::KeyValueStore;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// 状態ファイルを読み込み
    pub fn load(path: &Path) -> Self {
        let values = match File::open(path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "状態ファイルが壊れているため無視します");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.values)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), error = %e, "検索語を保存できませんでした");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasa_gallery_common::storage::stored_term;
    use nasa_gallery_common::SEARCH_TERM_KEY;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = FileStore::load(&dir.path().join("state.json"));
        assert_eq!(stored_term(&store), "");
    }

    #[test]
    fn test_set_persists_to_disk() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("state.json");

        let mut store = FileStore::load(&path);
        store.set_string(SEARCH_TERM_KEY, "Orion");

        let reloaded = FileStore::load(&path);
        assert_eq!(stored_term(&reloaded), "Orion");

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"searchTerm\""));
    }

    #[test]
    fn test_corrupted_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let store = FileStore::load(&path);
        assert_eq!(stored_term(&store), "");
    }
}
