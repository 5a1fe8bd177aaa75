use super::KeyValueStore;
use crate::error::{CartzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: each key lives in its own `<key>.json` file under
/// a root directory. The directory is created lazily on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys double as file names; reject anything that could escape
        // the store root.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(CartzError::Store(format!("Invalid store key: {key}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CartzError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(CartzError::Io)?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_root()?;
        fs::write(path, value).map_err(CartzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_missing_root_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("store"));
        assert_eq!(store.get("lists").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_get_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store"));
        store.set("lists", "[]").unwrap();
        assert_eq!(store.get("lists").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("store").join("lists.json").exists());
    }

    #[test]
    fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
    }
}
