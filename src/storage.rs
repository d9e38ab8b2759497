use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use anyhow::Context as _;

/// Key/value persistence with `localStorage` semantics.
pub trait Storage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object file. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", self.path.display()))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(&items).context("encode storage")?;
        std::fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))
    }
}

/// Storage that refuses every access, like a browser with storage disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl Storage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage is unavailable")
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage is unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/storage.json");

        let mut first = FileStorage::new(path.clone());
        assert_eq!(first.get_item("k").unwrap(), None);
        first.set_item("k", "light").unwrap();

        let second = FileStorage::new(path);
        assert_eq!(second.get_item("k").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileStorage::new(path).get_item("k").is_err());
    }
}
