//! Credential store
//!
//! A small string key-value store. The only key in use is
//! [`API_KEY`]; [`resolve_api_key`] falls back to the environment when the
//! store has nothing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BriefError, Result};

/// Key under which the API credential is stored
pub const API_KEY: &str = "openai_api_key";

/// Environment variable consulted when the store is empty
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const STORE_DIR: &str = "briefcanvas";
const STORE_FILE: &str = "storage.json";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// JSON object on disk, rewritten on every change
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/briefcanvas/storage.json`
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| BriefError::Other("no user config directory".to_string()))?;
        Ok(Self::new(base.join(STORE_DIR).join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "Wrote store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

/// In-process store for tests and one-shot sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stored credential, else the environment, else [`BriefError::MissingCredential`]
pub fn resolve_api_key(store: &dyn KeyValueStore) -> Result<String> {
    resolve_with_env(store, std::env::var(API_KEY_ENV).ok())
}

fn resolve_with_env(store: &dyn KeyValueStore, env: Option<String>) -> Result<String> {
    if let Some(key) = store.get(API_KEY)?.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }
    env.filter(|k| !k.trim().is_empty())
        .ok_or(BriefError::MissingCredential)
}

/// `sk-abc…wxyz` style preview of a credential
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join(STORE_FILE));
        assert_eq!(store.get(API_KEY).unwrap(), None);

        store.set(API_KEY, "sk-test-1234").unwrap();
        store.set("other", "value").unwrap();
        assert_eq!(store.get(API_KEY).unwrap().as_deref(), Some("sk-test-1234"));

        // A fresh handle reads what the first one wrote
        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));

        store.remove(API_KEY).unwrap();
        assert_eq!(store.get(API_KEY).unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_resolution_order() {
        let mut store = MemoryStore::default();
        assert!(matches!(
            resolve_with_env(&store, None),
            Err(BriefError::MissingCredential)
        ));
        assert_eq!(
            resolve_with_env(&store, Some("sk-env".into())).unwrap(),
            "sk-env"
        );
        store.set(API_KEY, "sk-stored").unwrap();
        assert_eq!(
            resolve_with_env(&store, Some("sk-env".into())).unwrap(),
            "sk-stored"
        );
        store.set(API_KEY, "  ").unwrap();
        assert!(resolve_with_env(&store, Some(String::new())).is_err());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk-abcdefghijklmnop"), "sk-…mnop");
        assert_eq!(mask_key("short"), "*****");
    }
}
