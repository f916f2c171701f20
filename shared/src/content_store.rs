//! Key-value storage of content collections.
//!
//! Each key holds one JSON document; the content API reads the four
//! collection keys and the CLI writes them.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid store key `{0}`")]
    InvalidKey(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored value for `{key}` is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn put(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// One `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&path)(err)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    async fn put(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(io_error(&self.root))?;

        let body = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        let staging = self.root.join(format!(".{key}.json.tmp"));
        tokio::fs::write(&staging, body)
            .await
            .map_err(io_error(&staging))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(io_error(&path))?;

        tracing::debug!(key, path = %path.display(), "stored value");
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_error(&self.root)(err)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error(&self.root))? {
            let name = entry.file_name();
            let Some(key) = name.to_str().and_then(|name| name.strip_suffix(".json")) else {
                continue;
            };
            if validate_key(key).is_ok() {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            values: RwLock::new(values.into_iter().collect()),
        }
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        validate_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.values.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn file_store_round_trips_and_lists_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileKvStore::new(dir.path().join("kv"));

        assert_eq!(store.get("projects").await.expect("missing key"), None);
        assert!(store.keys().await.expect("keys of missing dir").is_empty());

        store
            .put("projects", &json!([{"id": "1"}]))
            .await
            .expect("put projects");
        store.put("blog", &json!([])).await.expect("put blog");

        assert_eq!(store.get("projects").await.expect("get"), Some(json!([{"id": "1"}])));
        assert_eq!(store.keys().await.expect("keys"), vec!["blog", "projects"]);
    }

    #[tokio::test]
    async fn file_store_reports_corrupt_documents() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("blog.json"), "{not json").expect("write");
        let store = FileKvStore::new(dir.path());

        let err = store.get("blog").await.expect_err("corrupt value");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn keys_outside_the_allowed_alphabet_are_rejected() {
        let store = MemoryKvStore::new();
        for key in ["", "../etc/passwd", "a b", "x.json"] {
            assert!(matches!(store.get(key).await, Err(StoreError::InvalidKey(_))));
        }
        let dir = tempfile::tempdir().expect("temp dir");
        let file_store = FileKvStore::new(dir.path());
        assert!(file_store.put("../escape", &json!(1)).await.is_err());
    }

    #[tokio::test]
    async fn memory_store_overwrites_values() {
        let store = MemoryKvStore::with_values([("blog".to_string(), json!([1]))]);
        store.put("blog", &json!([2])).await.expect("put");
        assert_eq!(store.get("blog").await.expect("get"), Some(json!([2])));
        assert_eq!(store.keys().await.expect("keys"), vec!["blog"]);
    }
}
