//! Key-value backends for the prompt store
//!
//! `FileStore` keeps every key in a single JSON object on disk, the way a
//! browser extension keeps its local storage area. `MemoryStore` keeps them
//! in process and can be told to fail, which the tests rely on.

use crate::core::traits::{BackendReply, KeyValueStore};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// JSON object file storage
pub struct FileStore {
    path: PathBuf,
}

enum FileContents {
    Missing,
    Parsed(Map<String, Value>),
    Corrupted(String),
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_contents(&self) -> AppResult<FileContents> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileContents::Missing),
            Err(e) => {
                return Err(AppError::StorageRuntime(format!(
                    "Failed to read storage file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(FileContents::Missing);
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(FileContents::Parsed(map)),
            Ok(_) => Ok(FileContents::Corrupted(format!(
                "Storage file {} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Ok(FileContents::Corrupted(format!(
                "Storage file {} is corrupted: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write_contents(&self, map: Map<String, Value>) -> AppResult<()> {
        let write_err = |e: std::io::Error| {
            AppError::StorageRuntime(format!(
                "Failed to write storage file {}: {}",
                self.path.display(),
                e
            ))
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| AppError::StorageRuntime(format!("Failed to encode storage: {}", e)))?;

        // Write next to the target and rename so a crash never leaves a half-written file
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await.map_err(write_err)?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(write_err)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<BackendReply<Option<Value>>> {
        match self.read_contents().await? {
            FileContents::Missing => Ok(BackendReply::ok(None)),
            FileContents::Parsed(mut map) => Ok(BackendReply::ok(map.remove(key))),
            FileContents::Corrupted(message) => Ok(BackendReply::with_error(None, message)),
        }
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<BackendReply<()>> {
        let mut map = match self.read_contents().await? {
            FileContents::Missing => Map::new(),
            FileContents::Parsed(map) => map,
            // Refuse to clobber other keys in a file we could not read
            FileContents::Corrupted(message) => return Ok(BackendReply::with_error((), message)),
        };

        map.insert(key.to_string(), value);
        self.write_contents(map).await?;
        tracing::trace!(key, path = %self.path.display(), "wrote storage file");
        Ok(BackendReply::ok(()))
    }
}

/// In-process storage with fault injection
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
    pending_error: Mutex<Option<String>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Make the next `get` or `set` report `message` as a runtime error
    pub async fn fail_next(&self, message: impl Into<String>) {
        *self.pending_error.lock().await = Some(message.into());
    }

    pub async fn insert(&self, key: &str, value: Value) {
        self.values.lock().await.insert(key.to_string(), value);
    }

    pub async fn value(&self, key: &str) -> Option<Value> {
        self.values.lock().await.get(key).cloned()
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }

    async fn get(&self, key: &str) -> AppResult<BackendReply<Option<Value>>> {
        if let Some(message) = self.pending_error.lock().await.take() {
            return Ok(BackendReply::with_error(None, message));
        }
        Ok(BackendReply::ok(self.values.lock().await.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<BackendReply<()>> {
        if let Some(message) = self.pending_error.lock().await.take() {
            return Ok(BackendReply::with_error((), message));
        }
        self.values.lock().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(BackendReply::ok(()))
    }
}
