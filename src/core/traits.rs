//! Host seams for the prompt core
//!
//! The repository never talks to a concrete storage or clipboard API. It goes
//! through these traits, so the same core runs against a file on disk, an
//! in-memory map in tests, or any other host key-value store.

use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;

/// Reply from a key-value backend.
///
/// `last_error` mirrors a host that reports runtime failures out of band:
/// the call itself can succeed while the host still flags an error, and the
/// caller has to check both.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply<T> {
    pub value: T,
    pub last_error: Option<String>,
}

impl<T> BackendReply<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            last_error: None,
        }
    }

    pub fn with_error(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            last_error: Some(message.into()),
        }
    }

    /// Collapse the out-of-band error into a `StorageRuntime` failure
    pub fn into_result(self) -> AppResult<T> {
        match self.last_error {
            Some(message) => Err(AppError::StorageRuntime(message)),
            None => Ok(self.value),
        }
    }
}

/// Asynchronous key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Whether the host storage API exists at all
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value stored under `key`, `None` when unset
    async fn get(&self, key: &str) -> AppResult<BackendReply<Option<Value>>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: Value) -> AppResult<BackendReply<()>>;
}

/// Plain-text clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_without_error_yields_value() {
        let reply = BackendReply::ok(42);
        assert_eq!(reply.into_result(), Ok(42));
    }

    #[test]
    fn test_reply_error_wins_over_value() {
        let reply = BackendReply::with_error(Some(Value::Null), "QUOTA_BYTES exceeded");
        assert_eq!(
            reply.into_result(),
            Err(AppError::StorageRuntime("QUOTA_BYTES exceeded".to_string()))
        );
    }
}
