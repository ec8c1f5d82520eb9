//! Persistence adapter between the repository and a key-value backend

use crate::core::data::Prompt;
use crate::core::traits::KeyValueStore;
use crate::utils::error::{AppError, AppResult};
use std::sync::Arc;

/// Key the whole prompt array lives under
pub const PROMPTS_KEY: &str = "prompts";

#[derive(Clone)]
pub struct PromptStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PromptStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.backend.is_available() {
            Ok(())
        } else {
            Err(AppError::StorageUnavailable(
                "Prompt storage backend is not available".to_string(),
            ))
        }
    }

    /// Load every stored prompt; an unset key means an empty collection
    pub async fn load(&self) -> AppResult<Vec<Prompt>> {
        self.ensure_available()?;

        let value = self.backend.get(PROMPTS_KEY).await?.into_result()?;
        let prompts = match value {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value::<Vec<Prompt>>(value).map_err(|e| {
                AppError::StorageRuntime(format!("Failed to decode stored prompts: {}", e))
            })?,
        };

        tracing::debug!(count = prompts.len(), "loaded prompts");
        Ok(prompts)
    }

    /// Overwrite the stored collection with `prompts`
    pub async fn save(&self, prompts: &[Prompt]) -> AppResult<()> {
        self.ensure_available()?;

        let value = serde_json::to_value(prompts).map_err(|e| {
            AppError::StorageRuntime(format!("Failed to encode prompts: {}", e))
        })?;
        self.backend.set(PROMPTS_KEY, value).await?.into_result()?;

        tracing::debug!(count = prompts.len(), "saved prompts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::NewPrompt;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn sample() -> Vec<Prompt> {
        vec![
            Prompt::new(NewPrompt::new("Greeting", "Hello", vec!["x".to_string()])),
            Prompt::new(NewPrompt::new("Other", "nope", Vec::new())),
        ]
    }

    #[tokio::test]
    async fn test_unset_key_loads_empty() {
        let store = PromptStore::new(Arc::new(MemoryStore::new()));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_is_lossless() {
        let store = PromptStore::new(Arc::new(MemoryStore::new()));
        let prompts = sample();

        store.save(&prompts).await.unwrap();
        assert_eq!(store.load().await.unwrap(), prompts);
    }

    #[tokio::test]
    async fn test_unavailable_backend() {
        let backend = MemoryStore::new();
        backend.set_available(false);
        let store = PromptStore::new(Arc::new(backend));

        assert!(matches!(store.load().await, Err(AppError::StorageUnavailable(_))));
        assert!(matches!(store.save(&[]).await, Err(AppError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_runtime_error_is_surfaced() {
        let backend = Arc::new(MemoryStore::new());
        let store = PromptStore::new(backend.clone());

        backend.fail_next("QUOTA_BYTES quota exceeded").await;
        let err = store.save(&sample()).await.unwrap_err();
        assert_eq!(err, AppError::StorageRuntime("QUOTA_BYTES quota exceeded".to_string()));

        // the failure is one-shot
        store.save(&sample()).await.unwrap();
    }

    #[tokio::test]
    async fn test_undecodable_value_is_runtime_error() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .insert(PROMPTS_KEY, json!([{ "title": "no id" }]))
            .await;
        let store = PromptStore::new(backend);

        assert!(matches!(store.load().await, Err(AppError::StorageRuntime(_))));
    }
}
