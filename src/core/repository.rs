//! Canonical in-memory prompt list and its persistence lifecycle
//!
//! Every mutation updates the list first, then writes the whole list through
//! the [`PromptStore`]. A failed write is not rolled back: the list keeps the
//! change, `error` carries the message and `unsaved` stays raised until a
//! later write or refresh succeeds.
//!
//! Mutations take `&mut self`, so one repository cannot interleave them.
//! Two processes sharing a backend still race, and the last whole-collection
//! write wins.

use crate::core::data::{NewPrompt, Prompt, PromptPatch};
use crate::core::store::PromptStore;
use crate::utils::error::{AppError, AppResult};

/// Observable repository state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryState {
    pub prompts: Vec<Prompt>,
    pub loading: bool,
    pub error: Option<String>,
    pub unsaved: bool,
}

pub struct PromptRepository {
    store: PromptStore,
    state: RepositoryState,
}

pub(crate) fn require_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        Err(AppError::Validation("Title is required".to_string()))
    } else {
        Ok(())
    }
}

impl PromptRepository {
    /// A repository that has not loaded anything yet
    pub fn new(store: PromptStore) -> Self {
        Self {
            store,
            state: RepositoryState {
                loading: true,
                ..RepositoryState::default()
            },
        }
    }

    /// Create a repository and run the initial load
    pub async fn open(store: PromptStore) -> Self {
        let mut repo = Self::new(store);
        repo.refresh().await;
        repo
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.state.prompts
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    /// Reload from the store. On failure the previous list is kept.
    pub async fn refresh(&mut self) {
        self.state.loading = true;

        match self.store.load().await {
            Ok(prompts) => {
                self.state.prompts = prompts;
                self.state.error = None;
                self.state.unsaved = false;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load prompts");
                self.state.error = Some(err.to_string());
            }
        }

        self.state.loading = false;
    }

    async fn persist(&mut self) {
        match self.store.save(&self.state.prompts).await {
            Ok(()) => {
                self.state.error = None;
                self.state.unsaved = false;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save prompts, keeping local changes");
                self.state.error = Some(err.to_string());
                self.state.unsaved = true;
            }
        }
    }

    /// Add a new prompt. Only validation errors are returned; a failed
    /// write shows up in [`RepositoryState::error`].
    pub async fn create(&mut self, fields: NewPrompt) -> AppResult<Prompt> {
        require_title(&fields.title)?;

        let prompt = Prompt::new(fields);
        tracing::info!(id = %prompt.id, title = %prompt.title, "creating prompt");
        self.state.prompts.push(prompt.clone());
        self.persist().await;
        Ok(prompt)
    }

    /// Replace the patched fields of prompt `id`
    pub async fn update(&mut self, id: &str, patch: PromptPatch) -> AppResult<Prompt> {
        if let Some(title) = &patch.title {
            require_title(title)?;
        }

        let prompt = self
            .state
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        prompt.apply_patch(patch);
        let updated = prompt.clone();
        tracing::info!(id = %updated.id, "updated prompt");
        self.persist().await;
        Ok(updated)
    }

    /// Remove prompt `id`. The list is written back even when nothing matched.
    pub async fn delete(&mut self, id: &str) -> Option<Prompt> {
        let removed = self
            .state
            .prompts
            .iter()
            .position(|p| p.id == id)
            .map(|index| self.state.prompts.remove(index));

        match &removed {
            Some(prompt) => tracing::info!(id = %prompt.id, "deleted prompt"),
            None => tracing::debug!(id, "delete of unknown prompt"),
        }

        self.persist().await;
        removed
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Prompt> {
        self.state.prompts.iter().find(|p| p.id == id)
    }

    /// Find a prompt by id, falling back to an exact title match
    pub fn find(&self, identifier: &str) -> Option<&Prompt> {
        self.find_by_id(identifier)
            .or_else(|| self.state.prompts.iter().find(|p| p.title == identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::PROMPTS_KEY;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    async fn open_with(backend: Arc<MemoryStore>) -> PromptRepository {
        PromptRepository::open(PromptStore::new(backend)).await
    }

    #[tokio::test]
    async fn test_new_repository_starts_loading() {
        let repo = PromptRepository::new(PromptStore::new(Arc::new(MemoryStore::new())));
        assert!(repo.is_loading());
        assert!(repo.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_create_update_delete_scenario() {
        let backend = Arc::new(MemoryStore::new());
        let mut repo = open_with(backend.clone()).await;
        assert!(!repo.is_loading());

        let created = repo
            .create(NewPrompt::new("Greeting", "Hello", tags(&["x", "y"])))
            .await
            .unwrap();
        assert_eq!(repo.prompts().len(), 1);
        assert!(!created.id.is_empty());
        assert_eq!(repo.prompts()[0].tags, tags(&["x", "y"]));

        let updated = repo
            .update(&created.id, PromptPatch::tags(tags(&["z"])))
            .await
            .unwrap();
        assert_eq!(repo.prompts().len(), 1);
        assert_eq!(updated.tags, tags(&["z"]));
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Greeting");

        let removed = repo.delete(&created.id).await;
        assert_eq!(removed.map(|p| p.id), Some(created.id));
        assert!(repo.prompts().is_empty());

        // every mutation rewrote the full collection
        assert_eq!(backend.writes(), 3);
        assert_eq!(backend.value(PROMPTS_KEY).await, Some(serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_create_with_empty_title_is_rejected() {
        let backend = Arc::new(MemoryStore::new());
        let mut repo = open_with(backend.clone()).await;

        let err = repo.create(NewPrompt::new("", "Hello", Vec::new())).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(repo.prompts().is_empty());
        assert_eq!(backend.writes(), 0);

        let err = repo.create(NewPrompt::new("   ", "", Vec::new())).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let mut repo = open_with(Arc::new(MemoryStore::new())).await;
        let err = repo
            .update("missing", PromptPatch::tags(Vec::new()))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn test_update_with_empty_title_leaves_prompt_alone() {
        let mut repo = open_with(Arc::new(MemoryStore::new())).await;
        let created = repo.create(NewPrompt::new("Keep", "", Vec::new())).await.unwrap();

        let patch = PromptPatch {
            title: Some(String::new()),
            ..PromptPatch::default()
        };
        assert!(matches!(
            repo.update(&created.id, patch).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(repo.prompts()[0].title, "Keep");
    }

    #[tokio::test]
    async fn test_update_does_not_enforce_tag_cap() {
        let mut repo = open_with(Arc::new(MemoryStore::new())).await;
        let created = repo.create(NewPrompt::new("Many", "", Vec::new())).await.unwrap();

        let many: Vec<String> = (0..12).map(|i| format!("t{}", i)).collect();
        let updated = repo.update(&created.id, PromptPatch::tags(many)).await.unwrap();
        assert_eq!(updated.tags.len(), 12);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_still_persists() {
        let backend = Arc::new(MemoryStore::new());
        let mut repo = open_with(backend.clone()).await;

        assert!(repo.delete("missing").await.is_none());
        assert_eq!(backend.writes(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_optimistic_change() {
        let backend = Arc::new(MemoryStore::new());
        let mut repo = open_with(backend.clone()).await;

        backend.fail_next("write failed").await;
        let created = repo.create(NewPrompt::new("Draft", "", Vec::new())).await.unwrap();

        assert_eq!(repo.prompts().len(), 1);
        assert!(repo.state().unsaved);
        assert_eq!(repo.error(), Some("Storage error: write failed"));

        // the next successful write carries the earlier change along
        repo.update(&created.id, PromptPatch::tags(tags(&["a"]))).await.unwrap();
        assert!(!repo.state().unsaved);
        assert!(repo.error().is_none());

        let mut reopened = open_with(backend).await;
        reopened.refresh().await;
        assert_eq!(reopened.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let backend = Arc::new(MemoryStore::new());
        let mut repo = open_with(backend.clone()).await;
        repo.create(NewPrompt::new("One", "", Vec::new())).await.unwrap();

        backend.fail_next("read failed").await;
        repo.refresh().await;

        assert!(!repo.is_loading());
        assert_eq!(repo.prompts().len(), 1);
        assert!(repo.error().is_some());

        repo.dismiss_error();
        assert!(repo.error().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_storage_on_open() {
        let backend = Arc::new(MemoryStore::new());
        backend.set_available(false);
        let repo = open_with(backend).await;

        assert!(!repo.is_loading());
        assert!(repo.prompts().is_empty());
        assert!(repo.error().unwrap().contains("not available"));
    }

    #[tokio::test]
    async fn test_find_by_id_or_title() {
        let mut repo = open_with(Arc::new(MemoryStore::new())).await;
        let created = repo.create(NewPrompt::new("Greeting", "", Vec::new())).await.unwrap();

        assert_eq!(repo.find(&created.id).map(|p| p.title.as_str()), Some("Greeting"));
        assert_eq!(repo.find("Greeting").map(|p| p.id.clone()), Some(created.id));
        assert!(repo.find("greeting").is_none());
    }
}
