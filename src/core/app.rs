//! Explicit application state for any presentation layer
//!
//! View mode, edit buffer, search text and selected tags live here instead of
//! in ambient UI state. A terminal, web or native front end holds one
//! `AppState` next to a [`PromptRepository`] and re-renders from both.

use crate::core::data::{FilterOptions, MAX_TAGS, NewPrompt, Prompt, PromptDraft, PromptPatch};
use crate::core::filter;
use crate::core::repository::{PromptRepository, require_title};
use crate::utils::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static TAG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("tag separator regex is valid"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ViewMode,
    pub editing: Option<PromptDraft>,
    pub filter: FilterOptions,
    pub notice: Option<String>,
}

/// Split comma separated tag input, dropping blanks and keeping at most
/// [`MAX_TAGS`] entries
pub fn parse_tag_input(input: &str) -> Vec<String> {
    TAG_SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .map(String::from)
        .collect()
}

/// Checks applied before a draft is committed
pub fn validate_draft(draft: &PromptDraft) -> AppResult<()> {
    require_title(&draft.title)?;
    if draft.tags.len() > MAX_TAGS {
        return Err(AppError::Validation(format!(
            "Maximum {} tags allowed",
            MAX_TAGS
        )));
    }
    Ok(())
}

impl AppState {
    pub fn new(filter: FilterOptions) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn begin_create(&mut self) {
        self.editing = Some(PromptDraft::blank());
        self.view = ViewMode::Edit;
    }

    pub fn begin_edit(&mut self, prompt: &Prompt) {
        self.editing = Some(PromptDraft::from(prompt));
        self.view = ViewMode::Edit;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.view = ViewMode::List;
    }

    /// Mutable access to the open draft, if any
    pub fn draft_mut(&mut self) -> Option<&mut PromptDraft> {
        self.editing.as_mut()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    /// Select `tag` if unselected, otherwise unselect it
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.filter.selected_tags.remove(tag) {
            self.filter.selected_tags.insert(tag.to_string());
        }
    }

    pub fn clear_tags(&mut self) {
        self.filter.selected_tags.clear();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Prompts the list view should show right now
    pub fn visible(&self, repo: &PromptRepository) -> Vec<Prompt> {
        filter::apply(repo.prompts(), &self.filter)
    }

    /// Tags offered for filtering
    pub fn available_tags(&self, repo: &PromptRepository) -> Vec<String> {
        filter::available_tags(repo.prompts())
    }

    /// Validate the open draft and create or update through `repo`.
    ///
    /// On success the editor closes. On failure the draft stays open and the
    /// message is kept in `notice`.
    pub async fn commit_edit(&mut self, repo: &mut PromptRepository) -> AppResult<Prompt> {
        let result = self.try_commit(repo).await;
        match &result {
            Ok(_) => {
                self.cancel_edit();
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
        result
    }

    async fn try_commit(&self, repo: &mut PromptRepository) -> AppResult<Prompt> {
        let draft = self
            .editing
            .clone()
            .ok_or_else(|| AppError::Validation("No prompt is being edited".to_string()))?;
        validate_draft(&draft)?;

        match draft.id {
            None => {
                repo.create(NewPrompt::new(draft.title, draft.content, draft.tags))
                    .await
            }
            Some(id) => {
                let patch = PromptPatch {
                    title: Some(draft.title),
                    content: Some(draft.content),
                    tags: Some(draft.tags),
                };
                repo.update(&id, patch).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::PromptStore;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    async fn repo() -> PromptRepository {
        PromptRepository::open(PromptStore::new(Arc::new(MemoryStore::new()))).await
    }

    #[test]
    fn test_parse_tag_input() {
        assert_eq!(parse_tag_input("rust, cli ,ai"), vec!["rust", "cli", "ai"]);
        assert_eq!(parse_tag_input(" , a,, b , "), vec!["a", "b"]);
        assert!(parse_tag_input("").is_empty());

        let many = (0..15).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(parse_tag_input(&many).len(), MAX_TAGS);
    }

    #[test]
    fn test_toggle_tag() {
        let mut state = AppState::default();
        state.toggle_tag("a");
        state.toggle_tag("b");
        assert_eq!(state.filter.selected_tags.len(), 2);
        state.toggle_tag("a");
        assert!(!state.filter.selected_tags.contains("a"));
        state.clear_tags();
        assert!(state.filter.selected_tags.is_empty());
    }

    #[tokio::test]
    async fn test_commit_new_draft() {
        let mut repo = repo().await;
        let mut state = AppState::default();

        state.begin_create();
        assert_eq!(state.view, ViewMode::Edit);
        if let Some(draft) = state.draft_mut() {
            draft.title = "Greeting".to_string();
            draft.content = "Hello".to_string();
            draft.tags = parse_tag_input("x, y");
        }

        let prompt = state.commit_edit(&mut repo).await.unwrap();
        assert_eq!(prompt.tags, vec!["x", "y"]);
        assert_eq!(state.view, ViewMode::List);
        assert!(state.editing.is_none());
        assert_eq!(repo.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_commit_existing_draft_updates_in_place() {
        let mut repo = repo().await;
        let created = repo
            .create(NewPrompt::new("Greeting", "Hello", Vec::new()))
            .await
            .unwrap();
        let mut state = AppState::default();

        state.begin_edit(&created);
        if let Some(draft) = state.draft_mut() {
            draft.content = "Hi there".to_string();
        }
        let updated = state.commit_edit(&mut repo).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(repo.prompts().len(), 1);
        assert_eq!(repo.prompts()[0].content, "Hi there");
    }

    #[tokio::test]
    async fn test_commit_rejects_invalid_draft() {
        let mut repo = repo().await;
        let mut state = AppState::default();

        state.begin_create();
        if let Some(draft) = state.draft_mut() {
            draft.title = String::new();
        }
        assert!(matches!(
            state.commit_edit(&mut repo).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(state.view, ViewMode::Edit);
        assert_eq!(state.notice.as_deref(), Some("Title is required"));

        if let Some(draft) = state.draft_mut() {
            draft.title = "Tagged".to_string();
            draft.tags = (0..11).map(|i| i.to_string()).collect();
        }
        assert!(matches!(
            state.commit_edit(&mut repo).await,
            Err(AppError::Validation(_))
        ));
        assert!(repo.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_visible_applies_filter() {
        let mut repo = repo().await;
        repo.create(NewPrompt::new("Greeting", "Hello world", vec!["x".to_string()]))
            .await
            .unwrap();
        repo.create(NewPrompt::new("Other", "nope", Vec::new()))
            .await
            .unwrap();

        let mut state = AppState::default();
        assert_eq!(state.visible(&repo).len(), 2);
        state.set_search("hello");
        assert_eq!(state.visible(&repo).len(), 1);
        state.set_search("");
        state.toggle_tag("x");
        assert_eq!(state.visible(&repo)[0].title, "Greeting");
        assert_eq!(state.available_tags(&repo), vec!["x"]);
    }
}
