//! Core data structures for prompt management
//!
//! This module contains the persisted `Prompt` record plus the ephemeral
//! shapes used around it: creation fields, partial updates, editor drafts
//! and filter options.

use crate::utils::format;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Maximum number of tags the editor lets through on commit
pub const MAX_TAGS: usize = 10;

/// A single stored prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "format")]
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Field-wise update; `None` leaves the current value in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// In-progress edit buffer. `id` is set when editing an existing prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Title,
    CreatedAt,
    Tags,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Search, tag and sort settings held by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub search_query: String,
    pub selected_tags: BTreeSet<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_tags: BTreeSet::new(),
            sort_by: Some(SortBy::CreatedAt),
            sort_order: SortOrder::Desc,
        }
    }
}

impl Prompt {
    /// Create a new prompt with a fresh id and the current time.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is
    /// persisted with, so a load after save yields an identical value.
    pub fn new(fields: NewPrompt) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            content: fields.content,
            tags: fields.tags,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Apply a patch; `id` and `created_at` are never touched
    pub fn apply_patch(&mut self, patch: PromptPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl NewPrompt {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags,
        }
    }
}

impl PromptPatch {
    pub fn tags(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            ..Self::default()
        }
    }
}

impl PromptDraft {
    /// Blank draft for a new prompt
    pub fn blank() -> Self {
        Self {
            id: None,
            title: "New Prompt".to_string(),
            content: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&Prompt> for PromptDraft {
    fn from(prompt: &Prompt) -> Self {
        Self {
            id: Some(prompt.id.clone()),
            title: prompt.title.clone(),
            content: prompt.content.clone(),
            tags: prompt.tags.clone(),
        }
    }
}

impl FilterOptions {
    /// Options that keep every prompt in its stored order
    pub fn unsorted() -> Self {
        Self {
            sort_by: None,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn sorted(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = sort_order;
        self
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} {}", self.title, format::format_tags_hash(&self.tags))
        }
    }
}
