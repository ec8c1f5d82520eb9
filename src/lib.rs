//! Promptdeck - store, search, tag and export reusable prompts
//!
//! The library holds the prompt core: a key-value backed store, the
//! repository that owns the canonical list, the filter engine and the
//! JSON/CSV export encoders. The `promptdeck` binary is one front end over it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use core::{
    app::{AppState, ViewMode},
    data::{FilterOptions, NewPrompt, Prompt, PromptDraft, PromptPatch, SortBy, SortOrder},
    filter::{apply, available_tags},
    repository::{PromptRepository, RepositoryState},
    store::PromptStore,
    traits::{BackendReply, Clipboard, KeyValueStore},
};
pub use storage::{FileStore, MemoryStore};
pub use utils::error::{AppError, AppResult};
pub use utils::export::{copy_to_clipboard, to_csv, to_json};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
