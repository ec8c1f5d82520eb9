pub mod configure;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod show;
pub mod tags;

use crate::config::Config;
use crate::core::data::Prompt;
use crate::core::repository::PromptRepository;
use crate::core::store::PromptStore;
use crate::storage::FileStore;
use crate::utils::error::AppError;
use crate::utils::interactive::read_stdin_content;
use anyhow::{Result, anyhow};
use std::sync::Arc;

/// Open the configured storage and load every prompt.
///
/// A failed load aborts the command: writing after it would replace the
/// stored collection with whatever little is in memory.
pub async fn open_repository(config: &Config) -> Result<PromptRepository> {
    let backend = Arc::new(FileStore::new(&config.general.storage_file));
    let repo = PromptRepository::open(PromptStore::new(backend)).await;

    if let Some(error) = repo.error() {
        return Err(anyhow!("Failed to load prompts: {}", error));
    }
    Ok(repo)
}

/// Turn a kept-but-unsaved mutation into a command failure
pub fn ensure_saved(repo: &PromptRepository) -> Result<()> {
    if repo.state().unsaved {
        let reason = repo.error().unwrap_or("unknown storage error");
        return Err(anyhow!("Change was applied but could not be saved: {}", reason));
    }
    Ok(())
}

pub fn find_prompt(repo: &PromptRepository, identifier: &str) -> Result<Prompt> {
    repo.find(identifier)
        .cloned()
        .ok_or_else(|| AppError::NotFound(identifier.to_string()).into())
}

/// `-` means read the content from stdin
pub fn resolve_content(arg: &str) -> Result<String> {
    if arg == "-" {
        read_stdin_content()
    } else {
        Ok(arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::NewPrompt;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.general.storage_file = dir.path().join("storage.json");
        config.general.export_dir = dir.path().join("exports");
        config
    }

    #[tokio::test]
    async fn test_file_backed_repository_persists_between_opens() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let mut repo = open_repository(&config).await.unwrap();
        let created = repo
            .create(NewPrompt::new("Greeting", "Hello", vec!["x".to_string()]))
            .await
            .unwrap();
        ensure_saved(&repo).unwrap();

        let reopened = open_repository(&config).await.unwrap();
        assert_eq!(reopened.prompts(), &[created.clone()]);
        assert_eq!(find_prompt(&reopened, "Greeting").unwrap().id, created.id);
        assert!(find_prompt(&reopened, "missing").is_err());
    }

    #[tokio::test]
    async fn test_corrupted_storage_aborts_open() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.general.storage_file, "not json").unwrap();

        let err = open_repository(&config).await.err().unwrap();
        assert!(err.to_string().contains("Failed to load prompts"));
        assert_eq!(
            std::fs::read_to_string(&config.general.storage_file).unwrap(),
            "not json"
        );
    }

    #[test]
    fn test_resolve_content_passes_literal_text() {
        assert_eq!(resolve_content("Hello").unwrap(), "Hello");
    }
}
