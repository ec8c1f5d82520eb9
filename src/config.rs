use crate::core::data::{FilterOptions, SortBy, SortOrder};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "promptdeck";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub storage_file: PathBuf,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default)]
    pub clipboard_cmd: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_sort_by() -> SortBy {
    SortBy::CreatedAt
}

fn default_color() -> bool {
    true
}

fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                storage_file: app_config_dir().join("storage.json"),
                export_dir: default_export_dir(),
                clipboard_cmd: None,
                sort_by: default_sort_by(),
                sort_order: SortOrder::Desc,
                color: default_color(),
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.storage_file.as_os_str().is_empty() {
            return Err(AppError::Config("Storage file cannot be empty".to_string()));
        }

        if self.general.export_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Export directory cannot be empty".to_string()));
        }

        if let Some(cmd) = &self.general.clipboard_cmd
            && cmd.trim().is_empty()
        {
            return Err(AppError::Config(
                "Clipboard command cannot be blank; remove it to use the platform default"
                    .to_string(),
            ));
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        app_config_dir().join("config.toml")
    }

    /// Filter options the list view starts from
    pub fn default_filter(&self) -> FilterOptions {
        FilterOptions::default().sorted(self.general.sort_by, self.general.sort_order)
    }
}
