use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Storage not available: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    StorageRuntime(String),

    #[error("{0}")]
    Validation(String),

    #[error("Prompt '{0}' not found")]
    NotFound(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub enum FlowResult {
    EmptyList {
        item_type: String,
    },
    Cancelled(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::StorageUnavailable(_) | AppError::StorageRuntime(_) => {
            eprintln!("💾 {}", OutputStyle::error(&err.to_string()));
        }
        AppError::Validation(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::NotFound(_) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        _ => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {} found", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Cancelled(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}
