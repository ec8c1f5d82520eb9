pub mod clipboard;
pub mod error;
pub mod export;
pub mod format;
pub mod interactive;
pub mod output;

pub use clipboard::SystemClipboard;
pub use error::{AppError, AppResult};
pub use output::{OutputStyle, print_success};
