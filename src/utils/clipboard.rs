use crate::core::traits::Clipboard;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard backed by an external copy command that reads stdin
pub struct SystemClipboard {
    command: Option<String>,
}

impl SystemClipboard {
    /// Use `command` when given, otherwise try the platform defaults in order
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        if let Some(cmd) = &self.command {
            return vec![cmd.split_whitespace().map(String::from).collect()];
        }

        default_commands()
            .iter()
            .map(|parts| parts.iter().map(|p| p.to_string()).collect())
            .collect()
    }
}

const MACOS_COMMANDS: &[&[&str]] = &[&["pbcopy"]];
const WINDOWS_COMMANDS: &[&[&str]] = &[&["clip"]];
const UNIX_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

fn default_commands() -> &'static [&'static [&'static str]] {
    if cfg!(target_os = "macos") {
        MACOS_COMMANDS
    } else if cfg!(windows) {
        WINDOWS_COMMANDS
    } else {
        UNIX_COMMANDS
    }
}

async fn pipe_into(parts: &[String], text: &str) -> AppResult<()> {
    let (program, args) = parts
        .split_first()
        .ok_or_else(|| AppError::Clipboard("Clipboard command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .await
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Clipboard(format!("{} exited with {}", program, status)))
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let mut last_error =
            AppError::Clipboard("No clipboard command available".to_string());

        for parts in self.candidates() {
            match pipe_into(&parts, text).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(command = ?parts, error = %e, "clipboard command failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
