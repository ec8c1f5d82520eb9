use crate::core::data::Prompt;
use crate::core::traits::Clipboard;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_date, format_iso};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

const CSV_HEADER: [&str; 4] = ["Title", "Content", "Tags", "Created"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn encode(&self, prompts: &[Prompt]) -> AppResult<String> {
        match self {
            ExportFormat::Json => to_json(prompts),
            ExportFormat::Csv => Ok(to_csv(prompts)),
        }
    }
}

/// Pretty-printed JSON array with every field
pub fn to_json(prompts: &[Prompt]) -> AppResult<String> {
    serde_json::to_string_pretty(prompts)
        .map_err(|e| AppError::Export(format!("Failed to export prompts as JSON: {}", e)))
}

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// CSV with a `Title,Content,Tags,Created` header and every field quoted
pub fn to_csv(prompts: &[Prompt]) -> String {
    let header = CSV_HEADER.join(",");
    let rows = prompts.iter().map(|p| {
        [
            quote_csv(&p.title),
            quote_csv(&p.content),
            quote_csv(&p.tags.join(", ")),
            quote_csv(&format_iso(&p.created_at)),
        ]
        .join(",")
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `prompts-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(format: ExportFormat, date: &DateTime<Utc>) -> String {
    format!("prompts-{}.{}", format_date(date), format.extension())
}

/// Encode `prompts` and write them into `dir` under today's export name
pub fn write_export(dir: &Path, format: ExportFormat, prompts: &[Prompt]) -> AppResult<PathBuf> {
    let content = format.encode(prompts)?;
    let path = dir.join(export_file_name(format, &Utc::now()));

    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;
    std::fs::write(&path, content)
        .map_err(|e| AppError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), count = prompts.len(), "exported prompts");
    Ok(path)
}

pub async fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> AppResult<()> {
    clipboard.write_text(text).await.inspect_err(|e| {
        tracing::warn!(error = %e, "clipboard write failed");
    })
}
