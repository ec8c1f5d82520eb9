use crate::commands::{configure, copy, delete, edit, export, list, new, show, tags};
use crate::config::Config;
use crate::core::data::{SortBy, SortOrder};
use crate::utils::export::ExportFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "Store, search, tag and export reusable prompts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config, config_path: PathBuf) -> Result<()> {
        match self {
            Commands::New(args) => new::handle_new_command(config, &args).await?,
            Commands::List(args) => list::handle_list_command(config, &args).await?,
            Commands::Show(args) => show::handle_show_command(config, &args).await?,
            Commands::Edit(args) => edit::handle_edit_command(config, &args).await?,
            Commands::Delete(args) => delete::handle_delete_command(config, &args).await?,
            Commands::Tags(args) => tags::handle_tags_command(config, &args).await?,
            Commands::Export(args) => export::handle_export_command(config, &args).await?,
            Commands::Copy(args) => copy::handle_copy_command(config, &args).await?,
            Commands::Config(args) => {
                configure::handle_config_command(config, &config_path, args.command)?
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new prompt
    New(NewArgs),

    /// List prompts, optionally filtered and sorted
    List(ListArgs),

    /// Show prompt details
    Show(ShowArgs),

    /// Edit an existing prompt
    Edit(EditArgs),

    /// Delete a prompt
    Delete(DeleteArgs),

    /// List every tag in use
    Tags(TagsArgs),

    /// Export all prompts as JSON or CSV
    Export(ExportArgs),

    /// Copy a prompt's content to the clipboard
    Copy(CopyArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    #[arg(long, help = "Prompt content, '-' reads stdin")]
    pub content: Option<String>,

    #[arg(short, long, help = "Comma separated tags, at most 10")]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(short = 'q', long, help = "Case-insensitive text in title or content")]
    pub search: Option<String>,

    #[arg(short, long = "tag", help = "Only prompts carrying every given tag")]
    pub tags: Vec<String>,

    #[arg(short, long, value_enum)]
    pub sort: Option<SortBy>,

    #[arg(short, long, value_enum)]
    pub order: Option<SortOrder>,

    #[arg(short, long, value_enum, default_value_t = ListFormat::Simple)]
    pub format: ListFormat,

    #[arg(long, help = "Print collection statistics instead")]
    pub stats: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(help = "Prompt ID or title")]
    pub identifier: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(help = "Prompt ID or title to edit")]
    pub identifier: String,

    #[arg(short = 'T', long)]
    pub title: Option<String>,

    #[arg(long, help = "New content, '-' reads stdin")]
    pub content: Option<String>,

    #[arg(short, long, help = "Replacement tags, comma separated")]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(help = "Prompt ID or title")]
    pub identifier: String,

    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    #[arg(long, help = "Show how many prompts use each tag")]
    pub counts: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    #[arg(short, long, value_name = "DIR", help = "Directory to write into (overrides config)")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print to stdout instead of writing a file")]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    #[arg(help = "Prompt ID or title")]
    pub identifier: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Simple,
    Detailed,
    Json,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_parse_repeated_tags_and_sort() {
        let cli = Cli::try_parse_from([
            "promptdeck", "list", "-q", "hello", "--tag", "a", "--tag", "b", "--sort", "created-at",
            "--order", "asc",
        ])
        .unwrap();

        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search.as_deref(), Some("hello"));
                assert_eq!(args.tags, vec!["a", "b"]);
                assert_eq!(args.sort, Some(SortBy::CreatedAt));
                assert_eq!(args.order, Some(SortOrder::Asc));
                assert_eq!(args.format, ListFormat::Simple);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from(["promptdeck", "export", "csv", "--stdout"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.format, ExportFormat::Csv);
                assert!(args.stdout);
                assert!(args.output.is_none());
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["promptdeck", "tags", "--debug", "--config", "x.toml"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
