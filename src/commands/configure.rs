use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::output::{OutputStyle, print_success};
use crate::utils::interactive::prompt_yes_no;
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    OutputStyle::print_header("⚙️  Promptdeck Configuration");
    let general = &config.general;

    OutputStyle::print_field_colored("Storage", &general.storage_file.display().to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Export dir", &general.export_dir.display().to_string(), OutputStyle::info);
    OutputStyle::print_field_colored(
        "Clipboard",
        general.clipboard_cmd.as_deref().unwrap_or("platform default"),
        OutputStyle::info,
    );
    OutputStyle::print_field_colored("Sort by", &format!("{:?}", general.sort_by), OutputStyle::info);
    OutputStyle::print_field_colored("Order", &format!("{:?}", general.sort_order), OutputStyle::info);
    OutputStyle::print_field_colored("Color", &general.color.to_string(), OutputStyle::info);
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    if !prompt_yes_no("Reset configuration to defaults?")? {
        println!("Configuration unchanged.");
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    print_success(&format!("Configuration reset: {}", config_path.display()));
    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("Usage: promptdeck config <show|path|reset>");
    Ok(())
}
