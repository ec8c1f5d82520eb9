use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptdeck::cli::Cli;
use promptdeck::config::Config;
use promptdeck::utils::error::{AppError, report_error};
use promptdeck::utils::output::OutputStyle;

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("promptdeck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = Config::load_custom(&config_path)?;

    if !config.general.color {
        colored::control::set_override(false);
    }

    cli.command.execute(config, config_path).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err))),
        }
        std::process::exit(1);
    }
}
