use crate::cli::ExportArgs;
use crate::commands::open_repository;
use crate::config::Config;
use crate::utils::export::write_export;
use crate::utils::output::print_success;
use anyhow::Result;

pub async fn handle_export_command(config: Config, args: &ExportArgs) -> Result<()> {
    let repo = open_repository(&config).await?;

    if args.stdout {
        println!("{}", args.format.encode(repo.prompts())?);
        return Ok(());
    }

    let dir = args.output.as_ref().unwrap_or(&config.general.export_dir);
    let path = write_export(dir, args.format, repo.prompts())?;
    print_success(&format!(
        "Exported {} prompts to {}",
        repo.prompts().len(),
        path.display()
    ));
    Ok(())
}
