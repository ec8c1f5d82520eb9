use crate::cli::ShowArgs;
use crate::commands::{find_prompt, open_repository};
use crate::config::Config;
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub async fn handle_show_command(config: Config, args: &ShowArgs) -> Result<()> {
    let repo = open_repository(&config).await?;
    let prompt = find_prompt(&repo, &args.identifier)?;
    OutputStyle::print_prompt_detailed(&prompt);
    Ok(())
}
