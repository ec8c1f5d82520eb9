use crate::cli::CopyArgs;
use crate::commands::{find_prompt, open_repository};
use crate::config::Config;
use crate::utils::clipboard::SystemClipboard;
use crate::utils::export::copy_to_clipboard;
use crate::utils::output::print_success;
use anyhow::Result;

pub async fn handle_copy_command(config: Config, args: &CopyArgs) -> Result<()> {
    let repo = open_repository(&config).await?;
    let prompt = find_prompt(&repo, &args.identifier)?;

    let clipboard = SystemClipboard::new(config.general.clipboard_cmd.clone());
    copy_to_clipboard(&clipboard, &prompt.content).await?;
    print_success(&format!("Copied '{}' to clipboard", prompt.title));
    Ok(())
}
