use crate::cli::DeleteArgs;
use crate::commands::{ensure_saved, find_prompt, open_repository};
use crate::config::Config;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::format::format_datetime;
use crate::utils::interactive::prompt_yes_no;
use anyhow::Result;

pub async fn handle_delete_command(config: Config, args: &DeleteArgs) -> Result<()> {
    let mut repo = open_repository(&config).await?;
    let prompt = find_prompt(&repo, &args.identifier)?;

    println!("Prompt to delete:");
    println!("  Title: {}", prompt.title);
    println!("  Content: {}", prompt.content);
    println!("  Created: {}", format_datetime(&prompt.created_at));

    if !args.force && !prompt_yes_no("\nAre you sure you want to delete this prompt?")? {
        handle_flow(FlowResult::Cancelled("Prompt not deleted".to_string()));
        return Ok(());
    }

    repo.delete(&prompt.id).await;
    ensure_saved(&repo)?;
    handle_flow(FlowResult::Success(format!("Prompt '{}' deleted", prompt.title)));
    Ok(())
}
