use crate::cli::EditArgs;
use crate::commands::{ensure_saved, find_prompt, open_repository, resolve_content};
use crate::config::Config;
use crate::core::app::{AppState, parse_tag_input};
use crate::utils::error::{FlowResult, handle_flow};
use anyhow::Result;

pub async fn handle_edit_command(config: Config, args: &EditArgs) -> Result<()> {
    if args.title.is_none() && args.content.is_none() && args.tags.is_none() {
        handle_flow(FlowResult::Cancelled(
            "Nothing to change; pass --title, --content or --tags".to_string(),
        ));
        return Ok(());
    }

    let mut repo = open_repository(&config).await?;
    let prompt = find_prompt(&repo, &args.identifier)?;

    let mut state = AppState::new(config.default_filter());
    state.begin_edit(&prompt);

    if let Some(draft) = state.draft_mut() {
        if let Some(title) = &args.title {
            draft.title = title.clone();
        }
        if let Some(content) = &args.content {
            draft.content = resolve_content(content)?;
        }
        if let Some(tags) = &args.tags {
            draft.tags = parse_tag_input(tags);
        }
    }

    let updated = state.commit_edit(&mut repo).await?;
    ensure_saved(&repo)?;
    handle_flow(FlowResult::Success(format!("Prompt '{}' updated", updated.title)));
    Ok(())
}
