use crate::cli::NewArgs;
use crate::commands::{ensure_saved, open_repository, resolve_content};
use crate::config::Config;
use crate::core::app::{AppState, parse_tag_input};
use crate::utils::interactive::prompt_input;
use crate::utils::output::{OutputStyle, print_success};
use anyhow::Result;

pub async fn handle_new_command(config: Config, args: &NewArgs) -> Result<()> {
    let mut repo = open_repository(&config).await?;
    let mut state = AppState::new(config.default_filter());
    state.begin_create();

    let title = match &args.title {
        Some(title) => title.clone(),
        None => prompt_input(&format!("{}: ", OutputStyle::label("Title")))?,
    };

    let content = match &args.content {
        Some(content) => resolve_content(content)?,
        None => prompt_input(&format!("{}: ", OutputStyle::label("Content")))?,
    };

    let tags = match &args.tags {
        Some(tags) => parse_tag_input(tags),
        None => parse_tag_input(&prompt_input(&format!(
            "{}: ",
            OutputStyle::label("Tags (comma-separated, max 10)")
        ))?),
    };

    if let Some(draft) = state.draft_mut() {
        draft.title = title;
        draft.content = content;
        draft.tags = tags;
    }

    let prompt = state.commit_edit(&mut repo).await?;
    ensure_saved(&repo)?;
    print_success(&format!("Prompt '{}' saved ({})", prompt.title, prompt.id));
    Ok(())
}
