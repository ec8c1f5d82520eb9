use crate::cli::{ListArgs, ListFormat};
use crate::commands::open_repository;
use crate::config::Config;
use crate::core::app::AppState;
use crate::core::filter;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::export::to_json;
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub async fn handle_list_command(config: Config, args: &ListArgs) -> Result<()> {
    let repo = open_repository(&config).await?;

    if args.stats {
        OutputStyle::print_stats(&filter::stats(repo.prompts()));
        return Ok(());
    }

    let mut state = AppState::new(config.default_filter());
    if let Some(query) = &args.search {
        state.set_search(query.clone());
    }
    for tag in &args.tags {
        state.toggle_tag(tag);
    }
    if let Some(sort) = args.sort {
        state.filter.sort_by = Some(sort);
    }
    if let Some(order) = args.order {
        state.filter.sort_order = order;
    }

    let prompts = state.visible(&repo);

    if args.format == ListFormat::Json {
        println!("{}", to_json(&prompts)?);
        return Ok(());
    }

    if prompts.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts".to_string(),
        });
        return Ok(());
    }

    match args.format {
        ListFormat::Simple => {
            for prompt in &prompts {
                println!("{}", OutputStyle::format_prompt_line(prompt));
            }
        }
        ListFormat::Detailed => {
            for prompt in &prompts {
                OutputStyle::print_prompt_detailed(prompt);
                println!();
            }
        }
        ListFormat::Json => {}
    }

    Ok(())
}
