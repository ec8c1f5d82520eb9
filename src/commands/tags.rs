use crate::cli::TagsArgs;
use crate::commands::open_repository;
use crate::config::Config;
use crate::core::filter;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub async fn handle_tags_command(config: Config, args: &TagsArgs) -> Result<()> {
    let repo = open_repository(&config).await?;
    let tags = filter::available_tags(repo.prompts());

    if tags.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "tags".to_string(),
        });
        return Ok(());
    }

    if args.counts {
        OutputStyle::print_tag_counts(&filter::stats(repo.prompts()));
    } else {
        for tag in tags {
            println!("{}", OutputStyle::tags(&tag));
        }
    }
    Ok(())
}
