//! Filtering and sorting over an in-memory prompt list

use crate::core::data::{FilterOptions, Prompt, SortBy, SortOrder};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Summary numbers for a prompt collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStats {
    pub total_prompts: usize,
    pub total_tag_uses: usize,
    pub distinct_tags: usize,
    pub tag_counts: BTreeMap<String, usize>,
}

/// Case-insensitive substring match against title or content
fn matches_query(prompt: &Prompt, query_lower: &str) -> bool {
    prompt.title.to_lowercase().contains(query_lower)
        || prompt.content.to_lowercase().contains(query_lower)
}

/// Every selected tag must be present on the prompt
fn matches_tags(prompt: &Prompt, selected: &BTreeSet<String>) -> bool {
    selected.iter().all(|tag| prompt.has_tag(tag))
}

fn compare(a: &Prompt, b: &Prompt, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::Tags => a.tags.len().cmp(&b.tags.len()),
    }
}

/// Filter and order `prompts` according to `options`.
///
/// Ties keep their input order in both directions.
pub fn apply(prompts: &[Prompt], options: &FilterOptions) -> Vec<Prompt> {
    let query = options.search_query.to_lowercase();

    let mut result: Vec<Prompt> = prompts
        .iter()
        .filter(|p| query.is_empty() || matches_query(p, &query))
        .filter(|p| matches_tags(p, &options.selected_tags))
        .cloned()
        .collect();

    if let Some(sort_by) = options.sort_by {
        // sort_by is stable; reversing the comparator rather than the
        // output keeps equal keys in input order for Desc too
        result.sort_by(|a, b| match options.sort_order {
            SortOrder::Asc => compare(a, b, sort_by),
            SortOrder::Desc => compare(b, a, sort_by),
        });
    }

    result
}

/// Union of all tags, deduplicated and sorted
pub fn available_tags(prompts: &[Prompt]) -> Vec<String> {
    prompts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// How many prompts carry each tag
pub fn tag_counts(prompts: &[Prompt]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for prompt in prompts {
        for tag in &prompt.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

pub fn stats(prompts: &[Prompt]) -> PromptStats {
    let tag_counts = tag_counts(prompts);
    PromptStats {
        total_prompts: prompts.len(),
        total_tag_uses: prompts.iter().map(|p| p.tags.len()).sum(),
        distinct_tags: tag_counts.len(),
        tag_counts,
    }
}
