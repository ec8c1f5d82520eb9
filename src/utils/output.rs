use crate::core::data::Prompt;
use crate::core::filter::PromptStats;
use crate::utils::format::{format_datetime, format_tags_comma, format_tags_hash, truncate_string};
use colored::*;

const PREVIEW_CHARS: usize = 60;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn tags(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::header(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>10}: {}", Self::label(label), color_fn(value));
    }

    /// One line per prompt: `title #tags  preview`
    pub fn format_prompt_line(prompt: &Prompt) -> String {
        let mut line = Self::title(&prompt.title).to_string();
        if !prompt.tags.is_empty() {
            line.push(' ');
            line.push_str(&Self::tags(&format_tags_hash(&prompt.tags)).to_string());
        }
        if !prompt.content.is_empty() {
            line.push_str("  ");
            line.push_str(&Self::muted(&truncate_string(&prompt.content, PREVIEW_CHARS)).to_string());
        }
        line
    }

    pub fn print_prompt_detailed(prompt: &Prompt) {
        Self::print_field_colored("ID", &prompt.id, Self::muted);
        Self::print_field_colored("Title", &prompt.title, Self::title);
        Self::print_field_colored("Tags", &format_tags_comma(&prompt.tags), Self::tags);
        Self::print_field_colored("Created", &format_datetime(&prompt.created_at), Self::muted);
        println!("{}", Self::separator());
        println!("{}", Self::content(&prompt.content));
    }

    pub fn print_stats(stats: &PromptStats) {
        Self::print_header("📊 Prompt Statistics");
        Self::print_field_colored("Prompts", &stats.total_prompts.to_string(), Self::info);
        Self::print_field_colored("Tag uses", &stats.total_tag_uses.to_string(), Self::info);
        Self::print_field_colored("Tags", &stats.distinct_tags.to_string(), Self::info);
    }

    pub fn print_tag_counts(stats: &PromptStats) {
        for (tag, count) in &stats.tag_counts {
            println!("  {}: {}", Self::tags(tag), Self::info(&count.to_string()));
        }
    }
}

pub fn print_success(msg: &str) {
    println!("✅ {}", OutputStyle::success(msg));
}
