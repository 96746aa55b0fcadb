//! Utilities for rawgent

use std::fmt::Display;

use colored::Colorize as _;

use crate::types::Repository;

/// Style a snippet of text as a link
pub fn format_url(text: impl Display, url: impl Display) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{text}\u{1b}]8;;\u{1b}\\")
}

/// Format a repository for display in the terminal, linking to it on GitHub
pub fn format_repo(repository: &Repository) -> String {
    format_url(
        format!(
            "{} {}",
            repository.full_name.bright_blue(),
            format!("({})", repository.name).bright_black()
        ),
        format!("https://github.com/{}", repository.full_name),
    )
}

/// Mark the selected item of a list
pub fn format_choice(text: impl Display, selected: bool) -> String {
    if selected {
        format!("  {} {text}", "✓".bright_green())
    } else {
        format!("    {text}")
    }
}
