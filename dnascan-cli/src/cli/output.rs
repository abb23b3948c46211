//! Report formatting shared by the commands.

use colored::*;

pub fn section_header(title: &str) {
    println!("{}", title.bold().cyan());
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn info(message: &str) {
    println!("{} {}", "●".blue(), message);
}

/// Nothing to report, e.g. no ORF or no repeat.
pub fn empty(message: &str) {
    println!("{} {}", "◌".dimmed(), message);
}

pub fn tree_item(is_last: bool, label: &str, value: impl std::fmt::Display) {
    let prefix = if is_last { "└─" } else { "├─" };
    println!("{} {}: {}", prefix.dimmed(), label, value);
}

pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(|id| id.as_ref()).collect::<Vec<_>>().join(", ")
}
