//! Terminal rendering for change-tree rows and search results.
//!
//! # Public API
//! - [`render_branch_header`]: `Branch: <name>` line
//! - [`render_section_header`]: Section title with file count and collapse marker
//! - [`render_tree_row`]: Indented directory or file row
//! - [`render_search_result`]: Numbered search hit
//! - [`strip_ansi_codes`]: Utility for removing color codes in tests
//!
//! Every row is rendered from its own data only, so a rebuilt tree renders
//! identically line for line.

use crate::core::{
    change_tree::{Section, TreeRow},
    colors::{get_colored_label, get_colored_path},
};
use crate::search::SearchResult;
use colored::*;
use std::fmt::Write;

const INDENT: &str = "  ";

pub fn render_branch_header(branch: &str) -> String {
    format!("Branch: {}", branch.blue())
}

pub fn render_section_header(section: Section, file_count: usize, collapsed: bool) -> String {
    let marker = if collapsed { "▸" } else { "▾" };
    let title = match section {
        Section::Changes => "Changes",
        Section::Staged => "Staged",
    };
    let count = format!("({file_count})");

    match section {
        Section::Changes => format!(
            "{} {} {}",
            marker.yellow(),
            title.yellow(),
            count.bright_black()
        ),
        Section::Staged => format!(
            "{} {} {}",
            marker.green(),
            title.green(),
            count.bright_black()
        ),
    }
}

pub fn render_tree_row(row: &TreeRow) -> String {
    let mut line = String::with_capacity(64);
    line.push_str(INDENT);
    for _ in 0..row.depth() {
        line.push_str(INDENT);
    }

    match row {
        TreeRow::Directory {
            name, collapsed, ..
        } => {
            let marker = if *collapsed { "▸" } else { "▾" };
            let _ = write!(line, "{} {}/", marker.bright_black(), name.white().bold());
        }
        TreeRow::File { name, .. } => {
            let status = row.status();
            let _ = write!(
                line,
                "{} {}",
                get_colored_label(status),
                get_colored_path(status, name)
            );
        }
    }

    line
}

pub fn render_search_result(n: usize, result: &SearchResult, title: Option<&str>) -> String {
    let mut line = String::with_capacity(result.snippet.len() + 32);
    let _ = write!(
        line,
        "   {}{}{} ",
        "[".bright_black(),
        n.to_string().white(),
        "]".bright_black()
    );
    match title {
        Some(title) if !title.is_empty() => {
            let _ = write!(line, "{} ", title.blue());
        }
        _ => {
            let _ = write!(line, "{} ", result.thread_id.blue());
        }
    }
    let _ = write!(line, "{}", result.snippet.bright_black());
    line
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
