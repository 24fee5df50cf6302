//! Common assertion helpers for CLI output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

pub fn has_branch_info() -> impl Predicate<str> {
    predicates::str::contains("Branch:")
}

/// Section header such as `Changes (3)`
pub fn has_section(title: &str, count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{title} ({count})"))
}

/// Numbered search result marker
pub fn has_result_index(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}
