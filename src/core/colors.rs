//! Unified color system for status labels and tree rows.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Untracked**: Cyan
//! - **Deleted**: Red
//! - **Renamed**: Blue
//! - **Conflicted**: Red bold

use crate::core::status_kind::StatusKind;
use colored::*;

/// Single function to apply color styling based on change kind
pub fn get_status_color_style(status: StatusKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        StatusKind::Modified => Box::new(|text: &str| text.yellow()),
        StatusKind::Added => Box::new(|text: &str| text.green()),
        StatusKind::Untracked => Box::new(|text: &str| text.cyan()),
        StatusKind::Deleted => Box::new(|text: &str| text.red()),
        StatusKind::Renamed => Box::new(|text: &str| text.blue()),
        StatusKind::Conflicted => Box::new(|text: &str| text.red().bold()),
    }
}

/// Colored single-letter label, `?` in muted gray when the status is absent
pub fn get_colored_label(status: Option<StatusKind>) -> ColoredString {
    match status {
        Some(status) => get_status_color_style(status)(status.label()),
        None => "?".bright_black(),
    }
}

pub fn get_colored_path(status: Option<StatusKind>, path: &str) -> ColoredString {
    match status {
        Some(status) => get_status_color_style(status)(path),
        None => path.normal(),
    }
}
