//! Unified color system for file status and history output.
//!
//! Every place that shows a [`FileStatus`] goes through this module so the
//! same state always gets the same color.
//!
//! # Public API
//! - [`get_status_color_style`]: Get color function for a file status
//! - [`get_colored_status`]: Status description in its color
//! - [`get_colored_tag`]: Title tag (e.g. `[MS]`) in its color
//! - [`format_revision_line`]: One history entry for terminal display
//!
//! # Color Scheme
//! - **Modified**: Yellow, bold when also staged
//! - **Staged**: Green for changes waiting in the index
//! - **Untracked**: Cyan for files git does not know yet
//! - **Clean**: Bright black, nothing to report

use crate::core::{file_status::FileStatus, history::Revision};
use colored::*;

/// Single function to apply color styling based on file status
/// Returns a closure that can be applied to any text to get the appropriate color
pub fn get_status_color_style(status: FileStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        FileStatus::Untracked => Box::new(|text: &str| text.cyan()),
        FileStatus::Staged => Box::new(|text: &str| text.green()),
        FileStatus::Modified => Box::new(|text: &str| text.yellow()),
        FileStatus::ModifiedAndStaged => Box::new(|text: &str| text.yellow().bold()),
        FileStatus::Clean => Box::new(|text: &str| text.bright_black()),
    }
}

pub fn get_colored_status(status: FileStatus) -> ColoredString {
    get_status_color_style(status)(status.description())
}

/// Title tag without its leading space, empty for clean files
pub fn get_colored_tag(status: FileStatus) -> ColoredString {
    get_status_color_style(status)(status.title_tag().trim_start())
}

/// `[short id] date author  message`
pub fn format_revision_line(revision: &Revision) -> String {
    let date = revision
        .timestamp()
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| revision.date.clone());
    format!(
        "{}{}{} {} {}  {}",
        "[".bright_black(),
        revision.short_id.yellow(),
        "]".bright_black(),
        date.bright_black(),
        revision.author.blue(),
        revision.message.white()
    )
}
