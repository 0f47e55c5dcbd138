//! Revision history of a single file.
//!
//! [`list_history`] runs `git log --follow --full-history` for a file and
//! hands the output to [`parse_log`], which reads it in fixed groups of six
//! lines:
//!
//! ```text
//! commit 3f2a9c1e8b7d6a5f4e3d2c1b0a9f8e7d6c5b4a39
//! Author: Jane Doe <jane@example.com>
//! Date:   Sat Oct 17 10:00:00 2026 +0200
//!
//!     Fix title refresh race
//!
//! ```
//!
//! A trailing group with fewer than six lines is dropped. Groups with an empty
//! commit, author, date or message line are skipped. Commits whose log entry
//! does not have this shape (merges, multi-line messages) shift the grouping;
//! the parser never produces a partially filled [`Revision`] for them.

use crate::core::{error::Result, git::GitRunner, locator::WorkTree};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;

const GROUP_SIZE: usize = 6;
const SHORT_ID_LEN: usize = 8;
const MESSAGE_LIMIT: usize = 60;
const MESSAGE_KEEP: usize = 55;

/// One commit touching a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    /// Last eight characters of the commit hash, for display
    pub short_id: String,
    pub full_id: String,
    pub author: String,
    /// The `Date:` line exactly as git printed it
    pub date: String,
    pub message: String,
    /// `full_id` of the revision emitted just before this one
    pub previous_id: Option<String>,
}

impl Revision {
    /// Parse the date line in git's default format
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.date.trim();
        let raw = raw.strip_prefix("Date:").unwrap_or(raw).trim();
        DateTime::parse_from_str(raw, "%a %b %d %H:%M:%S %Y %z").ok()
    }
}

/// Lazy sequence of revisions in the order git emitted them (newest first).
///
/// The sequence is consumed as it is read and cannot be restarted.
#[derive(Debug)]
pub struct Revisions {
    lines: std::vec::IntoIter<String>,
    previous_id: Option<String>,
}

impl Iterator for Revisions {
    type Item = Revision;

    fn next(&mut self) -> Option<Revision> {
        loop {
            let group: Vec<String> = self.lines.by_ref().take(GROUP_SIZE).collect();
            if group.len() < GROUP_SIZE {
                return None;
            }

            if let Some(revision) = parse_group(&group, self.previous_id.as_deref()) {
                self.previous_id = Some(revision.full_id.clone());
                return Some(revision);
            }
        }
    }
}

/// Split `git log` output into revisions
pub fn parse_log(output: &str) -> Revisions {
    // split keeps the final empty element that completes the last group
    let lines: Vec<String> = output.split('\n').map(str::to_string).collect();
    Revisions {
        lines: lines.into_iter(),
        previous_id: None,
    }
}

/// Run `git log --follow --full-history` for `file`
pub fn list_history(runner: &GitRunner, work_tree: &WorkTree, file: &Path) -> Result<Revisions> {
    let args = [
        OsStr::new("log"),
        OsStr::new("--follow"),
        OsStr::new("--full-history"),
        OsStr::new("--"),
        file.as_os_str(),
    ];
    let output = runner.run(work_tree, args)?;
    if !output.success() {
        log::debug!("git log failed: {}", output.stderr_text().trim());
    }
    Ok(parse_log(&output.stdout_text()))
}

fn parse_group(group: &[String], previous_id: Option<&str>) -> Option<Revision> {
    let [commit, author, date, _, message, _] = group else {
        return None;
    };

    let (commit, author, date, message) = (commit.trim(), author.trim(), date.trim(), message.trim());
    if commit.is_empty() || author.is_empty() || date.is_empty() || message.is_empty() {
        return None;
    }

    let full_id = commit.split(' ').nth(1).filter(|id| !id.is_empty())?;
    let short_id = full_id
        .get(full_id.len().saturating_sub(SHORT_ID_LEN)..)
        .unwrap_or(full_id);

    let author = author
        .split_whitespace()
        .skip(1)
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");

    Some(Revision {
        short_id: short_id.to_string(),
        full_id: full_id.to_string(),
        author,
        date: date.to_string(),
        message: truncate_message(message),
        previous_id: previous_id.map(str::to_string),
    })
}

fn truncate_message(message: &str) -> String {
    if message.chars().count() > MESSAGE_LIMIT {
        let kept: String = message.chars().take(MESSAGE_KEEP).collect();
        format!("{kept} ...")
    } else {
        message.to_string()
    }
}
