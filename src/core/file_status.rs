//! Per-file git status classification.
//!
//! This module defines [`FileStatus`], the five states the git menu shows for
//! the open file, and [`classify`] which derives it from
//! `git status --porcelain`.
//!
//! # Public API
//! - [`FileStatus`]: Status enumeration with title tags and descriptions
//! - [`classify`]: Runs git and maps the porcelain prefix
//!
//! # Mapping
//! Only the two-character porcelain prefix is looked at:
//! `??` untracked, `M ` staged, ` M` modified, `MM` modified and staged.
//! Everything else, including empty or truncated output, is clean.

use crate::core::{error::Result, git::GitRunner, locator::WorkTree};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Status of a single file as shown in the editor title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileStatus {
    /// Not known to git (??)
    Untracked,
    /// Changes in the index, working file matches the index (M )
    Staged,
    /// Changes in the working file only ( M)
    Modified,
    /// Changes both in the index and in the working file (MM)
    ModifiedAndStaged,
    /// Anything else
    Clean,
}

impl FileStatus {
    /// All statuses carrying a title tag
    pub const TAGGED: [FileStatus; 4] = [
        FileStatus::Untracked,
        FileStatus::Staged,
        FileStatus::Modified,
        FileStatus::ModifiedAndStaged,
    ];

    /// Map raw `git status --porcelain` output for one file
    pub fn from_porcelain(output: &[u8]) -> Self {
        match output.get(..2) {
            Some([b'?', b'?']) => FileStatus::Untracked,
            Some([b'M', b' ']) => FileStatus::Staged,
            Some([b' ', b'M']) => FileStatus::Modified,
            Some([b'M', b'M']) => FileStatus::ModifiedAndStaged,
            _ => FileStatus::Clean,
        }
    }

    /// Tag inserted into the window title, empty for clean files
    pub fn title_tag(&self) -> &'static str {
        match self {
            FileStatus::Untracked => " [?]",
            FileStatus::Staged => " [S]",
            FileStatus::Modified => " [M]",
            FileStatus::ModifiedAndStaged => " [MS]",
            FileStatus::Clean => "",
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Untracked => "untracked",
            FileStatus::Staged => "staged",
            FileStatus::Modified => "modified",
            FileStatus::ModifiedAndStaged => "modified & staged",
            FileStatus::Clean => "unchanged",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Classify `file` by running `git status --porcelain` in `work_tree`
pub fn classify(runner: &GitRunner, work_tree: &WorkTree, file: &Path) -> Result<FileStatus> {
    let args = [
        OsStr::new("status"),
        OsStr::new("--porcelain"),
        OsStr::new("--"),
        file.as_os_str(),
    ];
    let output = runner.run(work_tree, args)?;
    let status = FileStatus::from_porcelain(&output.stdout);
    log::debug!("{} is {}", file.display(), status);
    Ok(status)
}
