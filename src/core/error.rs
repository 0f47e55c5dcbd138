//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitMenuError`] which covers every failure mode of the
//! git menu actions. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`GitMenuError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitMenuError>`
//!
//! # Error Categories
//! - **Preconditions**: The open document is not on disk, or not inside a work tree
//! - **Process launch**: `git` or an external tool could not be started
//! - **Command failures**: Raised by the terminal front-end for non-zero git exits
//! - **Diff viewer**: Malformed command templates
//! - **History lookups**: Unknown revision, or no previous revision to compare with
//! - **Configuration**: Reading, parsing and writing the config file
//!
//! The library never turns a non-zero exit code from `git` into an error by
//! itself. Callers get the raw [`GitOutput`] and decide for themselves.

use crate::core::git::GitOutput;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-menu
#[derive(Error, Debug)]
pub enum GitMenuError {
    // Precondition errors
    #[error("Not in git-workdir: {path} is not inside a git working directory")]
    NotInWorkTree { path: PathBuf },

    #[error("Not in persistent file: the current open file has no location on disk")]
    NotPersistedFile,

    #[error("Path {path} is outside of the work tree {root}")]
    PathOutsideWorkTree { path: PathBuf, root: PathBuf },

    // Process errors
    #[error("Failed to launch '{program}': {source}")]
    LaunchFailure {
        program: String,
        source: std::io::Error,
    },

    #[error("git {command} failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Invalid diff viewer template '{template}': expected a program followed by two %s slots")]
    InvalidDiffTemplate { template: String },

    // History errors
    #[error("Revision {revision} is not part of this file's history")]
    RevisionNotFound { revision: String },

    #[error("Revision {revision} has no previous revision to compare with")]
    NoPreviousRevision { revision: String },

    // Config errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitMenuError
pub type Result<T> = std::result::Result<T, GitMenuError>;

impl GitMenuError {
    /// Create a not-in-work-tree error for the given file
    pub fn not_in_work_tree(path: impl Into<PathBuf>) -> Self {
        Self::NotInWorkTree { path: path.into() }
    }

    /// Create a path-outside-work-tree error
    pub fn path_outside_work_tree(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::PathOutsideWorkTree {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a launch failure error for an external program
    pub fn launch_failure(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchFailure {
            program: program.into(),
            source,
        }
    }

    /// Create a command failed error from a finished git command
    pub fn command_failed(command: impl Into<String>, output: &GitOutput) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code: output.exit_code,
            stderr: output.stderr_text().trim().to_string(),
        }
    }

    /// Create an invalid diff template error
    pub fn invalid_diff_template(template: impl Into<String>) -> Self {
        Self::InvalidDiffTemplate {
            template: template.into(),
        }
    }

    /// Create a revision not found error
    pub fn revision_not_found(revision: impl Into<String>) -> Self {
        Self::RevisionNotFound {
            revision: revision.into(),
        }
    }

    /// Create a no previous revision error
    pub fn no_previous_revision(revision: impl Into<String>) -> Self {
        Self::NoPreviousRevision {
            revision: revision.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is one of the checks performed before any git call
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotInWorkTree { .. } | Self::NotPersistedFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitMenuError::NotPersistedFile;
        assert_eq!(
            err.to_string(),
            "Not in persistent file: the current open file has no location on disk"
        );
    }

    #[test]
    fn test_not_in_work_tree_error() {
        let err = GitMenuError::not_in_work_tree("/tmp/notes.txt");
        assert!(err.to_string().contains("/tmp/notes.txt"));
        assert!(err.to_string().starts_with("Not in git-workdir"));
    }

    #[test]
    fn test_launch_failure_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = GitMenuError::launch_failure("meld", io_err);
        assert!(err.to_string().contains("'meld'"));
        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn test_invalid_diff_template_error() {
        let err = GitMenuError::invalid_diff_template("meld %s");
        assert!(err.to_string().contains("'meld %s'"));
    }

    #[test]
    fn test_history_errors() {
        let err = GitMenuError::revision_not_found("abc123");
        assert_eq!(
            err.to_string(),
            "Revision abc123 is not part of this file's history"
        );

        let err = GitMenuError::no_previous_revision("abc123");
        assert!(err.to_string().contains("no previous revision"));
    }

    #[test]
    fn test_config_parse_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = GitMenuError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_write_failed() {
        let path = std::path::PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = GitMenuError::config_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_command_failed() {
        let output = GitOutput {
            stdout: Vec::new(),
            stderr: b"fatal: not a git repository\n".to_vec(),
            exit_code: 128,
        };
        let err = GitMenuError::command_failed("add", &output);
        assert_eq!(
            err.to_string(),
            "git add failed with exit code 128: fatal: not a git repository"
        );
    }

    #[test]
    fn test_is_precondition() {
        assert!(GitMenuError::NotPersistedFile.is_precondition());
        assert!(GitMenuError::not_in_work_tree("/x").is_precondition());
        assert!(!GitMenuError::revision_not_found("abc").is_precondition());
    }
}
