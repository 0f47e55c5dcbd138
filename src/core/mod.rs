//! Core functionality for the git-menu tool.
//!
//! This module provides the building blocks behind the editor's git menu:
//! work tree resolution, git invocation, status, history and branch queries,
//! diff materialization, index mutations and the menu facade tying them to a host.

pub mod branches;
pub mod colors;
pub mod config;
pub mod diff;
pub mod dirs;
pub mod error;
pub mod file_status;
pub mod git;
pub mod history;
pub mod host;
pub mod index;
pub mod locator;
pub mod menu;
pub mod output;
pub mod refresh;
pub mod title;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitMenuError, Result};

// === Work tree resolution ===
// Nearest-ancestor lookup with a per-entry expiring cache
pub use locator::{find_work_tree, RepositoryLocator, WorkTree};

// === Git operations ===
// Process runner pinned to a work tree, plus the queries built on it
pub use branches::list_branches;
pub use file_status::{classify, FileStatus};
pub use git::{GitOutput, GitRunner};
pub use history::{list_history, parse_log, Revision, Revisions};

// === Comparison ===
// Diff viewer templates and scratch-file materialization
pub use diff::{compare, DiffSource, DiffViewer, DEFAULT_DIFF_VIEWER};

// === Editor integration ===
// Host contract, title decoration and the menu actions
pub use host::EditorHost;
pub use menu::GitMenu;
pub use refresh::{RefreshGate, RefreshTicket};
pub use title::{decorate_title, strip_status_tags};

// === Configuration ===
pub use config::Config;

// === Color system ===
// Unified color system for consistent status coloring
pub use colors::{format_revision_line, get_colored_status, get_colored_tag, get_status_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_field, print_info, print_notice, print_section_header, print_success,
};
