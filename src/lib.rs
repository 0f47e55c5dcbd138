//! Git Menu - the git integration behind a text editor's "Git" menu.
//!
//! This library finds the work tree of the open document, tags the window title
//! with the document's git status, lists its history and the repository's
//! branches, hands revisions to an external diff viewer and stages, unstages,
//! reverts or pulls on request. A thin terminal front-end ships as the
//! `git-menu` binary.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The [`GitMenu`] facade and the [`EditorHost`] contract it drives
//! - Work tree resolution and git invocation
//! - Status, history and branch queries
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Queries
    classify,
    // Title decoration
    decorate_title,
    find_work_tree,
    list_branches,
    list_history,
    // Configuration
    Config,
    DiffSource,
    // Comparison
    DiffViewer,
    // Editor integration
    EditorHost,
    FileStatus,
    GitMenu,
    // Error handling
    GitMenuError,
    GitOutput,
    // Git operations
    GitRunner,
    RepositoryLocator,
    Result,
    Revision,
    WorkTree,
};
