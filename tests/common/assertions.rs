//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-menu command output, notices and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the outside-a-work-tree notice
pub fn not_in_work_tree() -> impl Predicate<str> {
    predicates::str::contains("Not in git-workdir!")
}

/// Creates a predicate that checks for a `Label: value` line
pub fn has_field(label: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{label}: {value}"))
}

/// Creates a predicate that checks for the file status line
pub fn has_status(description: &str) -> impl Predicate<str> {
    has_field("Status", description)
}

/// Creates a predicate that checks for the decorated title line
pub fn has_title(title: &str) -> impl Predicate<str> {
    has_field("Title", title)
}

/// Creates a predicate that checks for a numbered branch entry
pub fn has_branch(index: usize, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {name}"))
}

/// Creates a predicate that checks for the error prefix
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}
