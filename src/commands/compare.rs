//! Comparison commands. Each one blocks until the diff viewer is closed.

use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_success};
use std::path::Path;

/// Working file against `revision`, or `revision` against the one before it
pub fn execute_compare_revision(
    file: &Path,
    title: Option<String>,
    revision: &str,
    previous: bool,
) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    if previous {
        context.menu.compare_with_previous(revision)?;
        print_success(&format!("Compared {revision} with its previous revision"));
    } else {
        context.menu.compare_with_revision(revision)?;
        print_success(&format!(
            "Compared {} with {revision}",
            context.display_path()
        ));
    }
    Ok(())
}

pub fn execute_compare_revisions(
    file: &Path,
    title: Option<String>,
    older: &str,
    newer: &str,
) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.compare_revisions(older, newer)?;
    print_success(&format!(
        "Compared {} at {older} with {newer}",
        context.display_path()
    ));
    Ok(())
}

pub fn execute_compare_branch(file: &Path, title: Option<String>, branch: &str) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.compare_with_branch(branch)?;
    print_success(&format!(
        "Compared {} with branch {branch}",
        context.display_path()
    ));
    Ok(())
}

pub fn execute_compare_file(file: &Path, title: Option<String>, other: &Path) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.compare_with_file(other)?;
    print_success(&format!(
        "Compared {} with {}",
        context.file.display(),
        other.display()
    ));
    Ok(())
}
