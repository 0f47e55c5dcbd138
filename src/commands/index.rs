//! Index and work tree mutations for the terminal.
//!
//! The library reports git's exit code without judging it. Here a non-zero
//! exit becomes [`GitMenuError::CommandFailed`] so the binary exits with 1.

use crate::commands::context::CommandContext;
use crate::core::{
    error::{GitMenuError, Result},
    git::GitOutput,
    print_success,
};
use std::path::Path;

pub fn execute_stage(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let output = context.menu.stage()?;
    ensure_success("add", &output)?;
    print_success(&format!("Staged {}", context.display_path()));
    Ok(())
}

pub fn execute_unstage(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let output = context.menu.unstage()?;
    ensure_success("reset", &output)?;
    print_success(&format!("Unstaged {}", context.display_path()));
    Ok(())
}

/// Discard working changes to the file
pub fn execute_checkout(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let output = context.menu.checkout()?;
    ensure_success("checkout", &output)?;
    print_success(&format!("Reverted {}", context.display_path()));
    Ok(())
}

/// Pull the work tree containing the file. git's output is shown as a notice.
pub fn execute_pull(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let output = context.menu.pull()?;
    ensure_success("pull", &output)
}

fn ensure_success(command: &str, output: &GitOutput) -> Result<()> {
    if output.success() {
        Ok(())
    } else {
        Err(GitMenuError::command_failed(command, output))
    }
}
