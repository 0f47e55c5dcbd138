//! Index and work tree mutations: stage, unstage, checkout, pull.
//!
//! Each operation waits for git to finish and returns its raw [`GitOutput`].
//! Nothing is retried, and a non-zero exit is only logged.

use crate::core::{
    error::Result,
    git::{GitOutput, GitRunner},
    locator::WorkTree,
};
use std::ffi::OsStr;
use std::path::Path;

/// Add `file` to the index (`git add`)
pub fn stage(runner: &GitRunner, work_tree: &WorkTree, file: &Path) -> Result<GitOutput> {
    run_logged(runner, work_tree, &[OsStr::new("add"), OsStr::new("--"), file.as_os_str()])
}

/// Remove `file` from the index, keeping working changes (`git reset HEAD`)
pub fn unstage(runner: &GitRunner, work_tree: &WorkTree, file: &Path) -> Result<GitOutput> {
    run_logged(
        runner,
        work_tree,
        &[
            OsStr::new("reset"),
            OsStr::new("HEAD"),
            OsStr::new("--"),
            file.as_os_str(),
        ],
    )
}

/// Discard working changes to `file`. Staged changes are kept.
pub fn checkout(runner: &GitRunner, work_tree: &WorkTree, file: &Path) -> Result<GitOutput> {
    run_logged(
        runner,
        work_tree,
        &[OsStr::new("checkout"), OsStr::new("--"), file.as_os_str()],
    )
}

/// Pull the whole work tree from its upstream
pub fn pull(runner: &GitRunner, work_tree: &WorkTree) -> Result<GitOutput> {
    run_logged(runner, work_tree, &[OsStr::new("pull")])
}

fn run_logged(runner: &GitRunner, work_tree: &WorkTree, args: &[&OsStr]) -> Result<GitOutput> {
    let output = runner.run(work_tree, args)?;
    if !output.success() {
        log::warn!(
            "git {} exited with code {}: {}",
            args.first().map(|a| a.to_string_lossy()).unwrap_or_default(),
            output.exit_code,
            output.stderr_text().trim()
        );
    }
    Ok(output)
}
