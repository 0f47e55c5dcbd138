//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states,
//! histories and branches, plus configuration directories for the binary.

#![allow(dead_code)]

use super::repository::*;
use git_menu::core::{config::Config, error::Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scenario: one file in each of the five states
///
/// - `clean.txt`: committed, unchanged
/// - `staged.txt`: modification staged
/// - `modified.txt`: modification not staged
/// - `both.txt`: one change staged, another on top
/// - `untracked.txt`: never added
pub fn create_file_states_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    for name in ["clean.txt", "staged.txt", "modified.txt", "both.txt"] {
        create_file(&repo.path, name, "line 1\n")?;
    }
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "staged.txt", "line 1\nstaged\n")?;
    git_add(&repo.path, "staged.txt")?;

    create_file(&repo.path, "modified.txt", "line 1\nmodified\n")?;

    create_file(&repo.path, "both.txt", "line 1\nstaged\n")?;
    git_add(&repo.path, "both.txt")?;
    create_file(&repo.path, "both.txt", "line 1\nstaged\nmodified\n")?;

    create_file(&repo.path, "untracked.txt", "new\n")?;

    Ok(repo)
}

/// Scenario: `tracked.txt` committed `versions.len()` times, one version each
pub fn create_history_repo(versions: &[&str]) -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    for (i, content) in versions.iter().enumerate() {
        commit_file(&repo.path, "tracked.txt", content, &format!("Version {}", i + 1))?;
    }
    Ok(repo)
}

/// Scenario: `main` plus `feature` and `release/1.0`, where `feature` changed `shared.txt`
pub fn create_branches_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    commit_file(&repo.path, "shared.txt", "main content\n", "Initial commit")?;

    git_branch(&repo.path, "release/1.0")?;
    git_branch(&repo.path, "feature")?;
    git_switch(&repo.path, "feature")?;
    commit_file(&repo.path, "shared.txt", "feature content\n", "Feature change")?;
    git_switch(&repo.path, "main")?;

    Ok(repo)
}

/// Config directory for the binary (pointed to by `XDG_CONFIG_HOME`)
pub struct TestConfig {
    pub temp_dir: TempDir,
    /// `<XDG_CONFIG_HOME>/git-menu`
    pub dir: PathBuf,
}

impl TestConfig {
    /// Value for `XDG_CONFIG_HOME`
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Writes a config using `viewer` as the diff viewer and `scratch_dir` for blobs
pub fn create_test_config(viewer: &str, scratch_dir: &Path) -> Result<TestConfig> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path().join("git-menu");
    let config = Config {
        diff_viewer: viewer.to_string(),
        scratch_dir: Some(scratch_dir.to_path_buf()),
        ..Config::default()
    };
    config.save_to(&dir)?;
    Ok(TestConfig { temp_dir, dir })
}

/// Creates a viewer script that appends both compared files to `record`.
///
/// Returns a template usable as `diff_viewer`.
#[cfg(unix)]
pub fn create_recording_viewer(dir: &Path, record: &Path) -> Result<String> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("record-viewer.sh");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"LEFT $1\" >> '{record}'\ncat \"$1\" >> '{record}'\necho \"RIGHT $2\" >> '{record}'\ncat \"$2\" >> '{record}'\n",
            record = record.display()
        ),
    )?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(format!("{} %s %s", script.display()))
}

/// Number of entries in a directory
pub fn count_entries(dir: &Path) -> Result<usize> {
    Ok(std::fs::read_dir(dir)?.count())
}
