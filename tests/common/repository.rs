//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with various states
//! and configurations for comprehensive testing scenarios.

#![allow(dead_code)]

use git_menu::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of a file inside the repository
    pub fn file(&self, filename: &str) -> PathBuf {
        self.path.join(filename)
    }
}

/// Runs git in `repo_path` and returns its trimmed stdout
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(repo_path).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on a
/// `main` branch, and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;

    // Set git config to avoid prompts during tests
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit of "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
///
/// # Arguments
///
/// * `repo_path` - Path to the repository
/// * `filename` - Name of the file to create, parent directories are created too
/// * `content` - Content to write to the file
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Reads a file from the repository
pub fn read_file(repo_path: &Path, filename: &str) -> Result<String> {
    Ok(fs::read_to_string(repo_path.join(filename))?)
}

/// Adds a file to the git index
///
/// # Arguments
///
/// * `repo_path` - Path to the repository
/// * `filename` - Name of the file to add (or "." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Creates a branch at HEAD without switching to it
pub fn git_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])?;
    Ok(())
}

/// Switches to an existing branch
pub fn git_switch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["checkout", "-q", name])?;
    Ok(())
}

/// Full commit id of `revision`
pub fn rev_parse(repo_path: &Path, revision: &str) -> Result<String> {
    git(repo_path, &["rev-parse", revision])
}

/// Writes a file, stages it and commits it in one go
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, message)
}

/// Raw porcelain status of one file
pub fn porcelain(repo_path: &Path, filename: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["status", "--porcelain", "--", filename])
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}
