//! Execution of `git` subcommands against a resolved work tree.
//!
//! [`GitRunner`] is the single place where the `git` executable is spawned.
//! Every invocation is pinned to a work tree with
//! `--git-dir=<root>/.git --work-tree=<root>`, and both output streams are
//! captured in full before the call returns.
//!
//! # Public API
//! - [`GitRunner`]: Runs git subcommands, blocking or detached
//! - [`GitOutput`]: Raw stdout, stderr and exit code of a finished command
//! - [`launch_detached`]: Starts any external tool without waiting for it
//!
//! The runner never interprets exit codes. A non-zero exit is a valid
//! [`GitOutput`]; only a failure to start the process is an error.

use crate::core::{
    error::{GitMenuError, Result},
    locator::WorkTree,
};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::process::{Child, Command, Stdio};

/// Captured result of a finished git command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Process exit code, `-1` when the process was terminated by a signal
    pub exit_code: i32,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// stdout followed by stderr, for showing a command's output to the user
    pub fn combined_text(&self) -> String {
        let mut text = self.stdout_text().into_owned();
        let stderr = self.stderr_text();
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }
        text
    }
}

impl From<std::process::Output> for GitOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

/// Spawns the `git` executable for a given work tree
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: OsString,
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Run `git <args>` in `work_tree` and wait for it to exit
    pub fn run<I, S>(&self, work_tree: &WorkTree, args: I) -> Result<GitOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = self.command(work_tree, args);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let output = cmd
            .output()
            .map_err(|e| GitMenuError::launch_failure(self.program.to_string_lossy(), e))?;
        let output = GitOutput::from(output);

        log::debug!("git exited with code {}", output.exit_code);
        Ok(output)
    }

    /// Start `git <args>` in `work_tree` without waiting for it (e.g. `git gui`)
    pub fn spawn<I, S>(&self, work_tree: &WorkTree, args: I) -> Result<Child>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command(work_tree, args)
            .spawn()
            .map_err(|e| GitMenuError::launch_failure(self.program.to_string_lossy(), e))
    }

    fn command<I, S>(&self, work_tree: &WorkTree, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut git_dir = OsString::from("--git-dir=");
        git_dir.push(work_tree.git_dir());
        let mut tree = OsString::from("--work-tree=");
        tree.push(work_tree.root());

        let mut cmd = Command::new(&self.program);
        cmd.arg(git_dir)
            .arg(tree)
            .args(args)
            .current_dir(work_tree.root())
            .stdin(Stdio::null());

        log::debug!("Running {:?}", cmd);
        cmd
    }
}

/// Launch an external tool and return immediately
pub fn launch_detached<I, S>(program: &str, args: I) -> Result<Child>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    log::debug!("Launching {program}");
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| GitMenuError::launch_failure(program, e))
}
