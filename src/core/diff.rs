//! Two-sided file comparison through an external diff viewer.
//!
//! A comparison takes two [`DiffSource`]s. Working files are passed to the
//! viewer as they are; revision-backed sources are first materialized with
//! `git show <rev>:<path>` into [`ScratchFile`]s. The viewer is started as a
//! child process and waited on, and the scratch files are removed when the
//! comparison returns, whichever way it returns.
//!
//! # Public API
//! - [`DiffViewer`]: Structured viewer command parsed from a `"meld %s %s"` template
//! - [`DiffSource`]: Working file or blob at a revision
//! - [`ScratchFile`]: Temporary file deleted on drop
//! - [`compare`]: Materialize both sides and run the viewer
//! - [`scratch_path`]: Deterministic scratch file name for a working file

use crate::core::{
    error::{GitMenuError, Result},
    git::GitRunner,
    locator::{absolutize, WorkTree},
};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default viewer template
pub const DEFAULT_DIFF_VIEWER: &str = "meld %s %s";

const PLACEHOLDER: &str = "%s";
const SCRATCH_PREFIX: &str = "git-menu-compare";

/// External diff viewer as a program plus argument list with two path slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffViewer {
    program: String,
    args: Vec<String>,
}

impl Default for DiffViewer {
    fn default() -> Self {
        Self {
            program: "meld".to_string(),
            args: vec![PLACEHOLDER.to_string(), PLACEHOLDER.to_string()],
        }
    }
}

impl DiffViewer {
    /// Parse a template such as `"meld %s %s"` or `"kdiff3 --L1 old %s %s"`.
    ///
    /// The template is split on whitespace before any path is substituted, so
    /// paths containing spaces stay single arguments.
    pub fn parse(template: &str) -> Result<Self> {
        let mut tokens = template.split_whitespace().map(str::to_string);
        let program = tokens
            .next()
            .filter(|program| !program.contains(PLACEHOLDER))
            .ok_or_else(|| GitMenuError::invalid_diff_template(template))?;
        let args: Vec<String> = tokens.collect();

        let slots: usize = args.iter().map(|arg| arg.matches(PLACEHOLDER).count()).sum();
        if slots != 2 {
            return Err(GitMenuError::invalid_diff_template(template));
        }

        Ok(Self { program, args })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with `left` and `right` substituted into the slots, in order
    pub fn args_for(&self, left: &Path, right: &Path) -> Vec<OsString> {
        let mut paths = [left.as_os_str(), right.as_os_str()].into_iter();
        self.args
            .iter()
            .map(|arg| {
                let mut pieces = arg.split(PLACEHOLDER);
                let mut substituted = OsString::from(pieces.next().unwrap_or_default());
                for piece in pieces {
                    substituted.push(paths.next().unwrap_or_default());
                    substituted.push(piece);
                }
                substituted
            })
            .collect()
    }

    pub fn command(&self, left: &Path, right: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args_for(left, right));
        cmd
    }
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSource {
    /// A file on disk, used as is
    WorkingFile(PathBuf),
    /// The content of `file` at `revision` (commit id or branch name)
    Revision {
        work_tree: WorkTree,
        revision: String,
        file: PathBuf,
    },
}

impl DiffSource {
    pub fn working_file(path: impl Into<PathBuf>) -> Self {
        Self::WorkingFile(path.into())
    }

    pub fn revision(work_tree: WorkTree, revision: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self::Revision {
            work_tree,
            revision: revision.into(),
            file: file.into(),
        }
    }

    fn needs_materializing(&self) -> bool {
        matches!(self, Self::Revision { .. })
    }
}

/// A temporary file owned by a comparison; deleted when dropped.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `content` to `path`, taking ownership of the file
    pub fn create(path: PathBuf, content: &[u8]) -> Result<Self> {
        // Own the path before writing so a partial write is still removed
        let scratch = Self { path };
        fs::write(&scratch.path, content)?;
        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to remove {}: {e}", self.path.display());
            }
        }
    }
}

/// Scratch file name for `file`: the absolute path with `/` turned into `.`,
/// prefixed with a fixed marker and followed by `suffix` (`""`, `"-A"`, `"-B"`).
pub fn scratch_path(scratch_dir: &Path, file: &Path, suffix: &str) -> Result<PathBuf> {
    let absolute = absolutize(file)?;
    let flattened = absolute.to_string_lossy().replace(['/', '\\'], ".");
    Ok(scratch_dir.join(format!("{SCRATCH_PREFIX}{flattened}{suffix}")))
}

/// Compare `left` with `right` in `viewer`, blocking until the viewer exits.
///
/// Every scratch file created here is gone when this returns, including when
/// `git` or the viewer cannot be launched.
pub fn compare(
    runner: &GitRunner,
    left: &DiffSource,
    right: &DiffSource,
    viewer: &DiffViewer,
    scratch_dir: &Path,
) -> Result<()> {
    let both = left.needs_materializing() && right.needs_materializing();
    let (left_suffix, right_suffix) = if both { ("-A", "-B") } else { ("", "") };

    let (left_path, _left_scratch) = resolve_source(runner, left, scratch_dir, left_suffix)?;
    let (right_path, _right_scratch) = resolve_source(runner, right, scratch_dir, right_suffix)?;

    let mut cmd = viewer.command(&left_path, &right_path);
    log::debug!("Running diff viewer {:?}", cmd);

    let status = cmd
        .status()
        .map_err(|e| GitMenuError::launch_failure(viewer.program(), e))?;
    if !status.success() {
        log::info!("Diff viewer {} exited with {status}", viewer.program());
    }
    Ok(())
}

/// Path to hand to the viewer, plus the scratch file backing it if any
fn resolve_source(
    runner: &GitRunner,
    source: &DiffSource,
    scratch_dir: &Path,
    suffix: &str,
) -> Result<(PathBuf, Option<ScratchFile>)> {
    match source {
        DiffSource::WorkingFile(path) => Ok((path.clone(), None)),
        DiffSource::Revision {
            work_tree,
            revision,
            file,
        } => {
            let content = show_blob(runner, work_tree, revision, file)?;
            let scratch = ScratchFile::create(scratch_path(scratch_dir, file, suffix)?, &content)?;
            Ok((scratch.path().to_path_buf(), Some(scratch)))
        }
    }
}

/// Content of `file` at `revision`. A failing `git show` yields its (empty) stdout.
pub fn show_blob(
    runner: &GitRunner,
    work_tree: &WorkTree,
    revision: &str,
    file: &Path,
) -> Result<Vec<u8>> {
    let relative = work_tree.relative_path(file)?;
    let mut object = OsString::from(revision);
    object.push(":");
    // git wants forward slashes in <rev>:<path>
    object.push(relative.to_string_lossy().replace('\\', "/"));

    let output = runner.run(work_tree, [OsStr::new("show"), object.as_os_str()])?;
    if !output.success() {
        log::warn!(
            "git show {} failed: {}",
            object.to_string_lossy(),
            output.stderr_text().trim()
        );
    }
    Ok(output.stdout)
}
