//! Work tree resolution with a short-lived cache.
//!
//! [`RepositoryLocator`] answers "which git work tree does this file live in?"
//! by walking the file's ancestors until one of them contains a `.git` entry.
//! Answers (including "none") are cached per input path, and every cache
//! entry expires on its own after the configured time-to-live.
//!
//! The cache is advisory. [`find_work_tree`] performs the uncached walk and is
//! always a valid fallback.

use crate::core::error::{GitMenuError, Result};
use std::collections::HashMap;
use std::env;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default lifetime of a cached resolution
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15);

/// A directory containing a checked-out git repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkTree {
    root: PathBuf,
}

impl WorkTree {
    /// Wrap an already known work tree root. The path is not validated.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The metadata directory passed to git as `--git-dir`
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    /// Path of `file` relative to the root, as git expects in `<rev>:<path>`
    pub fn relative_path(&self, file: &Path) -> Result<PathBuf> {
        let absolute = absolutize(file)?;
        absolute
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| GitMenuError::path_outside_work_tree(absolute.clone(), &self.root))
    }
}

struct CacheEntry {
    work_tree: Option<WorkTree>,
    expires_at: Instant,
}

/// Resolves files to their enclosing [`WorkTree`], caching the answers.
pub struct RepositoryLocator {
    ttl: Duration,
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl Default for RepositoryLocator {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl RepositoryLocator {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Resolve the work tree enclosing `file`.
    ///
    /// Returns `Ok(None)` when no ancestor up to the filesystem root contains
    /// `.git`. Only normalizing a relative path (which needs the current
    /// directory) can fail.
    pub fn resolve(&self, file: &Path) -> Result<Option<WorkTree>> {
        let key = absolutize(file)?;
        let now = Instant::now();

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| entry.expires_at > now);

        if let Some(entry) = entries.get(&key) {
            log::debug!("Work tree cache hit for {}", key.display());
            return Ok(entry.work_tree.clone());
        }

        log::debug!("Work tree cache miss for {}", key.display());
        let work_tree = walk_up(&key);
        entries.insert(
            key,
            CacheEntry {
                work_tree: work_tree.clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(work_tree)
    }

    /// Drop every cached resolution
    pub fn invalidate(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of live (unexpired) cache entries
    pub fn cached_entries(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }
}

/// Uncached resolution: the nearest ancestor (or self) of `file` containing `.git`.
pub fn find_work_tree(file: &Path) -> Result<Option<WorkTree>> {
    Ok(walk_up(&absolutize(file)?))
}

fn walk_up(path: &Path) -> Option<WorkTree> {
    path.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(WorkTree::new)
}

/// Make `path` absolute and fold `.` and `..` lexically, without touching symlinks.
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
