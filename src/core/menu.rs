//! Git menu actions for the active editor document.
//!
//! [`GitMenu`] ties the building blocks together the way an editor plugin
//! uses them: every action first checks its preconditions (the document is
//! saved to disk, the file is inside a work tree), runs the git commands, and
//! then reports back through the [`EditorHost`].
//!
//! # Actions
//! - **Status**: [`GitMenu::update_state`] refreshes the title tag in the background
//! - **Index**: [`GitMenu::stage`], [`GitMenu::unstage`], [`GitMenu::checkout`], [`GitMenu::pull`]
//! - **Lists**: [`GitMenu::history`], [`GitMenu::branches`]
//! - **Compare**: with a revision, between revisions, with a branch, with another file
//! - **Tools**: git gui, gitg, the work tree in the file manager

use crate::core::{
    branches::list_branches,
    config::Config,
    diff::{compare, DiffSource, DiffViewer},
    error::{GitMenuError, Result},
    file_status::{classify, FileStatus},
    git::{launch_detached, GitOutput, GitRunner},
    history::{list_history, Revision},
    host::EditorHost,
    index,
    locator::{RepositoryLocator, WorkTree},
    refresh::RefreshGate,
    title::decorate_title,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const NOT_PERSISTED_HEADING: &str = "Not in persistent file!";
const NOT_PERSISTED_DETAIL: &str = "The current open file has no location on disk!";
const NOT_IN_WORK_TREE_HEADING: &str = "Not in git-workdir!";
const NOT_IN_WORK_TREE_DETAIL: &str =
    "This action can only be performed when the file is inside a git working directory.";

pub struct GitMenu<H: EditorHost + 'static> {
    host: Arc<H>,
    locator: RepositoryLocator,
    runner: GitRunner,
    viewer: DiffViewer,
    scratch_dir: PathBuf,
    refresh: RefreshGate,
}

impl<H: EditorHost + 'static> GitMenu<H> {
    pub fn new(host: Arc<H>, config: &Config) -> Result<Self> {
        Ok(Self {
            host,
            locator: RepositoryLocator::new(config.cache_ttl()),
            runner: GitRunner::new(&config.git_program),
            viewer: config.diff_viewer()?,
            scratch_dir: config.scratch_dir(),
            refresh: RefreshGate::new(),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn locator(&self) -> &RepositoryLocator {
        &self.locator
    }

    // === Preconditions ===

    /// The active document's path, or `NotPersistedFile`
    pub fn require_file(&self, alert: bool) -> Result<PathBuf> {
        self.host.current_file().ok_or_else(|| {
            if alert {
                self.host.show_message(NOT_PERSISTED_HEADING, NOT_PERSISTED_DETAIL);
            }
            GitMenuError::NotPersistedFile
        })
    }

    /// The work tree of the active document, or `NotInWorkTree`
    pub fn require_work_tree(&self, alert: bool) -> Result<WorkTree> {
        self.require_file_in_work_tree(alert)
            .map(|(_, work_tree)| work_tree)
    }

    /// The active document's path together with its work tree, from one lookup
    fn require_file_in_work_tree(&self, alert: bool) -> Result<(PathBuf, WorkTree)> {
        let file = self.require_file(alert)?;
        match self.locator.resolve(&file)? {
            Some(work_tree) => Ok((file, work_tree)),
            None => {
                if alert {
                    self.host
                        .show_message(NOT_IN_WORK_TREE_HEADING, NOT_IN_WORK_TREE_DETAIL);
                }
                Err(GitMenuError::not_in_work_tree(file))
            }
        }
    }

    // === Status ===

    pub fn file_status(&self) -> Result<FileStatus> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        classify(&self.runner, &work_tree, &file)
    }

    /// Show or hide the menu, then refresh the title tag on a background thread.
    ///
    /// The menu is visible only while the document is inside a work tree.
    /// Returns `None` without alerting when the document is unsaved or outside
    /// a work tree. Only the most recently started refresh may set the title.
    pub fn update_state(&self) -> Option<JoinHandle<()>> {
        let located = self.require_file_in_work_tree(false).ok();
        self.host.set_menu_visible(located.is_some());
        let (file, work_tree) = located?;

        let ticket = self.refresh.begin();
        let host = Arc::clone(&self.host);
        let runner = self.runner.clone();

        Some(thread::spawn(move || {
            let status = match classify(&runner, &work_tree, &file) {
                Ok(status) => status,
                Err(e) => {
                    log::warn!("Status refresh failed: {e}");
                    return;
                }
            };
            ticket.apply(|| {
                let Some(title) = host.title() else {
                    return;
                };
                let decorated = decorate_title(&title, status);
                if decorated != title {
                    host.set_title(&decorated);
                }
            });
        }))
    }

    // === Index ===

    pub fn stage(&self) -> Result<GitOutput> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        let output = index::stage(&self.runner, &work_tree, &file)?;
        self.update_state();
        Ok(output)
    }

    pub fn unstage(&self) -> Result<GitOutput> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        let output = index::unstage(&self.runner, &work_tree, &file)?;
        self.update_state();
        Ok(output)
    }

    /// Revert working changes to the document and reload it
    pub fn checkout(&self) -> Result<GitOutput> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        let output = index::checkout(&self.runner, &work_tree, &file)?;
        self.host.reload_document();
        self.update_state();
        Ok(output)
    }

    /// Pull the whole work tree and show git's output
    pub fn pull(&self) -> Result<GitOutput> {
        let work_tree = self.require_work_tree(true)?;
        let output = index::pull(&self.runner, &work_tree)?;
        self.host.reload_document();
        self.host.show_message("git pull", &output.combined_text());
        self.update_state();
        Ok(output)
    }

    // === Lists ===

    pub fn history(&self) -> Result<Vec<Revision>> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        Ok(list_history(&self.runner, &work_tree, &file)?.collect())
    }

    pub fn branches(&self) -> Result<BTreeSet<String>> {
        let work_tree = self.require_work_tree(true)?;
        list_branches(&self.runner, &work_tree)
    }

    // === Compare ===

    /// Current file against its content at `revision`
    pub fn compare_with_revision(&self, revision: &str) -> Result<()> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        let right = DiffSource::revision(work_tree, revision, &file);
        self.compare(&DiffSource::working_file(file), &right)
    }

    /// The file's content at `older` against its content at `newer`
    pub fn compare_revisions(&self, older: &str, newer: &str) -> Result<()> {
        let (file, work_tree) = self.require_file_in_work_tree(true)?;
        let left = DiffSource::revision(work_tree.clone(), older, &file);
        let right = DiffSource::revision(work_tree, newer, &file);
        self.compare(&left, &right)
    }

    /// `revision` against the revision listed just before it in the history
    pub fn compare_with_previous(&self, revision: &str) -> Result<()> {
        if revision.trim().is_empty() {
            return Err(GitMenuError::revision_not_found(revision));
        }
        let selected = self
            .history()?
            .into_iter()
            .find(|r| r.full_id == revision || r.full_id.starts_with(revision))
            .ok_or_else(|| GitMenuError::revision_not_found(revision))?;
        let previous = selected
            .previous_id
            .as_deref()
            .ok_or_else(|| GitMenuError::no_previous_revision(&selected.full_id))?;
        self.compare_revisions(&selected.full_id, previous)
    }

    /// Current file against its content on `branch`
    pub fn compare_with_branch(&self, branch: &str) -> Result<()> {
        self.compare_with_revision(branch)
    }

    /// Current file against any other file on disk
    pub fn compare_with_file(&self, other: &Path) -> Result<()> {
        let file = self.require_file(true)?;
        self.compare(
            &DiffSource::working_file(file),
            &DiffSource::working_file(other),
        )
    }

    fn compare(&self, left: &DiffSource, right: &DiffSource) -> Result<()> {
        compare(&self.runner, left, right, &self.viewer, &self.scratch_dir)
    }

    // === Tools ===

    pub fn open_git_gui(&self) -> Result<()> {
        let work_tree = self.require_work_tree(true)?;
        self.runner.spawn(&work_tree, ["gui"])?;
        Ok(())
    }

    pub fn open_gitg(&self) -> Result<()> {
        let work_tree = self.require_work_tree(true)?;
        launch_detached("gitg", [work_tree.root()])?;
        Ok(())
    }

    /// Open the work tree root in the desktop file manager
    pub fn open_work_tree_directory(&self) -> Result<()> {
        let work_tree = self.require_work_tree(true)?;
        launch_detached("xdg-open", [work_tree.root()])?;
        Ok(())
    }
}
