//! Centralized initialization for commands acting on one file.
//!
//! Every command that works on a document goes through
//! [`CommandContext::initialize`], which loads the configuration, makes the
//! file path absolute (an editor always reports absolute paths) and builds a
//! [`GitMenu`] around a [`TerminalHost`].
//!
//! # Initialization Steps
//! 1. **Configuration**: `config.json` and `diffrc` from the config directory
//! 2. **Path normalization**: Relative paths are resolved against the current directory and `..` is folded
//! 3. **Menu construction**: The diff viewer template is validated here

use crate::commands::terminal_host::TerminalHost;
use crate::core::{config::Config, error::Result, locator::absolutize, menu::GitMenu};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct CommandContext {
    pub menu: GitMenu<TerminalHost>,
    pub file: PathBuf,
}

impl CommandContext {
    /// Initialize everything needed to run a menu action for `file`
    pub fn initialize(file: &Path, title: Option<String>) -> Result<Self> {
        let config = Config::load()?;
        Self::initialize_with_config(file, title, &config)
    }

    pub fn initialize_with_config(
        file: &Path,
        title: Option<String>,
        config: &Config,
    ) -> Result<Self> {
        let file = absolutize(file)?;
        log::debug!("Initializing menu for {}", file.display());

        let host = Arc::new(TerminalHost::new(Some(file.clone()), title));
        let menu = GitMenu::new(host, config)?;
        Ok(Self { menu, file })
    }

    /// The file as shown to the user, relative to the work tree when possible
    pub fn display_path(&self) -> String {
        self.menu
            .require_work_tree(false)
            .ok()
            .and_then(|wt| wt.relative_path(&self.file).ok())
            .unwrap_or_else(|| self.file.clone())
            .display()
            .to_string()
    }
}
