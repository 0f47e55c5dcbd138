//! [`EditorHost`] for the terminal front-end.
//!
//! The "document" is the file named on the command line and the "window title"
//! is kept in memory, seeded from `--title` or the file name.

use crate::core::{host::EditorHost, print_info, print_notice};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

pub struct TerminalHost {
    file: Option<PathBuf>,
    title: Mutex<Option<String>>,
    menu_visible: AtomicBool,
}

impl TerminalHost {
    pub fn new(file: Option<PathBuf>, title: Option<String>) -> Self {
        let title = title.or_else(|| {
            file.as_ref()
                .and_then(|f| f.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        });
        Self {
            file,
            title: Mutex::new(title),
            menu_visible: AtomicBool::new(false),
        }
    }

    /// Whether the last state refresh found the file inside a work tree
    pub fn menu_visible(&self) -> bool {
        self.menu_visible.load(Ordering::SeqCst)
    }
}

impl EditorHost for TerminalHost {
    fn current_file(&self) -> Option<PathBuf> {
        self.file.clone()
    }

    fn title(&self) -> Option<String> {
        self.title
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_title(&self, title: &str) {
        log::debug!("Title set to {title:?}");
        *self.title.lock().unwrap_or_else(PoisonError::into_inner) = Some(title.to_string());
    }

    fn show_message(&self, heading: &str, detail: &str) {
        print_notice(heading, detail);
    }

    fn reload_document(&self) {
        if let Some(file) = &self.file {
            print_info(&format!("Reloaded {}", file.display()));
        }
    }

    fn set_menu_visible(&self, visible: bool) {
        log::debug!("Git menu visible: {visible}");
        self.menu_visible.store(visible, Ordering::SeqCst);
    }
}
