//! In-memory [`EditorHost`] that records everything the menu does to it.

#![allow(dead_code)]

use git_menu::core::{config::Config, host::EditorHost, menu::GitMenu};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingHost {
    pub file: Option<PathBuf>,
    pub title: Mutex<Option<String>>,
    pub messages: Mutex<Vec<(String, String)>>,
    pub reloads: AtomicUsize,
    pub menu_visible: Mutex<Option<bool>>,
    pub file_lookups: AtomicUsize,
}

impl RecordingHost {
    pub fn for_file(file: &Path, title: &str) -> Self {
        Self {
            file: Some(file.to_path_buf()),
            title: Mutex::new(Some(title.to_string())),
            ..Self::default()
        }
    }

    pub fn current_title(&self) -> Option<String> {
        self.title.lock().unwrap().clone()
    }

    pub fn headings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(heading, _)| heading.clone())
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn file_lookup_count(&self) -> usize {
        self.file_lookups.load(Ordering::SeqCst)
    }

    /// Last visibility the menu asked for, `None` before any state refresh
    pub fn menu_visible(&self) -> Option<bool> {
        *self.menu_visible.lock().unwrap()
    }
}

impl EditorHost for RecordingHost {
    fn current_file(&self) -> Option<PathBuf> {
        self.file_lookups.fetch_add(1, Ordering::SeqCst);
        self.file.clone()
    }

    fn title(&self) -> Option<String> {
        self.current_title()
    }

    fn set_title(&self, title: &str) {
        *self.title.lock().unwrap() = Some(title.to_string());
    }

    fn show_message(&self, heading: &str, detail: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((heading.to_string(), detail.to_string()));
    }

    fn reload_document(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn set_menu_visible(&self, visible: bool) {
        *self.menu_visible.lock().unwrap() = Some(visible);
    }
}

/// Menu for `file` with a title equal to its file name
pub fn menu_for(file: &Path, config: &Config) -> anyhow::Result<GitMenu<RecordingHost>> {
    let title = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(GitMenu::new(
        Arc::new(RecordingHost::for_file(file, &title)),
        config,
    )?)
}
