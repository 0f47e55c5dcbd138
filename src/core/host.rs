//! The editor as seen by the git menu.

use std::path::PathBuf;

/// Narrow contract the editor (or any other front-end) implements.
///
/// Implementations must be shareable with the background title refresh.
pub trait EditorHost: Send + Sync {
    /// Location on disk of the active document, `None` for unsaved buffers
    fn current_file(&self) -> Option<PathBuf>;

    fn title(&self) -> Option<String>;

    fn set_title(&self, title: &str);

    /// Blocking notice or output window
    fn show_message(&self, heading: &str, detail: &str);

    /// Re-read the active document after git changed it on disk
    fn reload_document(&self);

    /// Show the Git menu while the document is inside a work tree, hide it otherwise
    fn set_menu_visible(&self, visible: bool);
}
