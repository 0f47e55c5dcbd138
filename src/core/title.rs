//! Window title decoration with the file status tag.

use crate::core::file_status::FileStatus;

/// Remove any status tag from `title` and prepend the tag for `status`.
///
/// Applying this twice with the same status gives the same title as applying
/// it once.
pub fn decorate_title(title: &str, status: FileStatus) -> String {
    let stripped = strip_status_tags(title);
    let tag = status.title_tag();

    let mut decorated = String::with_capacity(tag.len() + stripped.len());
    decorated.push_str(tag);
    decorated.push_str(&stripped);
    decorated
}

/// Remove every `" [?]"`, `" [S]"`, `" [M]"` and `" [MS]"` occurrence.
pub fn strip_status_tags(title: &str) -> String {
    let mut current = title.to_string();
    // Removing one tag can join two halves into a new one
    loop {
        let next = FileStatus::TAGGED
            .iter()
            .fold(current.clone(), |acc, status| acc.replace(status.title_tag(), ""));
        if next == current {
            return current;
        }
        current = next;
    }
}
