use crate::commands::context::CommandContext;
use crate::core::{
    error::Result, get_colored_status, get_colored_tag, host::EditorHost, print_field,
    print_section_header,
};
use std::path::Path;

/// Show the file's status and the window title as the editor would show it
pub fn execute_status(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let status = context.menu.file_status()?;

    if let Some(refresh) = context.menu.update_state() {
        if refresh.join().is_err() {
            log::warn!("Title refresh thread panicked");
        }
    }

    print_section_header(&context.display_path());
    print_field("Status", get_colored_status(status));
    if !status.title_tag().is_empty() {
        print_field("Tag", get_colored_tag(status));
    }
    if let Some(title) = context.menu.host().title() {
        print_field("Title", title);
    }
    println!();

    Ok(())
}
