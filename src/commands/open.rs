use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_success};
use std::path::Path;

pub fn execute_open_gui(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.open_git_gui()?;
    print_success("Started git gui");
    Ok(())
}

pub fn execute_open_gitg(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.open_gitg()?;
    print_success("Started gitg");
    Ok(())
}

/// Open the work tree root in the file manager
pub fn execute_open_dir(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    context.menu.open_work_tree_directory()?;
    print_success("Opened the work tree directory");
    Ok(())
}
