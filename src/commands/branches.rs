use crate::commands::context::CommandContext;
use crate::core::{error::Result, print_info, print_section_header};
use colored::*;
use std::path::Path;

/// List the branches the file can be compared with (all but the current one)
pub fn execute_branches(file: &Path, title: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let branches = context.menu.branches()?;

    if branches.is_empty() {
        print_info("No other branches found.");
        return Ok(());
    }

    print_section_header("Branches");
    for (index, branch) in branches.iter().enumerate() {
        println!(
            "{}{}{} {}",
            "[".bright_black(),
            (index + 1).to_string().white(),
            "]".bright_black(),
            branch.blue()
        );
    }
    println!();

    Ok(())
}
