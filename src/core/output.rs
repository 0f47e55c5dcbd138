//! Unified output formatting utilities for consistent CLI presentation.
//!
//! The terminal front-end prints everything through these helpers, including
//! the notices a graphical editor would show in a dialog.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for headings
//! - **Standardized spacing**: Newline before and after all command outputs

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints a notice with a heading and a (possibly multi-line) body
///
/// # Format
/// ```text
///
/// ! <heading>
///   <detail line 1>
///   <detail line 2>
///
/// ```
pub fn print_notice(heading: &str, detail: &str) {
    println!("\n{} {}", "!".yellow(), heading.blue());
    for line in detail.lines() {
        println!("  {}", line.white());
    }
    println!();
}

/// Prints `label: value` with a muted label
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{label}:").bright_black(), value);
}
