use crate::commands::context::CommandContext;
use crate::core::{
    error::Result, format_revision_line, history::Revision, print_info, print_section_header,
};
use serde::Serialize;
use std::path::Path;

/// A revision as written by `history --json`
#[derive(Serialize)]
struct HistoryEntry<'a> {
    #[serde(flatten)]
    revision: &'a Revision,
    /// RFC 3339 form of the date line, when it parses
    timestamp: Option<String>,
}

impl<'a> From<&'a Revision> for HistoryEntry<'a> {
    fn from(revision: &'a Revision) -> Self {
        Self {
            revision,
            timestamp: revision.timestamp().map(|ts| ts.to_rfc3339()),
        }
    }
}

pub fn execute_history(file: &Path, title: Option<String>, json: bool) -> Result<()> {
    let context = CommandContext::initialize(file, title)?;
    let revisions = context.menu.history()?;

    if json {
        println!("{}", history_json(&revisions)?);
        return Ok(());
    }

    if revisions.is_empty() {
        print_info(&format!("No revisions found for {}", context.display_path()));
        return Ok(());
    }

    print_section_header(&format!("History of {}", context.display_path()));
    for revision in &revisions {
        println!("{}", format_revision_line(revision));
    }
    println!();

    Ok(())
}

fn history_json(revisions: &[Revision]) -> Result<String> {
    let entries: Vec<HistoryEntry> = revisions.iter().map(HistoryEntry::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
