//! Local branches other than the checked-out one.

use crate::core::{error::Result, git::GitRunner, locator::WorkTree};
use std::collections::BTreeSet;

/// List local branches, excluding the current one
pub fn list_branches(runner: &GitRunner, work_tree: &WorkTree) -> Result<BTreeSet<String>> {
    let output = runner.run(work_tree, ["branch"])?;
    Ok(parse_branches(&output.stdout_text()))
}

/// Parse `git branch` output. The `*`-marked line is the current branch.
pub fn parse_branches(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter(|line| !line.starts_with('*'))
        // '+' marks branches checked out in another linked worktree
        .map(|line| line.strip_prefix("+ ").unwrap_or(line).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_current_branch() {
        let branches = parse_branches("* main\n  dev\n  feature/x\n");
        let expected: BTreeSet<String> = ["dev", "feature/x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(branches, expected);
    }

    #[test]
    fn test_detached_head_is_excluded() {
        let branches = parse_branches("* (HEAD detached at 1a2b3c4)\n  main\n");
        assert_eq!(branches.len(), 1);
        assert!(branches.contains("main"));
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert!(parse_branches("").is_empty());
        assert!(parse_branches("* main\n\n   \n").is_empty());
    }

    #[test]
    fn test_linked_worktree_marker_stripped() {
        let branches = parse_branches("* main\n+ hotfix\n  dev\n");
        assert!(branches.contains("hotfix"));
        assert!(branches.contains("dev"));
    }
}
