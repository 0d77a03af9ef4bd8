//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper that writes them to stdout. Diagnostics go through
//! `tracing` on stderr, never through these functions.
//!
//! ```text
//! $ docs-nav flatten
//! Manifest
//! 001 docs-nav-intro → /docs/intro/
//! 002 docs-nav-foundations
//!     001 docs-nav-accounts → /docs/accounts/
//!
//! Flattened (2 of 3 nodes)
//! 001 /docs/intro/ docs-nav-intro
//! 002 /docs/accounts/ docs-nav-accounts
//!
//! $ docs-nav resolve --path /docs/accounts/
//! Current: /docs/accounts/ (002)
//! Previous: /docs/intro/ docs-nav-intro
//! Next: none
//! ```

use crate::manifest::{ManifestIssue, node_count};
use crate::types::{FlatEntry, LinkNode, NavigationResult};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn entry_line(entry: &FlatEntry) -> String {
    format!("{} {}", entry.href, entry.id)
}

// ============================================================================
// flatten
// ============================================================================

/// Manifest tree with per-level positions, then the flattened sequence.
pub fn format_flatten_output(tree: &[LinkNode], flat: &[FlatEntry]) -> Vec<String> {
    let mut lines = vec!["Manifest".to_string()];
    format_tree(tree, 0, &mut lines);

    lines.push(String::new());
    lines.push(format!(
        "Flattened ({} of {} nodes)",
        flat.len(),
        node_count(tree)
    ));
    for (i, entry) in flat.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry_line(entry)));
    }
    lines
}

fn format_tree(nodes: &[LinkNode], depth: usize, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let header = match &node.href {
            Some(href) => format!("{} {} → {}", format_index(i + 1), node.id, href),
            None => format!("{} {}", format_index(i + 1), node.id),
        };
        lines.push(format!("{}{}", indent(depth), header));
        format_tree(node.children(), depth + 1, lines);
    }
}

pub fn print_flatten_output(tree: &[LinkNode], flat: &[FlatEntry]) {
    for line in format_flatten_output(tree, flat) {
        println!("{}", line);
    }
}

// ============================================================================
// resolve
// ============================================================================

/// Current page and its neighbors. `index` is `None` when the path is unmatched.
pub fn format_resolve_output(
    current_path: &str,
    index: Option<usize>,
    nav: &NavigationResult,
) -> Vec<String> {
    let current = match index {
        Some(i) => format!("Current: {} ({})", current_path, format_index(i + 1)),
        None => format!("Current: {} (not in manifest)", current_path),
    };
    let neighbor = |label: &str, entry: Option<&FlatEntry>| match entry {
        Some(entry) => format!("{}: {}", label, entry_line(entry)),
        None => format!("{}: none", label),
    };
    vec![
        current,
        neighbor("Previous", nav.previous.as_ref()),
        neighbor("Next", nav.next.as_ref()),
    ]
}

pub fn print_resolve_output(current_path: &str, index: Option<usize>, nav: &NavigationResult) {
    for line in format_resolve_output(current_path, index, nav) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Manifest summary, issues, and available locales.
pub fn format_check_output(
    tree: &[LinkNode],
    flat: &[FlatEntry],
    issues: &[ManifestIssue],
    locales: &[String],
) -> Vec<String> {
    let mut lines = vec![format!(
        "Manifest: {} nodes, {} navigable pages",
        node_count(tree),
        flat.len()
    )];

    if !locales.is_empty() {
        lines.push(format!("Locales: {}", locales.join(", ")));
    }

    if issues.is_empty() {
        lines.push("No issues found".to_string());
    } else {
        lines.push(format!("Issues ({})", issues.len()));
        for issue in issues {
            lines.push(format!("    {}", issue));
        }
    }
    lines
}

pub fn print_check_output(
    tree: &[LinkNode],
    flat: &[FlatEntry],
    issues: &[ManifestIssue],
    locales: &[String],
) {
    for line in format_check_output(tree, flat, issues, locales) {
        println!("{}", line);
    }
}
