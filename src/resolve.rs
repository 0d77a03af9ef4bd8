//! Previous/next resolution over the link manifest.
//!
//! The manifest tree is flattened depth-first, pre-order, into the sequence
//! readers page through. The current page is located in that sequence by
//! exact path match and its immediate neighbors become the pagination links.
//!
//! ```text
//! - /a            A
//! - /b            B          →  [/a, /b, /b/1, /c]
//!   - /b/1        B1
//! - /c            C             current "/b/1" → prev "/b", next "/c"
//! ```
//!
//! ## Unmatched paths
//!
//! A current path that matches no entry is aliased to the first entry by
//! default ([`UnmatchedPolicy::First`]), so the first page's neighbors are
//! shown. [`UnmatchedPolicy::None`] renders no neighbors instead.

use crate::types::{FlatEntry, LinkNode, NavigationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to show when the current path is not in the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Treat the first entry as current.
    #[default]
    First,
    /// Show neither neighbor.
    None,
}

/// Flatten the manifest into the ordered sequence of navigable entries.
///
/// Parents are emitted before their children; nodes without `href` are
/// skipped but their children are still visited.
pub fn flatten(tree: &[LinkNode]) -> Vec<FlatEntry> {
    let mut flat = Vec::new();
    flatten_into(tree, &mut flat);
    flat
}

fn flatten_into(nodes: &[LinkNode], flat: &mut Vec<FlatEntry>) {
    for node in nodes {
        if let Some(href) = &node.href {
            flat.push(FlatEntry {
                href: href.clone(),
                id: node.id.clone(),
            });
        }
        flatten_into(node.children(), flat);
    }
}

/// Index of the entry whose `href` equals `current_path`, if any.
///
/// When several entries share the path the last one wins.
pub fn try_locate(flat: &[FlatEntry], current_path: &str) -> Option<usize> {
    flat.iter().rposition(|entry| {
        current_path.len() == entry.href.len() && current_path.contains(entry.href.as_str())
    })
}

/// Index of the current entry, falling back to `0` when nothing matches.
pub fn locate(flat: &[FlatEntry], current_path: &str) -> usize {
    try_locate(flat, current_path).unwrap_or(0)
}

/// The entries immediately before and after `index`. No wraparound.
pub fn neighbors(flat: &[FlatEntry], index: usize) -> NavigationResult {
    let previous = index.checked_sub(1).and_then(|i| flat.get(i)).cloned();
    let next = index.checked_add(1).and_then(|i| flat.get(i)).cloned();
    NavigationResult { previous, next }
}

/// Flatten, locate and pick neighbors in one pass.
pub fn resolve(tree: &[LinkNode], current_path: &str, policy: UnmatchedPolicy) -> NavigationResult {
    resolve_located(tree, current_path, policy).1
}

/// Like [`resolve`], also returning where the path matched (`None` if unmatched).
pub fn resolve_located(
    tree: &[LinkNode],
    current_path: &str,
    policy: UnmatchedPolicy,
) -> (Option<usize>, NavigationResult) {
    let flat = flatten(tree);
    debug!(entries = flat.len(), path = current_path, "flattened link manifest");

    let located = try_locate(&flat, current_path);
    let index = match located {
        Some(index) => index,
        None => {
            warn!(path = current_path, ?policy, "current path not found in link manifest");
            match policy {
                UnmatchedPolicy::First => 0,
                UnmatchedPolicy::None => return (None, NavigationResult::default()),
            }
        }
    };

    debug!(index, "located current page");
    (located, neighbors(&flat, index))
}

// ============================================================================
// Tests
// ============================================================================
