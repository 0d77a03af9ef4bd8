//! Link manifest loading and checks.
//!
//! The manifest is a YAML sequence of nodes, each with a translation `id`,
//! an optional page `href`, and optional nested `items`:
//!
//! ```yaml
//! - id: docs-nav-foundational-topics
//!   items:
//!     - id: docs-nav-intro-to-ethereum
//!       href: /developers/docs/intro-to-ethereum/
//!     - id: docs-nav-accounts
//!       href: /developers/docs/accounts/
//! ```
//!
//! Loading never reorders or rewrites nodes. [`check_manifest`] reports
//! problems that make navigation surprising (duplicate paths, empty nodes)
//! without refusing to load the file.

use crate::types::LinkNode;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A non-fatal problem found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    /// Two or more nodes share an `href`; the last one is treated as current.
    DuplicateHref { href: String, ids: Vec<String> },
    /// A node with neither `href` nor children.
    EmptyNode { id: String },
    /// A node with a blank `id`, which renders as an empty title.
    EmptyId { href: Option<String> },
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestIssue::DuplicateHref { href, ids } => {
                write!(f, "duplicate href {href} (ids: {})", ids.join(", "))
            }
            ManifestIssue::EmptyNode { id } => {
                write!(f, "node {id} has neither href nor items")
            }
            ManifestIssue::EmptyId { href: Some(href) } => write!(f, "node at {href} has an empty id"),
            ManifestIssue::EmptyId { href: None } => write!(f, "grouping node has an empty id"),
        }
    }
}

/// Parse a manifest from YAML text. An empty document is an empty manifest.
pub fn parse_manifest(content: &str) -> Result<Vec<LinkNode>, ManifestError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let nodes: Option<Vec<LinkNode>> = serde_yaml::from_str(content)?;
    Ok(nodes.unwrap_or_default())
}

/// Load a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<LinkNode>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let nodes = parse_manifest(&content)?;
    debug!(
        path = %path.display(),
        roots = nodes.len(),
        nodes = node_count(&nodes),
        "loaded link manifest"
    );
    Ok(nodes)
}

/// Total number of nodes in the tree, grouping nodes included.
pub fn node_count(tree: &[LinkNode]) -> usize {
    tree.iter().map(|node| 1 + node_count(node.children())).sum()
}

/// Collect non-fatal issues, in manifest order.
pub fn check_manifest(tree: &[LinkNode]) -> Vec<ManifestIssue> {
    let mut issues = Vec::new();
    let mut by_href: Vec<(String, Vec<String>)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    walk(tree, &mut |node| {
        if node.id.trim().is_empty() {
            issues.push(ManifestIssue::EmptyId {
                href: node.href.clone(),
            });
        }
        if node.href.is_none() && node.children().is_empty() {
            issues.push(ManifestIssue::EmptyNode {
                id: node.id.clone(),
            });
        }
        if let Some(href) = &node.href {
            match seen.get(href) {
                Some(&slot) => by_href[slot].1.push(node.id.clone()),
                None => {
                    seen.insert(href.clone(), by_href.len());
                    by_href.push((href.clone(), vec![node.id.clone()]));
                }
            }
        }
    });

    issues.extend(
        by_href
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(href, ids)| ManifestIssue::DuplicateHref { href, ids }),
    );
    issues
}

fn walk<F: FnMut(&LinkNode)>(nodes: &[LinkNode], visit: &mut F) {
    for node in nodes {
        visit(node);
        walk(node.children(), visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
- id: docs-nav-intro
  href: /docs/intro/
- id: docs-nav-foundations
  items:
    - id: docs-nav-accounts
      href: /docs/accounts/
    - id: docs-nav-blocks
      href: /docs/blocks/
      items:
        - id: docs-nav-block-header
          href: /docs/blocks/header/
"#;

    #[test]
    fn parse_nested_manifest() {
        let nodes = parse_manifest(SAMPLE).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].href.as_deref(), Some("/docs/intro/"));
        assert!(nodes[0].items.is_none());
        assert_eq!(nodes[1].href, None);
        let children = nodes[1].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].children()[0].id, "docs-nav-block-header");
    }

    #[test]
    fn parse_empty_document() {
        assert!(parse_manifest("").unwrap().is_empty());
        assert!(parse_manifest("   \n").unwrap().is_empty());
        assert!(parse_manifest("~").unwrap().is_empty());
    }

    #[test]
    fn parse_missing_id_is_error() {
        let result = parse_manifest("- href: /x\n");
        assert!(matches!(result, Err(ManifestError::Yaml(_))));
    }

    #[test]
    fn load_manifest_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("links.yaml");
        fs::write(&path, SAMPLE).unwrap();
        let nodes = load_manifest(&path).unwrap();
        assert_eq!(node_count(&nodes), 5);
    }

    #[test]
    fn load_manifest_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.yaml");
        let err = load_manifest(&missing).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn node_count_includes_groups() {
        let nodes = parse_manifest(SAMPLE).unwrap();
        assert_eq!(node_count(&nodes), 5);
        assert_eq!(crate::resolve::flatten(&nodes).len(), 4);
    }

    #[test]
    fn check_clean_manifest() {
        let nodes = parse_manifest(SAMPLE).unwrap();
        assert!(check_manifest(&nodes).is_empty());
    }

    #[test]
    fn check_reports_duplicates_and_empty_nodes() {
        let nodes = vec![
            LinkNode::page("/a", "first"),
            LinkNode::group("section", vec![LinkNode::page("/a", "second")]),
            LinkNode {
                href: None,
                id: "dangling".to_string(),
                items: None,
            },
            LinkNode::page("/b", " "),
        ];
        let issues = check_manifest(&nodes);
        assert_eq!(
            issues,
            vec![
                ManifestIssue::EmptyNode {
                    id: "dangling".to_string()
                },
                ManifestIssue::EmptyId {
                    href: Some("/b".to_string())
                },
                ManifestIssue::DuplicateHref {
                    href: "/a".to_string(),
                    ids: vec!["first".to_string(), "second".to_string()],
                },
            ]
        );
    }

    #[test]
    fn issue_display() {
        let issue = ManifestIssue::DuplicateHref {
            href: "/a".to_string(),
            ids: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(issue.to_string(), "duplicate href /a (ids: x, y)");
    }
}
