//! Shared types used across manifest loading, resolution and rendering.

use serde::{Deserialize, Serialize};

/// A node in the link manifest tree.
///
/// Grouping nodes carry no `href` of their own but still contribute their
/// children to the flattened sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkNode {
    /// Page path, absent for pure grouping nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Translation key for the node's title.
    pub id: String,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LinkNode>>,
}

impl LinkNode {
    /// A page node without children.
    pub fn page(href: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            id: id.into(),
            items: None,
        }
    }

    /// A grouping node with no page of its own.
    pub fn group(id: impl Into<String>, items: Vec<LinkNode>) -> Self {
        Self {
            href: None,
            id: id.into(),
            items: Some(items),
        }
    }

    /// Attach children to this node.
    pub fn with_items(mut self, items: Vec<LinkNode>) -> Self {
        self.items = Some(items);
        self
    }

    /// Children, or an empty slice when `items` is absent.
    pub fn children(&self) -> &[LinkNode] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// One navigable entry of the flattened manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub href: String,
    pub id: String,
}

/// Neighbors of the current page in the flattened sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<FlatEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<FlatEntry>,
}

impl NavigationResult {
    /// True when neither neighbor is present.
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Which slot of the pagination control a card occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Translation key and analytics event name for this slot.
    pub fn key(self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }

    /// Value of the link's `rel` attribute.
    pub fn rel(self) -> &'static str {
        match self {
            Direction::Previous => "prev",
            Direction::Next => "next",
        }
    }
}
