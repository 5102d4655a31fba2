//! Navigation list derived from page headers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::html::escape_attr;
use crate::model::{ContentItem, Header};

/// One link in the side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Link label (the header text)
    pub label: String,

    /// Resolved anchor id
    pub anchor: String,

    /// Ready-to-use link target, `#` plus the escaped anchor
    pub href: String,

    /// Header level (0 or 1)
    pub level: u8,
}

impl NavEntry {
    /// Create a navigation entry for a header.
    pub fn from_header(header: &Header) -> Self {
        let anchor = header.anchor().to_string();
        Self {
            label: header.text.clone(),
            href: format!("#{}", escape_attr(&anchor)),
            anchor,
            level: header.level,
        }
    }
}

/// Build the navigation list: one entry per top-level header, in order.
pub fn navigation(items: &[ContentItem]) -> Vec<NavEntry> {
    items
        .iter()
        .filter_map(ContentItem::as_header)
        .map(NavEntry::from_header)
        .collect()
}

/// Anchor ids defined more than once anywhere in the tree.
///
/// Each duplicated id is reported once, in the order its second definition
/// appears.
pub fn duplicate_anchors(items: &[ContentItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        item.walk(&mut |node| {
            if let Some(header) = node.as_header() {
                let anchor = header.anchor();
                if !seen.insert(anchor) && !duplicates.iter().any(|d: &String| d == anchor) {
                    duplicates.push(anchor.to_string());
                }
            }
        });
    }
    duplicates
}
