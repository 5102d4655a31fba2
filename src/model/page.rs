//! Page-level types.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{ContentItem, Header};
use crate::error::Result;

/// The ordered content of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Top-level content items, in display order
    pub items: Vec<ContentItem>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from a list of items.
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Load a page from a JSON content file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        crate::render::from_json(&source)
    }

    /// Add an item to the end of the page.
    pub fn add_item(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    /// Top-level headers, in order. These become navigation entries.
    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.items.iter().filter_map(ContentItem::as_header)
    }

    /// Resolved anchor ids of every header in the tree, in document order.
    pub fn anchors(&self) -> Vec<&str> {
        let mut anchors = Vec::new();
        for item in &self.items {
            item.walk(&mut |node| {
                if let Some(header) = node.as_header() {
                    anchors.push(header.anchor());
                }
            });
        }
        anchors
    }

    /// Total number of items, including nested children.
    pub fn item_count(&self) -> usize {
        let mut count = 0;
        for item in &self.items {
            item.walk(&mut |_| count += 1);
        }
        count
    }

    /// Check if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ContentItem>> for Page {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::from_items(items)
    }
}
