//! Rendering result with navigation and statistics.

use serde::{Deserialize, Serialize};

use super::NavEntry;
use crate::model::{ContentItem, ItemKind};

/// Result of rendering a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// The complete HTML document
    pub html: String,

    /// Navigation entries placed in the page
    pub navigation: Vec<NavEntry>,

    /// Render statistics
    pub stats: RenderStats,
}

impl PageResult {
    /// Create a new page result.
    pub fn new(html: String, navigation: Vec<NavEntry>, stats: RenderStats) -> Self {
        Self {
            html,
            navigation,
            stats,
        }
    }

    /// Get the document length in bytes.
    pub fn html_len(&self) -> usize {
        self.html.len()
    }
}

/// Statistics collected while rendering a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headers (all levels, nested included)
    pub header_count: u32,

    /// Number of text paragraphs
    pub text_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of lists (ordered and unordered)
    pub list_count: u32,

    /// Number of list entries
    pub list_item_count: u32,

    /// Number of stacked groups
    pub stacked_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Approximate word count of paragraph and header text
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole item tree.
    pub fn collect(items: &[ContentItem]) -> Self {
        let mut stats = Self::new();
        for item in items {
            item.walk(&mut |node| stats.add_item(node));
        }
        stats
    }

    /// Count a single item (children are not visited).
    pub fn add_item(&mut self, item: &ContentItem) {
        match item.kind() {
            ItemKind::Header => self.header_count += 1,
            ItemKind::Text => self.text_count += 1,
            ItemKind::Image => self.image_count += 1,
            ItemKind::UnorderedList | ItemKind::OrderedList => {
                self.list_count += 1;
                self.list_item_count += item.children().len() as u32;
            }
            ItemKind::Stacked => self.stacked_count += 1,
            ItemKind::CodeBlock => self.code_block_count += 1,
        }

        match item {
            ContentItem::Header(header) => self.count_words(&header.text),
            ContentItem::Text { text }
            | ContentItem::UnorderedList { text, .. }
            | ContentItem::OrderedList { text, .. } => self.count_words(text),
            _ => {}
        }
    }

    /// Add the whitespace-separated word count of some text.
    pub fn count_words(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Total number of items counted.
    pub fn total_items(&self) -> u32 {
        self.header_count
            + self.text_count
            + self.image_count
            + self.list_count
            + self.stacked_count
            + self.code_block_count
    }
}
