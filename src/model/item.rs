//! Content items, the nodes of a page tree.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Header, Image};

/// One node in a page's content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A section header with an anchor
    Header(Header),

    /// A plain paragraph
    Text {
        /// Paragraph text (trusted, inserted verbatim)
        text: String,
    },

    /// A captioned image
    Image(Image),

    /// A bulleted list
    UnorderedList {
        /// Text placed before the list
        #[serde(default)]
        text: String,
        /// List entries
        items: Vec<ContentItem>,
    },

    /// A numbered list
    OrderedList {
        /// Text placed before the list
        #[serde(default)]
        text: String,
        /// List entries
        items: Vec<ContentItem>,
    },

    /// Several items rendered back to back with no wrapper element
    Stacked {
        /// Grouped items
        items: Vec<ContentItem>,
    },

    /// A preformatted code block
    CodeBlock {
        /// Raw code (inserted verbatim)
        code: String,
    },
}

impl ContentItem {
    /// Create a top-level header whose anchor is its text.
    pub fn header(text: impl Into<String>) -> Self {
        ContentItem::Header(Header::new(text))
    }

    /// Create a top-level header with an explicit anchor id.
    pub fn header_with_anchor(text: impl Into<String>, anchor: impl Into<String>) -> Self {
        ContentItem::Header(Header::with_anchor(text, anchor))
    }

    /// Create a level-1 header.
    pub fn subheader(text: impl Into<String>) -> Self {
        ContentItem::Header(Header::new(text).with_level(1))
    }

    /// Create a text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// Create a captioned image.
    pub fn image(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        ContentItem::Image(Image::new(src, alt, caption))
    }

    /// Create a bulleted list.
    pub fn unordered_list(text: impl Into<String>, items: Vec<ContentItem>) -> Self {
        ContentItem::UnorderedList {
            text: text.into(),
            items,
        }
    }

    /// Create a numbered list.
    pub fn ordered_list(text: impl Into<String>, items: Vec<ContentItem>) -> Self {
        ContentItem::OrderedList {
            text: text.into(),
            items,
        }
    }

    /// Group items without a wrapper element.
    pub fn stacked(items: Vec<ContentItem>) -> Self {
        ContentItem::Stacked { items }
    }

    /// Create a code block.
    pub fn code_block(code: impl Into<String>) -> Self {
        ContentItem::CodeBlock { code: code.into() }
    }

    /// The kind of this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            ContentItem::Header(_) => ItemKind::Header,
            ContentItem::Text { .. } => ItemKind::Text,
            ContentItem::Image(_) => ItemKind::Image,
            ContentItem::UnorderedList { .. } => ItemKind::UnorderedList,
            ContentItem::OrderedList { .. } => ItemKind::OrderedList,
            ContentItem::Stacked { .. } => ItemKind::Stacked,
            ContentItem::CodeBlock { .. } => ItemKind::CodeBlock,
        }
    }

    /// Get the header if this item is one.
    pub fn as_header(&self) -> Option<&Header> {
        match self {
            ContentItem::Header(header) => Some(header),
            _ => None,
        }
    }

    /// Check if this item is a header.
    pub fn is_header(&self) -> bool {
        matches!(self, ContentItem::Header(_))
    }

    /// Check if this item holds children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ContentItem::UnorderedList { .. }
                | ContentItem::OrderedList { .. }
                | ContentItem::Stacked { .. }
        )
    }

    /// Direct children of a container item (empty for leaves).
    pub fn children(&self) -> &[ContentItem] {
        match self {
            ContentItem::UnorderedList { items, .. }
            | ContentItem::OrderedList { items, .. }
            | ContentItem::Stacked { items } => items,
            _ => &[],
        }
    }

    /// Visit this item and all of its descendants, depth first, in order.
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a ContentItem),
    {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }
}

/// Discriminant of a [`ContentItem`], used for statistics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Section header
    Header,
    /// Paragraph
    Text,
    /// Captioned image
    Image,
    /// Bulleted list
    UnorderedList,
    /// Numbered list
    OrderedList,
    /// Wrapper-less group
    Stacked,
    /// Preformatted code
    CodeBlock,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Header => "header",
            ItemKind::Text => "text",
            ItemKind::Image => "image",
            ItemKind::UnorderedList => "unordered list",
            ItemKind::OrderedList => "ordered list",
            ItemKind::Stacked => "stacked",
            ItemKind::CodeBlock => "code block",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kinds() {
        assert_eq!(ContentItem::header("a").kind(), ItemKind::Header);
        assert_eq!(ContentItem::code_block("x").kind(), ItemKind::CodeBlock);
        assert!(ContentItem::header("a").is_header());
        assert!(!ContentItem::text("a").is_header());
    }

    #[test]
    fn test_subheader_level() {
        let item = ContentItem::subheader("Details");
        assert_eq!(item.as_header().map(|h| h.level), Some(1));
    }

    #[test]
    fn test_containers() {
        let list = ContentItem::unordered_list("", vec![]);
        assert!(list.is_container());
        assert!(list.children().is_empty());
        assert!(!ContentItem::text("a").is_container());
    }

    #[test]
    fn test_walk_is_depth_first() {
        let tree = ContentItem::stacked(vec![
            ContentItem::text("a"),
            ContentItem::ordered_list("", vec![ContentItem::text("b"), ContentItem::text("c")]),
            ContentItem::text("d"),
        ]);

        let mut seen = Vec::new();
        tree.walk(&mut |item| {
            if let ContentItem::Text { text } = item {
                seen.push(text.as_str());
            }
        });
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_item_kind_display() {
        assert_eq!(ItemKind::UnorderedList.to_string(), "unordered list");
        assert_eq!(ItemKind::CodeBlock.to_string(), "code block");
    }
}
