//! Section headers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest header level a page supports (0 = section, 1 = subsection).
pub const MAX_HEADER_LEVEL: u8 = 1;

/// A section header.
///
/// Every header places an anchor in the page and, when it sits at the top
/// level of the page, an entry in the navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header text
    pub text: String,

    /// Anchor id; `None` falls back to the header text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Header level (0 or 1)
    #[serde(default)]
    pub level: u8,
}

impl Header {
    /// Create a top-level header whose anchor is its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            anchor: Some(text.clone()),
            text,
            level: 0,
        }
    }

    /// Create a header with an explicit anchor id.
    pub fn with_anchor(text: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: Some(anchor.into()),
            level: 0,
        }
    }

    /// Set the header level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// The resolved anchor id.
    pub fn anchor(&self) -> &str {
        self.anchor.as_deref().unwrap_or(&self.text)
    }

    /// Check that the level is 0 or 1.
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_HEADER_LEVEL {
            return Err(Error::InvalidHeaderLevel {
                header: self.text.clone(),
                level: self.level,
            });
        }
        Ok(())
    }

    /// Check if this is a subsection header.
    pub fn is_subheader(&self) -> bool {
        self.level == 1
    }
}
