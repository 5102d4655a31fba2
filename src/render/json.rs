//! JSON encoding of content trees.

use crate::error::Result;
use crate::model::Page;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a page's content tree to JSON.
pub fn to_json(page: &Page, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(page)?,
        JsonFormat::Compact => serde_json::to_string(page)?,
    };
    Ok(json)
}

/// Parse a page's content tree from JSON.
pub fn from_json(source: &str) -> Result<Page> {
    Ok(serde_json::from_str(source)?)
}
