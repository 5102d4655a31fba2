//! Content model for a single generated page.
//!
//! A page is an ordered sequence of [`ContentItem`]s. Container items
//! (lists and stacked groups) own their children, so the whole page is a
//! tree that is built once and rendered in a single pass.

mod header;
mod image;
mod item;
mod page;

pub use header::{Header, MAX_HEADER_LEVEL};
pub use image::Image;
pub use item::{ContentItem, ItemKind};
pub use page::Page;
