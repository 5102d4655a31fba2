//! Rendering of content trees into HTML pages.

mod html;
mod json;
mod navigation;
mod options;
mod page;
mod result;

pub use html::render_fragment;
pub use json::{from_json, to_json, JsonFormat};
pub use navigation::{duplicate_anchors, navigation, NavEntry};
pub use options::RenderOptions;
pub use page::{render_page, PageRenderer};
pub use result::{PageResult, RenderStats};
