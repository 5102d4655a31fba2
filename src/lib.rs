//! # pagegen
//!
//! Static single-page site generation from a typed content tree.
//!
//! A page is described as an ordered list of [`ContentItem`]s (headers,
//! paragraphs, images, lists, code blocks and wrapper-less groups). Each
//! item renders itself to an HTML fragment; the page renderer builds a
//! navigation list from the top-level headers and substitutes navigation
//! and content into a page template.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagegen::{ContentItem, Pagegen};
//!
//! fn main() -> pagegen::Result<()> {
//!     let items = vec![
//!         ContentItem::header("Overview"),
//!         ContentItem::text("A small language that aims to be fast and simple."),
//!         ContentItem::unordered_list(
//!             "Goals:",
//!             vec![ContentItem::text("Fast"), ContentItem::text("Simple")],
//!         ),
//!     ];
//!
//!     Pagegen::new()
//!         .with_title("Aize")
//!         .write(&items, "index.html")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ContentItem, Header, Image, ItemKind, Page, MAX_HEADER_LEVEL};
pub use render::{
    from_json, render_fragment, render_page, to_json, JsonFormat, NavEntry, PageResult,
    RenderOptions, RenderStats,
};
pub use template::{PageTemplate, BUILTIN_TEMPLATE};

use std::fs;
use std::path::{Path, PathBuf};

/// Builder-style entry point.
///
/// # Example
///
/// ```no_run
/// use pagegen::{ContentItem, Pagegen};
///
/// let result = Pagegen::new()
///     .with_template_file("_templates/index_template.html")
///     .with_title("Aize")
///     .strict_anchors()
///     .render(&[ContentItem::header("Overview")])?;
/// println!("{} bytes", result.html_len());
/// # Ok::<(), pagegen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pagegen {
    template: TemplateSource,
    render_options: RenderOptions,
}

/// Where the page template comes from.
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    /// The template compiled into the crate
    #[default]
    Builtin,
    /// A template file read at render time
    File(PathBuf),
    /// An in-memory template
    Source(String),
}

impl TemplateSource {
    /// Compile the template.
    pub fn load(&self) -> Result<PageTemplate> {
        match self {
            TemplateSource::Builtin => PageTemplate::builtin(),
            TemplateSource::File(path) => PageTemplate::from_file(path),
            TemplateSource::Source(source) => PageTemplate::from_source("inline.html", source),
        }
    }
}

impl Pagegen {
    /// Create a new builder using the built-in template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the template from a file.
    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = TemplateSource::File(path.into());
        self
    }

    /// Use an in-memory template.
    pub fn with_template_source(mut self, source: impl Into<String>) -> Self {
        self.template = TemplateSource::Source(source.into());
        self
    }

    /// Replace all render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_tagline(tagline);
        self
    }

    /// Fail on duplicate anchor ids.
    pub fn strict_anchors(mut self) -> Self {
        self.render_options = self.render_options.with_strict_anchors(true);
        self
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Render a page.
    pub fn render(&self, items: &[ContentItem]) -> Result<PageResult> {
        let template = self.template.load()?;
        render::render_page(items, &template, &self.render_options)
    }

    /// Render a page and write it to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, items: &[ContentItem], path: P) -> Result<PageResult> {
        let result = self.render(items)?;
        fs::write(path.as_ref(), &result.html)?;
        log::info!(
            "Wrote {} ({} bytes)",
            path.as_ref().display(),
            result.html_len()
        );
        Ok(result)
    }
}
