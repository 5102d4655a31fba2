//! Page templates.
//!
//! A page template has two extension points: a navigation loop over
//! `navigation` and a `content` slot for the rendered body. Both values are
//! trusted markup, so autoescaping is turned off.
//!
//! Variables available to a template:
//!
//! | Name | Value |
//! |---|---|
//! | `navigation` | list of `{ label, anchor, href, level }` |
//! | `content` | rendered content body |
//! | `title`, `tagline`, `stylesheet`, `lang` | strings from [`RenderOptions`] |
//! | `icon`, `logo` | optional strings |

use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::render::{NavEntry, RenderOptions};

/// Source of the template compiled into the crate.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/page.html");

const BUILTIN_NAME: &str = "page.html";

/// A compiled page template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    tera: Tera,
    name: String,
}

impl PageTemplate {
    /// The template shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_source(BUILTIN_NAME, BUILTIN_TEMPLATE)
    }

    /// Load and compile a template file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::TemplateNotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| BUILTIN_NAME.to_string());
        log::debug!("Loaded template {} ({} bytes)", path.display(), source.len());

        Self::from_source(name, &source)
    }

    /// Compile a template from an in-memory string.
    pub fn from_source(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(&name, source)?;
        Ok(Self { tera, name })
    }

    /// Template name (the file name for file templates).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Substitute a page context into the template.
    pub fn render(&self, context: &PageContext<'_>) -> Result<String> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(&self.name, &context)?)
    }
}

/// Values handed to a template.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    /// Page title
    pub title: &'a str,
    /// Line under the title
    pub tagline: &'a str,
    /// Stylesheet href
    pub stylesheet: &'a str,
    /// Favicon href
    pub icon: Option<&'a str>,
    /// Logo image
    pub logo: Option<&'a str>,
    /// Document language
    pub lang: &'a str,
    /// Navigation entries
    pub navigation: &'a [NavEntry],
    /// Rendered content body
    pub content: &'a str,
}

impl<'a> PageContext<'a> {
    /// Build a context from render options, navigation and content.
    pub fn new(options: &'a RenderOptions, navigation: &'a [NavEntry], content: &'a str) -> Self {
        Self {
            title: &options.title,
            tagline: &options.tagline,
            stylesheet: &options.stylesheet,
            icon: options.icon.as_deref(),
            logo: options.logo.as_deref(),
            lang: &options.lang,
            navigation,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<NavEntry> {
        vec![NavEntry {
            label: "Overview".to_string(),
            anchor: "Overview".to_string(),
            href: "#Overview".to_string(),
            level: 0,
        }]
    }

    #[test]
    fn test_builtin_template_compiles() {
        let template = PageTemplate::builtin().unwrap();
        assert_eq!(template.name(), "page.html");
    }

    #[test]
    fn test_builtin_template_fills_slots() {
        let options = RenderOptions::new().with_title("Aize");
        let navigation = nav();
        let context = PageContext::new(&options, &navigation, "<p class=\"text\">hi</p>");

        let html = PageTemplate::builtin().unwrap().render(&context).unwrap();
        assert!(html.contains("<title>Aize</title>"));
        assert!(html.contains("href=\"#Overview\""));
        assert!(html.contains("<p>Overview</p>"));
        // Content is inserted without escaping
        assert!(html.contains("<p class=\"text\">hi</p>"));
        assert!(!html.contains("rel=\"icon\""));
    }

    #[test]
    fn test_custom_source() {
        let template = PageTemplate::from_source(
            "mini.html",
            "{% for e in navigation %}[{{ e.label }}]{% endfor %}|{{ content }}",
        )
        .unwrap();
        let options = RenderOptions::new();
        let navigation = nav();
        let context = PageContext::new(&options, &navigation, "<b>x</b>");
        assert_eq!(template.render(&context).unwrap(), "[Overview]|<b>x</b>");
    }

    #[test]
    fn test_syntax_error() {
        let err = PageTemplate::from_source("bad.html", "{% for x in %}").unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_undefined_variable_fails() {
        let template = PageTemplate::from_source("bad.html", "{{ missing_value }}").unwrap();
        let options = RenderOptions::new();
        let context = PageContext::new(&options, &[], "");
        let err = template.render(&context).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PageTemplate::from_file("/nonexistent/index_template.html").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
    }
}
