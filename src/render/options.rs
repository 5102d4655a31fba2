//! Rendering options and configuration.

/// Options for rendering a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page title, shown in `<title>` and the title bar
    pub title: String,

    /// Short line shown under the title
    pub tagline: String,

    /// Stylesheet href
    pub stylesheet: String,

    /// Favicon href
    pub icon: Option<String>,

    /// Logo image shown above the navigation
    pub logo: Option<String>,

    /// Document language (`<html lang>`)
    pub lang: String,

    /// Fail on duplicate anchor ids instead of warning
    pub strict_anchors: bool,

    /// Collect render statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the stylesheet href.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    /// Set the favicon href.
    pub fn with_icon(mut self, href: impl Into<String>) -> Self {
        self.icon = Some(href.into());
        self
    }

    /// Set the logo image.
    pub fn with_logo(mut self, src: impl Into<String>) -> Self {
        self.logo = Some(src.into());
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Enable or disable strict anchor checking.
    pub fn with_strict_anchors(mut self, strict: bool) -> Self {
        self.strict_anchors = strict;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            tagline: String::new(),
            stylesheet: "style.css".to_string(),
            icon: None,
            logo: None,
            lang: "en".to_string(),
            strict_anchors: false,
            collect_stats: true,
        }
    }
}
