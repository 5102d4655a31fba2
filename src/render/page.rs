//! Whole-page rendering.

use crate::error::{Error, Result};
use crate::model::ContentItem;
use crate::template::{PageContext, PageTemplate};

use super::{duplicate_anchors, navigation, render_fragment, PageResult, RenderOptions, RenderStats};

/// Render a complete page from an item sequence and a template.
pub fn render_page(
    items: &[ContentItem],
    template: &PageTemplate,
    options: &RenderOptions,
) -> Result<PageResult> {
    PageRenderer::new(template, options.clone()).render(items)
}

/// Combines content items with a page template.
pub struct PageRenderer<'t> {
    template: &'t PageTemplate,
    options: RenderOptions,
}

impl<'t> PageRenderer<'t> {
    /// Create a new page renderer.
    pub fn new(template: &'t PageTemplate, options: RenderOptions) -> Self {
        Self { template, options }
    }

    /// Render the page.
    pub fn render(&self, items: &[ContentItem]) -> Result<PageResult> {
        self.check_anchors(items)?;

        let navigation = navigation(items);
        let content = render_fragment(items)?;
        log::debug!(
            "Rendered {} items into {} bytes with {} navigation entries",
            items.len(),
            content.len(),
            navigation.len()
        );

        let context = PageContext::new(&self.options, &navigation, &content);
        let html = self.template.render(&context)?;

        let stats = if self.options.collect_stats {
            RenderStats::collect(items)
        } else {
            RenderStats::default()
        };

        Ok(PageResult::new(html, navigation, stats))
    }

    fn check_anchors(&self, items: &[ContentItem]) -> Result<()> {
        let duplicates = duplicate_anchors(items);
        if let Some(first) = duplicates.first() {
            if self.options.strict_anchors {
                return Err(Error::DuplicateAnchor(first.clone()));
            }
            for anchor in &duplicates {
                log::warn!("Anchor id \"{}\" is defined more than once", anchor);
            }
        }
        Ok(())
    }
}
