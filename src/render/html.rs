//! HTML fragment rendering for content items.
//!
//! Element text is inserted verbatim: page content is authored by the site
//! owner and may carry its own inline markup. Attribute values are escaped
//! so that a stray quote cannot terminate the attribute.

use crate::error::Result;
use crate::model::{ContentItem, Header, Image};

impl ContentItem {
    /// Render this item to an HTML fragment.
    ///
    /// Fails only when a header in the subtree has a level other than 0 or 1.
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        write_item(&mut output, self)?;
        Ok(output)
    }
}

/// Render a sequence of items and concatenate the fragments.
pub fn render_fragment(items: &[ContentItem]) -> Result<String> {
    let mut output = String::new();
    for item in items {
        write_item(&mut output, item)?;
    }
    Ok(output)
}

pub(crate) fn write_item(output: &mut String, item: &ContentItem) -> Result<()> {
    match item {
        ContentItem::Header(header) => write_header(output, header)?,
        ContentItem::Text { text } => {
            output.push_str("<p class=\"text\">");
            output.push_str(text);
            output.push_str("</p>");
        }
        ContentItem::Image(image) => write_image(output, image),
        ContentItem::UnorderedList { text, items } => write_list(output, "ul", text, items)?,
        ContentItem::OrderedList { text, items } => write_list(output, "ol", text, items)?,
        ContentItem::Stacked { items } => {
            for child in items {
                write_item(output, child)?;
            }
        }
        ContentItem::CodeBlock { code } => {
            output.push_str("<pre class=\"code\"><code>");
            output.push_str(code);
            output.push_str("</code></pre>");
        }
    }
    Ok(())
}

fn write_header(output: &mut String, header: &Header) -> Result<()> {
    header.validate()?;
    output.push_str(&format!(
        "<a id=\"{}\"></a><p class=\"header header-{}\">{}</p>",
        escape_attr(header.anchor()),
        header.level,
        header.text
    ));
    Ok(())
}

fn write_image(output: &mut String, image: &Image) {
    output.push_str(&format!(
        "<div class=\"img-box\"><img src=\"{}\" alt=\"{}\"><p>{}</p></div>",
        escape_attr(&image.src),
        escape_attr(&image.alt),
        image.caption
    ));
}

fn write_list(output: &mut String, tag: &str, text: &str, items: &[ContentItem]) -> Result<()> {
    output.push_str(text);
    output.push_str(&format!("<{} class=\"content-list\">", tag));
    for child in items {
        output.push_str("<li>");
        write_item(output, child)?;
        output.push_str("</li>");
    }
    output.push_str(&format!("</{}>", tag));
    Ok(())
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("plain"), "plain");
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
        assert_eq!(escape_attr("x&y<z>"), "x&amp;y&lt;z&gt;");
    }

    #[test]
    fn test_render_header() {
        let html = ContentItem::header("Overview").render().unwrap();
        assert_eq!(
            html,
            "<a id=\"Overview\"></a><p class=\"header header-0\">Overview</p>"
        );
    }

    #[test]
    fn test_render_subheader_with_anchor() {
        let item = ContentItem::Header(Header::with_anchor("Install", "install").with_level(1));
        let html = item.render().unwrap();
        assert!(html.starts_with("<a id=\"install\"></a>"));
        assert!(html.contains("header-1"));
    }

    #[test]
    fn test_render_invalid_level() {
        let item = ContentItem::Header(Header::new("Bad").with_level(2));
        let err = item.render().unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderLevel { level: 2, .. }));
    }

    #[test]
    fn test_render_text_is_verbatim() {
        let html = ContentItem::text("Fast <b>and</b> simple").render().unwrap();
        assert_eq!(html, "<p class=\"text\">Fast <b>and</b> simple</p>");
    }

    #[test]
    fn test_render_image() {
        let html = ContentItem::image("logo.png", "Logo", "The logo")
            .render()
            .unwrap();
        assert_eq!(
            html,
            "<div class=\"img-box\"><img src=\"logo.png\" alt=\"Logo\"><p>The logo</p></div>"
        );
    }

    #[test]
    fn test_render_unordered_list() {
        let list =
            ContentItem::unordered_list("Items:", vec![ContentItem::text("a"), ContentItem::text("b")]);
        assert_eq!(
            list.render().unwrap(),
            "Items:<ul class=\"content-list\">\
             <li><p class=\"text\">a</p></li>\
             <li><p class=\"text\">b</p></li></ul>"
        );
    }

    #[test]
    fn test_render_ordered_list() {
        let list = ContentItem::ordered_list("", vec![ContentItem::text("first")]);
        assert_eq!(
            list.render().unwrap(),
            "<ol class=\"content-list\"><li><p class=\"text\">first</p></li></ol>"
        );
    }

    #[test]
    fn test_render_code_block_is_verbatim() {
        let html = ContentItem::code_block("fn main() {}\n").render().unwrap();
        assert_eq!(html, "<pre class=\"code\"><code>fn main() {}\n</code></pre>");
    }

    #[test]
    fn test_nested_invalid_level_fails() {
        let list = ContentItem::unordered_list(
            "",
            vec![ContentItem::stacked(vec![ContentItem::Header(
                Header::new("deep").with_level(7),
            )])],
        );
        assert!(list.render().is_err());
    }
}
