//! Content used when no `--content` file is given.

use pagegen::{ContentItem, Page};

/// The demonstration page.
pub fn default_page() -> Page {
    Page::from_items(vec![
        ContentItem::header("Overview"),
        ContentItem::text(
            "Aize is a programming language designed by a programmer, for programmers. \
             Its design philosophy can be summed up in 2 words:",
        ),
        ContentItem::unordered_list(
            "",
            vec![
                ContentItem::text("Fast - Aize must be a fast language."),
                ContentItem::text(
                    "Simple - Aize must be a simple language to learn for experienced \
                     programmers, and relatively easy for beginners.",
                ),
            ],
        ),
        ContentItem::header("Getting Started"),
        ContentItem::ordered_list(
            "",
            vec![
                ContentItem::text("Go to the GitHub repository."),
                ContentItem::text("Build the compiler."),
                ContentItem::stacked(vec![
                    ContentItem::text("Compile your first program:"),
                    ContentItem::code_block("aize hello.aize"),
                ]),
            ],
        ),
    ])
}
