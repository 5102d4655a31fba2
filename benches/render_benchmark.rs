//! Benchmarks for page rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagegen::{render_fragment, render_page, ContentItem, PageTemplate, RenderOptions};

/// Builds a page with `sections` header/text/list groups.
fn create_items(sections: usize) -> Vec<ContentItem> {
    let mut items = Vec::with_capacity(sections * 3);
    for i in 0..sections {
        items.push(ContentItem::header(format!("Section {}", i)));
        items.push(ContentItem::text(format!(
            "Paragraph {} of the benchmark page, long enough to look like prose.",
            i
        )));
        items.push(ContentItem::unordered_list(
            "",
            vec![
                ContentItem::text("first"),
                ContentItem::stacked(vec![
                    ContentItem::text("second"),
                    ContentItem::code_block("let x = 1;"),
                ]),
            ],
        ));
    }
    items
}

fn bench_render_fragment(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_fragment");
    for sections in [10, 100, 1000] {
        let items = create_items(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &items, |b, items| {
            b.iter(|| render_fragment(black_box(items)))
        });
    }
    group.finish();
}

fn bench_render_page(c: &mut Criterion) {
    let template = PageTemplate::builtin().expect("built-in template compiles");
    let options = RenderOptions::default();
    let items = create_items(100);

    c.bench_function("render_page_100_sections", |b| {
        b.iter(|| render_page(black_box(&items), &template, &options))
    });
}

criterion_group!(benches, bench_render_fragment, bench_render_page);
criterion_main!(benches);
