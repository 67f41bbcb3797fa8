//! Benchmarks for rendering blog posts, with pulldown-cmark as a baseline
//!
//! Run with: cargo bench -p quillmark-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulldown_cmark::{Options, Parser as MdParser};
use quillmark_core::surface::{ArticleRenderer, PreviewRenderer, Renderer};
use quillmark_core::{FenceMode, Parser};

/// A typical product blog post.
const POST: &str = r#"# Autumn lookbook

Our **new season** range has landed, with *more colours* than ever.
Read the [sizing guide](/pages/sizing) before you order.

## What's new

- Heavyweight linen shirts
- Wool-blend trousers in `three` fits
- ***Limited*** edition scarves

## How to order

1. Pick your size
2. Add to cart
3. Use code `AUTUMN10` at checkout

> The best fabric we've worked with in years.

![Linen shirt](https://cdn.example.com/img/linen-shirt.jpg)
![video](https://cdn.example.com/media/lookbook.mp4)

```
Free shipping applies to orders over $50.
```

#### Terms apply
"#;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Bytes(POST.len() as u64));

    group.bench_function("parse_legacy", |b| {
        let parser = Parser::new();
        b.iter(|| black_box(parser.parse(black_box(POST)).len()))
    });

    group.bench_function("parse_multiline", |b| {
        let parser = Parser::new().with_fence_mode(FenceMode::Multiline);
        b.iter(|| black_box(parser.parse(black_box(POST)).len()))
    });

    group.bench_function("parse_with_diagnostics", |b| {
        let parser = Parser::new();
        b.iter(|| black_box(parser.parse_with_diagnostics(black_box(POST)).diagnostics.len()))
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(POST), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_surfaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("surfaces");
    let doc = Parser::new().parse(POST);

    group.bench_function("preview", |b| {
        let renderer = PreviewRenderer::default();
        b.iter(|| black_box(renderer.render(black_box(&doc)).len()))
    });

    group.bench_function("article", |b| {
        let renderer = ArticleRenderer::default();
        b.iter(|| black_box(renderer.render(black_box(&doc)).len()))
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 10, 50].iter() {
        let content = POST.repeat(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("quillmark", size), &content, |b, content| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse(black_box(content)).len()))
        });

        group.bench_with_input(BenchmarkId::new("markdown", size), &content, |b, content| {
            b.iter(|| {
                let parser = MdParser::new_ext(black_box(content), Options::all());
                let events: Vec<_> = parser.collect();
                black_box(events.len())
            })
        });
    }

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let text = "Read the [guide](https://example.com), then **save** *now* with `CODE10` and ***more***.";

    c.bench_function("inline_format", |b| {
        b.iter(|| black_box(quillmark_core::inline::format_inline(black_box(text)).len()))
    });
}

criterion_group!(benches, bench_render, bench_surfaces, bench_scaling, bench_inline);
criterion_main!(benches);
