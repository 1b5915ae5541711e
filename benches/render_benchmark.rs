//! Benchmarks for slide decoding and deck rendering.
//!
//! Run with: cargo bench

use base64::Engine as _;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slideloader::decode::{decode_payload, DecodeOptions};
use slideloader::{Deck, EngineConfig, HtmlOptions, PresentationSection, SeparatorRule};

/// Creates a markdown slide file with the given number of slides.
fn create_slides(slide_count: usize) -> String {
    let mut markdown = String::new();
    for i in 0..slide_count {
        if i > 0 {
            markdown.push_str("\n---\n\n");
        }
        markdown.push_str(&format!("## Slide {}\n\n", i + 1));
        markdown.push_str("- Point one with `inline code`\n- Point two <b>escaped</b>\n\n");
        markdown.push_str("```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n\n");
        markdown.push_str("Note: speaker notes for this slide\n");
    }
    markdown
}

/// Content API style payload: base64 wrapped at 60 columns.
fn encode_wrapped(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    encoded
        .as_bytes()
        .chunks(60)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark payload decoding at various sizes.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_payload");
    let options = DecodeOptions::default();

    for slide_count in [1, 10, 100].iter() {
        let payload = encode_wrapped(&create_slides(*slide_count));

        group.bench_function(format!("{}_slides", slide_count), |b| {
            b.iter(|| decode_payload("bench.md", black_box(&payload), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark HTML rendering of a multi-file deck.
fn bench_render(c: &mut Criterion) {
    let mut deck = Deck::new();
    for i in 0..10 {
        deck.push_section(
            PresentationSection::new(create_slides(10), SeparatorRule::default())
                .with_filename(format!("part-{}.md", i)),
        );
    }
    deck.engine = Some(EngineConfig::default());
    let options = HtmlOptions::default();

    c.bench_function("render_html_10_files", |b| {
        b.iter(|| slideloader::render::to_html(black_box(&deck), &options));
    });

    c.bench_function("render_json_10_files", |b| {
        b.iter(|| {
            slideloader::render::to_json(black_box(&deck), slideloader::JsonFormat::Compact).unwrap()
        });
    });
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
