//! Conversion and scanning benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oklch_core::{OklchColor, RgbColor, format_oklch, parse_oklch, scan, to_oklch, to_rgb};

/// Generate a spread of OKLCH colors across the sRGB range
fn generate_oklch_data(count: usize) -> Vec<OklchColor> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            OklchColor::new(t, (t * 3.0) % 0.37, (t * 7.0 * 360.0) % 360.0)
        })
        .collect()
}

fn generate_rgb_data(count: usize) -> Vec<RgbColor> {
    (0..count)
        .map(|i| RgbColor::new((i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8))
        .collect()
}

/// A stylesheet with `count` rules, one literal each, plus filler
fn generate_stylesheet(count: usize) -> String {
    let mut css = String::new();
    for (i, c) in generate_oklch_data(count).into_iter().enumerate() {
        css.push_str(&format!(
            ".rule-{i} {{\n  margin: 0 auto;\n  color: {};\n  border: 1px solid #ccc;\n}}\n",
            format_oklch(c)
        ));
    }
    css
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [64, 4096] {
        let oklch = generate_oklch_data(size);
        let rgb = generate_rgb_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("to_rgb", size), &oklch, |b, data| {
            b.iter(|| data.iter().map(|&c| to_rgb(black_box(c))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("to_oklch", size), &rgb, |b, data| {
            b.iter(|| data.iter().map(|&c| to_oklch(black_box(c))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    group.bench_function("parse_single", |b| {
        b.iter(|| parse_oklch(black_box("oklch(70% 0.123 200deg / 50%)")))
    });

    group.bench_function("format_single", |b| {
        let color = OklchColor::with_alpha(0.7, 0.123, 200.0, 0.5);
        b.iter(|| format_oklch(black_box(color)))
    });

    for rules in [16, 1024] {
        let css = generate_stylesheet(rules);
        group.throughput(Throughput::Bytes(css.len() as u64));
        group.bench_with_input(BenchmarkId::new("scan", rules), &css, |b, css| {
            b.iter(|| scan(black_box(css)).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_text);
criterion_main!(benches);
