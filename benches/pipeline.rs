//! Benchmarks for the preparation pipeline.
//!
//! Run with: cargo bench
//!
//! The automatic pass over a 2592x1944 (5 MP) buffer is the performance
//! contract: it must finish in under a second on a single thread.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use engrave_prep::models::{AutoPrepOptions, PixelBuffer};
use engrave_prep::orchestrator::PipelineOrchestrator;
use engrave_prep::pipeline::{apply_adjustments, equalize, grayscale, otsu_threshold};

/// Generate a synthetic photo-like RGBA gradient.
fn generate_test_photo(width: u32, height: u32) -> PixelBuffer {
    let pixel_count = (width as usize) * (height as usize);
    let mut data = Vec::with_capacity(pixel_count * 4);

    for i in 0..pixel_count {
        let x = (i % width as usize) as f32 / width as f32;
        let y = (i / width as usize) as f32 / height as f32;

        data.push((255.0 * x) as u8);
        data.push((255.0 * y) as u8);
        data.push((255.0 * (x + y) / 2.0) as u8);
        data.push(255);
    }

    PixelBuffer {
        width,
        height,
        data,
    }
}

/// Benchmark the full automatic pass, including the 5 MP contract size.
fn bench_auto_prep(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_prep");
    group.sample_size(10);

    for (width, height) in [(512u32, 512u32), (1024, 1024), (2592, 1944)] {
        let pixel_count = (width as u64) * (height as u64);
        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("full_pass", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let source = generate_test_photo(w, h);
                let options = AutoPrepOptions::default();
                b.iter(|| {
                    PipelineOrchestrator::compute_auto_prep(black_box(&source), black_box(&options))
                        .expect("valid buffer")
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the individual automatic stages.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    for size in [512u32, 1024, 2048] {
        let pixel_count = (size as u64) * (size as u64);
        group.throughput(Throughput::Elements(pixel_count));

        let source = generate_test_photo(size, size);
        let gray = grayscale(&source).expect("valid buffer");

        group.bench_with_input(
            BenchmarkId::new("grayscale", format!("{}x{}", size, size)),
            &source,
            |b, source| {
                b.iter(|| grayscale(black_box(source)).expect("valid buffer"));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("equalize", format!("{}x{}", size, size)),
            &gray,
            |b, gray| {
                b.iter(|| equalize(black_box(gray), false).expect("valid buffer"));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("otsu", format!("{}x{}", size, size)),
            &gray,
            |b, gray| {
                b.iter(|| otsu_threshold(black_box(gray), false).expect("valid buffer"));
            },
        );
    }

    group.finish();
}

/// Benchmark the interactive adjustment path served from a cached baseline.
fn bench_interactive_adjustments(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjustments");

    for size in [512u32, 1024, 2048] {
        let pixel_count = (size as u64) * (size as u64);
        group.throughput(Throughput::Elements(pixel_count));

        let source = generate_test_photo(size, size);
        let baseline = PipelineOrchestrator::compute_auto_prep(&source, &AutoPrepOptions::default())
            .expect("valid buffer")
            .buffer;

        group.bench_with_input(
            BenchmarkId::new("brightness_contrast", format!("{}x{}", size, size)),
            &baseline,
            |b, baseline| {
                b.iter(|| {
                    apply_adjustments(black_box(baseline), black_box(15), black_box(-20))
                        .expect("valid buffer")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_auto_prep,
    bench_stages,
    bench_interactive_adjustments,
);

criterion_main!(benches);
