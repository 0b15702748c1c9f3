#![allow(clippy::unwrap_used)]
use actionbar_core::{SourceCatalog, render::render, summarize};
use actionbar_models::FileEntry;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn create_selection(count: usize) -> Vec<FileEntry> {
    (0..count)
        .map(|i| {
            if i % 4 == 0 {
                // Every eighth folder is still being counted
                let item_count = if i % 8 == 0 { None } else { Some(u32::try_from(i).unwrap_or(u32::MAX)) };
                FileEntry::directory(format!("folder_{i:05}"), item_count)
            } else {
                FileEntry::file(format!("file_{i:05}.jpg"), Some(1024 * i as u64))
            }
        })
        .collect()
}

fn benchmark_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for count in &[10, 1000, 100_000] {
        let selection = create_selection(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &selection, |b, selection| {
            b.iter(|| summarize(black_box(selection)));
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in &[10, 1000, 100_000] {
        let summary = summarize(&create_selection(*count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &summary, |b, summary| {
            b.iter(|| render(black_box(summary), &SourceCatalog));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_summarize, benchmark_render);
criterion_main!(benches);
