#![allow(dead_code)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use maxstack::core::catalog::{self, HybridCatalog};
use maxstack::core::{merge, render};
use std::time::Duration;

/// Benchmark enrichment and rendering across the full built-in catalog.
fn bench_render_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_catalog");
    group.measurement_time(Duration::from_secs(10));

    let catalog = HybridCatalog::builtin();
    let definitions = catalog::default_definitions();

    group.bench_function("enrich_and_render_all", |b| {
        b.iter(|| {
            for def in &definitions {
                let enriched = merge::enrich(def, catalog);
                black_box(render::render(&enriched));
            }
        });
    });

    group.bench_function("enrich_and_render_one", |b| {
        let hertz = &definitions[1];
        b.iter(|| {
            let enriched = merge::enrich(hertz, catalog);
            black_box(render::render(&enriched));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_catalog);
criterion_main!(benches);
