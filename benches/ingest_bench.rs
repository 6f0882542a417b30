//! Benchmarks for batch validation and upload ingest
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use tokponla::upload::{partition, Origin};
use tokponla::{Candidate, MemoryPreviews, PreviewManager, Slot, SlotLimits, UploadSurface, MEGABYTE};

fn create_candidates(count: usize) -> Vec<Candidate<()>> {
    (0..count)
        .map(|i| {
            // every fifth file is oversized, every seventh is not an image
            let size = if i % 5 == 0 { 6 * MEGABYTE } else { (i as u64 % 4 + 1) * 256 * 1024 };
            let mime = if i % 7 == 0 { "application/pdf" } else { "image/jpeg" };
            Candidate::detached(format!("photo-{i}.jpg"), size, mime)
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let limits = SlotLimits::default();

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("gallery_{}", size), |b| {
            b.iter_batched(
                || create_candidates(size),
                |batch| partition(black_box(batch), Slot::Gallery, &limits),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("ingest_and_clear_{}", size), |b| {
            b.iter_batched(
                || {
                    (
                        UploadSurface::new(Slot::Gallery, SlotLimits::default()),
                        PreviewManager::new(MemoryPreviews::new()),
                        create_candidates(size),
                    )
                },
                |(mut surface, mut previews, batch)| {
                    let report = surface.ingest(&mut previews, batch, Origin::Drop);
                    surface.clear(&mut previews);
                    black_box(report)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partition, bench_ingest);
criterion_main!(benches);
