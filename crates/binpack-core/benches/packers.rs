use std::hint::black_box;

use binpack_core::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_sizes(count: usize, min_size: u32, max_size: u32) -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            (w, h)
        })
        .collect()
}

fn bench_packers(c: &mut Criterion) {
    let mut group = c.benchmark_group("packers");

    for count in [50, 100, 200] {
        let sizes = generate_sizes(count, 16, 64);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("MultiBin", count), &sizes, |b, sizes| {
            let rects: Vec<Rect> = sizes.iter().map(|&(w, h)| Rect::with_size(w, h)).collect();
            b.iter(|| {
                let mut packer = MultiBinPacker::new(512, 512);
                black_box(packer.insert(&rects).ok())
            });
        });

        group.bench_with_input(BenchmarkId::new("CanvasArray", count), &sizes, |b, sizes| {
            b.iter(|| {
                let mut staged: ContentAccumulator<usize> = sizes
                    .iter()
                    .enumerate()
                    .map(|(i, &(w, h))| Content::new(i, Size::new(w, h)))
                    .collect();
                staged.sort();
                let mut array = CanvasArray::new(512, 512);
                let mut remainder = Vec::new();
                array.place(staged, &mut remainder);
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_single_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_insert");

    group.bench_function("BinPacker_insert_one", |b| {
        b.iter(|| {
            let mut packer = BinPacker::new(2048, 2048);
            black_box(packer.insert_one(Rect::with_size(64, 64)).ok())
        });
    });

    group.bench_function("Canvas_try_place", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(2048, 2048);
            black_box(canvas.try_place(Content::new((), Size::new(64, 64))).is_ok())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_packers, bench_single_insert);
criterion_main!(benches);
