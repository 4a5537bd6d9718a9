//! Criterion micro-benchmarks for trail ring pushes and reversals.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use netviz_core::Vec3;
use netviz_scene::TrailBuffer;

fn bench_push_full_ring(c: &mut Criterion) {
    let mut trail = TrailBuffer::new(100);
    for i in 0..100 {
        trail.push(Vec3::splat(i as f32));
    }

    let mut i = 0.0f32;
    c.bench_function("trail_push_full_100", |b| {
        b.iter(|| {
            i += 1.0;
            black_box(trail.push(Vec3::splat(i)));
        });
    });
}

fn bench_push_unpush(c: &mut Criterion) {
    let mut trail = TrailBuffer::new(100);
    for i in 0..100 {
        trail.push(Vec3::splat(i as f32));
    }

    c.bench_function("trail_push_unpush_100", |b| {
        b.iter(|| {
            let evicted = trail.push(black_box(Vec3::ONE));
            trail.unpush(evicted);
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let mut trail = TrailBuffer::new(1_000);
    for i in 0..1_500 {
        trail.push(Vec3::splat(i as f32));
    }

    c.bench_function("trail_iter_1000", |b| {
        b.iter(|| {
            let sum: Vec3 = trail.iter().sum();
            black_box(sum);
        });
    });
}

criterion_group!(benches, bench_push_full_ring, bench_push_unpush, bench_iterate);
criterion_main!(benches);
