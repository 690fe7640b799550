//! Benchmarks for the press latch claim path.
//!
//! The claim runs in interrupt context on hardware, so its cost matters:
//! a slow claim widens the window in which the countdown's final stage can
//! be delayed by handler execution.

use criterion::{criterion_group, criterion_main, Criterion};
use quickdraw_core::{PlayerId, PressLatch};
use std::hint::black_box;

fn bench_uncontended_claim(c: &mut Criterion) {
    let latch = PressLatch::new();
    c.bench_function("claim_uncontended", |b| {
        b.iter(|| {
            latch.rearm();
            black_box(latch.claim(PlayerId::One, black_box(3100)))
        });
    });
}

fn bench_lost_claim(c: &mut Criterion) {
    let latch = PressLatch::new();
    assert!(latch.claim(PlayerId::One, 3000));
    c.bench_function("claim_already_taken", |b| {
        b.iter(|| black_box(latch.claim(PlayerId::Two, black_box(3001))));
    });
}

fn bench_read_latched(c: &mut Criterion) {
    let latch = PressLatch::new();
    assert!(latch.claim(PlayerId::Two, 3420));
    c.bench_function("latch_get", |b| {
        b.iter(|| black_box(latch.get()));
    });
}

criterion_group!(
    benches,
    bench_uncontended_claim,
    bench_lost_claim,
    bench_read_latched
);
criterion_main!(benches);
