// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event gesture path.
//!
//! Measures:
//! - Swipe classification of a single displacement
//! - A full scrub (press, 200 moves, release) through the overlay state

use criterion::{criterion_group, criterion_main, Criterion};
use seek_overlay::domain::gesture::Point;
use seek_overlay::gesture::{classify, SwipeThresholds};
use seek_overlay::infrastructure::SimulatedEngine;
use seek_overlay::overlay::{Message, State};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_classification");
    let thresholds = SwipeThresholds::default();
    let origin = Point::new(400.0, 300.0);
    let samples = [
        Point::new(410.0, 305.0),
        Point::new(445.0, 310.0),
        Point::new(402.0, 250.0),
        Point::new(440.0, 340.0),
    ];

    group.bench_function("classify", |b| {
        b.iter(|| {
            for current in &samples {
                black_box(classify(black_box(origin), black_box(*current), &thresholds));
            }
        });
    });

    group.finish();
}

fn bench_scrub_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_classification");

    group.bench_function("scrub_200_moves", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut engine = SimulatedEngine::new(3600.0).with_position(600.0);
            let mut state = State::default();

            state.handle(Message::PointerPressed(Point::new(200.0, 360.0)), t0, &mut engine);
            for step in 1..=200u16 {
                let x = 200.0 + f32::from(step) * 4.0;
                let at = t0 + Duration::from_millis(u64::from(step) * 8);
                state.handle(Message::PointerMoved(Point::new(x, 362.0)), at, &mut engine);
            }
            state.handle(Message::PointerReleased, t0 + Duration::from_secs(2), &mut engine);
            black_box(engine.take_journal());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_scrub_session);
criterion_main!(benches);
