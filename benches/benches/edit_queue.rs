//! Benchmarks for edit-queue construction in list-diff
//!
//! Performance-critical paths:
//! - `build_edit_queue`: middle-snake search plus tree flattening
//! - recursive vs work-stack tree builders on the same inputs
//! - `execute_edit_queue`: replaying the queue into a command list

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use list_diff::diff::{EditCommand, build_edit_queue, execute_edit_queue};
use list_diff::{DiffSettings, TreeStrategy};

/// Deterministic list of `len` items with roughly `edit_percent`% rewritten.
fn edited_pair(len: usize, edit_percent: u64) -> (Vec<u64>, Vec<u64>) {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    let old: Vec<u64> = (0..len as u64).collect();
    let mut new = Vec::with_capacity(len);
    for &item in &old {
        match next() % 100 {
            roll if roll < edit_percent / 2 => {}
            roll if roll < edit_percent => {
                new.push(item);
                new.push(next() + len as u64);
            }
            _ => new.push(item),
        }
    }
    (old, new)
}

fn settings_for(strategy: TreeStrategy) -> DiffSettings {
    DiffSettings {
        strategy,
        ..DiffSettings::default()
    }
}

fn bench_build_edit_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_queue/build");

    // Grow input length at a fixed 5% edit rate
    let sizes = [100usize, 1_000, 10_000, 50_000];

    for size in sizes {
        let (old, new) = edited_pair(size, 5);
        group.throughput(Throughput::Elements((old.len() + new.len()) as u64));
        for strategy in [TreeStrategy::Recursive, TreeStrategy::Iterative] {
            let settings = settings_for(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}").to_lowercase(), size),
                &(&old, &new),
                |b, (old, new)| {
                    b.iter(|| {
                        build_edit_queue(
                            black_box(old.as_slice()),
                            black_box(new.as_slice()),
                            &settings,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_edit_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_queue/density");

    // O(ND): cost grows with the number of differences
    for percent in [1u64, 10, 30, 60] {
        let (old, new) = edited_pair(5_000, percent);
        let settings = DiffSettings::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{percent}_percent")),
            &(&old, &new),
            |b, (old, new)| {
                b.iter(|| {
                    build_edit_queue(
                        black_box(old.as_slice()),
                        black_box(new.as_slice()),
                        &settings,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_execute(c: &mut Criterion) {
    let (old, new) = edited_pair(10_000, 10);
    let queue = build_edit_queue(&old, &new, &DiffSettings::default()).unwrap();

    c.bench_function("edit_queue/execute", |b| {
        b.iter(|| {
            let mut commands: Vec<EditCommand> = Vec::with_capacity(new.len());
            execute_edit_queue(black_box(&queue), &mut commands);
            commands
        });
    });
}

criterion_group!(
    benches,
    bench_build_edit_queue,
    bench_edit_density,
    bench_execute
);
criterion_main!(benches);
