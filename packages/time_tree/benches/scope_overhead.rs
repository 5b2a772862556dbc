//! Benchmarks to measure the compute overhead of `time_tree` logic itself.
//!
//! These benchmarks measure the overhead of the timing infrastructure by
//! creating and dropping empty scopes - scopes that do not surround any
//! actual work but still incur the bookkeeping overhead.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use time_tree::Scope;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_tree_overhead");

    // Baseline measurement - no timing at all
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            // Completely empty - just the black_box call
            black_box(());
        });
    });

    group.bench_function("root_create_drop", |b| {
        b.iter(|| {
            let root = Scope::root("bench root").unwrap();
            black_box(&root);
        });
    });

    {
        let root = Scope::root("bench parent").unwrap();
        group.bench_function("child_create_drop", |b| {
            b.iter(|| {
                let child = root.begin_child("bench child").unwrap();
                black_box(&child);
            });
        });
    }

    {
        // Disabled scopes are the "instrumentation left in place" case, so
        // their overhead is the most interesting number here.
        let root = Scope::builder("disabled parent")
            .enabled(false)
            .begin()
            .unwrap();
        group.bench_function("disabled_child_create_drop", |b| {
            b.iter(|| {
                let child = root.begin_child("bench child").unwrap();
                black_box(&child);
            });
        });
    }

    {
        let root = Scope::root("render root").unwrap();
        for _ in 0..10 {
            let child = root.begin_child("step").unwrap();
            let _grandchild = child.begin_child("substep").unwrap();
        }
        root.stop_all();

        group.bench_function("render_report_10_children", |b| {
            b.iter(|| {
                black_box(root.to_report().to_string());
            });
        });
    }

    group.finish();
}
