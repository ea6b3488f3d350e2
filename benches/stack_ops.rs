// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast stack operations.
//!
//! Drag updates arrive at pointer frequency, so the per-update cost of the
//! offset reassignment and the layout math matters more than push/dismiss.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::toasts::{gesture, layout, Message, Stack, Toast, ToastId};
use std::hint::black_box;

fn filled_stack(count: usize) -> (Stack<usize>, Vec<ToastId>) {
    let mut stack = Stack::new();
    let mut ids = Vec::new();
    for n in 0..count {
        let toast = Toast::new(|_| n);
        ids.push(toast.id());
        stack.push(toast);
    }
    (stack, ids)
}

fn stack_ops_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_ops");

    group.bench_function("push_and_dismiss_32", |b| {
        b.iter(|| {
            let (mut stack, ids) = filled_stack(32);
            for id in ids {
                black_box(stack.dismiss(id));
            }
        });
    });

    group.bench_function("drag_update_on_depth_16", |b| {
        let (mut stack, ids) = filled_stack(16);
        let id = ids[8];
        b.iter(|| {
            black_box(stack.update(Message::DragChanged {
                id,
                translation: black_box(-42.0),
            }));
        });
    });

    group.finish();
}

fn pure_math_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pure_math");

    group.bench_function("layout_transforms_depth_0_to_16", |b| {
        b.iter(|| {
            for depth in 0..16 {
                black_box(layout::vertical_offset(black_box(depth)));
                black_box(layout::scale(black_box(depth)));
            }
        });
    });

    group.bench_function("release_outcome", |b| {
        b.iter(|| {
            black_box(gesture::release_outcome(
                black_box(-150.0),
                black_box(-120.0),
            ));
        });
    });

    group.finish();
}

criterion_group!(benches, stack_ops_benchmark, pure_math_benchmark);
criterion_main!(benches);
