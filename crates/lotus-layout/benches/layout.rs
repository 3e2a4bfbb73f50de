//! Benchmark tests for the layout engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lotus_core::{Align, AlignSpec, ChildInput, ContainerInput, FlowSpec};
use lotus_layout::compute_layout;

fn row_container(n: usize, flow: FlowSpec) -> ContainerInput {
    ContainerInput::new(1000, 600)
        .with_flow(flow)
        .with_align(AlignSpec::new(Align::SpaceBetween, Align::Center, Align::Start))
        .with_children((0..n).map(|i| {
            ChildInput::fixed(20 + (i as i32 % 7) * 5, 10 + (i as i32 % 3) * 4)
                .with_grow(u8::from(i % 4 == 0))
        }))
}

fn bench_single_concentric(c: &mut Criterion) {
    let container = row_container(100, FlowSpec::row());
    c.bench_function("layout_row_100_children", |b| {
        b.iter(|| compute_layout(black_box(&container)));
    });
}

fn bench_wrapping(c: &mut Criterion) {
    let container = row_container(1000, FlowSpec::row_wrap());
    c.bench_function("layout_row_wrap_1000_children", |b| {
        b.iter(|| compute_layout(black_box(&container)));
    });
}

fn bench_reverse_wrap(c: &mut Criterion) {
    let container = row_container(1000, FlowSpec::row_wrap_reverse());
    c.bench_function("layout_row_wrap_reverse_1000_children", |b| {
        b.iter(|| compute_layout(black_box(&container)));
    });
}

criterion_group!(
    benches,
    bench_single_concentric,
    bench_wrapping,
    bench_reverse_wrap
);
criterion_main!(benches);
