mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roadside_scatter::layout::{lamp_posts_both_sides, scatter_trees, RoadsideLayout, Side};
use roadside_scatter::sampling::SpacedSampling;

const TREE_COUNTS: [usize; 3] = [20, 100, 250];

fn layout_straight_road_benches(c: &mut Criterion) {
    let domain = common::straight_road_domain();
    let mut group = c.benchmark_group("layout/straight_road");

    for &count in &TREE_COUNTS {
        let config = SpacedSampling::new(domain, 10.0, count).with_rounding(true);
        group.throughput(common::points_throughput(count * 2));
        let mut rng = StdRng::seed_from_u64(0x5EED_u64 ^ (count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let mut layout = RoadsideLayout::new();
                if let Ok(trees) = scatter_trees(&config, &mut rng, Side::Mirrored) {
                    layout.extend(trees);
                }
                if let Ok(posts) = lamp_posts_both_sides(10.0, 1000.0, 50.0, 6.5) {
                    layout.extend(posts);
                }
                black_box(layout.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = layout_straight_road_benches
}
criterion_main!(benches);
