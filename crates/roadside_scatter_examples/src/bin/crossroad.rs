use rand::rngs::StdRng;
use rand::SeedableRng;
use roadside_scatter::prelude::*;
use roadside_scatter_examples::{
    init_tracing, log_layout_summary, render_layout_to_png, RenderConfig,
};

const INCOMING_ROADS: usize = 4;
const ROAD_LENGTH: f64 = 600.0;
const LANE_WIDTH: f64 = 4.5;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(42);

    let trees = SpacedSampling::new(
        SamplingDomain::new(10.0, ROAD_LENGTH, 15.0, ROAD_LENGTH, 6.0, 16.0),
        10.0,
        250,
    );

    // Each incoming road gets its own tree band and lamp posts; the junction
    // itself is not modelled here.
    for road in 0..INCOMING_ROADS {
        let mut layout = RoadsideLayout::new();
        layout.extend(scatter_trees(&trees, &mut rng, Side::AsSampled)?);
        layout.extend(lamp_posts_both_sides(10.0, ROAD_LENGTH, 50.0, 6.5)?);

        let name = format!("crossroad_road_{road}");
        log_layout_summary(&name, &layout);

        let config = RenderConfig::fit((1000, 1000), &layout, 10.0).with_road(LANE_WIDTH);
        render_layout_to_png(&layout, &config, format!("crossroad-road-{road}.png"))?;
    }

    Ok(())
}
