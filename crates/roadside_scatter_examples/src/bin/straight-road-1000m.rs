use rand::rngs::StdRng;
use rand::SeedableRng;
use roadside_scatter::prelude::*;
use roadside_scatter_examples::{
    init_tracing, log_layout_summary, render_layout_to_png, RenderConfig,
};

const ROAD_LENGTH: f64 = 1000.0;
const LANE_WIDTH: f64 = 4.5;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(1000);

    // Tree band from 17 m to 200 m off the centerline, heights 6..16 m.
    // Rounded coordinates, mirrored onto the other side of the road.
    let trees = SpacedSampling::new(
        SamplingDomain::new(10.0, ROAD_LENGTH, 17.0, 200.0, 6.0, 16.0),
        10.0,
        250,
    )
    .with_rounding(true);

    let mut layout = RoadsideLayout::new();
    layout.extend(scatter_trees(&trees, &mut rng, Side::Mirrored)?);
    layout.extend(lamp_posts_both_sides(10.0, ROAD_LENGTH, 50.0, 6.5)?);

    log_layout_summary("straight_road_1000m", &layout);

    let config = RenderConfig::fit((2000, 800), &layout, 10.0).with_road(LANE_WIDTH);
    render_layout_to_png(&layout, &config, "straight-road-1000m.png")?;
    Ok(())
}
