use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::SeedableRng;
use roadside_scatter::prelude::*;
use roadside_scatter_examples::{
    init_tracing, log_layout_summary, render_layout_to_png, KindStyle, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);

    let house = RoadsideObject::new("UK house 1", ObjectKind::Residential, 0.0, 0.0)
        .with_z_offset(-0.1)
        .with_height(4.5)
        .with_footprint(4.5, 4.5);
    let houses = RowSpec::new(0.0, 200.0, 20.0, 15.0);

    // Main road: houses, lamp posts on the left, a supermarket on the right.
    let mut main_road = RoadsideLayout::new();
    main_road.extend(objects_along(&houses, &house)?);
    main_road.extend(objects_along(
        &RowSpec::new(0.0, 200.0, 40.0, 7.0),
        &RoadsideObject::lamp_post(0.0, 0.0, 0.0),
    )?);
    main_road.push(
        RoadsideObject::new("supermarket", ObjectKind::Commercial, 100.0, -50.0)
            .with_heading(-FRAC_PI_2)
            .with_height(4.0)
            .with_footprint(4.0, 4.0),
    );

    // Side road: trees on the right-hand side. The lateral range is given
    // near edge first, so it runs from -15 down to -100.
    let trees = SpacedSampling::new(
        SamplingDomain::new(10.0, 100.0, -15.0, -100.0, 6.0, 16.0),
        10.0,
        20,
    );
    let mut side_road = RoadsideLayout::new();
    side_road.extend(scatter_trees(&trees, &mut rng, Side::AsSampled)?);
    side_road.extend(objects_along(&houses, &house)?);

    let mut third_road = RoadsideLayout::new();
    third_road.extend(objects_along(&houses, &house)?);

    for (name, layout) in [
        ("uk_junction_road_1", &main_road),
        ("uk_junction_road_2", &side_road),
        ("uk_junction_road_3", &third_road),
    ] {
        log_layout_summary(name, layout);
    }

    let main_config = RenderConfig::fit((1000, 1000), &main_road, 10.0).with_road(6.0);
    render_layout_to_png(&main_road, &main_config, "uk-junction-road-1.png")?;

    let mut side_config = RenderConfig::fit((1000, 1000), &side_road, 10.0).with_road(6.0);
    side_config.set_kind_style(
        ObjectKind::Tree,
        KindStyle::Circle {
            color: [60, 179, 113],
            radius: 5,
        },
    );
    render_layout_to_png(&side_road, &side_config, "uk-junction-road-2.png")?;
    Ok(())
}
