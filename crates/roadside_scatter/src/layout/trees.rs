//! Trees placed from spaced sample points.
use tracing::debug;

use crate::error::Result;
use crate::layout::RoadsideObject;
use crate::point::Point;
use crate::sampling::{SpacedSampling, UniformSource};

/// Which side(s) of the reference line sampled trees go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// At the sampled lateral offset only.
    #[default]
    AsSampled,
    /// At the sampled offset and mirrored across the reference line.
    Mirrored,
}

/// One tree per point, using the point's attribute as tree height.
///
/// With [`Side::Mirrored`] every tree is followed by its twin at `-t`.
pub fn trees_from_points(points: &[Point], side: Side) -> Vec<RoadsideObject> {
    let per_point = match side {
        Side::AsSampled => 1,
        Side::Mirrored => 2,
    };
    let mut trees = Vec::with_capacity(points.len() * per_point);
    for p in points {
        trees.push(RoadsideObject::tree(p.longitudinal, p.lateral, p.attribute));
        if side == Side::Mirrored {
            let m = p.mirrored();
            trees.push(RoadsideObject::tree(m.longitudinal, m.lateral, m.attribute));
        }
    }
    trees
}

/// Samples spaced points with `config` and turns them into trees.
pub fn scatter_trees<S: UniformSource + ?Sized>(
    config: &SpacedSampling,
    source: &mut S,
    side: Side,
) -> Result<Vec<RoadsideObject>> {
    let points = config.generate(source)?;
    let trees = trees_from_points(&points, side);
    debug!("Scattered {} trees from {} points.", trees.len(), points.len());
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::layout::ObjectKind;
    use crate::sampling::SamplingDomain;

    #[test]
    fn attribute_becomes_height() {
        let points = [Point::new(10.0, 17.0, 6.0), Point::new(40.0, 30.0, 12.0)];
        let trees = trees_from_points(&points, Side::AsSampled);
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[1].s, 40.0);
        assert_eq!(trees[1].t, 30.0);
        assert_eq!(trees[1].height, Some(12.0));
        assert!(trees.iter().all(|t| t.kind == ObjectKind::Tree));
    }

    #[test]
    fn mirrored_doubles_with_negated_offset() {
        let points = [Point::new(10.0, 17.0, 6.0), Point::new(40.0, 30.0, 12.0)];
        let trees = trees_from_points(&points, Side::Mirrored);
        assert_eq!(trees.len(), 4);
        assert_eq!(trees[0].t, 17.0);
        assert_eq!(trees[1].t, -17.0);
        assert_eq!(trees[1].s, trees[0].s);
        assert_eq!(trees[1].height, trees[0].height);
        assert_eq!(trees[3].t, -30.0);
    }

    #[test]
    fn scatter_trees_propagates_infeasible_placement() {
        let mut rng = StdRng::seed_from_u64(8);
        let domain = SamplingDomain::new(0.0, 5.0, 0.0, 5.0, 6.0, 16.0);
        let config = SpacedSampling::new(domain, 10.0, 2);
        let err = scatter_trees(&config, &mut rng, Side::Mirrored).unwrap_err();
        assert!(matches!(err, Error::InfeasiblePlacement { index: 1, .. }));
    }

    #[test]
    fn scatter_trees_straight_road_setup() {
        let mut rng = StdRng::seed_from_u64(1000);
        let domain = SamplingDomain::new(10.0, 1000.0, 17.0, 200.0, 6.0, 16.0);
        let config = SpacedSampling::new(domain, 10.0, 250).with_rounding(true);
        let trees = scatter_trees(&config, &mut rng, Side::Mirrored).unwrap();
        assert_eq!(trees.len(), 500);
        assert_eq!(trees.iter().filter(|t| t.t < 0.0).count(), 250);
    }
}
