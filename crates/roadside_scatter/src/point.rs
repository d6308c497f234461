//! Sampled road-relative points.
use glam::{DVec2, DVec3};
use mint::Vector3;

/// A sampled position relative to a road reference line.
///
/// `longitudinal` is the distance along the reference line (s), `lateral` the
/// perpendicular offset from it (t). `attribute` is a free scalar carried with
/// the point; roadside layouts use it as object height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub longitudinal: f64,
    pub lateral: f64,
    pub attribute: f64,
}

impl Point {
    pub const fn new(longitudinal: f64, lateral: f64, attribute: f64) -> Self {
        Self {
            longitudinal,
            lateral,
            attribute,
        }
    }

    /// Projection onto the (s, t) plane.
    #[inline]
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.longitudinal, self.lateral)
    }

    /// Euclidean distance between the (s, t) projections. The attribute is ignored.
    #[inline]
    pub fn planar_distance(&self, other: &Point) -> f64 {
        self.planar().distance(other.planar())
    }

    /// Same point on the opposite side of the reference line.
    pub fn mirrored(&self) -> Self {
        Self {
            lateral: -self.lateral,
            ..*self
        }
    }
}

/// Returns `true` if `candidate` is at least `min_dist` away from the (s, t)
/// projection of every point in `points`.
pub fn is_spaced_from(candidate: DVec2, points: &[Point], min_dist: f64) -> bool {
    points
        .iter()
        .all(|p| candidate.distance(p.planar()) >= min_dist)
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::new(p.longitudinal, p.lateral, p.attribute)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        Vector3 {
            x: p.longitudinal,
            y: p.lateral,
            z: p.attribute,
        }
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((s, t, a): (f64, f64, f64)) -> Self {
        Point::new(s, t, a)
    }
}
