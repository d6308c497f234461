//! Ranges bounding each sampled scalar.
use crate::error::{Error, Result};
use crate::sampling::UniformSource;

/// Two endpoints of a sampled scalar, kept in the order the caller gave them.
///
/// Road-relative ranges are often written with the far edge second, which
/// makes `start > end` legal (e.g. a lateral range of `-15..-100` on the
/// right-hand side of a road). Sampling happens between the two endpoints
/// regardless of their order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleRange {
    pub start: f64,
    pub end: f64,
}

impl SampleRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A zero-width range at `value`.
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Smaller endpoint.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Larger endpoint.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.end - self.start).abs()
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Closed containment test over the span of both endpoints.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo() && value <= self.hi()
    }

    /// Draw a value between the endpoints.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        source.uniform(self.start, self.end)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "{name} range endpoints must be finite (got {}..{})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for SampleRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// Sampling bounds for the longitudinal, lateral and attribute scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingDomain {
    /// Distance along the reference line (s).
    pub longitudinal: SampleRange,
    /// Offset from the reference line (t).
    pub lateral: SampleRange,
    /// Free scalar carried with each point, e.g. object height.
    pub attribute: SampleRange,
}

impl SamplingDomain {
    pub fn new(s_min: f64, s_max: f64, t_min: f64, t_max: f64, a_min: f64, a_max: f64) -> Self {
        Self {
            longitudinal: SampleRange::new(s_min, s_max),
            lateral: SampleRange::new(t_min, t_max),
            attribute: SampleRange::new(a_min, a_max),
        }
    }

    /// Diagonal of the planar (s, t) rectangle.
    pub fn planar_diameter(&self) -> f64 {
        self.longitudinal.width().hypot(self.lateral.width())
    }

    /// Planar area of the (s, t) rectangle.
    pub fn planar_area(&self) -> f64 {
        self.longitudinal.width() * self.lateral.width()
    }

    /// Returns `true` if all three scalars lie within their ranges.
    pub fn contains(&self, s: f64, t: f64, a: f64) -> bool {
        self.longitudinal.contains(s) && self.lateral.contains(t) && self.attribute.contains(a)
    }

    pub fn validate(&self) -> Result<()> {
        self.longitudinal.validate("longitudinal")?;
        self.lateral.validate("lateral")?;
        self.attribute.validate("attribute")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn inverted_range_reports_ordered_span() {
        let r = SampleRange::new(-15.0, -100.0);
        assert!(r.is_inverted());
        assert_eq!(r.lo(), -100.0);
        assert_eq!(r.hi(), -15.0);
        assert_eq!(r.width(), 85.0);
        assert!(r.contains(-15.0));
        assert!(r.contains(-100.0));
        assert!(!r.contains(-14.9));
    }

    #[test]
    fn samples_stay_within_inverted_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = SampleRange::new(-15.0, -100.0);
        for _ in 0..500 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }

    #[test]
    fn fixed_range_always_samples_its_value() {
        let mut rng = StdRng::seed_from_u64(5);
        let r = SampleRange::fixed(6.5);
        assert_eq!(r.sample(&mut rng), 6.5);
        assert_eq!(r.width(), 0.0);
    }

    #[test]
    fn domain_geometry() {
        let d = SamplingDomain::new(0.0, 3.0, 4.0, 0.0, 6.0, 16.0);
        assert_eq!(d.planar_diameter(), 5.0);
        assert_eq!(d.planar_area(), 12.0);
        assert!(d.contains(1.0, 2.0, 10.0));
        assert!(!d.contains(1.0, 2.0, 17.0));
    }

    #[test]
    fn validate_rejects_non_finite_endpoints() {
        let ok = SamplingDomain::new(10.0, 600.0, 15.0, 600.0, 6.0, 16.0);
        assert!(ok.validate().is_ok());

        let bad = SamplingDomain::new(10.0, f64::NAN, 15.0, 600.0, 6.0, 16.0);
        assert!(matches!(bad.validate(), Err(Error::InvalidConfig(_))));

        let bad = SamplingDomain::new(10.0, 600.0, 15.0, 600.0, 6.0, f64::INFINITY);
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("attribute"));
    }
}
