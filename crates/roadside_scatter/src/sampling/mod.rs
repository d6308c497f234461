//! Spacing-constrained random sampling of road-relative points.
//!
//! This module defines the [`UniformSource`] seam through which all randomness
//! is drawn, the [`SamplingDomain`] that bounds each sampled scalar, and the
//! [`SpacedSampling`] rejection sampler that keeps accepted points apart.
use rand::RngCore;

pub mod domain;
pub mod events;
pub mod spaced;

pub use domain::{SampleRange, SamplingDomain};
pub use events::{EventSink, FnSink, SampleEvent, SampleRun, SampleStats, VecSink};
pub use spaced::{generate_points, SpacedSampling, DEFAULT_MAX_ATTEMPTS};

/// Source of uniformly distributed reals.
pub trait UniformSource {
    /// Draw a value between `lo` and `hi`. The bounds may be given in either order.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        clamp_to_span(lo + (hi - lo) * rand01(self), lo, hi)
    }
}

/// Generate a random float in the range [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub(crate) fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Clamp `v` into the closed span between `a` and `b`, whichever is larger.
#[inline]
pub(crate) fn clamp_to_span(v: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert!(result > 0.999_999);
    }

    #[test]
    fn rand01_midpoint() {
        let mut rng = FixedRng {
            value: u64::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn uniform_accepts_inverted_bounds() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rng.uniform(-15.0, -100.0), -15.0);

        let mut rng = FixedRng { value: u64::MAX };
        let v = rng.uniform(-15.0, -100.0);
        assert!((-100.0..=-15.0).contains(&v));
        assert!(v < -99.99);
    }

    #[test]
    fn uniform_on_dyn_rng_stays_in_span() {
        let mut rng = StdRng::seed_from_u64(7);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        for _ in 0..1000 {
            let v = dyn_rng.uniform(600.0, 15.0);
            assert!((15.0..=600.0).contains(&v));
        }
    }

    #[test]
    fn uniform_zero_width_returns_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(rng.uniform(4.0, 4.0), 4.0);
    }

    #[test]
    fn clamp_to_span_handles_both_orders() {
        assert_eq!(clamp_to_span(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp_to_span(5.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp_to_span(-5.0, 1.0, 0.0), 0.0);
        assert_eq!(clamp_to_span(0.5, 1.0, 0.0), 0.5);
    }
}
