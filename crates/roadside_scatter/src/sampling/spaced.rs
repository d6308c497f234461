//! Rejection sampling of points with a minimum planar spacing.
//!
//! Each requested point gets a fixed budget of candidate draws. A candidate is
//! accepted when its (s, t) projection is at least `min_dist` away from every
//! point accepted so far. If the budget runs out the whole run fails with
//! [`Error::InfeasiblePlacement`]; partial results are never returned.
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::point::{is_spaced_from, Point};
use crate::sampling::domain::SamplingDomain;
use crate::sampling::events::{EventSink, SampleEvent, SampleRun};
use crate::sampling::UniformSource;

/// Candidate draws allowed per point before a run is declared infeasible.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

#[cfg(feature = "serde")]
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

/// Configuration for placing `num_points` points at least `min_dist` apart.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacedSampling {
    /// Ranges for the longitudinal, lateral and attribute scalars.
    pub domain: SamplingDomain,
    /// Minimum planar distance between any two accepted points.
    pub min_dist: f64,
    /// Number of points to place.
    pub num_points: usize,
    /// Round every sampled scalar to the nearest integer (ties to even) before
    /// the spacing check.
    #[cfg_attr(feature = "serde", serde(default))]
    pub round_to_integer: bool,
    /// Candidate draws allowed per point.
    #[cfg_attr(feature = "serde", serde(default = "default_max_attempts"))]
    pub max_attempts: usize,
}

impl Default for SpacedSampling {
    fn default() -> Self {
        Self {
            domain: SamplingDomain::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            min_dist: 0.0,
            num_points: 0,
            round_to_integer: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SpacedSampling {
    /// Creates a new [`SpacedSampling`] with real-valued draws and the default retry ceiling.
    pub fn new(domain: SamplingDomain, min_dist: f64, num_points: usize) -> Self {
        Self {
            domain,
            min_dist,
            num_points,
            ..Default::default()
        }
    }

    /// Enables or disables rounding of sampled scalars.
    pub fn with_rounding(mut self, round_to_integer: bool) -> Self {
        self.round_to_integer = round_to_integer;
        self
    }

    /// Sets the per-point retry ceiling.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        if !self.min_dist.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "min_dist must be finite (got {})",
                self.min_dist
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }
        Ok(())
    }

    /// Places the configured number of points, drawing from `source`.
    pub fn generate<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<Vec<Point>> {
        self.generate_with_events(source, &mut ())
            .map(|run| run.points)
    }

    /// Places the configured number of points, reporting progress to `sink`.
    pub fn generate_with_events<S, K>(&self, source: &mut S, sink: &mut K) -> Result<SampleRun>
    where
        S: UniformSource + ?Sized,
        K: EventSink + ?Sized,
    {
        let mut run = SampleRun::default();
        if self.num_points == 0 {
            return Ok(run);
        }
        self.validate()?;

        debug!(
            "Placing {} points with min_dist {} (rounding: {}, max_attempts: {}).",
            self.num_points, self.min_dist, self.round_to_integer, self.max_attempts
        );

        run.points.reserve_exact(self.num_points);
        for index in 0..self.num_points {
            match self.place_one(index, source, sink, &mut run) {
                Some(point) => run.points.push(point),
                None => {
                    warn!(
                        "Point #{} of {} could not be placed after {} attempts (min_dist {}).",
                        index, self.num_points, self.max_attempts, self.min_dist
                    );
                    sink.send(SampleEvent::PlacementFailed {
                        index,
                        attempts: self.max_attempts,
                    });
                    return Err(Error::InfeasiblePlacement {
                        index,
                        attempts: self.max_attempts,
                        min_dist: self.min_dist,
                    });
                }
            }
        }

        debug!(
            "Placed {} points from {} candidates ({} rejected).",
            run.points.len(),
            run.stats.candidates,
            run.stats.rejected
        );
        Ok(run)
    }

    fn place_one<S, K>(
        &self,
        index: usize,
        source: &mut S,
        sink: &mut K,
        run: &mut SampleRun,
    ) -> Option<Point>
    where
        S: UniformSource + ?Sized,
        K: EventSink + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = self.draw_candidate(source);
            run.stats.candidates += 1;

            if is_spaced_from(candidate.planar(), &run.points, self.min_dist) {
                sink.send(SampleEvent::PointAccepted {
                    index,
                    attempts: attempt,
                    point: candidate,
                });
                return Some(candidate);
            }

            run.stats.rejected += 1;
            if sink.wants_rejections() {
                sink.send(SampleEvent::CandidateRejected {
                    index,
                    attempt,
                    candidate: candidate.planar(),
                });
            }
        }
        None
    }

    fn draw_candidate<S: UniformSource + ?Sized>(&self, source: &mut S) -> Point {
        let s = self.domain.longitudinal.sample(source);
        let t = self.domain.lateral.sample(source);
        let a = self.domain.attribute.sample(source);
        if self.round_to_integer {
            Point::new(s.round_ties_even(), t.round_ties_even(), a.round_ties_even())
        } else {
            Point::new(s, t, a)
        }
    }
}

/// Places `config.num_points` points at least `config.min_dist` apart.
///
/// Fails with [`Error::InfeasiblePlacement`] as soon as one point exhausts its
/// retry budget.
pub fn generate_points<S: UniformSource + ?Sized>(
    config: &SpacedSampling,
    source: &mut S,
) -> Result<Vec<Point>> {
    config.generate(source)
}
