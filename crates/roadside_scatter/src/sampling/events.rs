//! Event types and sinks for observing spaced sampling runs.
//!
//! This module defines [`SampleEvent`] and a small set of sinks to collect or
//! forward events while executing
//! [`crate::sampling::spaced::SpacedSampling::generate_with_events`].
use glam::DVec2;

use crate::point::Point;

/// Describes events emitted while placing points.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SampleEvent {
    /// A candidate fell closer than the minimum distance to an accepted point.
    CandidateRejected {
        /// Index of the point being placed.
        index: usize,
        /// 1-based attempt number for this point.
        attempt: usize,
        /// Rejected planar position.
        candidate: DVec2,
    },

    /// A candidate was accepted.
    PointAccepted {
        /// Index of the accepted point in the output.
        index: usize,
        /// Number of candidates drawn for this point, including the accepted one.
        attempts: usize,
        /// The accepted point.
        point: Point,
    },

    /// The retry ceiling was exhausted; the run is aborted.
    PlacementFailed {
        /// Index of the point that could not be placed.
        index: usize,
        /// Number of candidates drawn for this point.
        attempts: usize,
    },
}

/// Counters gathered over one sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Total candidates drawn.
    pub candidates: usize,
    /// Candidates rejected for violating the minimum distance.
    pub rejected: usize,
}

impl SampleStats {
    /// Fraction of drawn candidates that were accepted, or `1.0` if nothing was drawn.
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates == 0 {
            return 1.0;
        }
        (self.candidates - self.rejected) as f64 / self.candidates as f64
    }
}

/// Result of a successful sampling run.
#[derive(Debug, Clone, Default)]
pub struct SampleRun {
    /// Accepted points in acceptance order.
    pub points: Vec<Point>,
    pub stats: SampleStats,
}

/// A generic event sink that accepts [`SampleEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SampleEvent);

    /// Whether the sink wants per-candidate rejection events.
    ///
    /// Rejections can number `num_points * max_attempts`; sinks that only
    /// care about outcomes return `false` to skip building them.
    fn wants_rejections(&self) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SampleEvent) {}

    #[inline]
    fn wants_rejections(&self) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SampleEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SampleEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SampleEvent),
{
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
pub struct VecSink {
    events: Vec<SampleEvent>,
    rejections: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            rejections: true,
        }
    }

    /// Collects only accept and failure events.
    pub fn outcomes_only() -> Self {
        Self {
            events: Vec::new(),
            rejections: false,
        }
    }

    pub fn into_inner(self) -> Vec<SampleEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SampleEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SampleEvent) {
        self.events.push(event);
    }

    fn wants_rejections(&self) -> bool {
        self.rejections
    }
}
