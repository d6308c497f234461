#![forbid(unsafe_code)]
//! roadside_scatter: Spacing-constrained random placement of roadside objects.
//!
//! Modules:
//! - point: road-relative sample points and the planar distance predicate
//! - sampling: uniform random source, sampling domains, and the spaced rejection sampler
//! - layout: roadside objects (trees, lamp posts, buildings) from sampled points and rows
//!
//! For examples, see the `roadside_scatter_examples` crate.
pub mod error;
pub mod layout;
pub mod point;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use roadside_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::layout::{
        lamp_posts_both_sides, objects_along, scatter_trees, trees_from_points, ObjectKind,
        RoadsideLayout, RoadsideObject, RowSpec, Side,
    };
    pub use crate::point::Point;
    pub use crate::sampling::{
        generate_points, EventSink, FnSink, SampleEvent, SampleRange, SampleRun, SampleStats,
        SamplingDomain, SpacedSampling, UniformSource, VecSink, DEFAULT_MAX_ATTEMPTS,
    };
}
