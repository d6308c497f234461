use std::time::Duration;

use criterion::{Criterion, Throughput};
use roadside_scatter::sampling::SamplingDomain;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

/// Tree band next to a 1000 m road.
pub fn straight_road_domain() -> SamplingDomain {
    SamplingDomain::new(10.0, 1000.0, 17.0, 200.0, 6.0, 16.0)
}
