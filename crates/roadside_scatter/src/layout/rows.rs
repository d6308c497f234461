//! Regularly spaced rows of objects along a road.
use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::layout::RoadsideObject;

/// A row of positions at a fixed lateral offset.
///
/// Positions start at `start` and advance by `step` while strictly below `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpec {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub t: f64,
}

impl RowSpec {
    pub fn new(start: f64, end: f64, step: f64, t: f64) -> Self {
        Self { start, end, step, t }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidConfig("row bounds must be finite".into()));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "row step must be > 0 (got {})",
                self.step
            )));
        }
        Ok(())
    }

    /// Longitudinal positions of the row.
    pub fn positions(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let count = if self.end > self.start {
            ((self.end - self.start) / self.step).ceil() as usize
        } else {
            0
        };
        Ok((0..count)
            .map(|k| self.start + k as f64 * self.step)
            .filter(|&s| s < self.end)
            .collect())
    }
}

/// Places a copy of `template` at every position of `row`.
pub fn objects_along(row: &RowSpec, template: &RoadsideObject) -> Result<Vec<RoadsideObject>> {
    Ok(row
        .positions()?
        .into_iter()
        .map(|s| template.placed_at(s, row.t))
        .collect())
}

/// Lamp posts on both sides of the road at `+offset` (heading 0) and
/// `-offset` (heading PI), interleaved per position.
pub fn lamp_posts_both_sides(
    start: f64,
    end: f64,
    step: f64,
    offset: f64,
) -> Result<Vec<RoadsideObject>> {
    let row = RowSpec::new(start, end, step, offset);
    Ok(row
        .positions()?
        .into_iter()
        .flat_map(|s| {
            [
                RoadsideObject::lamp_post(s, offset, 0.0),
                RoadsideObject::lamp_post(s, -offset, PI),
            ]
        })
        .collect())
}
