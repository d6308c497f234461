//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! infeasible spaced placement, invalid configuration, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// Every candidate drawn for point `index` landed closer than `min_dist`
    /// to an already accepted point.
    #[error(
        "unable to place point #{index} with minimum spacing {min_dist} after {attempts} attempts"
    )]
    InfeasiblePlacement {
        index: usize,
        attempts: usize,
        min_dist: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns `true` if this error reports an exhausted retry budget.
    pub fn is_infeasible_placement(&self) -> bool {
        matches!(self, Error::InfeasiblePlacement { .. })
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn infeasible_placement_message_names_point_and_spacing() {
        let err = Error::InfeasiblePlacement {
            index: 3,
            attempts: 1000,
            min_dist: 10.0,
        };
        assert!(err.is_infeasible_placement());
        assert_eq!(
            err.to_string(),
            "unable to place point #3 with minimum spacing 10 after 1000 attempts"
        );
        assert!(!Error::InvalidConfig("x".into()).is_infeasible_placement());
    }
}
