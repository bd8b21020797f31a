//! Error types.

use std::fmt;

use thiserror::Error;

/// Which half of the number a probe loop was exploring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSide {
    Integer,
    Fraction,
}

impl fmt::Display for ProbeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSide::Integer => f.write_str("integer"),
            ProbeSide::Fraction => f.write_str("fraction"),
        }
    }
}

/// Errors that can occur when inferring a pattern from a formatter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferError {
    #[error("{side} digits did not settle after {probes} probes")]
    NoFixedPoint { side: ProbeSide, probes: usize },
}
