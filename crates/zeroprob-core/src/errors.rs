use thiserror::Error;
use zeroprob_distributions::DistributionError;

/// Malformed input to a measure, estimator, or tag parser.
///
/// These are always detected before any sampling starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// Neighborhood radius or density width was zero, negative, or NaN.
    #[error("epsilon must be positive, got {epsilon}")]
    NonPositiveEpsilon {
        /// Offending radius.
        epsilon: f64,
    },
    /// Hausdorff measure requested at a dimension other than 0 or 1.
    #[error("Hausdorff measure of a point is only defined for dimension 0 or 1, got {dimension}")]
    UnsupportedDimension {
        /// Offending dimension.
        dimension: u32,
    },
    /// Text tag did not name a known measure, application, or method.
    #[error("unknown {kind} tag '{value}'")]
    UnknownTag {
        /// Tag family (e.g. "measure", "application").
        kind: &'static str,
        /// Offending text.
        value: String,
    },
    /// A sample or worker count was zero.
    #[error("{field} must be at least 1")]
    ZeroCount {
        /// Name of the count.
        field: &'static str,
    },
}

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// A discrete event was built on a point that carries probability mass.
    #[error("point {point} carries mass {mass}; not a zero-probability event")]
    InvariantViolation {
        /// Requested event point.
        point: f64,
        /// Mass the law assigns to that point.
        mass: f64,
    },
    /// Building a distribution adapter failed.
    #[error("distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), ArgumentError> {
    // Written as a negated comparison so NaN is rejected too.
    if !(epsilon > 0.0) {
        return Err(ArgumentError::NonPositiveEpsilon { epsilon });
    }
    Ok(())
}

pub(crate) fn check_count(field: &'static str, count: usize) -> Result<(), ArgumentError> {
    if count == 0 {
        return Err(ArgumentError::ZeroCount { field });
    }
    Ok(())
}
