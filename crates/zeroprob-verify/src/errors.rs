use thiserror::Error;
use zeroprob_core::ArgumentError;

/// Verifier error types.
///
/// Model faults are not errors: they are reported as a failing
/// [`VerificationReport`](crate::VerificationReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// The verifier was configured with an invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}
