use thiserror::Error;

/// Errors raised while building a distribution adapter.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// The underlying library rejected the law's parameters.
    #[error("invalid {law} parameters: {reason}")]
    InvalidParameters {
        /// Name of the law being constructed.
        law: &'static str,
        /// Message reported by the distribution library.
        reason: String,
    },
}

impl DistributionError {
    pub(crate) fn invalid(law: &'static str, reason: impl std::fmt::Display) -> Self {
        DistributionError::InvalidParameters {
            law,
            reason: reason.to_string(),
        }
    }
}
