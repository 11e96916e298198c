use crate::errors::VerifyError;
use serde::{Deserialize, Serialize};
use zeroprob_core::ArgumentError;

/// Options for the model verifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Samples to test the model against per event (default: 100).
    pub num_samples: usize,
    /// Acceptance radius for neighborhood sampling (default: 0.01).
    pub epsilon: f64,
    /// Draws allowed per requested sample before giving up (default: 1000).
    ///
    /// The yield of neighborhood sampling is roughly the ε-neighborhood
    /// probability, so narrow windows or far-tail targets need a larger
    /// multiplier.
    pub attempt_multiplier: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            num_samples: 100,
            epsilon: 0.01,
            attempt_multiplier: 1000,
        }
    }
}

impl VerifierConfig {
    /// Total draw budget for neighborhood sampling.
    pub fn attempt_budget(&self) -> usize {
        self.num_samples.saturating_mul(self.attempt_multiplier)
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.num_samples == 0 {
            return Err(ArgumentError::ZeroCount {
                field: "num_samples",
            }
            .into());
        }
        if self.attempt_multiplier == 0 {
            return Err(ArgumentError::ZeroCount {
                field: "attempt_multiplier",
            }
            .into());
        }
        if !(self.epsilon > 0.0) {
            return Err(ArgumentError::NonPositiveEpsilon {
                epsilon: self.epsilon,
            }
            .into());
        }
        Ok(())
    }
}
