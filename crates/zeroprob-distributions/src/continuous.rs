use crate::adapter::{is_probability, Distribution, DistributionRef};
use crate::errors::DistributionError;
use rand::distributions::Distribution as Sampler;
use rand::RngCore;
use statrs::distribution::{Continuous, ContinuousCDF, Exp, LogNormal, Normal, StudentsT, Uniform};
use std::fmt::Debug;
use std::sync::Arc;

/// Adapter over any `statrs` continuous law.
///
/// # Example
///
/// ```rust
/// use zeroprob_distributions::{ContinuousLaw, Distribution};
///
/// let law = ContinuousLaw::normal(0.0, 1.0)?;
/// assert!((law.density(0.0) - 0.398_942_28).abs() < 1e-6);
/// assert!((law.cumulative(0.0) - 0.5).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContinuousLaw<D> {
    inner: D,
}

impl<D> ContinuousLaw<D>
where
    D: Continuous<f64, f64>
        + ContinuousCDF<f64, f64>
        + Sampler<f64>
        + Debug
        + Send
        + Sync
        + 'static,
{
    /// Wraps an already constructed `statrs` law.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Returns the wrapped law.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Moves the adapter behind a shared handle.
    pub fn shared(self) -> DistributionRef {
        Arc::new(self)
    }
}

impl ContinuousLaw<Normal> {
    /// Normal law with the given mean and standard deviation.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        Normal::new(mean, std_dev)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("normal", e))
    }
}

impl ContinuousLaw<Uniform> {
    /// Uniform law on `[min, max]`.
    pub fn uniform(min: f64, max: f64) -> Result<Self, DistributionError> {
        Uniform::new(min, max)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("uniform", e))
    }
}

impl ContinuousLaw<Exp> {
    /// Exponential law with the given rate.
    pub fn exponential(rate: f64) -> Result<Self, DistributionError> {
        Exp::new(rate)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("exponential", e))
    }
}

impl ContinuousLaw<StudentsT> {
    /// Location-scale Student's t law; heavy tailed for small `freedom`.
    pub fn students_t(location: f64, scale: f64, freedom: f64) -> Result<Self, DistributionError> {
        StudentsT::new(location, scale, freedom)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("students_t", e))
    }
}

impl ContinuousLaw<LogNormal> {
    /// Log-normal law parameterized by the underlying normal's location and scale.
    pub fn log_normal(location: f64, scale: f64) -> Result<Self, DistributionError> {
        LogNormal::new(location, scale)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("log_normal", e))
    }
}

impl<D> Distribution for ContinuousLaw<D>
where
    D: Continuous<f64, f64> + ContinuousCDF<f64, f64> + Sampler<f64> + Debug + Send + Sync,
{
    fn density(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cumulative(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        if !is_probability(p) {
            return f64::NAN;
        }
        self.inner.inverse_cdf(p)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        Sampler::sample(&self.inner, rng)
    }
}
