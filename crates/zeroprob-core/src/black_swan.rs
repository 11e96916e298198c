//! Catastrophic tail events and Monte Carlo impact estimation.
//!
//! A [`BlackSwanEvent`] models a tail *region* `X <= threshold`, not a single
//! point, so unlike the point events its probability is small but non-zero.

use crate::errors::{check_count, CoreError};
use crate::events::Probability;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use zeroprob_distributions::{ContinuousLaw, DistributionRef};

/// Default Monte Carlo sample count.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Standard deviation of the returns law a [`MarketCrashEvent`] falls back to.
pub const DEFAULT_RETURNS_STD_DEV: f64 = 0.2;

/// Maps a sampled value to its impact.
///
/// The estimators only ever call this in a read-only evaluation role.
pub trait Impact: Send + Sync {
    /// Impact of observing `x`.
    fn impact(&self, x: f64) -> f64;
}

impl<F> Impact for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn impact(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Fixed loss at or below a threshold, nothing above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepImpact {
    /// Values at or below this trigger the loss.
    pub threshold: f64,
    /// Loss incurred when triggered.
    pub loss: f64,
}

impl Impact for StepImpact {
    fn impact(&self, x: f64) -> f64 {
        if x <= self.threshold {
            self.loss
        } else {
            0.0
        }
    }
}

/// Rare, high-impact tail event.
#[derive(Clone)]
pub struct BlackSwanEvent {
    distribution: DistributionRef,
    threshold: f64,
    impact: Arc<dyn Impact>,
}

impl BlackSwanEvent {
    /// Creates a tail event `X <= threshold` with the given impact.
    pub fn new(
        distribution: DistributionRef,
        threshold: f64,
        impact: impl Impact + 'static,
    ) -> Self {
        Self {
            distribution,
            threshold,
            impact: Arc::new(impact),
        }
    }

    /// Law the tail belongs to.
    pub fn distribution(&self) -> &DistributionRef {
        &self.distribution
    }

    /// Upper edge of the catastrophic region.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Impact evaluated at `x`.
    pub fn impact_severity(&self, x: f64) -> f64 {
        self.impact.impact(x)
    }
}

impl fmt::Debug for BlackSwanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlackSwanEvent")
            .field("distribution", &self.distribution)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Probability for BlackSwanEvent {
    /// Exceedance probability `P(X <= threshold)`.
    fn probability(&self) -> f64 {
        self.distribution.cumulative(self.threshold)
    }
}

/// Market crash severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 50% drawdown.
    Catastrophic,
    /// 30% drawdown.
    High,
    /// 10% drawdown.
    Moderate,
}

impl Severity {
    /// Parses a severity tag; anything but `catastrophic`/`high` is moderate.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "catastrophic" => Severity::Catastrophic,
            "high" => Severity::High,
            _ => Severity::Moderate,
        }
    }

    /// Return threshold for this severity.
    pub fn threshold(&self) -> f64 {
        match self {
            Severity::Catastrophic => -0.5,
            Severity::High => -0.3,
            Severity::Moderate => -0.1,
        }
    }
}

/// Builder for market-crash black swans.
///
/// # Example
///
/// ```rust
/// use zeroprob_core::{MarketCrashEvent, Severity};
///
/// let crash = MarketCrashEvent::new(1_000_000.0, Severity::Catastrophic).build()?;
/// assert_eq!(crash.threshold(), -0.5);
/// assert_eq!(crash.impact_severity(-0.6), 1_000_000.0);
/// assert_eq!(crash.impact_severity(0.0), 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MarketCrashEvent {
    loss_threshold: f64,
    severity: Severity,
    distribution: Option<DistributionRef>,
}

impl MarketCrashEvent {
    /// Starts a crash with the loss incurred once the severity threshold is hit.
    pub fn new(loss_threshold: f64, severity: Severity) -> Self {
        Self {
            loss_threshold,
            severity,
            distribution: None,
        }
    }

    /// Uses `distribution` as the returns law instead of the default.
    pub fn with_distribution(mut self, distribution: DistributionRef) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Builds the event.
    ///
    /// Without an explicit law, returns follow `Normal(0, DEFAULT_RETURNS_STD_DEV)`.
    pub fn build(self) -> Result<BlackSwanEvent, CoreError> {
        let distribution = match self.distribution {
            Some(distribution) => distribution,
            None => ContinuousLaw::normal(0.0, DEFAULT_RETURNS_STD_DEV)?.shared(),
        };
        let threshold = self.severity.threshold();
        Ok(BlackSwanEvent::new(
            distribution,
            threshold,
            StepImpact {
                threshold,
                loss: self.loss_threshold,
            },
        ))
    }
}

/// Options for the parallel Monte Carlo estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Total draws across all workers (default: 10 000).
    pub samples: usize,
    /// Number of independent sampling shards (default: 1).
    pub workers: usize,
    /// Base seed; each shard derives its own stream from it (default: 0).
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            workers: 1,
            seed: 0,
        }
    }
}

impl MonteCarloConfig {
    /// Checks sample and worker counts.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_count("samples", self.samples)?;
        check_count("workers", self.workers)?;
        Ok(())
    }
}

/// Point estimate of an expectation with its Monte Carlo standard error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloEstimate {
    /// Arithmetic mean of the evaluated draws.
    pub mean: f64,
    /// Standard error of the mean; `None` below two draws.
    pub std_error: Option<f64>,
    /// Number of draws.
    pub samples: usize,
}

/// Running mean and sum of squared deviations (Welford).
#[derive(Debug, Clone, Copy, Default)]
struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Moments {
    fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn merge(self, other: Moments) -> Moments {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let (n_a, n_b, n) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.mean - self.mean;
        Moments {
            count,
            mean: self.mean + delta * n_b / n,
            m2: self.m2 + other.m2 + delta * delta * n_a * n_b / n,
        }
    }

    fn estimate(&self) -> MonteCarloEstimate {
        let std_error = (self.count > 1).then(|| {
            let variance = self.m2 / (self.count - 1) as f64;
            (variance / self.count as f64).sqrt()
        });
        MonteCarloEstimate {
            mean: self.mean,
            std_error,
            samples: self.count,
        }
    }
}

/// Shard RNG. Same (seed, worker) gives the same draw sequence.
fn worker_rng(seed: u64, worker: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_mul(2654435761).wrapping_add(worker))
}

fn accumulate<R: Rng>(event: &BlackSwanEvent, samples: usize, rng: &mut R) -> Moments {
    let mut moments = Moments::default();
    for _ in 0..samples {
        let x = event.distribution.sample(rng);
        moments.push(event.impact.impact(x));
    }
    moments
}

/// Impact evaluated at `x`.
pub fn impact_severity(event: &BlackSwanEvent, x: f64) -> f64 {
    event.impact_severity(x)
}

/// Monte Carlo estimate of `E[impact(X)]` with its standard error.
///
/// The error shrinks as `O(1/sqrt(samples))`; oversample for tight bounds.
pub fn expected_impact_estimate<R: Rng>(
    event: &BlackSwanEvent,
    samples: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate, CoreError> {
    check_count("samples", samples)?;
    debug!(samples, threshold = event.threshold, "estimating expected impact");
    Ok(accumulate(event, samples, rng).estimate())
}

/// Monte Carlo estimate of `E[impact(X)]`: the mean impact over `samples` draws.
pub fn expected_impact<R: Rng>(
    event: &BlackSwanEvent,
    samples: usize,
    rng: &mut R,
) -> Result<f64, CoreError> {
    expected_impact_estimate(event, samples, rng).map(|estimate| estimate.mean)
}

/// Sharded Monte Carlo estimate of `E[impact(X)]`.
///
/// Samples are split across `config.workers` shards that run on the rayon
/// pool, each drawing from its own seed-derived stream. Shard results are
/// merged in shard order once all have finished, so the estimate is
/// reproducible for a fixed seed and worker count.
pub fn expected_impact_parallel(
    event: &BlackSwanEvent,
    config: &MonteCarloConfig,
) -> Result<MonteCarloEstimate, CoreError> {
    config.validate()?;
    debug!(
        samples = config.samples,
        workers = config.workers,
        seed = config.seed,
        "estimating expected impact in parallel"
    );
    let base = config.samples / config.workers;
    let extra = config.samples % config.workers;
    let shards: Vec<Moments> = (0..config.workers)
        .into_par_iter()
        .map(|worker| {
            let quota = base + usize::from(worker < extra);
            let mut rng = worker_rng(config.seed, worker as u64);
            accumulate(event, quota, &mut rng)
        })
        .collect();
    let total = shards.into_iter().fold(Moments::default(), Moments::merge);
    Ok(total.estimate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_moments_match_single_pass() {
        let values = [1.0, 4.0, 2.5, 8.0, 0.0, 3.0, 7.5];
        let mut single = Moments::default();
        values.iter().for_each(|v| single.push(*v));

        let mut left = Moments::default();
        let mut right = Moments::default();
        values[..3].iter().for_each(|v| left.push(*v));
        values[3..].iter().for_each(|v| right.push(*v));
        let merged = left.merge(right);

        assert_eq!(merged.count, single.count);
        assert!((merged.mean - single.mean).abs() < 1e-12);
        assert!((merged.m2 - single.m2).abs() < 1e-9);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut m = Moments::default();
        m.push(2.0);
        m.push(4.0);
        let merged = Moments::default().merge(m).merge(Moments::default());
        assert_eq!(merged.count, 2);
        assert_eq!(merged.mean, 3.0);
    }

    #[test]
    fn single_draw_has_no_std_error() {
        let mut m = Moments::default();
        m.push(5.0);
        assert_eq!(m.estimate().std_error, None);
    }

    #[test]
    fn worker_streams_differ() {
        let a: u64 = worker_rng(1, 0).gen();
        let b: u64 = worker_rng(1, 1).gen();
        assert_ne!(a, b);
    }
}
