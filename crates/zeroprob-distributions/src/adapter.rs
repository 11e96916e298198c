use rand::RngCore;
use std::fmt::Debug;
use std::sync::Arc;

/// Shared, read-only handle to a probability law.
///
/// Every event built on a law holds a clone of the same handle.
pub type DistributionRef = Arc<dyn Distribution>;

/// Narrow interface to a probability law over the real line.
///
/// Implementations must answer every query from one fixed law and must not
/// hold mutable state, so a single adapter can be shared across threads.
pub trait Distribution: Debug + Send + Sync {
    /// Density at `x`; the probability mass for discrete laws.
    fn density(&self, x: f64) -> f64;

    /// `P(X <= x)`, non-decreasing in `x` and within `[0, 1]`.
    fn cumulative(&self, x: f64) -> f64;

    /// Generalized inverse of [`cumulative`](Distribution::cumulative).
    ///
    /// Returns NaN when `p` lies outside `[0, 1]`.
    fn quantile(&self, p: f64) -> f64;

    /// Draws one variate using the caller's sampling source.
    fn sample(&self, rng: &mut dyn RngCore) -> f64;

    /// Draws `n` independent variates.
    fn sample_n(&self, rng: &mut dyn RngCore, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Point mass at `x`, when the law can evaluate one.
    ///
    /// Continuous laws return `None`: a singleton always carries zero
    /// probability there, so there is nothing to evaluate.
    fn mass(&self, _x: f64) -> Option<f64> {
        None
    }
}

pub(crate) fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
