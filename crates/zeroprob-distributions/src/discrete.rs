use crate::adapter::{is_probability, Distribution, DistributionRef};
use crate::errors::DistributionError;
use rand::{Rng, RngCore};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF, Poisson};
use statrs::statistics::{Max, Min};
use std::fmt::Debug;
use std::sync::Arc;

/// Adapter over a `statrs` law supported on the non-negative integers.
///
/// Unlike continuous laws, a discrete law can evaluate its mass at a point,
/// so [`Distribution::mass`] always returns `Some`. Points off the integer
/// support carry zero mass.
#[derive(Debug, Clone)]
pub struct DiscreteLaw<D> {
    inner: D,
}

impl<D> DiscreteLaw<D>
where
    D: Discrete<u64, f64> + DiscreteCDF<u64, f64> + Debug + Send + Sync + 'static,
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

impl DiscreteLaw<Poisson> {
    /// Poisson law with the given mean.
    pub fn poisson(lambda: f64) -> Result<Self, DistributionError> {
        Poisson::new(lambda)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("poisson", e))
    }
}

impl DiscreteLaw<Binomial> {
    /// Binomial law with success probability `p` over `n` trials.
    pub fn binomial(p: f64, n: u64) -> Result<Self, DistributionError> {
        Binomial::new(p, n)
            .map(Self::new)
            .map_err(|e| DistributionError::invalid("binomial", e))
    }
}

/// Maps a real point onto the integer support, if it lies on it.
fn support_index(x: f64) -> Option<u64> {
    if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 {
        Some(x as u64)
    } else {
        None
    }
}

/// Smallest support point `k` with `cdf(k) >= p`, for `p` in `[0, 1]`.
///
/// Doubles an upper bound until it covers `p`, then bisects. Mass at the
/// support minimum is handled before the search starts.
fn smallest_at_least<D>(law: &D, p: f64) -> u64
where
    D: DiscreteCDF<u64, f64>,
{
    let max = law.max();
    if p >= 1.0 {
        return max;
    }
    let mut lo = law.min();
    if law.cdf(lo) >= p {
        return lo;
    }
    // cdf(lo) < p <= cdf(hi) once the loop exits
    let mut hi = lo.saturating_add(1);
    while law.cdf(hi) < p {
        if hi >= max {
            return max;
        }
        lo = hi;
        hi = std::cmp::min(hi.saturating_mul(2), max);
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if law.cdf(mid) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

impl<D> Distribution for DiscreteLaw<D>
where
    D: Discrete<u64, f64> + DiscreteCDF<u64, f64> + Debug + Send + Sync,
{
    fn density(&self, x: f64) -> f64 {
        match support_index(x) {
            Some(k) => self.inner.pmf(k),
            None => 0.0,
        }
    }

    fn cumulative(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if x >= u64::MAX as f64 {
            return 1.0;
        }
        self.inner.cdf(x.floor() as u64)
    }

    fn quantile(&self, p: f64) -> f64 {
        if !is_probability(p) {
            return f64::NAN;
        }
        smallest_at_least(&self.inner, p) as f64
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let u: f64 = rng.gen();
        smallest_at_least(&self.inner, u) as f64
    }

    fn mass(&self, x: f64) -> Option<f64> {
        Some(self.density(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_index_accepts_non_negative_integers() {
        assert_eq!(support_index(0.0), Some(0));
        assert_eq!(support_index(7.0), Some(7));
    }

    #[test]
    fn support_index_rejects_off_support_points() {
        assert_eq!(support_index(2.5), None);
        assert_eq!(support_index(-1.0), None);
        assert_eq!(support_index(f64::NAN), None);
        assert_eq!(support_index(f64::INFINITY), None);
    }

    #[test]
    fn search_returns_support_minimum_below_first_mass() {
        let law = Poisson::new(4.0).unwrap();
        assert_eq!(smallest_at_least(&law, 0.0), 0);
        assert_eq!(smallest_at_least(&law, law.pmf(0) / 2.0), 0);
        assert_eq!(smallest_at_least(&law, law.cdf(0)), 0);
    }

    #[test]
    fn search_finds_smallest_covering_point() {
        let law = Poisson::new(4.0).unwrap();
        for k in 0..20u64 {
            let p = law.cdf(k);
            assert_eq!(smallest_at_least(&law, p), k, "k={k}");
            if k > 0 {
                let just_above = (law.cdf(k - 1) + p) / 2.0;
                assert_eq!(smallest_at_least(&law, just_above), k, "k={k}");
            }
        }
    }

    #[test]
    fn search_stays_within_binomial_trials() {
        let law = Binomial::new(0.5, 10).unwrap();
        assert_eq!(smallest_at_least(&law, 1.0), 10);
        assert_eq!(smallest_at_least(&law, 0.999_999), 10);
        assert_eq!(smallest_at_least(&law, 0.5), 5);
    }
}
