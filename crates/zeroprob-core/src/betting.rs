use crate::errors::{check_epsilon, CoreError};
use crate::events::{ContinuousZeroProbEvent, PointEvent, Probability};
use crate::relevance::{density_ratio, epsilon_neighborhood};
use crate::tags::{MeasureTag, Method};
use zeroprob_distributions::DistributionRef;

/// Default neighborhood radius for [`expected_value`].
pub const DEFAULT_EPSILON: f64 = 0.01;

/// A wager that pays only on an exact hit of `bet_value`.
///
/// The exact hit has probability zero, so the expected value is only
/// available through the approximations in [`expected_value`].
#[derive(Debug, Clone)]
pub struct BettingEdgeCase {
    distribution: DistributionRef,
    bet_value: f64,
    payout: f64,
    cost: f64,
}

impl BettingEdgeCase {
    /// Creates a bet on `bet_value` paying `payout` for a stake of `cost`.
    pub fn new(distribution: DistributionRef, bet_value: f64, payout: f64, cost: f64) -> Self {
        Self {
            distribution,
            bet_value,
            payout,
            cost,
        }
    }

    /// Value that must be hit exactly.
    pub fn bet_value(&self) -> f64 {
        self.bet_value
    }

    /// Amount paid on an exact hit.
    pub fn payout(&self) -> f64 {
        self.payout
    }

    /// Stake paid regardless of outcome.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The `bet_value`-centred point event.
    pub fn point_event(&self, measure: MeasureTag) -> ContinuousZeroProbEvent {
        ContinuousZeroProbEvent::new(self.distribution.clone(), self.bet_value, measure)
    }
}

impl PointEvent for BettingEdgeCase {
    fn distribution(&self) -> &DistributionRef {
        &self.distribution
    }

    fn point(&self) -> f64 {
        self.bet_value
    }
}

impl Probability for BettingEdgeCase {
    fn probability(&self) -> f64 {
        0.0
    }
}

/// Approximate expected value of an exact-hit bet.
///
/// - [`Method::Epsilon`]: `P(|X - bet_value| < ε) * payout - cost`, a true
///   probability read off the cumulative distribution.
/// - [`Method::Density`]: `density(bet_value) * ε * payout - cost`, a
///   first-order pseudo-probability that scales with the arbitrary `ε`.
pub fn expected_value(
    bet: &BettingEdgeCase,
    method: Method,
    epsilon: f64,
) -> Result<f64, CoreError> {
    check_epsilon(epsilon)?;
    let hit = match method {
        Method::Epsilon => epsilon_neighborhood(bet, epsilon)?,
        Method::Density => density_ratio(bet) * epsilon,
    };
    Ok(hit * bet.payout - bet.cost)
}
