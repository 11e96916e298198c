//! Relevance measures for zero-probability point events.
//!
//! A point of a continuous law has probability zero, so probability alone
//! cannot rank such events. The measures here give three alternative scores:
//!
//! - [`density_ratio`]: density at the point, a relative weight only
//! - [`hausdorff_measure`]: the point's measure at dimension 0 or 1
//! - [`epsilon_neighborhood`]: `P(|X - point| < ε)`, the near-miss probability

use crate::errors::{check_epsilon, ArgumentError, CoreError};
use crate::events::{ContinuousZeroProbEvent, PointEvent};
use crate::tags::{Application, MeasureTag};
use serde::{Deserialize, Serialize};

/// Window used by the decision-theory score.
pub const DECISION_THEORY_EPSILON: f64 = 0.05;

/// Parameters for [`relevance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelevanceParams {
    /// Hausdorff dimension (default: 0).
    pub dimension: u32,
    /// Neighborhood radius (default: 0.01).
    pub epsilon: f64,
}

impl Default for RelevanceParams {
    fn default() -> Self {
        Self {
            dimension: 0,
            epsilon: 0.01,
        }
    }
}

/// Density of the event's law at its point.
///
/// Zero on zero-density regions; never fails.
pub fn density_ratio<E: PointEvent + ?Sized>(event: &E) -> f64 {
    event.distribution().density(event.point())
}

/// Hausdorff measure of a single point.
///
/// A point has unit 0-dimensional measure and zero length. Higher
/// dimensions are not supported and fail rather than return a guess.
pub fn hausdorff_measure<E: PointEvent + ?Sized>(
    _event: &E,
    dimension: u32,
) -> Result<f64, CoreError> {
    match dimension {
        0 => Ok(1.0),
        1 => Ok(0.0),
        dimension => Err(ArgumentError::UnsupportedDimension { dimension }.into()),
    }
}

/// Probability that a draw lands within `epsilon` of the event's point.
pub fn epsilon_neighborhood<E: PointEvent + ?Sized>(
    event: &E,
    epsilon: f64,
) -> Result<f64, CoreError> {
    check_epsilon(epsilon)?;
    let law = event.distribution();
    let point = event.point();
    Ok(law.cumulative(point + epsilon) - law.cumulative(point - epsilon))
}

/// Scores an event with the measure it was tagged with.
pub fn relevance(
    event: &ContinuousZeroProbEvent,
    params: &RelevanceParams,
) -> Result<f64, CoreError> {
    match event.measure() {
        MeasureTag::Density => Ok(density_ratio(event)),
        MeasureTag::Hausdorff => hausdorff_measure(event, params.dimension),
        MeasureTag::Epsilon => epsilon_neighborhood(event, params.epsilon),
    }
}

/// Composite score tuned for an application.
pub fn relevance_score<E: PointEvent + ?Sized>(
    event: &E,
    application: Application,
) -> Result<f64, CoreError> {
    match application {
        Application::BlackSwan => Ok(density_ratio(event) / (1.0 + event.point().abs())),
        Application::Betting => Ok(density_ratio(event)),
        Application::DecisionTheory => epsilon_neighborhood(event, DECISION_THEORY_EPSILON),
    }
}
