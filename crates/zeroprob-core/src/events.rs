use crate::betting::BettingEdgeCase;
use crate::black_swan::BlackSwanEvent;
use crate::errors::CoreError;
use crate::tags::MeasureTag;
use zeroprob_distributions::DistributionRef;

/// Probability an event carries under its law.
pub trait Probability {
    /// Returns the event's probability.
    fn probability(&self) -> f64;
}

/// An event anchored on a single real point of a law.
///
/// The relevance measures in [`crate::relevance`] accept any point event.
pub trait PointEvent {
    /// Law the point is drawn from.
    fn distribution(&self) -> &DistributionRef;
    /// Target value.
    fn point(&self) -> f64;
}

/// A single point of a continuous law.
///
/// `P(X = point)` is zero by construction; nothing is computed to check it.
#[derive(Debug, Clone)]
pub struct ContinuousZeroProbEvent {
    distribution: DistributionRef,
    point: f64,
    measure: MeasureTag,
}

impl ContinuousZeroProbEvent {
    /// Creates a point event scored by `measure`.
    pub fn new(distribution: DistributionRef, point: f64, measure: MeasureTag) -> Self {
        Self {
            distribution,
            point,
            measure,
        }
    }

    /// Creates a point event from a text measure tag.
    ///
    /// Unknown tags are rejected here rather than at scoring time.
    pub fn with_tag(
        distribution: DistributionRef,
        point: f64,
        tag: &str,
    ) -> Result<Self, CoreError> {
        let measure = MeasureTag::parse(tag)?;
        Ok(Self::new(distribution, point, measure))
    }

    /// Measure used by [`crate::relevance::relevance`].
    pub fn measure(&self) -> MeasureTag {
        self.measure
    }
}

impl PointEvent for ContinuousZeroProbEvent {
    fn distribution(&self) -> &DistributionRef {
        &self.distribution
    }

    fn point(&self) -> f64 {
        self.point
    }
}

impl Probability for ContinuousZeroProbEvent {
    fn probability(&self) -> f64 {
        0.0
    }
}

/// A point of a discrete law that lies off its support.
#[derive(Debug, Clone)]
pub struct DiscreteZeroProbEvent {
    distribution: DistributionRef,
    point: f64,
}

impl DiscreteZeroProbEvent {
    /// Creates the event, checking the point carries no mass.
    ///
    /// The check runs whenever the law can evaluate a mass function; laws
    /// that cannot (continuous ones) are accepted as-is.
    pub fn new(distribution: DistributionRef, point: f64) -> Result<Self, CoreError> {
        if let Some(mass) = distribution.mass(point) {
            if mass != 0.0 {
                return Err(CoreError::InvariantViolation { point, mass });
            }
        }
        Ok(Self {
            distribution,
            point,
        })
    }
}

impl PointEvent for DiscreteZeroProbEvent {
    fn distribution(&self) -> &DistributionRef {
        &self.distribution
    }

    fn point(&self) -> f64 {
        self.point
    }
}

impl Probability for DiscreteZeroProbEvent {
    fn probability(&self) -> f64 {
        0.0
    }
}

/// A zero-probability point event of either kind.
#[derive(Debug, Clone)]
pub enum ZeroProbEvent {
    /// Point of a continuous law.
    Continuous(ContinuousZeroProbEvent),
    /// Off-support point of a discrete law.
    Discrete(DiscreteZeroProbEvent),
}

impl From<ContinuousZeroProbEvent> for ZeroProbEvent {
    fn from(event: ContinuousZeroProbEvent) -> Self {
        ZeroProbEvent::Continuous(event)
    }
}

impl From<DiscreteZeroProbEvent> for ZeroProbEvent {
    fn from(event: DiscreteZeroProbEvent) -> Self {
        ZeroProbEvent::Discrete(event)
    }
}

impl PointEvent for ZeroProbEvent {
    fn distribution(&self) -> &DistributionRef {
        match self {
            ZeroProbEvent::Continuous(e) => e.distribution(),
            ZeroProbEvent::Discrete(e) => e.distribution(),
        }
    }

    fn point(&self) -> f64 {
        match self {
            ZeroProbEvent::Continuous(e) => e.point(),
            ZeroProbEvent::Discrete(e) => e.point(),
        }
    }
}

impl Probability for ZeroProbEvent {
    fn probability(&self) -> f64 {
        0.0
    }
}

/// Holds with probability 1, up to a zero-probability exception set.
#[derive(Debug, Clone)]
pub struct AlmostSureEvent {
    exception_set: ZeroProbEvent,
    description: String,
}

impl AlmostSureEvent {
    /// Creates the event from its exception set.
    pub fn new(exception_set: impl Into<ZeroProbEvent>, description: impl Into<String>) -> Self {
        Self {
            exception_set: exception_set.into(),
            description: description.into(),
        }
    }

    /// The outcome that may still occur despite probability 1.
    pub fn exception_set(&self) -> &ZeroProbEvent {
        &self.exception_set
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Probability for AlmostSureEvent {
    fn probability(&self) -> f64 {
        1.0
    }
}

/// Holds unconditionally; there is no exception set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SureEvent {
    description: String,
}

impl SureEvent {
    /// Creates the event.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Probability for SureEvent {
    fn probability(&self) -> f64 {
        1.0
    }
}

/// Any rare event the model verifier knows how to dispatch on.
#[derive(Debug, Clone)]
pub enum RareEvent {
    /// Point of a continuous law.
    Continuous(ContinuousZeroProbEvent),
    /// Off-support point of a discrete law.
    Discrete(DiscreteZeroProbEvent),
    /// Catastrophic tail region.
    BlackSwan(BlackSwanEvent),
    /// Exact-value wager.
    Betting(BettingEdgeCase),
}

impl RareEvent {
    /// Short name of the event kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RareEvent::Continuous(_) => "continuous",
            RareEvent::Discrete(_) => "discrete",
            RareEvent::BlackSwan(_) => "black_swan",
            RareEvent::Betting(_) => "betting",
        }
    }
}

impl Probability for RareEvent {
    fn probability(&self) -> f64 {
        match self {
            RareEvent::Continuous(e) => e.probability(),
            RareEvent::Discrete(e) => e.probability(),
            RareEvent::BlackSwan(e) => e.probability(),
            RareEvent::Betting(e) => e.probability(),
        }
    }
}

impl From<ContinuousZeroProbEvent> for RareEvent {
    fn from(event: ContinuousZeroProbEvent) -> Self {
        RareEvent::Continuous(event)
    }
}

impl From<DiscreteZeroProbEvent> for RareEvent {
    fn from(event: DiscreteZeroProbEvent) -> Self {
        RareEvent::Discrete(event)
    }
}

impl From<BlackSwanEvent> for RareEvent {
    fn from(event: BlackSwanEvent) -> Self {
        RareEvent::BlackSwan(event)
    }
}

impl From<BettingEdgeCase> for RareEvent {
    fn from(event: BettingEdgeCase) -> Self {
        RareEvent::Betting(event)
    }
}

impl From<ZeroProbEvent> for RareEvent {
    fn from(event: ZeroProbEvent) -> Self {
        match event {
            ZeroProbEvent::Continuous(e) => RareEvent::Continuous(e),
            ZeroProbEvent::Discrete(e) => RareEvent::Discrete(e),
        }
    }
}
