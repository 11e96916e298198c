//! Zero-probability events, their relevance measures, and rare-event estimators.
//!
//! This crate provides:
//! - Event types for points of continuous laws, off-support points of
//!   discrete laws, catastrophic tail regions, and exact-value bets
//! - Relevance measures (density ratio, Hausdorff, ε-neighborhood) with
//!   exhaustive dispatch on closed tag enums
//! - Monte Carlo impact estimation for black swans, sequential or sharded
//! - Expected value of exact-hit bets under two approximations
//!
//! Core invariants:
//! - Events are immutable and share their law read-only
//! - A point of a continuous law has probability zero by construction
//! - A discrete event is only constructed on a point with zero mass
//! - Invalid arguments fail before any sampling starts
//!
//! ## Quick Start
//!
//! ```rust
//! use zeroprob_core::{relevance, ContinuousZeroProbEvent, MeasureTag, RelevanceParams};
//! use zeroprob_distributions::ContinuousLaw;
//!
//! let law = ContinuousLaw::normal(0.0, 1.0)?.shared();
//! let event = ContinuousZeroProbEvent::new(law, 0.0, MeasureTag::Density);
//! let score = relevance(&event, &RelevanceParams::default())?;
//! assert!((score - 0.398_942_28).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

/// Exact-hit betting and its expected value.
pub mod betting;
/// Black-swan tail events and Monte Carlo estimators.
pub mod black_swan;
/// Error types for core operations.
pub mod errors;
/// Event types.
pub mod events;
/// Relevance measures and application scores.
pub mod relevance;
/// Closed tag enums for measures, applications, and methods.
pub mod tags;

pub use betting::{expected_value, BettingEdgeCase};
pub use black_swan::{
    expected_impact, expected_impact_estimate, expected_impact_parallel, impact_severity,
    BlackSwanEvent, Impact, MarketCrashEvent, MonteCarloConfig, MonteCarloEstimate, Severity,
    StepImpact,
};
pub use errors::{ArgumentError, CoreError};
pub use events::{
    AlmostSureEvent, ContinuousZeroProbEvent, DiscreteZeroProbEvent, PointEvent, Probability,
    RareEvent, SureEvent, ZeroProbEvent,
};
pub use relevance::{
    density_ratio, epsilon_neighborhood, hausdorff_measure, relevance, relevance_score,
    RelevanceParams,
};
pub use tags::{Application, MeasureTag, Method};
