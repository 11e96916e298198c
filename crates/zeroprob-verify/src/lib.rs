//! Sampling-based verification of decision models against rare inputs.
//!
//! This crate provides:
//! - The [`Model`] contract for opaque decision or scoring callables
//! - Tail sampling for black swans via restricted inverse transform
//! - Bounded rejection sampling around zero-probability points and bets
//! - Structured reports carrying the verdict, the offending sample on
//!   failure, and advisory diagnostics
//!
//! Core invariants:
//! - A model fault (error, empty result, or panic) fails verification
//!   immediately; there are no retries
//! - Insufficient rare-sample yield never fails verification; it is
//!   reported as a diagnostic instead
//! - Neighborhood sampling always terminates within its attempt budget
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use zeroprob_core::{ContinuousZeroProbEvent, MeasureTag, RareEvent};
//! use zeroprob_distributions::ContinuousLaw;
//! use zeroprob_verify::{ModelVerifier, VerifierConfig};
//!
//! let law = ContinuousLaw::normal(0.0, 1.0)?.shared();
//! let events: Vec<RareEvent> = vec![
//!     ContinuousZeroProbEvent::new(law.clone(), 0.0, MeasureTag::Epsilon).into(),
//!     ContinuousZeroProbEvent::new(law, 1.0, MeasureTag::Epsilon).into(),
//! ];
//! let model = |x: f64| Ok::<_, String>(Some(x.tanh()));
//!
//! let verifier = ModelVerifier::new(VerifierConfig::default())?;
//! let report = verifier.handles_zero_prob_events(&model, &events, &mut StdRng::seed_from_u64(7));
//! assert!(report.passed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

/// Verifier options.
pub mod config;
/// Error types for verifier construction.
pub mod errors;
/// Model contract and fault boundary.
pub mod model;
/// Verdicts, faults, diagnostics, and reports.
pub mod report;
/// The model verifier.
pub mod verifier;

pub use config::VerifierConfig;
pub use errors::VerifyError;
pub use model::Model;
pub use report::{Diagnostic, FaultKind, ModelFault, Verdict, VerificationReport};
pub use verifier::ModelVerifier;
