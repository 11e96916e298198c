//! Distribution adapter primitives for zeroprob.
//!
//! Every computation in the workspace reads a probability law through the
//! narrow [`Distribution`] contract defined here. Concrete laws come from
//! `statrs` and are wrapped by [`ContinuousLaw`] and [`DiscreteLaw`].
//!
//! Core invariants:
//! - An adapter represents a single fixed law and is immutable once built
//! - Adapters are stateless; randomness is always supplied by the caller
//! - `cumulative` is non-decreasing and stays within `[0, 1]`
//!
#![deny(missing_docs)]

/// The adapter contract and shared handle type.
pub mod adapter;
/// Adapters over `statrs` continuous laws.
pub mod continuous;
/// Adapters over `statrs` discrete laws.
pub mod discrete;
/// Error types for adapter construction.
pub mod errors;

pub use adapter::{Distribution, DistributionRef};
pub use continuous::ContinuousLaw;
pub use discrete::DiscreteLaw;
pub use errors::DistributionError;
