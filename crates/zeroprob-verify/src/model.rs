use crate::report::{FaultKind, ModelFault};
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

/// An opaque decision or scoring model under test.
///
/// `Ok(Some(_))` means the model handled the sample. `Ok(None)` (an empty
/// result), `Err(_)`, and a panic all count as the model failing on it.
pub trait Model {
    /// Result produced for a handled sample.
    type Output;
    /// Fault signaled by the model.
    type Error: Display;

    /// Evaluates the model on one sampled value.
    fn evaluate(&self, x: f64) -> Result<Option<Self::Output>, Self::Error>;
}

impl<F, T, E> Model for F
where
    F: Fn(f64) -> Result<Option<T>, E>,
    E: Display,
{
    type Output = T;
    type Error = E;

    fn evaluate(&self, x: f64) -> Result<Option<T>, E> {
        self(x)
    }
}

/// Runs the model on one sample inside a fault boundary.
///
/// Only the model call itself is wrapped; panics anywhere else propagate.
pub(crate) fn invoke<M: Model + ?Sized>(model: &M, sample: f64) -> Result<(), ModelFault> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| model.evaluate(sample)));
    let kind = match outcome {
        Ok(Ok(Some(_))) => return Ok(()),
        Ok(Ok(None)) => FaultKind::EmptyResult,
        Ok(Err(e)) => FaultKind::Error {
            detail: e.to_string(),
        },
        Err(payload) => FaultKind::Panic {
            detail: panic_message(payload.as_ref()),
        },
    };
    Err(ModelFault { sample, kind })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
