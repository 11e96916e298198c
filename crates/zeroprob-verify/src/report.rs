use serde::Serialize;
use thiserror::Error;

/// Verification verdict: explicit outcome of verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every tested sample was handled.
    Pass,
    /// The model faulted on a sample.
    Fail,
}

/// How the model failed on a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FaultKind {
    /// The model returned an empty result.
    EmptyResult,
    /// The model returned an error.
    Error {
        /// Rendered error.
        detail: String,
    },
    /// The model panicked.
    Panic {
        /// Panic message, when it was a string.
        detail: String,
    },
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultKind::EmptyResult => f.write_str("returned an empty result"),
            FaultKind::Error { detail } => write!(f, "returned an error: {}", detail),
            FaultKind::Panic { detail } => write!(f, "panicked: {}", detail),
        }
    }
}

/// The model failed to handle a sample.
///
/// Carries the offending value so the failure can be reproduced.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("model fault at sample {sample}: {kind}")]
pub struct ModelFault {
    /// Sampled value the model was evaluated on.
    pub sample: f64,
    /// What went wrong.
    pub kind: FaultKind,
}

/// Advisory record attached to a report; never changes the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The tail below the threshold has zero probability; nothing was sampled.
    EmptyTail {
        /// Threshold of the black swan.
        threshold: f64,
    },
    /// Neighborhood sampling ran out of attempts before reaching its target.
    Undersampled {
        /// Samples requested.
        requested: usize,
        /// Samples accepted and tested.
        accepted: usize,
        /// Draws spent.
        attempts: usize,
    },
    /// No dedicated check exists for this event kind.
    NoSpecificCheck {
        /// Event kind name.
        event_kind: &'static str,
    },
}

/// Outcome of verifying a model against one or more rare events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// Overall verdict.
    pub verdict: Verdict,
    /// Number of model invocations, including a failing one.
    pub samples_tested: usize,
    /// Advisory diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// The fault that failed verification, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<ModelFault>,
}

impl VerificationReport {
    /// Passing report after `samples_tested` handled samples.
    pub fn pass(samples_tested: usize) -> Self {
        Self {
            verdict: Verdict::Pass,
            samples_tested,
            diagnostics: Vec::new(),
            fault: None,
        }
    }

    /// Failing report; `samples_tested` includes the faulting call.
    pub fn fail(fault: ModelFault, samples_tested: usize) -> Self {
        Self {
            verdict: Verdict::Fail,
            samples_tested,
            diagnostics: Vec::new(),
            fault: Some(fault),
        }
    }

    /// Attaches a diagnostic.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Returns true when the verdict is [`Verdict::Pass`].
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// Returns true when the verdict rests on at least one model call.
    ///
    /// A pass with zero samples tested means the model was never exercised,
    /// which is not the same as the model handling every sample.
    pub fn is_conclusive(&self) -> bool {
        self.verdict == Verdict::Fail || self.samples_tested > 0
    }

    /// Folds another report into this one.
    ///
    /// The merged verdict passes only if both pass; the first fault wins.
    pub fn merge(mut self, other: VerificationReport) -> Self {
        if other.verdict == Verdict::Fail {
            self.verdict = Verdict::Fail;
        }
        self.samples_tested += other.samples_tested;
        self.diagnostics.extend(other.diagnostics);
        if self.fault.is_none() {
            self.fault = other.fault;
        }
        self
    }
}
