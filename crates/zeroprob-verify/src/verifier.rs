use crate::config::VerifierConfig;
use crate::errors::VerifyError;
use crate::model::{invoke, Model};
use crate::report::{Diagnostic, VerificationReport};
use rand::Rng;
use tracing::{debug, warn};
use zeroprob_core::{BlackSwanEvent, PointEvent, RareEvent};

/// Verifier for checking a model's behavior on rare inputs.
///
/// Draws samples concentrated in a black swan's tail or around a
/// zero-probability point and checks the model handles each one. Testing
/// is fail-fast: the first fault ends verification with a failing report.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use zeroprob_core::{MarketCrashEvent, Severity};
/// use zeroprob_verify::ModelVerifier;
///
/// let crash = MarketCrashEvent::new(1_000_000.0, Severity::High).build()?;
/// let hedge = |x: f64| Ok::<_, String>(Some(x.max(-0.2)));
///
/// let verifier = ModelVerifier::default();
/// let report = verifier.handles_black_swan(&hedge, &crash, &mut StdRng::seed_from_u64(1));
/// assert!(report.passed());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelVerifier {
    config: VerifierConfig,
}

impl ModelVerifier {
    /// Creates a verifier, rejecting invalid options up front.
    pub fn new(config: VerifierConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active options.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Tests the model on samples drawn from the black swan's tail.
    ///
    /// Uses inverse-transform sampling restricted to the tail: `u` is drawn
    /// uniformly from `[0, P(X <= threshold))` and mapped through the
    /// quantile function, so every draw lands in the catastrophic region.
    /// A tail with zero probability cannot be sampled; that case passes with
    /// an [`Diagnostic::EmptyTail`] diagnostic.
    pub fn handles_black_swan<M, R>(
        &self,
        model: &M,
        event: &BlackSwanEvent,
        rng: &mut R,
    ) -> VerificationReport
    where
        M: Model + ?Sized,
        R: Rng,
    {
        let law = event.distribution();
        let tail_prob = law.cumulative(event.threshold());
        if !(tail_prob > 0.0) {
            warn!(threshold = event.threshold(), "tail has zero probability; nothing to test");
            return VerificationReport::pass(0).with_diagnostic(Diagnostic::EmptyTail {
                threshold: event.threshold(),
            });
        }

        let num_samples = self.config.num_samples;
        debug!(num_samples, tail_prob, "sampling black swan tail");
        for tested in 1..=num_samples {
            let u = rng.gen::<f64>() * tail_prob;
            let sample = law.quantile(u);
            if let Err(fault) = invoke(model, sample) {
                warn!(%fault, "model failed on tail sample");
                return VerificationReport::fail(fault, tested);
            }
        }
        VerificationReport::pass(num_samples)
    }

    /// Tests the model on draws landing within ε of the event's point.
    ///
    /// Rejection sampling from the event's own law, bounded by
    /// [`VerifierConfig::attempt_budget`]. Running out of attempts is
    /// advisory only: the report still passes, with an
    /// [`Diagnostic::Undersampled`] diagnostic.
    fn handles_neighborhood<M, E, R>(
        &self,
        model: &M,
        event: &E,
        rng: &mut R,
    ) -> VerificationReport
    where
        M: Model + ?Sized,
        E: PointEvent + ?Sized,
        R: Rng,
    {
        let law = event.distribution();
        let target = event.point();
        let epsilon = self.config.epsilon;
        let requested = self.config.num_samples;
        let budget = self.config.attempt_budget();
        debug!(target, epsilon, requested, budget, "sampling neighborhood");

        let mut accepted = 0;
        let mut attempts = 0;
        while accepted < requested && attempts < budget {
            attempts += 1;
            let sample = law.sample(rng);
            if (sample - target).abs() >= epsilon {
                continue;
            }
            if let Err(fault) = invoke(model, sample) {
                warn!(%fault, "model failed on neighborhood sample");
                return VerificationReport::fail(fault, accepted + 1);
            }
            accepted += 1;
        }

        let report = VerificationReport::pass(accepted);
        if accepted < requested {
            warn!(accepted, requested, attempts, "attempt budget exhausted");
            return report.with_diagnostic(Diagnostic::Undersampled {
                requested,
                accepted,
                attempts,
            });
        }
        report
    }

    /// Tests the model against one rare event, dispatching on its kind.
    ///
    /// Black swans sample their tail; continuous points and bets sample an
    /// ε-neighborhood of their target. Discrete events have no dedicated
    /// check and pass with a [`Diagnostic::NoSpecificCheck`] diagnostic.
    pub fn handles_zero_prob_event<M, R>(
        &self,
        model: &M,
        event: &RareEvent,
        rng: &mut R,
    ) -> VerificationReport
    where
        M: Model + ?Sized,
        R: Rng,
    {
        match event {
            RareEvent::BlackSwan(e) => self.handles_black_swan(model, e, rng),
            RareEvent::Continuous(e) => self.handles_neighborhood(model, e, rng),
            RareEvent::Betting(e) => self.handles_neighborhood(model, e, rng),
            RareEvent::Discrete(_) => {
                debug!(event_kind = event.kind(), "no specific check for event kind");
                VerificationReport::pass(0).with_diagnostic(Diagnostic::NoSpecificCheck {
                    event_kind: event.kind(),
                })
            }
        }
    }

    /// Tests the model against every event; passes only if all pass.
    ///
    /// Stops at the first failing event. The report accumulates sample
    /// counts and diagnostics of every event evaluated.
    pub fn handles_zero_prob_events<M, R>(
        &self,
        model: &M,
        events: &[RareEvent],
        rng: &mut R,
    ) -> VerificationReport
    where
        M: Model + ?Sized,
        R: Rng,
    {
        let mut report = VerificationReport::pass(0);
        for event in events {
            report = report.merge(self.handles_zero_prob_event(model, event, rng));
            if !report.passed() {
                break;
            }
        }
        report
    }
}
