//! Checkout session state machine.
//!
//! Phases: `Idle -> Submitting(method) -> Finalizing -> Idle`.
//!
//! The submit button's disabled state is the only guard against double
//! submission; there is no request identifier or idempotency key because the
//! gateway is simulated. The simulated call cannot fail and is never
//! retried, so no error states are modeled.

use std::time::Duration;

use crate::model::PaymentMethod;

/// Simulated external-gateway roundtrip for PayPal.
pub const PAYPAL_GATEWAY_DELAY: Duration = Duration::from_millis(2500);
/// Simulated local card validation.
pub const CARD_GATEWAY_DELAY: Duration = Duration::from_millis(1500);
/// Grace period for the confirmation view's markup to exist before the
/// order number is written into it.
pub const CONFIRMATION_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Returns the simulated gateway latency for a payment method.
pub fn gateway_delay(method: PaymentMethod) -> Duration {
    match method {
        PaymentMethod::PayPal => PAYPAL_GATEWAY_DELAY,
        PaymentMethod::Card => CARD_GATEWAY_DELAY,
    }
}

/// In-progress label shown on the locked submit button.
pub fn in_progress_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::PayPal => "Connecting to PayPal...",
        PaymentMethod::Card => "Processing secure payment...",
    }
}

/// Where the current submission attempt is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    /// Submit button locked, gateway timer outstanding.
    Submitting(PaymentMethod),
    /// Gateway answered; confirmation view loading, number injection pending.
    Finalizing,
}

impl CheckoutPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, CheckoutPhase::Idle)
    }
}

/// Transient state of one payment submission attempt.
///
/// Exists only between the payment-form submit and the completion of
/// finalization. The original button label is stashed but never restored:
/// the confirmation view replaces the whole form, so the button's terminal
/// state is moot.
#[derive(Debug, Default)]
pub struct CheckoutSession {
    phase: CheckoutPhase,
    original_label: Option<String>,
}

impl CheckoutSession {
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// `Idle -> Submitting`. Returns `false` (no transition) if a submission
    /// is already in flight.
    pub fn try_begin(&mut self, method: PaymentMethod, original_label: Option<String>) -> bool {
        if !self.phase.is_idle() {
            return false;
        }
        self.phase = CheckoutPhase::Submitting(method);
        self.original_label = original_label;
        true
    }

    /// `Submitting -> Finalizing`. Returns the method, or `None` if no
    /// submission was in flight (stray gateway completion).
    pub fn begin_finalizing(&mut self) -> Option<PaymentMethod> {
        match self.phase {
            CheckoutPhase::Submitting(method) => {
                self.phase = CheckoutPhase::Finalizing;
                Some(method)
            }
            _ => None,
        }
    }

    /// `Finalizing -> Idle`. Returns the stashed original button label.
    pub fn complete(&mut self) -> Option<String> {
        self.phase = CheckoutPhase::Idle;
        self.original_label.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_is_rejected_while_in_flight() {
        let mut session = CheckoutSession::default();
        assert!(session.try_begin(PaymentMethod::Card, Some("Pay now".into())));
        assert!(!session.try_begin(PaymentMethod::PayPal, None));
        assert_eq!(session.phase(), CheckoutPhase::Submitting(PaymentMethod::Card));
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let mut session = CheckoutSession::default();
        session.try_begin(PaymentMethod::PayPal, Some("Pay now".into()));
        assert_eq!(session.begin_finalizing(), Some(PaymentMethod::PayPal));
        assert_eq!(session.complete(), Some("Pay now".into()));
        assert!(session.phase().is_idle());
        // A fresh submission is possible again.
        assert!(session.try_begin(PaymentMethod::Card, None));
    }

    #[test]
    fn stray_gateway_completion_is_dropped() {
        let mut session = CheckoutSession::default();
        assert_eq!(session.begin_finalizing(), None);
        assert!(session.phase().is_idle());
    }

    #[test]
    fn delays_are_method_specific() {
        assert_eq!(gateway_delay(PaymentMethod::PayPal), Duration::from_millis(2500));
        assert_eq!(gateway_delay(PaymentMethod::Card), Duration::from_millis(1500));
    }
}
