use crate::domain::payment::Payment;
use crate::domain::policy::ValidatePayment;
use tracing::{info, warn};

/// The entry point for accepting payments.
///
/// `PaymentService` binds one validation policy for its lifetime and runs
/// each submitted payment through a synchronous, single-pass sequence:
/// validate, then process. It keeps no state across calls.
pub struct PaymentService<V: ValidatePayment> {
    validator: V,
}

impl<V: ValidatePayment> PaymentService<V> {
    /// Creates a service bound to the given validation policy.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Submits a payment for validation and processing.
    ///
    /// Returns `false` as soon as the bound policy rejects the payment; the
    /// processing step is never reached in that case. Rejection is a normal
    /// outcome, not an error. When the policy accepts, returns the result of
    /// [`Payment::process`].
    pub fn execute(&self, payment: &Payment) -> bool {
        info!(kind = %payment.kind(), amount = %payment.amount(), "payment received");

        if !self.validator.validate(payment) {
            warn!(kind = %payment.kind(), amount = %payment.amount(), "validation rejected");
            return false;
        }

        let result = payment.process();
        info!(result, "payment settled");
        result
    }
}
