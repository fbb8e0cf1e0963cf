use super::payment::Payment;
use rust_decimal::Decimal;

/// Decides whether a payment is acceptable before it is processed.
///
/// Implementations are pure predicates over the payment's amount; they hold
/// no mutable state and emit no side effects.
pub trait ValidatePayment {
    fn validate(&self, payment: &Payment) -> bool;
}

/// A validation policy selected at runtime.
pub type PolicyBox = Box<dyn ValidatePayment>;

impl ValidatePayment for PolicyBox {
    fn validate(&self, payment: &Payment) -> bool {
        self.as_ref().validate(payment)
    }
}

/// Any plain predicate function satisfies the validator contract.
impl<F> ValidatePayment for F
where
    F: Fn(&Payment) -> bool,
{
    fn validate(&self, payment: &Payment) -> bool {
        self(payment)
    }
}

/// Accepts any strictly positive amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPolicy;

impl ValidatePayment for DefaultPolicy {
    fn validate(&self, payment: &Payment) -> bool {
        payment.amount() > Decimal::ZERO
    }
}

/// Accepts strictly positive amounts below an upper limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedPolicy {
    limit: Decimal,
}

impl BoundedPolicy {
    pub fn new(limit: Decimal) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }
}

impl Default for BoundedPolicy {
    /// The stock upper limit of 10 000.
    fn default() -> Self {
        Self::new(Decimal::from(10_000))
    }
}

impl ValidatePayment for BoundedPolicy {
    fn validate(&self, payment: &Payment) -> bool {
        payment.amount() > Decimal::ZERO && payment.amount() < self.limit
    }
}
