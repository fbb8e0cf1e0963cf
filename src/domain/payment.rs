use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The closed set of supported payment kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PaymentKind {
    Card,
    Crypto,
}

impl PaymentKind {
    /// Lowercase label used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Card => "card",
            PaymentKind::Crypto => "crypto",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = PaymentError;

    /// Dispatch is an exact match over the uppercase wire labels.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CARD" => Ok(PaymentKind::Card),
            "CRYPTO" => Ok(PaymentKind::Crypto),
            other => Err(PaymentError::UnknownKind(other.to_string())),
        }
    }
}

/// A single payment request.
///
/// The amount is fixed at construction and carries no range restriction of
/// its own; whether an amount is acceptable is a policy decision made
/// outside the payment (see [`crate::domain::policy`]).
#[derive(Debug, PartialEq, Clone)]
pub struct Payment {
    kind: PaymentKind,
    amount: Decimal,
}

impl Payment {
    pub fn new(kind: PaymentKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Runs the kind-specific processing step and returns its outcome.
    ///
    /// Processing itself never fails; the flag it returns is the success
    /// indicator the orchestrator surfaces to its caller.
    pub fn process(&self) -> bool {
        match self.kind {
            PaymentKind::Card => info!(amount = %self.amount, "processing card payment"),
            PaymentKind::Crypto => info!(amount = %self.amount, "processing crypto payment"),
        }
        true
    }
}

/// Creates the payment variant matching the given kind label.
///
/// Unknown labels are reported back to the caller as
/// [`PaymentError::UnknownKind`] rather than handled here.
pub fn create_payment(kind: &str, amount: Decimal) -> Result<Payment> {
    Ok(Payment::new(kind.parse()?, amount))
}
