//! Application layer containing the validate-then-process orchestration.
//!
//! This module defines the `PaymentService`, which binds a validation policy
//! to the payment processing step and runs the two as a single fail-fast
//! sequence.

pub mod service;
