use crate::domain::payment::{Payment, create_payment};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// A single `kind,amount` record as it appears on the wire.
///
/// The kind stays a plain string here so that unrecognized labels surface as
/// factory errors rather than deserialization errors.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    kind: String,
    amount: Decimal,
}

/// Reads payment requests from a CSV source.
///
/// Wraps `csv::Reader` over any `Read` source, trims whitespace, and runs
/// each record through the payment factory. Each row yields its own
/// `Result`, so one bad row does not poison the stream.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes, and constructs
    /// payments.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize()
            .map(|record: std::result::Result<PaymentRecord, csv::Error>| {
                let record = record.map_err(PaymentError::from)?;
                create_payment(&record.kind, record.amount)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "kind, amount\nCARD, 100.0\nCRYPTO, 0.5";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<Payment>> = reader.payments().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.kind(), PaymentKind::Card);
        assert_eq!(first.amount(), dec!(100.0));
        assert_eq!(results[1].as_ref().unwrap().kind(), PaymentKind::Crypto);
    }

    #[test]
    fn test_reader_unknown_kind_fails_per_row() {
        let data = "kind, amount\nBANK, 100.0\nCARD, 1.0";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<Payment>> = reader.payments().collect();

        assert!(matches!(
            results[0].as_ref(),
            Err(PaymentError::UnknownKind(kind)) if kind == "BANK"
        ));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_malformed_amount() {
        let data = "kind, amount\nCARD, not_a_number";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<Payment>> = reader.payments().collect();

        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
    }
}
