//! Billing domain errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{InvoiceId, MoneyError};

/// Errors that can occur in the billing domain
///
/// All variants represent invalid caller input surfaced synchronously at the
/// point of violation; none are transient. Variants carry the entity id and
/// the offending values so callers can report a user-facing message.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Due date precedes emission date at valuation time
    #[error("Due date {due} precedes emission date {emission}")]
    InvalidDateRange { emission: NaiveDate, due: NaiveDate },

    /// Cancellation attempted on a terminal invoice
    #[error("Invoice {invoice_id} was already cancelled on {cancelled_on}")]
    AlreadyCancelled {
        invoice_id: InvoiceId,
        cancelled_on: NaiveDate,
    },

    /// Cancellation date precedes emission date
    #[error(
        "Cancellation date {cancellation} precedes emission date {emission} of invoice {invoice_id}"
    )]
    InvalidCancellationDate {
        invoice_id: InvoiceId,
        emission: NaiveDate,
        cancellation: NaiveDate,
    },

    /// Contract base value supplied to valuation is negative
    #[error("Contract base value {value} is negative")]
    NegativeBaseValue { value: Decimal },

    /// Surcharge schedule configuration is invalid
    #[error("Invalid surcharge schedule: {0}")]
    Schedule(String),

    /// Monetary arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
