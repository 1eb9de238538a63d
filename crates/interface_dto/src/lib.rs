//! Boundary DTOs for the billing engine
//!
//! Wire shapes exchanged with request-handling and persistence
//! collaborators, kept strictly apart from the domain values: every DTO is
//! connected to its domain counterpart by pure, total conversion functions
//! (`to_model` / `from_model`) with no side effects. The wire format uses
//! the system's established Portuguese field names.

pub mod contract;
pub mod error;
pub mod invoice;

pub use contract::{ContractDto, DependentDto, PlanDto, ProcedureDto, SurgeryDto};
pub use error::DtoError;
pub use invoice::{
    InvoiceDataDto, InvoiceDetailsDto, InvoiceStatusDto, InvoiceSummaryDto, IssueInvoiceRequest,
};

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;

/// Fixed currency of all monetary wire values
pub const WIRE_CURRENCY: Currency = Currency::BRL;

/// Renders a monetary value at the currency's standard scale
///
/// Keeps wire output stable regardless of the internal scale (`0` becomes
/// `0.00`).
pub(crate) fn wire_amount(money: Money) -> Decimal {
    let mut amount = money.amount();
    amount.rescale(money.currency().decimal_places());
    amount
}
