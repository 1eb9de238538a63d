//! Billing Domain - Invoice Valuation and Lifecycle
//!
//! This crate implements the billing rules for health-plan contracts: an
//! invoice's total value is the contract base value plus three surcharge
//! components derived from the contract's composition, and an issued
//! invoice can move through exactly one lifecycle transition, to cancelled.
//!
//! # Valuation
//!
//! - Consultation surcharge: fixed amount when any procedure is covered
//! - Surgery surcharge: fixed amount when any surgery is covered
//! - Age surcharge: per-dependent amount for each dependent older than the
//!   configured threshold at the emission date
//!
//! The engine is a pure, synchronous computation library: every input is
//! explicit (contract snapshot, base value, dates, schedule) and every
//! output is a new value, so calls are safe from any number of concurrent
//! contexts without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{SurchargeSchedule, ValuationService};
//!
//! let service = ValuationService::new(schedule);
//! let mut invoice = service.valuate(&contract, base_value, emission, due)?;
//! invoice.cancel(cancellation_date)?;
//! ```

pub mod error;
pub mod invoice;
pub mod surcharge;
pub mod valuation;

pub use error::BillingError;
pub use invoice::{Invoice, InvoiceStatus};
pub use surcharge::{SurchargeBreakdown, SurchargeCalculator, SurchargeSchedule};
pub use valuation::ValuationService;
