//! Core Kernel - Foundational types for the health-plan billing engine
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar-date handling with explicit as-of semantics
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{ContractId, DependentId, InvoiceId, PlanId, ProcedureId, SurgeryId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{age_in_years, DatePeriod, TemporalError};
