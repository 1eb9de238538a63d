//! Invoice aggregate and lifecycle
//!
//! An invoice is the billed amount for a contract over one cycle. It is
//! created by the valuation engine and is immutable afterwards except for
//! the single issued-to-cancelled transition.
//!
//! # State Machine
//!
//! - `Issued` (initial) -> `Cancelled` (terminal), via [`Invoice::cancel`]
//!
//! No other transitions exist. A corrected invoice for the same contract and
//! period is a new Invoice, never a mutated cancelled one. Cancellation
//! never changes the monetary fields; it only marks the invoice void for
//! future processing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DatePeriod, InvoiceId, Money};
use domain_contract::Contract;

use crate::error::BillingError;
use crate::surcharge::SurchargeBreakdown;

/// Invoice lifecycle status
///
/// The cancellation date lives inside the `Cancelled` variant, so a
/// cancellation date is present exactly when the invoice is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Invoice is active
    Issued,
    /// Invoice was voided
    Cancelled { cancellation_date: NaiveDate },
}

/// An invoice for one billing cycle of a contract
///
/// Carries the contract base value as a snapshot taken at emission,
/// decoupled from later plan repricing, and the three surcharge components
/// individually so consumers can audit the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    contract: Contract,
    contract_value: Money,
    consultation_surcharge: Money,
    surgery_surcharge: Money,
    age_surcharge: Money,
    emission_date: NaiveDate,
    due_date: NaiveDate,
    total_value: Money,
    status: InvoiceStatus,
}

impl Invoice {
    /// Assembles an issued invoice; only the valuation engine creates these
    pub(crate) fn issue(
        id: InvoiceId,
        contract: Contract,
        contract_value: Money,
        surcharges: SurchargeBreakdown,
        emission_date: NaiveDate,
        due_date: NaiveDate,
        total_value: Money,
    ) -> Self {
        Self {
            id,
            contract,
            contract_value,
            consultation_surcharge: surcharges.consultation,
            surgery_surcharge: surcharges.surgery,
            age_surcharge: surcharges.age,
            emission_date,
            due_date,
            total_value,
            status: InvoiceStatus::Issued,
        }
    }

    /// Returns the invoice ID
    pub fn id(&self) -> InvoiceId {
        self.id
    }

    /// Returns the contract snapshot this invoice bills
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Returns the contract base value snapshot
    pub fn contract_value(&self) -> Money {
        self.contract_value
    }

    /// Returns the consultation surcharge component
    pub fn consultation_surcharge(&self) -> Money {
        self.consultation_surcharge
    }

    /// Returns the surgery surcharge component
    pub fn surgery_surcharge(&self) -> Money {
        self.surgery_surcharge
    }

    /// Returns the age surcharge component
    pub fn age_surcharge(&self) -> Money {
        self.age_surcharge
    }

    /// Returns the emission date
    pub fn emission_date(&self) -> NaiveDate {
        self.emission_date
    }

    /// Returns the due date
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the cancellation date, if the invoice was cancelled
    pub fn cancellation_date(&self) -> Option<NaiveDate> {
        match self.status {
            InvoiceStatus::Issued => None,
            InvoiceStatus::Cancelled { cancellation_date } => Some(cancellation_date),
        }
    }

    /// Returns the computed total value
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Returns the lifecycle status
    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Returns true if the invoice was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, InvoiceStatus::Cancelled { .. })
    }

    /// Returns the emission-to-due billing window
    pub fn billing_period(&self) -> DatePeriod {
        DatePeriod {
            start: self.emission_date,
            end: Some(self.due_date),
        }
    }

    /// Cancels the invoice
    ///
    /// Allowed only from `Issued`. Status and cancellation date change
    /// together; the monetary fields are untouched.
    ///
    /// # Errors
    ///
    /// - `BillingError::AlreadyCancelled` if the invoice is terminal; the
    ///   first cancellation's state is left unchanged
    /// - `BillingError::InvalidCancellationDate` if the date precedes the
    ///   emission date
    pub fn cancel(&mut self, cancellation_date: NaiveDate) -> Result<(), BillingError> {
        if let InvoiceStatus::Cancelled {
            cancellation_date: cancelled_on,
        } = self.status
        {
            tracing::warn!(invoice_id = %self.id, %cancelled_on, "duplicate cancel attempt");
            return Err(BillingError::AlreadyCancelled {
                invoice_id: self.id,
                cancelled_on,
            });
        }

        if cancellation_date < self.emission_date {
            return Err(BillingError::InvalidCancellationDate {
                invoice_id: self.id,
                emission: self.emission_date,
                cancellation: cancellation_date,
            });
        }

        self.status = InvoiceStatus::Cancelled { cancellation_date };
        tracing::debug!(invoice_id = %self.id, %cancellation_date, "invoice cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, DependentId, PlanId};
    use domain_contract::{ContractBuilder, Dependent, Plan};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_invoice() -> Invoice {
        let plan = Plan::new(PlanId::new(), Money::new(dec!(1000.00), Currency::BRL)).unwrap();
        let contract = ContractBuilder::new()
            .add_dependent(Dependent::new(DependentId::new(), plan, date(1990, 1, 1)))
            .build()
            .unwrap();

        let surcharges = SurchargeBreakdown {
            consultation: Money::zero(Currency::BRL),
            surgery: Money::zero(Currency::BRL),
            age: Money::zero(Currency::BRL),
        };

        Invoice::issue(
            InvoiceId::new_v7(),
            contract,
            Money::new(dec!(1000.00), Currency::BRL),
            surcharges,
            date(2024, 3, 1),
            date(2024, 3, 31),
            Money::new(dec!(1000.00), Currency::BRL),
        )
    }

    #[test]
    fn test_issued_invoice_has_no_cancellation_date() {
        let invoice = test_invoice();
        assert_eq!(invoice.status(), InvoiceStatus::Issued);
        assert!(invoice.cancellation_date().is_none());
        assert!(!invoice.is_cancelled());
    }

    #[test]
    fn test_cancel_sets_status_and_date_together() {
        let mut invoice = test_invoice();
        invoice.cancel(date(2024, 3, 15)).unwrap();

        assert!(invoice.is_cancelled());
        assert_eq!(invoice.cancellation_date(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_cancel_on_emission_date_is_allowed() {
        let mut invoice = test_invoice();
        invoice.cancel(date(2024, 3, 1)).unwrap();
        assert!(invoice.is_cancelled());
    }

    #[test]
    fn test_cancel_before_emission_date_fails() {
        let mut invoice = test_invoice();
        let result = invoice.cancel(date(2024, 2, 29));

        assert!(matches!(
            result,
            Err(BillingError::InvalidCancellationDate { .. })
        ));
        assert!(!invoice.is_cancelled());
    }

    #[test]
    fn test_double_cancel_fails_and_preserves_first_state() {
        let mut invoice = test_invoice();
        invoice.cancel(date(2024, 3, 10)).unwrap();

        let result = invoice.cancel(date(2024, 3, 20));
        assert!(matches!(result, Err(BillingError::AlreadyCancelled { .. })));
        assert_eq!(invoice.cancellation_date(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_cancel_leaves_monetary_values_untouched() {
        let mut invoice = test_invoice();
        let total_before = invoice.total_value();

        invoice.cancel(date(2024, 3, 15)).unwrap();

        assert_eq!(invoice.total_value(), total_before);
        assert_eq!(invoice.contract_value().amount(), dec!(1000.00));
    }

    #[test]
    fn test_billing_period() {
        let invoice = test_invoice();
        let period = invoice.billing_period();

        assert!(period.contains(date(2024, 3, 15)));
        assert!(!period.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_invoice_serde_round_trip() {
        let mut invoice = test_invoice();
        invoice.cancel(date(2024, 3, 15)).unwrap();

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();

        assert_eq!(back, invoice);
        assert_eq!(back.cancellation_date(), Some(date(2024, 3, 15)));
    }
}
