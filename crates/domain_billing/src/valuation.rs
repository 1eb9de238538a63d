//! Invoice valuation
//!
//! Assembles an invoice from a contract snapshot: the supplied contract base
//! value plus the surcharge components derived from the contract's
//! composition as of the emission date.

use chrono::NaiveDate;
use tracing::instrument;

use core_kernel::{DatePeriod, InvoiceId, Money};
use domain_contract::Contract;

use crate::error::BillingError;
use crate::invoice::Invoice;
use crate::surcharge::{SurchargeCalculator, SurchargeSchedule};

/// Domain service that values contracts into issued invoices
///
/// Pure and synchronous: no clock, no I/O, no retained mutable state. The
/// service holds only the immutable surcharge schedule, so one instance may
/// be shared freely across callers.
#[derive(Debug, Clone)]
pub struct ValuationService {
    calculator: SurchargeCalculator,
}

impl ValuationService {
    /// Creates a valuation service over the given schedule
    pub fn new(schedule: SurchargeSchedule) -> Self {
        Self {
            calculator: SurchargeCalculator::new(schedule),
        }
    }

    /// Returns the schedule in use
    pub fn schedule(&self) -> &SurchargeSchedule {
        self.calculator.schedule()
    }

    /// Values a contract into an issued invoice
    ///
    /// Computes the three surcharge components as of the emission date and
    /// sums them with the contract base value. The returned invoice is in
    /// `Issued` status with no cancellation date and preserves each
    /// component individually.
    ///
    /// Valuation is idempotent over monetary values: identical inputs yield
    /// identical amounts. The invoice id is a fresh time-ordered UUID; the
    /// persisting collaborator decides whether to adopt it.
    ///
    /// # Errors
    ///
    /// - `BillingError::InvalidDateRange` if the due date precedes the
    ///   emission date
    /// - `BillingError::NegativeBaseValue` if the base value is negative
    /// - `BillingError::Money` on a currency mismatch between the base value
    ///   and the schedule
    #[instrument(skip(self, contract), fields(contract_id = %contract.id()))]
    pub fn valuate(
        &self,
        contract: &Contract,
        contract_base_value: Money,
        emission_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<Invoice, BillingError> {
        DatePeriod::new(emission_date, Some(due_date)).map_err(|_| {
            BillingError::InvalidDateRange {
                emission: emission_date,
                due: due_date,
            }
        })?;

        if contract_base_value.is_negative() {
            return Err(BillingError::NegativeBaseValue {
                value: contract_base_value.amount(),
            });
        }

        let surcharges = self.calculator.calculate(contract, emission_date);
        let total_value = contract_base_value.checked_add(&surcharges.total()?)?;

        tracing::debug!(
            total = %total_value,
            consultation = %surcharges.consultation,
            surgery = %surcharges.surgery,
            age = %surcharges.age,
            "contract valuated"
        );

        Ok(Invoice::issue(
            InvoiceId::new_v7(),
            contract.clone(),
            contract_base_value,
            surcharges,
            emission_date,
            due_date,
            total_value,
        ))
    }
}
