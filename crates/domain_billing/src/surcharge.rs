//! Surcharge calculation
//!
//! Derives the additional-charge components of an invoice from a contract's
//! composition: a fixed consultation amount when any procedure is covered, a
//! fixed surgery amount when any surgery is covered, and a per-dependent
//! amount for each dependent older than the configured threshold.
//!
//! The calculator is a pure function of the contract and an explicit as-of
//! date; identical inputs always produce identical results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use domain_contract::Contract;

use crate::error::BillingError;

/// Injected surcharge configuration
///
/// Amounts are fixed per contract (consultation, surgery) or per qualifying
/// dependent (age). The engine consumes an immutable snapshot of this
/// configuration per call; loading and refreshing it is the caller's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeSchedule {
    consultation_amount: Money,
    surgery_amount: Money,
    age_amount: Money,
    age_threshold_years: u32,
}

impl SurchargeSchedule {
    /// Creates a schedule, validating the configured amounts
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Schedule` if any amount is negative or the
    /// amounts mix currencies.
    pub fn new(
        consultation_amount: Money,
        surgery_amount: Money,
        age_amount: Money,
        age_threshold_years: u32,
    ) -> Result<Self, BillingError> {
        for (name, amount) in [
            ("consultation", consultation_amount),
            ("surgery", surgery_amount),
            ("age", age_amount),
        ] {
            if amount.is_negative() {
                return Err(BillingError::Schedule(format!(
                    "{} surcharge amount {} is negative",
                    name,
                    amount.amount()
                )));
            }
        }

        let currency = consultation_amount.currency();
        if surgery_amount.currency() != currency || age_amount.currency() != currency {
            return Err(BillingError::Schedule(
                "surcharge amounts mix currencies".to_string(),
            ));
        }

        Ok(Self {
            consultation_amount,
            surgery_amount,
            age_amount,
            age_threshold_years,
        })
    }

    /// Returns the per-contract consultation surcharge amount
    pub fn consultation_amount(&self) -> Money {
        self.consultation_amount
    }

    /// Returns the per-contract surgery surcharge amount
    pub fn surgery_amount(&self) -> Money {
        self.surgery_amount
    }

    /// Returns the per-qualifying-dependent age surcharge amount
    pub fn age_amount(&self) -> Money {
        self.age_amount
    }

    /// Returns the age threshold in whole years
    pub fn age_threshold_years(&self) -> u32 {
        self.age_threshold_years
    }

    /// Returns the currency all schedule amounts share
    pub fn currency(&self) -> Currency {
        self.consultation_amount.currency()
    }
}

/// The three surcharge components of one valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeBreakdown {
    /// Consultation surcharge (procedures covered)
    pub consultation: Money,
    /// Surgery surcharge (surgeries covered)
    pub surgery: Money,
    /// Age surcharge (dependents above the threshold)
    pub age: Money,
}

impl SurchargeBreakdown {
    /// Sums the three components
    pub fn total(&self) -> Result<Money, BillingError> {
        Ok(self.consultation.checked_add(&self.surgery)?.checked_add(&self.age)?)
    }
}

/// Computes surcharge components from a contract's composition
#[derive(Debug, Clone)]
pub struct SurchargeCalculator {
    schedule: SurchargeSchedule,
}

impl SurchargeCalculator {
    /// Creates a calculator over the given schedule
    pub fn new(schedule: SurchargeSchedule) -> Self {
        Self { schedule }
    }

    /// Returns the schedule in use
    pub fn schedule(&self) -> &SurchargeSchedule {
        &self.schedule
    }

    /// Calculates the surcharge components for a contract
    ///
    /// Ages are computed in whole years at the given as-of date (the
    /// invoice's emission date). Every dependent above the threshold
    /// contributes one age amount; there is no cap.
    pub fn calculate(&self, contract: &Contract, as_of: NaiveDate) -> SurchargeBreakdown {
        let currency = self.schedule.currency();

        let consultation = if contract.has_procedures() {
            self.schedule.consultation_amount
        } else {
            Money::zero(currency)
        };

        let surgery = if contract.has_surgeries() {
            self.schedule.surgery_amount
        } else {
            Money::zero(currency)
        };

        let over_threshold = contract
            .dependents()
            .iter()
            .filter(|d| d.age_at(as_of) > self.schedule.age_threshold_years)
            .count();
        let age = self
            .schedule
            .age_amount
            .multiply(Decimal::from(over_threshold));

        SurchargeBreakdown {
            consultation,
            surgery,
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{DependentId, PlanId, ProcedureId, SurgeryId};
    use domain_contract::{ContractBuilder, Dependent, Plan, Procedure, Surgery};
    use rust_decimal_macros::dec;

    fn schedule() -> SurchargeSchedule {
        SurchargeSchedule::new(
            Money::new(dec!(30.00), Currency::BRL),
            Money::new(dec!(120.00), Currency::BRL),
            Money::new(dec!(50.00), Currency::BRL),
            65,
        )
        .unwrap()
    }

    fn dependent_born(year: i32) -> Dependent {
        let plan = Plan::new(PlanId::new(), Money::new(dec!(1000.00), Currency::BRL)).unwrap();
        Dependent::new(
            DependentId::new(),
            plan,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_schedule_rejects_negative_amount() {
        let result = SurchargeSchedule::new(
            Money::new(dec!(-30.00), Currency::BRL),
            Money::zero(Currency::BRL),
            Money::zero(Currency::BRL),
            65,
        );
        assert!(matches!(result, Err(BillingError::Schedule(_))));
    }

    #[test]
    fn test_schedule_rejects_mixed_currencies() {
        let result = SurchargeSchedule::new(
            Money::new(dec!(30.00), Currency::BRL),
            Money::new(dec!(120.00), Currency::USD),
            Money::new(dec!(50.00), Currency::BRL),
            65,
        );
        assert!(matches!(result, Err(BillingError::Schedule(_))));
    }

    #[test]
    fn test_no_members_no_surcharges() {
        let contract = ContractBuilder::new()
            .add_dependent(dependent_born(1990))
            .build()
            .unwrap();

        let breakdown = SurchargeCalculator::new(schedule()).calculate(&contract, as_of());

        assert!(breakdown.consultation.is_zero());
        assert!(breakdown.surgery.is_zero());
        assert!(breakdown.age.is_zero());
    }

    #[test]
    fn test_consultation_applies_once_per_contract() {
        let contract = ContractBuilder::new()
            .add_procedure(Procedure::new(ProcedureId::new()))
            .add_procedure(Procedure::new(ProcedureId::new()))
            .add_dependent(dependent_born(1990))
            .build()
            .unwrap();

        let breakdown = SurchargeCalculator::new(schedule()).calculate(&contract, as_of());

        assert_eq!(breakdown.consultation.amount(), dec!(30.00));
    }

    #[test]
    fn test_surgery_surcharge() {
        let contract = ContractBuilder::new()
            .add_surgery(Surgery::new(SurgeryId::new()))
            .add_dependent(dependent_born(1990))
            .build()
            .unwrap();

        let breakdown = SurchargeCalculator::new(schedule()).calculate(&contract, as_of());

        assert_eq!(breakdown.surgery.amount(), dec!(120.00));
        assert!(breakdown.consultation.is_zero());
    }

    #[test]
    fn test_age_surcharge_per_qualifying_dependent() {
        let contract = ContractBuilder::new()
            .add_dependent(dependent_born(1950)) // 74
            .add_dependent(dependent_born(1954)) // 70
            .add_dependent(dependent_born(1990)) // 34
            .build()
            .unwrap();

        let breakdown = SurchargeCalculator::new(schedule()).calculate(&contract, as_of());

        assert_eq!(breakdown.age.amount(), dec!(100.00));
    }

    #[test]
    fn test_age_exactly_at_threshold_does_not_qualify() {
        let contract = ContractBuilder::new()
            .add_dependent(dependent_born(1959)) // exactly 65 on 2024-01-01
            .build()
            .unwrap();

        let breakdown = SurchargeCalculator::new(schedule()).calculate(&contract, as_of());

        assert!(breakdown.age.is_zero());
    }

    #[test]
    fn test_calculation_is_reproducible() {
        let contract = ContractBuilder::new()
            .add_procedure(Procedure::new(ProcedureId::new()))
            .add_dependent(dependent_born(1950))
            .build()
            .unwrap();

        let calculator = SurchargeCalculator::new(schedule());
        let first = calculator.calculate(&contract, as_of());
        let second = calculator.calculate(&contract, as_of());

        assert_eq!(first, second);
    }
}
