//! Covered members of a contract
//!
//! Procedures and surgeries are identity-only: their presence in a contract
//! is what signals that the corresponding surcharge applies. Dependents
//! carry the plan they are covered under and their birth date, which drives
//! the age surcharge.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{age_in_years, DependentId, ProcedureId, SurgeryId};

use crate::plan::Plan;

/// A covered consultation-type service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: ProcedureId,
}

impl Procedure {
    pub fn new(id: ProcedureId) -> Self {
        Self { id }
    }
}

/// A covered surgical service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surgery {
    pub id: SurgeryId,
}

impl Surgery {
    pub fn new(id: SurgeryId) -> Self {
        Self { id }
    }
}

/// A covered individual under the contract's plan
///
/// The plan is held as an immutable snapshot; several dependents may carry
/// the same plan value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub id: DependentId,
    pub plan: Plan,
    pub birth_date: NaiveDate,
}

impl Dependent {
    pub fn new(id: DependentId, plan: Plan, birth_date: NaiveDate) -> Self {
        Self {
            id,
            plan,
            birth_date,
        }
    }

    /// Returns the dependent's age in whole years at the given date
    pub fn age_at(&self, as_of: NaiveDate) -> u32 {
        age_in_years(self.birth_date, as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money, PlanId};
    use rust_decimal_macros::dec;

    fn test_plan() -> Plan {
        Plan::new(PlanId::new(), Money::new(dec!(500.00), Currency::BRL)).unwrap()
    }

    #[test]
    fn test_dependent_age_at() {
        let birth = NaiveDate::from_ymd_opt(1954, 3, 10).unwrap();
        let dependent = Dependent::new(DependentId::new(), test_plan(), birth);

        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(dependent.age_at(as_of), 70);
    }

    #[test]
    fn test_dependents_may_share_a_plan() {
        let plan = test_plan();
        let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();

        let a = Dependent::new(DependentId::new(), plan.clone(), birth);
        let b = Dependent::new(DependentId::new(), plan, birth);

        assert_eq!(a.plan, b.plan);
    }
}
