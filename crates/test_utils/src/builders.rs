//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{ContractId, DependentId, ProcedureId, SurgeryId};
use domain_contract::{Contract, ContractBuilder, Dependent, Plan, Procedure, Surgery};

use crate::fixtures::{DomainFixtures, TemporalFixtures};

/// Builder for constructing test contracts
///
/// Defaults to one dependent aged 34 at the standard emission date, no
/// procedures, and no surgeries.
pub struct TestContractBuilder {
    contract_id: ContractId,
    procedure_count: usize,
    surgery_count: usize,
    dependent_birth_dates: Vec<NaiveDate>,
    plan: Plan,
}

impl Default for TestContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContractBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            contract_id: ContractId::new(),
            procedure_count: 0,
            surgery_count: 0,
            dependent_birth_dates: vec![TemporalFixtures::birth_date_aged_34()],
            plan: DomainFixtures::plan(),
        }
    }

    /// Sets the contract ID
    pub fn with_contract_id(mut self, id: ContractId) -> Self {
        self.contract_id = id;
        self
    }

    /// Sets the number of covered procedures
    pub fn with_procedures(mut self, count: usize) -> Self {
        self.procedure_count = count;
        self
    }

    /// Sets the number of covered surgeries
    pub fn with_surgeries(mut self, count: usize) -> Self {
        self.surgery_count = count;
        self
    }

    /// Replaces the default dependent set with the given birth dates
    pub fn with_dependents_born(mut self, birth_dates: Vec<NaiveDate>) -> Self {
        self.dependent_birth_dates = birth_dates;
        self
    }

    /// Adds one dependent with the given birth date
    pub fn add_dependent_born(mut self, birth_date: NaiveDate) -> Self {
        self.dependent_birth_dates.push(birth_date);
        self
    }

    /// Removes all dependents (for invariant-violation tests)
    pub fn without_dependents(mut self) -> Self {
        self.dependent_birth_dates.clear();
        self
    }

    /// Sets the plan shared by all dependents
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }

    /// Builds the contract, panicking on invariant violations
    pub fn build(self) -> Contract {
        self.try_build().expect("test contract should be valid")
    }

    /// Builds the contract, surfacing invariant violations
    pub fn try_build(self) -> Result<Contract, domain_contract::ContractError> {
        let mut builder = ContractBuilder::new().id(self.contract_id);

        for _ in 0..self.procedure_count {
            builder = builder.add_procedure(Procedure::new(ProcedureId::new()));
        }
        for _ in 0..self.surgery_count {
            builder = builder.add_surgery(Surgery::new(SurgeryId::new()));
        }
        for birth_date in self.dependent_birth_dates {
            builder = builder.add_dependent(Dependent::new(
                DependentId::new(),
                self.plan.clone(),
                birth_date,
            ));
        }

        builder.build()
    }
}
