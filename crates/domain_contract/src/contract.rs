//! Contract Aggregate Root
//!
//! The Contract aggregate is the consistency boundary for a health-plan
//! agreement: the covered procedures, surgeries, and dependents of one
//! insured contract.
//!
//! # Invariants
//!
//! - A contract has at least one dependent
//! - Member identities are unique within each category
//! - Member order is preserved as supplied
//!
//! A contract is read-only after construction. Amending a contract issues a
//! new Contract value, so every invoice that already references the old one
//! keeps a stable historical snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::ContractId;

use crate::error::{ContractError, MemberKind};
use crate::member::{Dependent, Procedure, Surgery};

/// The Contract aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    procedures: Vec<Procedure>,
    surgeries: Vec<Surgery>,
    dependents: Vec<Dependent>,
}

impl Contract {
    /// Creates a new contract, validating the aggregate invariants
    ///
    /// # Errors
    ///
    /// - `ContractError::EmptyDependents` if no dependent is supplied
    /// - `ContractError::DuplicateMember` if an identity repeats within one
    ///   category
    pub fn new(
        id: ContractId,
        procedures: Vec<Procedure>,
        surgeries: Vec<Surgery>,
        dependents: Vec<Dependent>,
    ) -> Result<Self, ContractError> {
        if dependents.is_empty() {
            return Err(ContractError::EmptyDependents { contract_id: id });
        }

        check_unique(id, MemberKind::Procedure, procedures.iter().map(|p| p.id.into()))?;
        check_unique(id, MemberKind::Surgery, surgeries.iter().map(|s| s.id.into()))?;
        check_unique(id, MemberKind::Dependent, dependents.iter().map(|d| d.id.into()))?;

        Ok(Self {
            id,
            procedures,
            surgeries,
            dependents,
        })
    }

    /// Returns the contract ID
    pub fn id(&self) -> ContractId {
        self.id
    }

    /// Returns the covered procedures, in supplied order
    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Returns the covered surgeries, in supplied order
    pub fn surgeries(&self) -> &[Surgery] {
        &self.surgeries
    }

    /// Returns the covered dependents, in supplied order
    pub fn dependents(&self) -> &[Dependent] {
        &self.dependents
    }

    /// Returns true if the contract covers any procedure
    pub fn has_procedures(&self) -> bool {
        !self.procedures.is_empty()
    }

    /// Returns true if the contract covers any surgery
    pub fn has_surgeries(&self) -> bool {
        !self.surgeries.is_empty()
    }
}

/// Rejects repeated identities within one member category
fn check_unique(
    contract_id: ContractId,
    kind: MemberKind,
    ids: impl Iterator<Item = Uuid>,
) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContractError::DuplicateMember {
                contract_id,
                kind,
                member_id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Builder for constructing contracts
///
/// # Example
///
/// ```rust,ignore
/// let contract = ContractBuilder::new()
///     .add_procedure(Procedure::new(ProcedureId::new()))
///     .add_dependent(Dependent::new(dependent_id, plan, birth_date))
///     .build()?;
/// ```
pub struct ContractBuilder {
    id: Option<ContractId>,
    procedures: Vec<Procedure>,
    surgeries: Vec<Surgery>,
    dependents: Vec<Dependent>,
}

impl ContractBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self {
            id: None,
            procedures: Vec::new(),
            surgeries: Vec::new(),
            dependents: Vec::new(),
        }
    }

    /// Sets the contract ID; a time-ordered ID is generated otherwise
    pub fn id(mut self, id: ContractId) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds a covered procedure
    pub fn add_procedure(mut self, procedure: Procedure) -> Self {
        self.procedures.push(procedure);
        self
    }

    /// Adds a covered surgery
    pub fn add_surgery(mut self, surgery: Surgery) -> Self {
        self.surgeries.push(surgery);
        self
    }

    /// Adds a covered dependent
    pub fn add_dependent(mut self, dependent: Dependent) -> Self {
        self.dependents.push(dependent);
        self
    }

    /// Builds the contract, running the aggregate invariant checks
    ///
    /// # Errors
    ///
    /// Same as [`Contract::new`]
    pub fn build(self) -> Result<Contract, ContractError> {
        let id = self.id.unwrap_or_else(ContractId::new_v7);
        Contract::new(id, self.procedures, self.surgeries, self.dependents)
    }
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{Currency, DependentId, Money, PlanId, ProcedureId, SurgeryId};
    use rust_decimal_macros::dec;

    use crate::plan::Plan;

    fn test_dependent() -> Dependent {
        let plan = Plan::new(PlanId::new(), Money::new(dec!(800.00), Currency::BRL)).unwrap();
        Dependent::new(
            DependentId::new(),
            plan,
            NaiveDate::from_ymd_opt(1980, 5, 20).unwrap(),
        )
    }

    #[test]
    fn test_contract_requires_a_dependent() {
        let result = ContractBuilder::new()
            .add_procedure(Procedure::new(ProcedureId::new()))
            .build();

        assert!(matches!(
            result,
            Err(ContractError::EmptyDependents { .. })
        ));
    }

    #[test]
    fn test_contract_rejects_duplicate_procedure() {
        let procedure_id = ProcedureId::new();
        let result = ContractBuilder::new()
            .add_procedure(Procedure::new(procedure_id))
            .add_procedure(Procedure::new(procedure_id))
            .add_dependent(test_dependent())
            .build();

        assert!(matches!(
            result,
            Err(ContractError::DuplicateMember {
                kind: MemberKind::Procedure,
                ..
            })
        ));
    }

    #[test]
    fn test_contract_rejects_duplicate_surgery() {
        let surgery_id = SurgeryId::new();
        let result = ContractBuilder::new()
            .add_surgery(Surgery::new(surgery_id))
            .add_surgery(Surgery::new(surgery_id))
            .add_dependent(test_dependent())
            .build();

        assert!(matches!(
            result,
            Err(ContractError::DuplicateMember {
                kind: MemberKind::Surgery,
                ..
            })
        ));
    }

    #[test]
    fn test_contract_preserves_member_order() {
        let first = ProcedureId::new();
        let second = ProcedureId::new();

        let contract = ContractBuilder::new()
            .add_procedure(Procedure::new(first))
            .add_procedure(Procedure::new(second))
            .add_dependent(test_dependent())
            .build()
            .unwrap();

        assert_eq!(contract.procedures()[0].id, first);
        assert_eq!(contract.procedures()[1].id, second);
    }

    #[test]
    fn test_contract_composition_queries() {
        let contract = ContractBuilder::new()
            .add_surgery(Surgery::new(SurgeryId::new()))
            .add_dependent(test_dependent())
            .build()
            .unwrap();

        assert!(!contract.has_procedures());
        assert!(contract.has_surgeries());
        assert_eq!(contract.dependents().len(), 1);
    }
}
