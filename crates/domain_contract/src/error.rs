//! Contract domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{ContractId, PlanId};

/// Kind of member a contract composes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Procedure,
    Surgery,
    Dependent,
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MemberKind::Procedure => "procedure",
            MemberKind::Surgery => "surgery",
            MemberKind::Dependent => "dependent",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur in the contract domain
#[derive(Debug, Error)]
pub enum ContractError {
    /// Contract has no dependents
    #[error("Contract {contract_id} has no dependents; at least one is required")]
    EmptyDependents { contract_id: ContractId },

    /// Duplicate member identity within one category
    #[error("Contract {contract_id} lists {kind} {member_id} more than once")]
    DuplicateMember {
        contract_id: ContractId,
        kind: MemberKind,
        member_id: String,
    },

    /// Plan base value is negative
    #[error("Plan {plan_id} has negative base value {value}")]
    NegativeBaseValue { plan_id: PlanId, value: Decimal },
}
