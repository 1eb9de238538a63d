//! Plan value object
//!
//! A plan is the base insurance product a dependent is covered under. It is
//! immutable once referenced by a contract; repricing a plan issues a new
//! Plan value rather than mutating the existing one.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, PlanId};

use crate::error::ContractError;

/// The base insurance product with its base monetary value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    base_value: Money,
}

impl Plan {
    /// Creates a new plan
    ///
    /// # Errors
    ///
    /// Returns `ContractError::NegativeBaseValue` if the base value is
    /// negative.
    pub fn new(id: PlanId, base_value: Money) -> Result<Self, ContractError> {
        if base_value.is_negative() {
            return Err(ContractError::NegativeBaseValue {
                plan_id: id,
                value: base_value.amount(),
            });
        }
        Ok(Self { id, base_value })
    }

    /// Returns the plan ID
    pub fn id(&self) -> PlanId {
        self.id
    }

    /// Returns the base monetary value
    pub fn base_value(&self) -> Money {
        self.base_value
    }
}
