//! Contract wire shapes
//!
//! Inbound representation of a contract as the request-handling collaborator
//! supplies it. Field names follow the established wire contract
//! (`procedimentos`, `cirurgias`, `dependentes`, ...). Validation runs in
//! two layers: an explicit field-level pass here (the boundary's concern)
//! and the domain invariants inside `Contract::new` (so the engine stays
//! correct when called outside the validated path).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ContractId, DependentId, Money, PlanId, ProcedureId, SurgeryId};
use domain_contract::{Contract, Dependent, Plan, Procedure, Surgery};

use crate::error::DtoError;
use crate::{wire_amount, WIRE_CURRENCY};

/// Wire shape of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: Uuid,
    #[serde(rename = "valorBase")]
    pub base_value: Decimal,
}

impl PlanDto {
    /// Builds the domain plan
    pub fn to_model(&self) -> Result<Plan, DtoError> {
        let plan = Plan::new(
            PlanId::from(self.id),
            Money::new(self.base_value, WIRE_CURRENCY),
        )?;
        Ok(plan)
    }

    /// Builds the wire shape from a domain plan
    pub fn from_model(plan: &Plan) -> Self {
        Self {
            id: *plan.id().as_uuid(),
            base_value: wire_amount(plan.base_value()),
        }
    }
}

/// Wire shape of a covered procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureDto {
    pub id: Uuid,
}

impl ProcedureDto {
    pub fn to_model(&self) -> Procedure {
        Procedure::new(ProcedureId::from(self.id))
    }

    pub fn from_model(procedure: &Procedure) -> Self {
        Self {
            id: *procedure.id.as_uuid(),
        }
    }
}

/// Wire shape of a covered surgery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeryDto {
    pub id: Uuid,
}

impl SurgeryDto {
    pub fn to_model(&self) -> Surgery {
        Surgery::new(SurgeryId::from(self.id))
    }

    pub fn from_model(surgery: &Surgery) -> Self {
        Self {
            id: *surgery.id.as_uuid(),
        }
    }
}

/// Wire shape of a covered dependent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentDto {
    pub id: Uuid,
    #[serde(rename = "plano")]
    pub plan: PlanDto,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
}

impl DependentDto {
    pub fn to_model(&self) -> Result<Dependent, DtoError> {
        Ok(Dependent::new(
            DependentId::from(self.id),
            self.plan.to_model()?,
            self.birth_date,
        ))
    }

    pub fn from_model(dependent: &Dependent) -> Self {
        Self {
            id: *dependent.id.as_uuid(),
            plan: PlanDto::from_model(&dependent.plan),
            birth_date: dependent.birth_date,
        }
    }
}

/// Wire shape of a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContractDto {
    pub id: Uuid,
    #[serde(rename = "procedimentos", default)]
    pub procedures: Vec<ProcedureDto>,
    #[serde(rename = "cirurgias", default)]
    pub surgeries: Vec<SurgeryDto>,
    #[serde(rename = "dependentes")]
    #[validate(length(min = 1, message = "contract dependents are required"))]
    pub dependents: Vec<DependentDto>,
}

impl ContractDto {
    /// Runs the boundary validation pass and builds the domain contract
    ///
    /// # Errors
    ///
    /// `DtoError::Validation` when the field-level pass fails; domain
    /// violations (`ContractError`) propagate unwrapped.
    pub fn to_model(&self) -> Result<Contract, DtoError> {
        self.validate()?;

        let procedures = self.procedures.iter().map(ProcedureDto::to_model).collect();
        let surgeries = self.surgeries.iter().map(SurgeryDto::to_model).collect();
        let dependents = self
            .dependents
            .iter()
            .map(DependentDto::to_model)
            .collect::<Result<Vec<_>, _>>()?;

        let contract = Contract::new(
            ContractId::from(self.id),
            procedures,
            surgeries,
            dependents,
        )?;
        Ok(contract)
    }

    /// Builds the wire shape from a domain contract
    pub fn from_model(contract: &Contract) -> Self {
        Self {
            id: *contract.id().as_uuid(),
            procedures: contract
                .procedures()
                .iter()
                .map(ProcedureDto::from_model)
                .collect(),
            surgeries: contract
                .surgeries()
                .iter()
                .map(SurgeryDto::from_model)
                .collect(),
            dependents: contract
                .dependents()
                .iter()
                .map(DependentDto::from_model)
                .collect(),
        }
    }
}
