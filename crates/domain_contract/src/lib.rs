//! Contract Domain - Health-Plan Contract Aggregate
//!
//! This crate models the insured agreement: a contract composed of covered
//! procedures, surgeries, and dependents, each dependent covered under a
//! plan with a base monetary value.
//!
//! The aggregate is a pure data snapshot with composition queries and no
//! mutation after construction. Billing derives invoice values from it; see
//! the `domain_billing` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_contract::{ContractBuilder, Dependent, Plan, Procedure};
//!
//! let plan = Plan::new(plan_id, base_value)?;
//! let contract = ContractBuilder::new()
//!     .add_procedure(Procedure::new(procedure_id))
//!     .add_dependent(Dependent::new(dependent_id, plan, birth_date))
//!     .build()?;
//! ```

pub mod contract;
pub mod error;
pub mod member;
pub mod plan;

pub use contract::{Contract, ContractBuilder};
pub use error::{ContractError, MemberKind};
pub use member::{Dependent, Procedure, Surgery};
pub use plan::Plan;
