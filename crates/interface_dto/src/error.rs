//! Boundary errors

use thiserror::Error;

use domain_contract::ContractError;

/// Errors raised while translating wire shapes to domain values
///
/// Domain errors pass through unwrapped so callers see the original
/// violation.
#[derive(Debug, Error)]
pub enum DtoError {
    /// Field-level validation failed before domain construction
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Domain invariant violated while building the contract
    #[error(transparent)]
    Contract(#[from] ContractError),
}
