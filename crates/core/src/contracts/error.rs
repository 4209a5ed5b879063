//! Collaborator contract errors.

use thiserror::Error;

/// Errors surfaced by external collaborator contracts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The collaborator could not be reached or returned a failure.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator returned data that violates its contract.
    #[error("Collaborator returned invalid data: {0}")]
    InvalidData(String),
}
