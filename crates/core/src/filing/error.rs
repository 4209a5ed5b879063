//! Filing error types.

use kontabil_shared::types::TaxFilingId;
use thiserror::Error;

use super::period::{FilingPeriod, ParsePeriodError};
use super::types::FilingType;
use crate::contracts::error::ContractError;

/// Errors that can occur during filing operations.
#[derive(Debug, Error)]
pub enum FilingError {
    /// Filing not found.
    #[error("Filing not found: {0}")]
    FilingNotFound(TaxFilingId),

    /// Period string could not be parsed.
    #[error(transparent)]
    InvalidPeriod(#[from] ParsePeriodError),

    /// Period shape does not match the filing type.
    #[error("Filing type {filing_type:?} does not accept period {period}")]
    PeriodMismatch {
        /// The filing type.
        filing_type: FilingType,
        /// The offending period.
        period: FilingPeriod,
    },

    /// A collaborator contract failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl FilingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::FilingNotFound(_) => "FILING_NOT_FOUND",
            Self::InvalidPeriod(_) => "INVALID_PERIOD",
            Self::PeriodMismatch { .. } => "PERIOD_MISMATCH",
            Self::Contract(_) => "COLLABORATOR_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::FilingNotFound(_) => 404,
            Self::InvalidPeriod(_) | Self::PeriodMismatch { .. } => 400,
            Self::Contract(_) => 502,
            Self::Database(_) => 500,
        }
    }
}
