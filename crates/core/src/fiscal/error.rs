//! Fiscal year and period error types.

use thiserror::Error;

use super::types::FiscalPeriodStatus;

/// Errors that can occur during fiscal year and period operations.
#[derive(Debug, Error)]
pub enum FiscalError {
    /// Illegal period state-machine move.
    #[error("Invalid period transition from {from:?} to {to:?}")]
    InvalidPeriodTransition {
        /// Current status.
        from: FiscalPeriodStatus,
        /// Target status.
        to: FiscalPeriodStatus,
    },

    /// Fiscal year already exists for this tenant.
    #[error("Fiscal year {0} already exists")]
    DuplicateYear(i32),

    /// Fiscal year not found.
    #[error("Fiscal year not found: {0}")]
    YearNotFound(i32),

    /// Fiscal period not found.
    #[error("Fiscal period not found")]
    PeriodNotFound,

    /// Opening balances were already posted for this year.
    #[error("Opening balances already posted for fiscal year {0}")]
    OpeningBalancesAlreadyPosted(i32),

    /// Cannot close the year while periods remain open.
    #[error("Cannot close fiscal year {0}: periods are still open")]
    PeriodsStillOpen(i32),

    /// Fiscal year is already closed.
    #[error("Fiscal year {0} is closed")]
    YearClosed(i32),

    /// The opening balance entry failed ledger validation.
    #[error("Opening balance entry rejected: {0}")]
    OpeningEntryRejected(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl FiscalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPeriodTransition { .. } => "INVALID_PERIOD_TRANSITION",
            Self::DuplicateYear(_) => "DUPLICATE_FISCAL_YEAR",
            Self::YearNotFound(_) => "FISCAL_YEAR_NOT_FOUND",
            Self::PeriodNotFound => "FISCAL_PERIOD_NOT_FOUND",
            Self::OpeningBalancesAlreadyPosted(_) => "OPENING_BALANCES_ALREADY_POSTED",
            Self::PeriodsStillOpen(_) => "PERIODS_STILL_OPEN",
            Self::YearClosed(_) => "FISCAL_YEAR_CLOSED",
            Self::OpeningEntryRejected(_) => "OPENING_ENTRY_REJECTED",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidPeriodTransition { .. }
            | Self::OpeningBalancesAlreadyPosted(_)
            | Self::PeriodsStillOpen(_)
            | Self::YearClosed(_)
            | Self::OpeningEntryRejected(_) => 422,
            Self::DuplicateYear(_) => 409,
            Self::YearNotFound(_) | Self::PeriodNotFound => 404,
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FiscalError::InvalidPeriodTransition {
                from: FiscalPeriodStatus::Locked,
                to: FiscalPeriodStatus::Open,
            }
            .error_code(),
            "INVALID_PERIOD_TRANSITION"
        );
        assert_eq!(FiscalError::DuplicateYear(2026).error_code(), "DUPLICATE_FISCAL_YEAR");
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            FiscalError::InvalidPeriodTransition {
                from: FiscalPeriodStatus::Open,
                to: FiscalPeriodStatus::Locked,
            }
            .http_status_code(),
            422
        );
        assert_eq!(FiscalError::DuplicateYear(2026).http_status_code(), 409);
        assert_eq!(FiscalError::YearNotFound(2026).http_status_code(), 404);
        assert_eq!(FiscalError::Database("x".into()).http_status_code(), 500);
    }
}
