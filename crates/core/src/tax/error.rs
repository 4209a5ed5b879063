//! Tax computation error types.

use kontabil_shared::types::EmployeeId;
use thiserror::Error;

use crate::contracts::error::ContractError;
use crate::filing::period::FilingPeriod;

/// Errors that can occur during tax computation.
#[derive(Debug, Error)]
pub enum TaxError {
    /// A monthly return was requested for a non-month period.
    #[error("Monthly return requires a month period, got {0}")]
    MonthPeriodRequired(FilingPeriod),

    /// Employee not found in the directory.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// The employee had no wages in the requested year.
    #[error("Employee {0} has no wages in the requested year")]
    NoWagesForYear(EmployeeId),

    /// A collaborator contract failed.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl TaxError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MonthPeriodRequired(_) => "MONTH_PERIOD_REQUIRED",
            Self::EmployeeNotFound(_) => "EMPLOYEE_NOT_FOUND",
            Self::NoWagesForYear(_) => "NO_WAGES_FOR_YEAR",
            Self::Contract(_) => "COLLABORATOR_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::MonthPeriodRequired(_) => 400,
            Self::EmployeeNotFound(_) | Self::NoWagesForYear(_) => 404,
            Self::Contract(_) => 502,
        }
    }
}
