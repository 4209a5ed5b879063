//! Tax filing domain types.

use chrono::NaiveDate;
use kontabil_shared::types::{TaxFilingId, TenantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::FilingError;
use super::period::FilingPeriod;

/// Kind of statutory filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingType {
    /// Monthly wage income tax return.
    MonthlyWit,
    /// Annual wage income tax reconciliation.
    AnnualWit,
    /// Monthly social security return.
    InssMonthly,
}

impl FilingType {
    /// Returns the snake_case string form used in storage and APIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthlyWit => "monthly_wit",
            Self::AnnualWit => "annual_wit",
            Self::InssMonthly => "inss_monthly",
        }
    }

    /// Validates that the period shape matches the filing type.
    ///
    /// # Errors
    ///
    /// Returns `FilingError::PeriodMismatch` when a monthly filing is
    /// given a year period or vice versa.
    pub fn validate_period(self, period: FilingPeriod) -> Result<(), FilingError> {
        let ok = match self {
            Self::MonthlyWit | Self::InssMonthly => {
                matches!(period, FilingPeriod::Month { .. })
            }
            Self::AnnualWit => matches!(period, FilingPeriod::Year(_)),
        };

        if ok {
            Ok(())
        } else {
            Err(FilingError::PeriodMismatch {
                filing_type: self,
                period,
            })
        }
    }
}

/// Lifecycle status of a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingStatus {
    /// Generated, not yet due.
    Pending,
    /// Past the due date and not filed.
    Overdue,
    /// Submitted to the authority.
    Filed,
}

/// Derives the status of an unfiled obligation from its due date.
#[must_use]
pub fn derive_status(due_date: NaiveDate, today: NaiveDate) -> FilingStatus {
    if today > due_date {
        FilingStatus::Overdue
    } else {
        FilingStatus::Pending
    }
}

/// Days until the due date (negative when past due).
#[must_use]
pub fn days_until_due(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Employer-level totals carried on a filing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilingTotals {
    /// Total gross wages in the period.
    pub total_wages: Decimal,
    /// Total wage income tax withheld.
    pub wit_withheld: Decimal,
    /// Total employee social security contributions.
    pub inss_employee: Decimal,
    /// Total employer social security contributions.
    pub inss_employer: Decimal,
}

/// A persisted tax filing.
///
/// Upserted by regeneration, keyed on (tenant, type, period), until
/// marked as filed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxFiling {
    /// Unique identifier.
    pub id: TaxFilingId,
    /// The tenant this filing belongs to.
    pub tenant_id: TenantId,
    /// Kind of filing.
    pub filing_type: FilingType,
    /// Period covered.
    pub period: FilingPeriod,
    /// Lifecycle status.
    pub status: FilingStatus,
    /// Holiday-adjusted statutory due date.
    pub due_date: NaiveDate,
    /// The generated return payload.
    pub data_snapshot: serde_json::Value,
    /// Employer-level totals.
    pub totals: FilingTotals,
    /// When the filing was submitted.
    pub filed_date: Option<NaiveDate>,
    /// How the filing was submitted (portal, paper, ...).
    pub submission_method: Option<String>,
    /// Authority receipt number, when issued.
    pub receipt_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_derive_status() {
        let due = date(2026, 2, 16);
        assert_eq!(derive_status(due, date(2026, 2, 1)), FilingStatus::Pending);
        assert_eq!(derive_status(due, date(2026, 2, 16)), FilingStatus::Pending);
        assert_eq!(derive_status(due, date(2026, 2, 17)), FilingStatus::Overdue);
    }

    #[test]
    fn test_days_until_due() {
        let due = date(2026, 2, 16);
        assert_eq!(days_until_due(due, date(2026, 2, 10)), 6);
        assert_eq!(days_until_due(due, date(2026, 2, 16)), 0);
        assert_eq!(days_until_due(due, date(2026, 2, 20)), -4);
    }

    #[test]
    fn test_validate_period_pairing() {
        let month = FilingPeriod::Month {
            year: 2026,
            month: 1,
        };
        let year = FilingPeriod::Year(2026);

        assert!(FilingType::MonthlyWit.validate_period(month).is_ok());
        assert!(FilingType::InssMonthly.validate_period(month).is_ok());
        assert!(FilingType::AnnualWit.validate_period(year).is_ok());

        assert!(FilingType::MonthlyWit.validate_period(year).is_err());
        assert!(FilingType::AnnualWit.validate_period(month).is_err());
    }

    #[test]
    fn test_filing_type_strings() {
        assert_eq!(FilingType::MonthlyWit.as_str(), "monthly_wit");
        assert_eq!(FilingType::AnnualWit.as_str(), "annual_wit");
        assert_eq!(FilingType::InssMonthly.as_str(), "inss_monthly");
    }
}
