//! Fiscal year and period types.

use chrono::NaiveDate;
use kontabil_shared::types::{FiscalPeriodId, FiscalYearId, JournalEntryId, TenantId};
use serde::{Deserialize, Serialize};

/// Status of a fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiscalYearStatus {
    /// Year is open; periods may accept postings.
    Open,
    /// Year is closed.
    Closed,
}

/// Fiscal year definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Unique identifier.
    pub id: FiscalYearId,
    /// Tenant this fiscal year belongs to.
    pub tenant_id: TenantId,
    /// Calendar year (e.g., 2026).
    pub year: i32,
    /// Current status.
    pub status: FiscalYearStatus,
    /// Whether opening balances have been posted.
    pub opening_balances_posted: bool,
    /// The opening balance entry, once posted.
    pub opening_balance_entry_id: Option<JournalEntryId>,
}

/// Status of a fiscal period.
///
/// Transitions are monotonic except the single allowed reopen:
/// Open → Closed → Locked, with Closed → Open as the only way back.
/// Locked is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiscalPeriodStatus {
    /// Period accepts postings and voids.
    Open,
    /// Period rejects postings; may be reopened or locked.
    Closed,
    /// Period is permanently frozen (after filing submission).
    Locked,
}

impl FiscalPeriodStatus {
    /// Returns true if the period accepts new postings.
    #[must_use]
    pub fn allows_posting(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if entries in this period may still be voided.
    ///
    /// Voiding is allowed unless the period is locked; the reversing
    /// entry always lands in the current open period.
    #[must_use]
    pub fn allows_voiding(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

/// A fiscal period within a fiscal year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// Unique identifier.
    pub id: FiscalPeriodId,
    /// Tenant this period belongs to.
    pub tenant_id: TenantId,
    /// Fiscal year this period belongs to.
    pub fiscal_year_id: FiscalYearId,
    /// Period number within the year (1-12).
    pub period_number: i16,
    /// Start date of the period.
    pub start_date: NaiveDate,
    /// End date of the period.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: FiscalPeriodStatus,
}

impl FiscalPeriod {
    /// Returns true if postings are accepted into this period.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == FiscalPeriodStatus::Open
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_posting() {
        assert!(FiscalPeriodStatus::Open.allows_posting());
        assert!(!FiscalPeriodStatus::Closed.allows_posting());
        assert!(!FiscalPeriodStatus::Locked.allows_posting());
    }

    #[test]
    fn test_allows_voiding() {
        assert!(FiscalPeriodStatus::Open.allows_voiding());
        assert!(FiscalPeriodStatus::Closed.allows_voiding());
        assert!(!FiscalPeriodStatus::Locked.allows_voiding());
    }

    #[test]
    fn test_contains_date() {
        let period = FiscalPeriod {
            id: FiscalPeriodId::new(),
            tenant_id: TenantId::new(),
            fiscal_year_id: FiscalYearId::new(),
            period_number: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            status: FiscalPeriodStatus::Open,
        };

        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }
}
