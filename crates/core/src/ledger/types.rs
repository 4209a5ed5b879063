//! Journal entry domain types.
//!
//! This module defines the core types for creating and validating journal
//! entries in the double-entry ledger.

use chrono::{DateTime, NaiveDate, Utc};
use kontabil_shared::types::{
    AccountId, FiscalPeriodId, FiscalYearId, JournalEntryId, TenantId, UserId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a journal line: either Debit or Credit.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

/// Origin of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Manually keyed journal entry.
    Manual,
    /// Generated from an invoice or invoice payment.
    Invoice,
    /// Generated from a payroll run.
    Payroll,
    /// Opening balance entry for a fiscal year.
    Opening,
    /// Reversal created when voiding a posted entry.
    Reversal,
}

/// Journal entry status.
///
/// A closed set of states: a Void entry carries the reference to its
/// reversing entry (when one was posted) rather than relying on
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is being drafted and can be modified.
    Draft,
    /// Entry has been posted to the ledger (immutable).
    Posted,
    /// Entry has been voided; the reversing entry, if one was posted,
    /// is referenced here.
    Void {
        /// The reversing entry that neutralizes this one.
        reversal_entry_id: Option<JournalEntryId>,
    },
}

impl EntryStatus {
    /// Returns true if the entry can be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the entry contributes to the general ledger.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        matches!(self, Self::Posted)
    }

    /// Returns true if the entry has been voided.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void { .. })
    }
}

/// Input for a single line of a new journal entry.
#[derive(Debug, Clone)]
pub struct JournalLineInput {
    /// The account to post to.
    pub account_id: AccountId,
    /// Whether this is a debit or credit line.
    pub side: Side,
    /// The amount (must be positive and cent-precise).
    pub amount: Decimal,
    /// Optional memo for this line.
    pub memo: Option<String>,
}

/// A resolved journal line with the account denormalized.
///
/// Account code and name are captured at creation time so historical
/// entries stay readable even if the account is later renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Position within the entry (1-indexed).
    pub line_number: i16,
    /// The account posted to.
    pub account_id: AccountId,
    /// Account code at creation time.
    pub account_code: String,
    /// Account name at creation time.
    pub account_name: String,
    /// Debit amount (zero if this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit: Decimal,
    /// Optional memo.
    pub memo: Option<String>,
}

impl JournalLine {
    /// Returns the side of this line.
    #[must_use]
    pub fn side(&self) -> Side {
        if self.debit > Decimal::ZERO {
            Side::Debit
        } else {
            Side::Credit
        }
    }
}

/// Input for creating a new journal entry.
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    /// The tenant this entry belongs to.
    pub tenant_id: TenantId,
    /// The entry date; determines the owning fiscal period.
    pub date: NaiveDate,
    /// A description of the underlying event.
    pub description: String,
    /// Where the entry came from.
    pub source: EntrySource,
    /// The lines (must have at least 2).
    pub lines: Vec<JournalLineInput>,
    /// The user creating the entry.
    pub created_by: UserId,
    /// Post immediately instead of leaving as draft.
    pub post_immediately: bool,
}

/// Cached debit/credit totals for an entry.
#[derive(Debug, Clone)]
pub struct EntryTotals {
    /// Sum of all debit amounts.
    pub total_debit: Decimal,
    /// Sum of all credit amounts.
    pub total_credit: Decimal,
    /// Whether debits equal credits exactly.
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}

/// A journal entry with its lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// The tenant this entry belongs to.
    pub tenant_id: TenantId,
    /// Sequential number, unique per tenant and fiscal year.
    pub entry_number: i64,
    /// Entry date.
    pub date: NaiveDate,
    /// Description of the underlying event.
    pub description: String,
    /// Where the entry came from.
    pub source: EntrySource,
    /// The lines (at least 2; debits equal credits).
    pub lines: Vec<JournalLine>,
    /// Cached sum of debit amounts.
    pub total_debit: Decimal,
    /// Cached sum of credit amounts.
    pub total_credit: Decimal,
    /// Current status.
    pub status: EntryStatus,
    /// Owning fiscal year.
    pub fiscal_year_id: FiscalYearId,
    /// Owning fiscal period.
    pub fiscal_period_id: FiscalPeriodId,
    /// The user who created the entry.
    pub created_by: UserId,
    /// The user who posted the entry, if posted.
    pub posted_by: Option<UserId>,
    /// When the entry was posted.
    pub posted_at: Option<DateTime<Utc>>,
    /// The user who voided the entry, if voided.
    pub voided_by: Option<UserId>,
    /// When the entry was voided.
    pub voided_at: Option<DateTime<Utc>>,
    /// Why the entry was voided.
    pub void_reason: Option<String>,
}

impl JournalEntry {
    /// Formats the entry number for display, e.g. `JE-2026-000042`.
    #[must_use]
    pub fn formatted_number(&self, fiscal_year: i32) -> String {
        format!("JE-{fiscal_year}-{:06}", self.entry_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_editable() {
        assert!(EntryStatus::Draft.is_editable());
        assert!(!EntryStatus::Posted.is_editable());
        assert!(
            !EntryStatus::Void {
                reversal_entry_id: None
            }
            .is_editable()
        );
    }

    #[test]
    fn test_status_posted() {
        assert!(!EntryStatus::Draft.is_posted());
        assert!(EntryStatus::Posted.is_posted());
        assert!(
            !EntryStatus::Void {
                reversal_entry_id: Some(JournalEntryId::new())
            }
            .is_posted()
        );
    }

    #[test]
    fn test_status_void_carries_reversal() {
        let reversal = JournalEntryId::new();
        let status = EntryStatus::Void {
            reversal_entry_id: Some(reversal),
        };
        assert!(status.is_void());
        match status {
            EntryStatus::Void { reversal_entry_id } => {
                assert_eq!(reversal_entry_id, Some(reversal));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_totals_balanced() {
        let totals = EntryTotals::new(dec!(100.00), dec!(100.00));
        assert!(totals.is_balanced);
        assert_eq!(totals.difference(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_unbalanced() {
        let totals = EntryTotals::new(dec!(100.00), dec!(50.00));
        assert!(!totals.is_balanced);
        assert_eq!(totals.difference(), dec!(50.00));
    }

    #[test]
    fn test_line_side() {
        let line = JournalLine {
            line_number: 1,
            account_id: AccountId::new(),
            account_code: "1100".to_string(),
            account_name: "Cash on Hand".to_string(),
            debit: dec!(25.00),
            credit: Decimal::ZERO,
            memo: None,
        };
        assert_eq!(line.side(), Side::Debit);
    }

    #[test]
    fn test_formatted_number() {
        let entry = JournalEntry {
            id: JournalEntryId::new(),
            tenant_id: TenantId::new(),
            entry_number: 42,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "Test".to_string(),
            source: EntrySource::Manual,
            lines: vec![],
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            status: EntryStatus::Draft,
            fiscal_year_id: FiscalYearId::new(),
            fiscal_period_id: FiscalPeriodId::new(),
            created_by: UserId::new(),
            posted_by: None,
            posted_at: None,
            voided_by: None,
            voided_at: None,
            void_reason: None,
        };
        assert_eq!(entry.formatted_number(2026), "JE-2026-000042");
    }
}
