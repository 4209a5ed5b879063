//! Report data types.
//!
//! All reports are derived, never persisted: they are assembled from
//! per-account aggregates of posted journal lines.

use chrono::NaiveDate;
use kontabil_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coa::types::{AccountSubType, AccountType};

/// Per-account debit/credit aggregate over a date window.
///
/// Produced by the general ledger read side; the reporting service only
/// nets and groups these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountActivity {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Account subtype.
    pub sub_type: AccountSubType,
    /// Sum of posted debit amounts in the window.
    pub total_debit: Decimal,
    /// Sum of posted credit amounts in the window.
    pub total_credit: Decimal,
}

/// One row of a trial balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Net balance in the debit column (zero if the net is a credit).
    pub debit_balance: Decimal,
    /// Net balance in the credit column (zero if the net is a debit).
    pub credit_balance: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// As-of date (inclusive).
    pub as_of_date: NaiveDate,
    /// Fiscal year the report was generated for.
    pub fiscal_year: i32,
    /// Per-account rows, ordered by account code.
    pub rows: Vec<TrialBalanceRow>,
    /// Sum of all debit balances.
    pub total_debit: Decimal,
    /// Sum of all credit balances.
    pub total_credit: Decimal,
    /// Whether total debits and credits differ by less than 0.01.
    pub is_balanced: bool,
}

/// One line of a financial statement section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Net amount on the section's natural side.
    pub amount: Decimal,
}

/// A section of a financial statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSection {
    /// Section total.
    pub total: Decimal,
    /// Lines in this section, ordered by account code.
    pub lines: Vec<StatementLine>,
}

/// Income statement report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Period start date (inclusive).
    pub period_start: NaiveDate,
    /// Period end date (inclusive).
    pub period_end: NaiveDate,
    /// Fiscal year the report was generated for.
    pub fiscal_year: i32,
    /// Revenue section.
    pub revenue: StatementSection,
    /// Expense section.
    pub expenses: StatementSection,
    /// Net income (revenue minus expenses).
    pub net_income: Decimal,
}

/// Balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// As-of date (inclusive).
    pub as_of_date: NaiveDate,
    /// Fiscal year the report was generated for.
    pub fiscal_year: i32,
    /// Assets section.
    pub assets: StatementSection,
    /// Liabilities section.
    pub liabilities: StatementSection,
    /// Equity section (excluding current earnings).
    pub equity: StatementSection,
    /// Net income accumulated up to the as-of date, shown in equity.
    pub current_earnings: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity including current earnings.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within 0.01.
    pub is_balanced: bool,
}
