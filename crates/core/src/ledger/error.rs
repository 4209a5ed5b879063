//! Ledger error types for validation and state errors.
//!
//! This module defines all errors that can occur during journal entry
//! operations: validation errors, account errors, fiscal period errors,
//! and entry state errors.

use chrono::NaiveDate;
use kontabil_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry must have at least 2 lines.
    #[error("Journal entry must have at least 2 lines")]
    InsufficientLines,

    /// Entry is not balanced (debits != credits).
    #[error("Journal entry is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedEntry {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Line amount cannot be zero.
    #[error("Line amount cannot be zero")]
    ZeroAmount,

    /// Line amount cannot be negative.
    #[error("Line amount cannot be negative")]
    NegativeAmount,

    /// Line amount must be exact at cent precision.
    #[error("Line amount {0} is not cent-precise")]
    ImpreciseAmount(Decimal),

    // ========== Account Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is inactive and cannot be posted to.
    #[error("Account {0} is inactive")]
    InactiveAccount(AccountId),

    /// Tenant chart of accounts has not been initialized.
    #[error("Chart of accounts is not initialized for this tenant")]
    ChartNotInitialized,

    // ========== Fiscal Period Errors ==========
    /// No fiscal period found for the entry date.
    #[error("No fiscal period found for date {0}")]
    NoFiscalPeriod(NaiveDate),

    /// Fiscal period is closed, no posting allowed.
    #[error("Fiscal period is closed, no posting allowed")]
    PeriodClosed,

    /// Fiscal period is locked, no changes allowed.
    #[error("Fiscal period is locked, no changes allowed")]
    PeriodLocked,

    /// No open fiscal period exists to receive the reversing entry.
    #[error("No open fiscal period available for the reversing entry")]
    NoOpenPeriod,

    // ========== Entry State Errors ==========
    /// Entry not found.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(JournalEntryId),

    /// Entry is already posted.
    #[error("Journal entry {0} is already posted")]
    AlreadyPosted(JournalEntryId),

    /// Entry is already void.
    #[error("Journal entry {0} is already void")]
    AlreadyVoid(JournalEntryId),

    /// Posted entries cannot be modified.
    #[error("Cannot modify posted journal entry")]
    CannotModifyPosted,

    /// Only draft entries can be deleted.
    #[error("Can only delete draft journal entries")]
    CanOnlyDeleteDraft,

    /// Only draft entries can be posted.
    #[error("Only draft journal entries can be posted")]
    NotDraft,

    /// Only posted entries can be voided.
    #[error("Only posted journal entries can be voided")]
    VoidRequiresPosted,

    // ========== Database Errors ==========
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::ImpreciseAmount(_) => "IMPRECISE_AMOUNT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::InactiveAccount(_) => "INACTIVE_ACCOUNT",
            Self::ChartNotInitialized => "CHART_NOT_INITIALIZED",
            Self::NoFiscalPeriod(_) => "NO_FISCAL_PERIOD",
            Self::PeriodClosed => "PERIOD_CLOSED",
            Self::PeriodLocked => "PERIOD_LOCKED",
            Self::NoOpenPeriod => "NO_OPEN_PERIOD",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::AlreadyPosted(_) => "ALREADY_POSTED",
            Self::AlreadyVoid(_) => "ALREADY_VOID",
            Self::CannotModifyPosted => "CANNOT_MODIFY_POSTED",
            Self::CanOnlyDeleteDraft => "CAN_ONLY_DELETE_DRAFT",
            Self::NotDraft => "NOT_DRAFT",
            Self::VoidRequiresPosted => "VOID_REQUIRES_POSTED",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::InsufficientLines
            | Self::UnbalancedEntry { .. }
            | Self::ZeroAmount
            | Self::NegativeAmount
            | Self::ImpreciseAmount(_)
            | Self::InactiveAccount(_)
            | Self::NoFiscalPeriod(_)
            | Self::NotDraft
            | Self::VoidRequiresPosted => 400,

            // 404 Not Found
            Self::AccountNotFound(_) | Self::EntryNotFound(_) => 404,

            // 409 Conflict - state errors
            Self::AlreadyPosted(_) | Self::AlreadyVoid(_) => 409,

            // 422 Unprocessable - business rule violations
            Self::ChartNotInitialized
            | Self::PeriodClosed
            | Self::PeriodLocked
            | Self::NoOpenPeriod
            | Self::CannotModifyPosted
            | Self::CanOnlyDeleteDraft => 422,

            // 500 Internal Server Error
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::UnbalancedEntry {
                debit: dec!(100.00),
                credit: dec!(50.00),
            }
            .error_code(),
            "UNBALANCED_ENTRY"
        );
        assert_eq!(LedgerError::PeriodClosed.error_code(), "PERIOD_CLOSED");
        assert_eq!(LedgerError::PeriodLocked.error_code(), "PERIOD_LOCKED");
        assert_eq!(
            LedgerError::AlreadyVoid(JournalEntryId::new()).error_code(),
            "ALREADY_VOID"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::InsufficientLines.http_status_code(), 400);
        assert_eq!(
            LedgerError::AccountNotFound(AccountId::new()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::AlreadyVoid(JournalEntryId::new()).http_status_code(),
            409
        );
        assert_eq!(LedgerError::PeriodClosed.http_status_code(), 422);
        assert_eq!(LedgerError::Database("x".into()).http_status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::UnbalancedEntry {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Journal entry is not balanced. Debit: 100.00, Credit: 50.00"
        );

        let err = LedgerError::NoFiscalPeriod(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(err.to_string(), "No fiscal period found for date 2026-01-15");
    }
}
