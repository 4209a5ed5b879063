//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Validation and state-machine rules come from
//! `kontabil-core`; repositories apply them against stored rows.

pub mod account;
pub mod convert;
pub mod filing;
pub mod fiscal;
pub mod general_ledger;
pub mod journal_entry;

pub use account::{AccountFilter, AccountRepository, SeedOutcome};
pub use filing::{
    DueSoonFiling, FilingRepository, FilingStatusSummary, SaveFilingInput,
};
pub use fiscal::{FiscalRepository, FiscalYearWithPeriods};
pub use general_ledger::{AccountLedger, AccountLedgerRow, GeneralLedgerRepository};
pub use journal_entry::{EntryFilter, EntryPage, EntryWithLines, JournalEntryRepository};
