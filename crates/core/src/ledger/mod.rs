//! Double-entry journal posting logic.
//!
//! Pure validation and construction rules for journal entries. The
//! persistence layer (`kontabil-db`) drives these functions inside its
//! transactions; nothing here touches a database.

pub mod balance;
pub mod error;
pub mod invoice;
pub mod reversal;
pub mod types;
pub mod validation;

pub use error::LedgerError;
pub use types::{
    CreateEntryInput, EntrySource, EntryStatus, EntryTotals, JournalEntry, JournalLine,
    JournalLineInput, Side,
};
pub use validation::{AccountSnapshot, validate_and_resolve};
