//! Fiscal year and period state machine.
//!
//! Gates whether the ledger may post or void into a given period. The
//! period lifecycle is Open → Closed → Locked with a single reopen
//! (Closed → Open); locking is permanent and used after filing
//! submission.

pub mod calendar;
pub mod error;
pub mod transition;
pub mod types;

pub use error::FiscalError;
pub use transition::validate_transition;
pub use types::{FiscalPeriod, FiscalPeriodStatus, FiscalYear, FiscalYearStatus};
