//! Tax filing lifecycle and obligation schedule.
//!
//! The pure half of the filing tracker: period parsing, status
//! derivation, and the statutory obligation calendar. Persistence
//! (upserts, mark-as-filed) lives in `kontabil-db`.

pub mod error;
pub mod period;
pub mod schedule;
pub mod types;

pub use error::FilingError;
pub use period::{FilingPeriod, ParsePeriodError};
pub use schedule::{Obligation, ObligationKind, base_due_date, upcoming_obligations};
pub use types::{
    FilingStatus, FilingTotals, FilingType, TaxFiling, days_until_due, derive_status,
};
