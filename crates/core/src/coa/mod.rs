//! Chart of accounts.
//!
//! Account definitions are hierarchical and typed. Every other ledger
//! component depends on this module: journal lines reference accounts,
//! reports group by account type, and the statutory modules post to the
//! seeded tax accounts.

pub mod defaults;
pub mod error;
pub mod types;
pub mod validation;

pub use error::CoaError;
pub use types::{Account, AccountPatch, AccountType, AccountSubType, NewAccount, NormalSide};
