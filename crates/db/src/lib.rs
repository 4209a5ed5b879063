//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Each entity class has exactly one writing repository: journal entries
//! belong to `JournalEntryRepository`, fiscal year/period status to
//! `FiscalRepository`, tax filings to `FilingRepository`.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AccountRepository, FilingRepository, FiscalRepository, GeneralLedgerRepository,
    JournalEntryRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
