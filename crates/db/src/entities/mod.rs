//! `SeaORM` entity definitions.

pub mod accounts;
pub mod entry_counters;
pub mod fiscal_periods;
pub mod fiscal_years;
pub mod journal_entries;
pub mod journal_lines;
pub mod sea_orm_active_enums;
pub mod tax_filings;
