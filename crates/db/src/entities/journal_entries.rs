//! Journal entry header entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{EntrySource, EntryStatus};

/// A journal entry header; lines live in `journal_lines`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Sequential number, unique per tenant and fiscal year.
    pub entry_number: i64,
    /// Entry date.
    pub entry_date: Date,
    /// Description of the underlying event.
    pub description: String,
    /// Where the entry came from.
    pub source: EntrySource,
    /// Current status.
    pub status: EntryStatus,
    /// The reversing entry, set when this entry is voided with a
    /// reversal.
    pub reversal_entry_id: Option<Uuid>,
    /// Cached sum of debit amounts.
    pub total_debit: Decimal,
    /// Cached sum of credit amounts.
    pub total_credit: Decimal,
    /// Owning fiscal year.
    pub fiscal_year_id: Uuid,
    /// Calendar year of the owning fiscal year (denormalized for
    /// numbering and display).
    pub fiscal_year: i32,
    /// Owning fiscal period.
    pub fiscal_period_id: Uuid,
    /// Creator.
    pub created_by: Uuid,
    /// Poster, once posted.
    pub posted_by: Option<Uuid>,
    /// Posting timestamp.
    pub posted_at: Option<DateTimeWithTimeZone>,
    /// Voider, once voided.
    pub voided_by: Option<Uuid>,
    /// Voiding timestamp.
    pub voided_at: Option<DateTimeWithTimeZone>,
    /// Why the entry was voided.
    pub void_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
