//! Journal line entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single debit or credit line of a journal entry.
///
/// Owned by its entry; account code and name are denormalized at
/// creation time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_lines")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning journal entry.
    pub entry_id: Uuid,
    /// Position within the entry (1-indexed).
    pub line_number: i16,
    /// Account posted to.
    pub account_id: Uuid,
    /// Account code at creation time.
    pub account_code: String,
    /// Account name at creation time.
    pub account_name: String,
    /// Debit amount (zero for credit lines).
    pub debit: Decimal,
    /// Credit amount (zero for debit lines).
    pub credit: Decimal,
    /// Optional memo.
    pub memo: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
