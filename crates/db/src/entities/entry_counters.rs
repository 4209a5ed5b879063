//! Journal entry number counter entity.
//!
//! One row per (tenant, fiscal year). Numbers are allocated with a
//! single atomic upsert-returning increment so two concurrent entry
//! creations can never receive the same number.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tenant-per-year entry number counter.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entry_counters")]
pub struct Model {
    /// Owning tenant.
    #[sea_orm(primary_key, auto_increment = false)]
    pub tenant_id: Uuid,
    /// Calendar fiscal year.
    #[sea_orm(primary_key, auto_increment = false)]
    pub fiscal_year: i32,
    /// Highest number allocated so far.
    pub last_number: i64,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
