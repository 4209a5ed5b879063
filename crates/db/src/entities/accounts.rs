//! Chart of accounts entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{AccountSubtype, AccountType};

/// An account in a tenant's chart of accounts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Account code, unique per tenant, immutable.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Account subtype.
    pub sub_type: AccountSubtype,
    /// Parent account code, if nested.
    pub parent_code: Option<String>,
    /// Depth in the account tree.
    pub level: i16,
    /// Seeded system account, protected from deletion.
    pub is_system: bool,
    /// Inactive accounts reject new journal lines.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
