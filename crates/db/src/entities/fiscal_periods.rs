//! Fiscal period entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::FiscalPeriodStatus;

/// A monthly period of a fiscal year.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fiscal_periods")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Owning fiscal year.
    pub fiscal_year_id: Uuid,
    /// Period number within the year (1-12).
    pub period_number: i16,
    /// First day of the period.
    pub start_date: Date,
    /// Last day of the period.
    pub end_date: Date,
    /// Current status.
    pub status: FiscalPeriodStatus,
    /// Who closed the period.
    pub closed_by: Option<Uuid>,
    /// When the period was closed.
    pub closed_at: Option<DateTimeWithTimeZone>,
    /// Who locked the period.
    pub locked_by: Option<Uuid>,
    /// When the period was locked.
    pub locked_at: Option<DateTimeWithTimeZone>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
