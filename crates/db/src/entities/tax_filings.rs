//! Tax filing entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{FilingStatus, FilingType};

/// A persisted tax filing, upserted by regeneration and keyed on
/// (tenant, type, period) until marked filed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tax_filings")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Kind of filing.
    pub filing_type: FilingType,
    /// Period covered (`YYYY-MM` or `YYYY`).
    pub period: String,
    /// Lifecycle status.
    pub status: FilingStatus,
    /// Holiday-adjusted statutory due date.
    pub due_date: Date,
    /// The generated return payload.
    pub data_snapshot: Json,
    /// Total gross wages in the period.
    pub total_wages: Decimal,
    /// Total wage income tax withheld.
    pub wit_withheld: Decimal,
    /// Total employee social security contributions.
    pub inss_employee: Decimal,
    /// Total employer social security contributions.
    pub inss_employer: Decimal,
    /// When the filing was submitted.
    pub filed_date: Option<Date>,
    /// How the filing was submitted.
    pub submission_method: Option<String>,
    /// Authority receipt number.
    pub receipt_number: Option<String>,
    /// Operator notes recorded at submission.
    pub notes: Option<String>,
    /// Who last regenerated the filing.
    pub updated_by: Uuid,
    /// Who marked the filing as filed.
    pub filed_by: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
