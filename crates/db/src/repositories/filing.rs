//! Tax filing repository.
//!
//! Sole writer of tax filings. Filings are upserted by regeneration,
//! keyed on (tenant, type, period); marking as filed freezes the
//! lifecycle fields against later regeneration.

use chrono::{NaiveDate, Utc};
use kontabil_core::contracts::audit::{AuditEvent, AuditLog, AuditSeverity};
use kontabil_core::duedate::HolidayCalendar;
use kontabil_core::filing::error::FilingError;
use kontabil_core::filing::period::FilingPeriod;
use kontabil_core::filing::schedule::{Obligation, ObligationKind, base_due_date, upcoming_obligations};
use kontabil_core::filing::types::{
    FilingStatus, FilingTotals, FilingType, TaxFiling, days_until_due, derive_status,
};
use kontabil_shared::types::{TaxFilingId, TenantId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use uuid::Uuid;

use super::convert;
use crate::entities::{
    sea_orm_active_enums::FilingStatus as DbFilingStatus, tax_filings,
};

/// Input for saving (upserting) a filing.
#[derive(Debug, Clone)]
pub struct SaveFilingInput {
    /// Kind of filing.
    pub filing_type: FilingType,
    /// Period covered.
    pub period: FilingPeriod,
    /// The generated return payload.
    pub data_snapshot: serde_json::Value,
    /// Employer-level totals.
    pub totals: FilingTotals,
    /// The user regenerating the filing.
    pub user_id: UserId,
}

/// A scheduled obligation joined with its stored filing, if any.
#[derive(Debug, Clone)]
pub struct DueSoonFiling {
    /// The scheduled obligation.
    pub obligation: Obligation,
    /// Stored status, or derived pending/overdue when nothing is stored.
    pub status: FilingStatus,
    /// The stored filing backing this obligation, when one exists.
    pub filing_id: Option<TaxFilingId>,
    /// Days until the adjusted due date (negative when past due).
    pub days_until_due: i64,
}

/// Counts of filings by status plus the next obligation coming due.
#[derive(Debug, Clone)]
pub struct FilingStatusSummary {
    /// Pending filings.
    pub pending: u64,
    /// Overdue filings.
    pub overdue: u64,
    /// Filed filings.
    pub filed: u64,
    /// The next unfiled obligation by due date.
    pub next_due: Option<DueSoonFiling>,
}

/// Tax filing repository.
#[derive(Debug, Clone)]
pub struct FilingRepository {
    db: DatabaseConnection,
}

impl FilingRepository {
    /// Creates a new filing repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a filing keyed on (tenant, type, period).
    ///
    /// Regeneration refreshes the snapshot, totals, and due date. A
    /// record already marked Filed keeps its status and submission
    /// fields; only the snapshot and totals are refreshed.
    ///
    /// # Errors
    ///
    /// Returns `FilingError::PeriodMismatch` for a period shape that
    /// does not fit the filing type.
    pub async fn save_filing(
        &self,
        tenant_id: TenantId,
        input: SaveFilingInput,
        today: NaiveDate,
        calendar: &HolidayCalendar,
    ) -> Result<TaxFiling, FilingError> {
        input.filing_type.validate_period(input.period)?;

        let base = base_due_date(due_kind(input.filing_type), input.period).ok_or(
            FilingError::PeriodMismatch {
                filing_type: input.filing_type,
                period: input.period,
            },
        )?;
        let due_date = calendar.adjust_to_next_business_day(base);

        let existing = tax_filings::Entity::find()
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(
                tax_filings::Column::FilingType.eq(convert::filing_type_to_db(input.filing_type)),
            )
            .filter(tax_filings::Column::Period.eq(input.period.to_string()))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let now = Utc::now().into();

        let model = if let Some(existing) = existing {
            let keep_filed = existing.status == DbFilingStatus::Filed;
            let mut active: tax_filings::ActiveModel = existing.into();
            active.data_snapshot = Set(input.data_snapshot);
            active.total_wages = Set(input.totals.total_wages);
            active.wit_withheld = Set(input.totals.wit_withheld);
            active.inss_employee = Set(input.totals.inss_employee);
            active.inss_employer = Set(input.totals.inss_employer);
            active.updated_by = Set(input.user_id.into_inner());
            active.updated_at = Set(now);
            if !keep_filed {
                active.due_date = Set(due_date);
                active.status = Set(convert::filing_status_to_db(derive_status(due_date, today)));
            }
            active.update(&self.db).await.map_err(db_err)?
        } else {
            let active = tax_filings::ActiveModel {
                id: Set(Uuid::now_v7()),
                tenant_id: Set(tenant_id.into_inner()),
                filing_type: Set(convert::filing_type_to_db(input.filing_type)),
                period: Set(input.period.to_string()),
                status: Set(convert::filing_status_to_db(derive_status(due_date, today))),
                due_date: Set(due_date),
                data_snapshot: Set(input.data_snapshot),
                total_wages: Set(input.totals.total_wages),
                wit_withheld: Set(input.totals.wit_withheld),
                inss_employee: Set(input.totals.inss_employee),
                inss_employer: Set(input.totals.inss_employer),
                filed_date: Set(None),
                submission_method: Set(None),
                receipt_number: Set(None),
                notes: Set(None),
                updated_by: Set(input.user_id.into_inner()),
                filed_by: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            };
            active.insert(&self.db).await.map_err(db_err)?
        };

        to_domain(model)
    }

    /// Marks a filing as filed.
    ///
    /// Records the submission method, receipt, and date, then emits an
    /// audit event through the fire-and-forget collaborator; audit
    /// delivery failures never surface here.
    ///
    /// # Errors
    ///
    /// Returns `FilingError::FilingNotFound` if the filing is absent.
    pub async fn mark_as_filed(
        &self,
        tenant_id: TenantId,
        filing_id: TaxFilingId,
        method: &str,
        receipt_number: Option<String>,
        notes: Option<String>,
        filed_by: UserId,
        today: NaiveDate,
        audit: Option<&dyn AuditLog>,
    ) -> Result<TaxFiling, FilingError> {
        let existing = tax_filings::Entity::find_by_id(filing_id.into_inner())
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(FilingError::FilingNotFound(filing_id))?;

        let mut active: tax_filings::ActiveModel = existing.into();
        active.status = Set(DbFilingStatus::Filed);
        active.filed_date = Set(Some(today));
        active.submission_method = Set(Some(method.to_string()));
        active.receipt_number = Set(receipt_number.clone());
        active.notes = Set(notes);
        active.filed_by = Set(Some(filed_by.into_inner()));
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        let filing = to_domain(updated)?;

        if let Some(audit) = audit {
            audit
                .log(AuditEvent {
                    tenant_id,
                    action: "filing.marked_as_filed".to_string(),
                    entity_id: filing_id.to_string(),
                    metadata: serde_json::json!({
                        "filing_type": filing.filing_type.as_str(),
                        "period": filing.period.to_string(),
                        "method": method,
                        "receipt_number": receipt_number,
                    }),
                    severity: AuditSeverity::Info,
                })
                .await;
        }

        Ok(filing)
    }

    /// Gets a filing by ID.
    ///
    /// # Errors
    ///
    /// Returns `FilingError::FilingNotFound` if absent.
    pub async fn get_filing(
        &self,
        tenant_id: TenantId,
        filing_id: TaxFilingId,
    ) -> Result<TaxFiling, FilingError> {
        let model = tax_filings::Entity::find_by_id(filing_id.into_inner())
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(FilingError::FilingNotFound(filing_id))?;

        to_domain(model)
    }

    /// Lists all filings of a tenant, most recent due date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_filings(&self, tenant_id: TenantId) -> Result<Vec<TaxFiling>, FilingError> {
        let models = tax_filings::Entity::find()
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .order_by_desc(tax_filings::Column::DueDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        models.into_iter().map(to_domain).collect()
    }

    /// Enumerates the obligations due within the window, joined with
    /// stored filing status, sorted by due date ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_filings_due_soon(
        &self,
        tenant_id: TenantId,
        months_window: u32,
        today: NaiveDate,
        calendar: &HolidayCalendar,
    ) -> Result<Vec<DueSoonFiling>, FilingError> {
        let obligations = upcoming_obligations(today, months_window, calendar);
        let stored = self.stored_by_key(tenant_id).await?;

        Ok(obligations
            .into_iter()
            .map(|obligation| {
                let key = (obligation.filing_type, obligation.period.to_string());
                let record = stored.get(&key);
                let status = record
                    .map_or_else(|| derive_status(obligation.due_date, today), |(_, s)| *s);

                DueSoonFiling {
                    days_until_due: days_until_due(obligation.due_date, today),
                    status,
                    filing_id: record.map(|(id, _)| *id),
                    obligation,
                }
            })
            .collect())
    }

    /// Counts filings by status and finds the next unfiled obligation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_filing_status_summary(
        &self,
        tenant_id: TenantId,
        today: NaiveDate,
        calendar: &HolidayCalendar,
    ) -> Result<FilingStatusSummary, FilingError> {
        let models = tax_filings::Entity::find()
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut pending = 0;
        let mut overdue = 0;
        let mut filed = 0;
        for model in &models {
            match model.status {
                DbFilingStatus::Pending => pending += 1,
                DbFilingStatus::Overdue => overdue += 1,
                DbFilingStatus::Filed => filed += 1,
            }
        }

        let next_due = self
            .get_filings_due_soon(tenant_id, 3, today, calendar)
            .await?
            .into_iter()
            .find(|f| f.status != FilingStatus::Filed && f.obligation.due_date >= today);

        Ok(FilingStatusSummary {
            pending,
            overdue,
            filed,
            next_due,
        })
    }

    async fn stored_by_key(
        &self,
        tenant_id: TenantId,
    ) -> Result<HashMap<(FilingType, String), (TaxFilingId, FilingStatus)>, FilingError> {
        let models = tax_filings::Entity::find()
            .filter(tax_filings::Column::TenantId.eq(tenant_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models
            .into_iter()
            .map(|m| {
                (
                    (convert::filing_type_to_core(&m.filing_type), m.period),
                    (
                        TaxFilingId::from_uuid(m.id),
                        convert::filing_status_to_core(&m.status),
                    ),
                )
            })
            .collect())
    }
}

/// The obligation whose due date a filing record tracks.
///
/// INSS is tracked on its statement date; the later payment date is
/// surfaced separately through the schedule.
const fn due_kind(filing_type: FilingType) -> ObligationKind {
    match filing_type {
        FilingType::MonthlyWit => ObligationKind::MonthlyWit,
        FilingType::InssMonthly => ObligationKind::InssStatement,
        FilingType::AnnualWit => ObligationKind::AnnualWit,
    }
}

fn to_domain(model: tax_filings::Model) -> Result<TaxFiling, FilingError> {
    let period: FilingPeriod = model.period.parse()?;

    Ok(TaxFiling {
        id: TaxFilingId::from_uuid(model.id),
        tenant_id: TenantId::from_uuid(model.tenant_id),
        filing_type: convert::filing_type_to_core(&model.filing_type),
        period,
        status: convert::filing_status_to_core(&model.status),
        due_date: model.due_date,
        data_snapshot: model.data_snapshot,
        totals: FilingTotals {
            total_wages: model.total_wages,
            wit_withheld: model.wit_withheld,
            inss_employee: model.inss_employee,
            inss_employer: model.inss_employer,
        },
        filed_date: model.filed_date,
        submission_method: model.submission_method,
        receipt_number: model.receipt_number,
    })
}

fn db_err(e: sea_orm::DbErr) -> FilingError {
    FilingError::Database(e.to_string())
}
