//! Filing tracker routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, NaiveDate, Utc};
use kontabil_core::duedate::HolidayCalendar;
use kontabil_core::filing::error::FilingError;
use kontabil_core::filing::period::FilingPeriod;
use kontabil_core::filing::types::{FilingTotals, FilingType};
use kontabil_shared::types::{TaxFilingId, TenantId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::filing_error;
use crate::AppState;
use kontabil_db::repositories::{FilingRepository, SaveFilingInput};

/// Creates the filing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tenants/{tenant_id}/filings", get(list_filings))
        .route("/tenants/{tenant_id}/filings", post(save_filing))
        .route("/tenants/{tenant_id}/filings/due-soon", get(due_soon))
        .route("/tenants/{tenant_id}/filings/summary", get(summary))
        .route(
            "/tenants/{tenant_id}/filings/{filing_id}/file",
            post(mark_as_filed),
        )
}

/// Request body for saving (upserting) a filing.
#[derive(Debug, Deserialize)]
pub struct SaveFilingRequest {
    /// Kind of filing.
    pub filing_type: FilingType,
    /// Period covered, `YYYY-MM` or `YYYY`.
    pub period: FilingPeriod,
    /// The generated return payload.
    pub data_snapshot: serde_json::Value,
    /// Total gross wages.
    #[serde(default)]
    pub total_wages: Decimal,
    /// Total WIT withheld.
    #[serde(default)]
    pub wit_withheld: Decimal,
    /// Total employee INSS contributions.
    #[serde(default)]
    pub inss_employee: Decimal,
    /// Total employer INSS contributions.
    #[serde(default)]
    pub inss_employer: Decimal,
    /// The acting user.
    pub user_id: Uuid,
}

/// Request body for marking a filing as filed.
#[derive(Debug, Deserialize)]
pub struct MarkFiledRequest {
    /// Submission method (portal, paper, ...).
    pub submission_method: String,
    /// Authority receipt number.
    pub receipt_number: Option<String>,
    /// Operator notes.
    pub notes: Option<String>,
    /// The acting user.
    pub user_id: Uuid,
}

/// Query parameters for the due-soon listing.
#[derive(Debug, Deserialize)]
pub struct DueSoonQuery {
    /// Months ahead to enumerate (default 3).
    pub months: Option<u32>,
}

/// Assembles the tenant's holiday calendar for the years a window can
/// touch. One fetch per request; every due-date adjustment in the
/// request shares it.
async fn build_calendar(
    state: &AppState,
    tenant_id: TenantId,
    today: NaiveDate,
    months_ahead: u32,
) -> Result<HolidayCalendar, FilingError> {
    let last_year = today.year() + i32::try_from(months_ahead / 12).unwrap_or(0) + 1;
    let years: Vec<i32> = (today.year() - 1..=last_year).collect();

    let mut overrides = Vec::new();
    for year in &years {
        overrides.extend(
            state
                .holidays
                .overrides_for_year(tenant_id, *year)
                .await
                .map_err(FilingError::Contract)?,
        );
    }

    Ok(HolidayCalendar::build(&years, &overrides))
}

/// GET `/tenants/{tenant_id}/filings` - list stored filings.
async fn list_filings(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = FilingRepository::new((*state.db).clone());

    match repo.list_filings(TenantId::from_uuid(tenant_id)).await {
        Ok(filings) => (StatusCode::OK, Json(json!({ "filings": filings }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list filings");
            filing_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/filings` - upsert a filing keyed on
/// (tenant, type, period). Re-posting the same key updates the stored
/// document instead of duplicating it.
async fn save_filing(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<SaveFilingRequest>,
) -> impl IntoResponse {
    let tenant = TenantId::from_uuid(tenant_id);
    let repo = FilingRepository::new((*state.db).clone());
    let today = Utc::now().date_naive();

    let calendar = match build_calendar(&state, tenant, today, 12).await {
        Ok(calendar) => calendar,
        Err(e) => {
            warn!(error = %e, "Holiday overrides unavailable");
            return filing_error(&e);
        }
    };

    let input = SaveFilingInput {
        filing_type: payload.filing_type,
        period: payload.period,
        data_snapshot: payload.data_snapshot,
        totals: FilingTotals {
            total_wages: payload.total_wages,
            wit_withheld: payload.wit_withheld,
            inss_employee: payload.inss_employee,
            inss_employer: payload.inss_employer,
        },
        user_id: UserId::from_uuid(payload.user_id),
    };

    match repo.save_filing(tenant, input, today, &calendar).await {
        Ok(filing) => {
            info!(
                tenant_id = %tenant_id,
                filing_type = filing.filing_type.as_str(),
                period = %filing.period,
                "Filing saved"
            );
            (StatusCode::OK, Json(json!(filing))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to save filing");
            filing_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/filings/{filing_id}/file` - mark as
/// filed. The audit event is fire-and-forget.
async fn mark_as_filed(
    State(state): State<AppState>,
    Path((tenant_id, filing_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<MarkFiledRequest>,
) -> impl IntoResponse {
    let repo = FilingRepository::new((*state.db).clone());

    match repo
        .mark_as_filed(
            TenantId::from_uuid(tenant_id),
            TaxFilingId::from_uuid(filing_id),
            &payload.submission_method,
            payload.receipt_number,
            payload.notes,
            UserId::from_uuid(payload.user_id),
            Utc::now().date_naive(),
            Some(state.audit.as_ref()),
        )
        .await
    {
        Ok(filing) => {
            info!(
                tenant_id = %tenant_id,
                filing_id = %filing_id,
                "Filing marked as filed"
            );
            (StatusCode::OK, Json(json!(filing))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to mark filing as filed");
            filing_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/filings/due-soon?months=N` - upcoming
/// obligations joined with stored filing status, due date ascending.
async fn due_soon(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<DueSoonQuery>,
) -> impl IntoResponse {
    let tenant = TenantId::from_uuid(tenant_id);
    let repo = FilingRepository::new((*state.db).clone());
    let today = Utc::now().date_naive();
    let months = query.months.unwrap_or(3);

    let calendar = match build_calendar(&state, tenant, today, months).await {
        Ok(calendar) => calendar,
        Err(e) => return filing_error(&e),
    };

    match repo
        .get_filings_due_soon(tenant, months, today, &calendar)
        .await
    {
        Ok(filings) => {
            let rows: Vec<_> = filings
                .iter()
                .map(|f| {
                    json!({
                        "kind": f.obligation.kind,
                        "description": f.obligation.kind.description(),
                        "filing_type": f.obligation.filing_type,
                        "period": f.obligation.period,
                        "due_date": f.obligation.due_date,
                        "days_until_due": f.days_until_due,
                        "status": f.status,
                        "filing_id": f.filing_id,
                    })
                })
                .collect();
            (StatusCode::OK, Json(json!({ "due_soon": rows }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to enumerate due filings");
            filing_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/filings/summary` - counts by status plus
/// the next obligation coming due.
async fn summary(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    let tenant = TenantId::from_uuid(tenant_id);
    let repo = FilingRepository::new((*state.db).clone());
    let today = Utc::now().date_naive();

    let calendar = match build_calendar(&state, tenant, today, 3).await {
        Ok(calendar) => calendar,
        Err(e) => return filing_error(&e),
    };

    match repo.get_filing_status_summary(tenant, today, &calendar).await {
        Ok(s) => (
            StatusCode::OK,
            Json(json!({
                "pending": s.pending,
                "overdue": s.overdue,
                "filed": s.filed,
                "next_due": s.next_due.map(|f| json!({
                    "kind": f.obligation.kind,
                    "description": f.obligation.kind.description(),
                    "period": f.obligation.period,
                    "due_date": f.obligation.due_date,
                    "days_until_due": f.days_until_due,
                })),
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to build filing summary");
            filing_error(&e)
        }
    }
}
