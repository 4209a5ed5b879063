//! Financial report routes.
//!
//! Pure queries over posted entries; safe to re-run, served without
//! ordering guarantees beyond read-your-writes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use kontabil_core::reports::ReportService;
use kontabil_shared::types::{AccountId, PageRequest, TenantId};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::ledger_error;
use crate::AppState;
use kontabil_db::repositories::GeneralLedgerRepository;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tenants/{tenant_id}/reports/trial-balance",
            get(trial_balance),
        )
        .route(
            "/tenants/{tenant_id}/reports/income-statement",
            get(income_statement),
        )
        .route(
            "/tenants/{tenant_id}/reports/balance-sheet",
            get(balance_sheet),
        )
        .route(
            "/tenants/{tenant_id}/accounts/{account_id}/ledger",
            get(account_ledger),
        )
}

/// Query parameters for point-in-time reports.
#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    /// Report date (inclusive).
    pub as_of: NaiveDate,
    /// Fiscal year label for the report header.
    pub fiscal_year: i32,
}

/// Query parameters for range reports.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    /// Range start (inclusive).
    pub from: NaiveDate,
    /// Range end (inclusive).
    pub to: NaiveDate,
    /// Fiscal year label for the report header.
    pub fiscal_year: i32,
}

/// Query parameters for the account ledger.
#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    /// Range start (inclusive).
    pub from: NaiveDate,
    /// Range end (inclusive).
    pub to: NaiveDate,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// GET `/tenants/{tenant_id}/reports/trial-balance`.
async fn trial_balance(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> impl IntoResponse {
    let ledger = GeneralLedgerRepository::new((*state.db).clone());

    match ledger
        .account_activity(TenantId::from_uuid(tenant_id), None, query.as_of)
        .await
    {
        Ok(activities) => {
            let report = ReportService::generate_trial_balance(
                query.as_of,
                query.fiscal_year,
                activities,
            );
            (StatusCode::OK, Json(json!(report))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to generate trial balance");
            ledger_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/reports/income-statement`.
async fn income_statement(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let ledger = GeneralLedgerRepository::new((*state.db).clone());

    match ledger
        .account_activity(TenantId::from_uuid(tenant_id), Some(query.from), query.to)
        .await
    {
        Ok(activities) => {
            let report = ReportService::generate_income_statement(
                query.from,
                query.to,
                query.fiscal_year,
                activities,
            );
            (StatusCode::OK, Json(json!(report))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to generate income statement");
            ledger_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/reports/balance-sheet`.
async fn balance_sheet(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> impl IntoResponse {
    let ledger = GeneralLedgerRepository::new((*state.db).clone());

    match ledger
        .account_activity(TenantId::from_uuid(tenant_id), None, query.as_of)
        .await
    {
        Ok(activities) => {
            let report = ReportService::generate_balance_sheet(
                query.as_of,
                query.fiscal_year,
                activities,
            );
            (StatusCode::OK, Json(json!(report))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to generate balance sheet");
            ledger_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/accounts/{account_id}/ledger` - account
/// history with running balances, paginated.
async fn account_ledger(
    State(state): State<AppState>,
    Path((tenant_id, account_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<LedgerQuery>,
) -> impl IntoResponse {
    let ledger = GeneralLedgerRepository::new((*state.db).clone());

    let mut page = PageRequest::default();
    if let Some(p) = query.page {
        page.page = p;
    }
    if let Some(pp) = query.per_page {
        page.per_page = pp;
    }

    match ledger
        .entries_for_account(
            TenantId::from_uuid(tenant_id),
            AccountId::from_uuid(account_id),
            query.from,
            query.to,
            page,
        )
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "account": result.account,
                "opening_balance": result.opening_balance,
                "rows": result.rows.iter().map(|r| json!({
                    "entry_id": r.entry_id,
                    "entry_number": r.entry_number,
                    "date": r.date,
                    "description": r.description,
                    "debit": r.debit,
                    "credit": r.credit,
                    "running_balance": r.running_balance,
                })).collect::<Vec<_>>(),
                "total": result.total
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load account ledger");
            ledger_error(&e)
        }
    }
}
