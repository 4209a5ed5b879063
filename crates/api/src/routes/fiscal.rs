//! Fiscal year and period management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use kontabil_core::ledger::types::{JournalLineInput, Side};
use kontabil_shared::types::{AccountId, FiscalPeriodId, TenantId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use super::fiscal_error;
use crate::AppState;
use kontabil_db::repositories::FiscalRepository;

/// Creates the fiscal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tenants/{tenant_id}/fiscal-years", get(list_fiscal_years))
        .route("/tenants/{tenant_id}/fiscal-years", post(create_fiscal_year))
        .route(
            "/tenants/{tenant_id}/fiscal-years/{year}/opening-balances",
            post(post_opening_balances),
        )
        .route(
            "/tenants/{tenant_id}/fiscal-years/{year}/close",
            post(close_fiscal_year),
        )
        .route(
            "/tenants/{tenant_id}/fiscal-periods/{period_id}/close",
            post(close_period),
        )
        .route(
            "/tenants/{tenant_id}/fiscal-periods/{period_id}/reopen",
            post(reopen_period),
        )
        .route(
            "/tenants/{tenant_id}/fiscal-periods/{period_id}/lock",
            post(lock_period),
        )
}

/// Request body for creating a fiscal year.
#[derive(Debug, Deserialize)]
pub struct CreateFiscalYearRequest {
    /// Calendar year (e.g., 2026).
    pub year: i32,
}

/// Request body for period transitions.
#[derive(Debug, Deserialize)]
pub struct PeriodActionRequest {
    /// The acting user.
    pub user_id: Uuid,
}

/// One opening balance line.
#[derive(Debug, Deserialize)]
pub struct OpeningLineRequest {
    /// Account ID.
    pub account_id: Uuid,
    /// Debit or credit.
    pub side: Side,
    /// Amount.
    pub amount: Decimal,
}

/// Request body for posting opening balances.
#[derive(Debug, Deserialize)]
pub struct OpeningBalancesRequest {
    /// The balanced opening lines.
    pub lines: Vec<OpeningLineRequest>,
    /// The acting user.
    pub user_id: Uuid,
}

/// GET `/tenants/{tenant_id}/fiscal-years` - list years with periods.
async fn list_fiscal_years(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo.list_fiscal_years(TenantId::from_uuid(tenant_id)).await {
        Ok(years) => {
            let response: Vec<_> = years
                .into_iter()
                .map(|fy| {
                    json!({
                        "fiscal_year": fy.fiscal_year,
                        "periods": fy.periods
                    })
                })
                .collect();
            (StatusCode::OK, Json(json!({ "fiscal_years": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list fiscal years");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-years` - create a fiscal year with
/// 12 open monthly periods.
async fn create_fiscal_year(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<CreateFiscalYearRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo
        .create_fiscal_year(TenantId::from_uuid(tenant_id), payload.year)
        .await
    {
        Ok(fy) => {
            info!(tenant_id = %tenant_id, year = payload.year, "Fiscal year created");
            (
                StatusCode::CREATED,
                Json(json!({
                    "fiscal_year": fy.fiscal_year,
                    "periods": fy.periods
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create fiscal year");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-years/{year}/opening-balances` -
/// post the opening balance entry into period 1.
async fn post_opening_balances(
    State(state): State<AppState>,
    Path((tenant_id, year)): Path<(Uuid, i32)>,
    Json(payload): Json<OpeningBalancesRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    let lines = payload
        .lines
        .into_iter()
        .map(|l| JournalLineInput {
            account_id: AccountId::from_uuid(l.account_id),
            side: l.side,
            amount: l.amount,
            memo: None,
        })
        .collect();

    match repo
        .post_opening_balances(
            TenantId::from_uuid(tenant_id),
            year,
            lines,
            UserId::from_uuid(payload.user_id),
        )
        .await
    {
        Ok(fy) => {
            info!(tenant_id = %tenant_id, year = year, "Opening balances posted");
            (StatusCode::OK, Json(json!(fy))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to post opening balances");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-years/{year}/close` - close a year
/// once all its periods are closed or locked.
async fn close_fiscal_year(
    State(state): State<AppState>,
    Path((tenant_id, year)): Path<(Uuid, i32)>,
    Json(payload): Json<PeriodActionRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo
        .close_fiscal_year(
            TenantId::from_uuid(tenant_id),
            year,
            UserId::from_uuid(payload.user_id),
        )
        .await
    {
        Ok(fy) => {
            info!(tenant_id = %tenant_id, year = year, "Fiscal year closed");
            (StatusCode::OK, Json(json!(fy))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to close fiscal year");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-periods/{period_id}/close`.
async fn close_period(
    State(state): State<AppState>,
    Path((tenant_id, period_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PeriodActionRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo
        .close_period(
            TenantId::from_uuid(tenant_id),
            FiscalPeriodId::from_uuid(period_id),
            UserId::from_uuid(payload.user_id),
        )
        .await
    {
        Ok(period) => {
            info!(tenant_id = %tenant_id, period_id = %period_id, "Period closed");
            (StatusCode::OK, Json(json!(period))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to close period");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-periods/{period_id}/reopen` - the
/// single allowed backward transition.
async fn reopen_period(
    State(state): State<AppState>,
    Path((tenant_id, period_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PeriodActionRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo
        .reopen_period(
            TenantId::from_uuid(tenant_id),
            FiscalPeriodId::from_uuid(period_id),
            UserId::from_uuid(payload.user_id),
        )
        .await
    {
        Ok(period) => {
            info!(tenant_id = %tenant_id, period_id = %period_id, "Period reopened");
            (StatusCode::OK, Json(json!(period))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to reopen period");
            fiscal_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/fiscal-periods/{period_id}/lock` -
/// permanent freeze after filing submission.
async fn lock_period(
    State(state): State<AppState>,
    Path((tenant_id, period_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PeriodActionRequest>,
) -> impl IntoResponse {
    let repo = FiscalRepository::new((*state.db).clone());

    match repo
        .lock_period(
            TenantId::from_uuid(tenant_id),
            FiscalPeriodId::from_uuid(period_id),
            UserId::from_uuid(payload.user_id),
        )
        .await
    {
        Ok(period) => {
            info!(tenant_id = %tenant_id, period_id = %period_id, "Period locked");
            (StatusCode::OK, Json(json!(period))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to lock period");
            fiscal_error(&e)
        }
    }
}
