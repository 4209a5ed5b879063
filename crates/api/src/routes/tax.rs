//! Tax return generation routes.
//!
//! Generation is a pure read over collaborator data: deterministic for
//! the same payroll inputs, never persisted here. Saving the result as
//! a filing is a separate call (`filings` routes), so backdated payroll
//! corrections are picked up by explicitly re-running generation.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use kontabil_core::filing::period::FilingPeriod;
use kontabil_core::tax::TaxComputationEngine;
use kontabil_shared::types::{EmployeeId, TenantId};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::tax_error;
use crate::AppState;

/// Creates the tax routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tenants/{tenant_id}/tax/returns/monthly-wit",
            get(monthly_wit),
        )
        .route(
            "/tenants/{tenant_id}/tax/returns/monthly-inss",
            get(monthly_inss),
        )
        .route(
            "/tenants/{tenant_id}/tax/returns/annual-wit",
            get(annual_wit),
        )
        .route(
            "/tenants/{tenant_id}/tax/employees/{employee_id}/wit-certificate",
            get(wit_certificate),
        )
}

/// Query parameters for monthly returns.
#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    /// The month covered, `YYYY-MM`.
    pub period: FilingPeriod,
}

/// Query parameters for annual returns and certificates.
#[derive(Debug, Deserialize)]
pub struct AnnualQuery {
    /// The tax year covered.
    pub year: i32,
}

fn engine(
    state: &AppState,
) -> TaxComputationEngine<
    std::sync::Arc<dyn kontabil_core::contracts::PayrollSource>,
    std::sync::Arc<dyn kontabil_core::contracts::EmployeeDirectory>,
    std::sync::Arc<dyn kontabil_core::contracts::CompanySettings>,
> {
    TaxComputationEngine::new(
        state.payroll.clone(),
        state.employees.clone(),
        state.settings.clone(),
    )
}

/// GET `/tenants/{tenant_id}/tax/returns/monthly-wit?period=YYYY-MM`.
async fn monthly_wit(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<MonthlyQuery>,
) -> impl IntoResponse {
    match engine(&state)
        .generate_monthly_wit_return(TenantId::from_uuid(tenant_id), query.period)
        .await
    {
        Ok(wit) => (StatusCode::OK, Json(json!(wit))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate monthly WIT return");
            tax_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/tax/returns/monthly-inss?period=YYYY-MM`.
async fn monthly_inss(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<MonthlyQuery>,
) -> impl IntoResponse {
    match engine(&state)
        .generate_monthly_inss_return(TenantId::from_uuid(tenant_id), query.period)
        .await
    {
        Ok(inss) => (StatusCode::OK, Json(json!(inss))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate monthly INSS return");
            tax_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/tax/returns/annual-wit?year=YYYY`.
async fn annual_wit(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AnnualQuery>,
) -> impl IntoResponse {
    match engine(&state)
        .generate_annual_wit_return(TenantId::from_uuid(tenant_id), query.year)
        .await
    {
        Ok(annual) => (StatusCode::OK, Json(json!(annual))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate annual WIT return");
            tax_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/tax/employees/{employee_id}/wit-certificate?year=YYYY`.
async fn wit_certificate(
    State(state): State<AppState>,
    Path((tenant_id, employee_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<AnnualQuery>,
) -> impl IntoResponse {
    match engine(&state)
        .generate_employee_wit_certificate(
            TenantId::from_uuid(tenant_id),
            query.year,
            EmployeeId::from_uuid(employee_id),
        )
        .await
    {
        Ok(certificate) => (StatusCode::OK, Json(json!(certificate))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate WIT certificate");
            tax_error(&e)
        }
    }
}
