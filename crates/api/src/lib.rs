//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the ledger, fiscal, reporting, and filing
//!   operations
//! - Default collaborator wiring for the external payroll, employee,
//!   settings, holiday, and audit services
//!
//! Authentication and tenant provisioning live in an external
//! collaborator; routes are tenant-scoped by path.

pub mod collaborators;
pub mod routes;

use axum::Router;
use kontabil_core::contracts::{
    AuditLog, CompanySettings, EmployeeDirectory, HolidaySource, PayrollSource,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Payroll collaborator.
    pub payroll: Arc<dyn PayrollSource>,
    /// Employee directory collaborator.
    pub employees: Arc<dyn EmployeeDirectory>,
    /// Company settings collaborator.
    pub settings: Arc<dyn CompanySettings>,
    /// Holiday overrides collaborator.
    pub holidays: Arc<dyn HolidaySource>,
    /// Audit log collaborator (fire-and-forget).
    pub audit: Arc<dyn AuditLog>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
