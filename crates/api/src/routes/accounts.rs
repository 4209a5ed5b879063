//! Chart of accounts routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use kontabil_core::coa::types::{AccountPatch, AccountSubType, AccountType, NewAccount};
use kontabil_shared::types::TenantId;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use super::coa_error;
use crate::AppState;
use kontabil_db::repositories::{AccountFilter, AccountRepository};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tenants/{tenant_id}/accounts", get(list_accounts))
        .route("/tenants/{tenant_id}/accounts", post(create_account))
        .route(
            "/tenants/{tenant_id}/accounts/defaults",
            post(initialize_defaults),
        )
        .route("/tenants/{tenant_id}/accounts/{code}", patch(update_account))
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Account code (immutable).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Account subtype.
    pub sub_type: AccountSubType,
    /// Optional parent account code.
    pub parent_code: Option<String>,
}

/// Request body for updating an account.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// New display name.
    pub name: Option<String>,
    /// New subtype.
    pub sub_type: Option<AccountSubType>,
    /// Activate or deactivate.
    pub is_active: Option<bool>,
}

/// Query parameters for listing accounts.
#[derive(Debug, Default, Deserialize)]
pub struct ListAccountsQuery {
    /// Filter by account type.
    pub account_type: Option<AccountType>,
    /// Filter by active status.
    pub is_active: Option<bool>,
}

/// GET `/tenants/{tenant_id}/accounts` - list accounts.
async fn list_accounts(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<ListAccountsQuery>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let filter = AccountFilter {
        account_type: query.account_type,
        is_active: query.is_active,
    };

    match repo
        .list_accounts(TenantId::from_uuid(tenant_id), filter)
        .await
    {
        Ok(accounts) => (StatusCode::OK, Json(json!({ "accounts": accounts }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list accounts");
            coa_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/accounts` - create an account.
async fn create_account(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let def = NewAccount {
        code: payload.code,
        name: payload.name,
        account_type: payload.account_type,
        sub_type: payload.sub_type,
        parent_code: payload.parent_code,
        is_system: false,
    };

    match repo.create_account(TenantId::from_uuid(tenant_id), def).await {
        Ok(account) => {
            info!(tenant_id = %tenant_id, code = %account.code, "Account created");
            (StatusCode::CREATED, Json(json!(account))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create account");
            coa_error(&e)
        }
    }
}

/// PATCH `/tenants/{tenant_id}/accounts/{code}` - update an account.
///
/// The account code is immutable and absent from the body by design.
async fn update_account(
    State(state): State<AppState>,
    Path((tenant_id, code)): Path<(Uuid, String)>,
    Json(payload): Json<UpdateAccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let patch = AccountPatch {
        name: payload.name,
        sub_type: payload.sub_type,
        is_active: payload.is_active,
    };

    match repo
        .update_account(TenantId::from_uuid(tenant_id), &code, patch)
        .await
    {
        Ok(account) => (StatusCode::OK, Json(json!(account))).into_response(),
        Err(e) => {
            error!(error = %e, code = %code, "Failed to update account");
            coa_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/accounts/defaults` - seed the default
/// Timor-Leste chart. Idempotent: re-running never duplicates codes.
async fn initialize_defaults(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.initialize_defaults(TenantId::from_uuid(tenant_id)).await {
        Ok(outcome) => {
            info!(
                tenant_id = %tenant_id,
                created = outcome.created,
                skipped = outcome.skipped,
                "Default chart seeded"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "created": outcome.created,
                    "skipped": outcome.skipped
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to seed default chart");
            coa_error(&e)
        }
    }
}
