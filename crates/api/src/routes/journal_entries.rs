//! Journal entry routes, including the best-effort invoice postings.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use chrono::{NaiveDate, Utc};
use kontabil_core::ledger::types::{
    CreateEntryInput, EntrySource, JournalLineInput, Side,
};
use kontabil_shared::types::{
    AccountId, JournalEntryId, PageRequest, TenantId, UserId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ledger_error;
use crate::AppState;
use kontabil_db::repositories::{EntryFilter, JournalEntryRepository};

/// Creates the journal entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tenants/{tenant_id}/journal-entries", get(list_entries))
        .route("/tenants/{tenant_id}/journal-entries", post(create_entry))
        .route("/tenants/{tenant_id}/journal-entries/{entry_id}", get(get_entry))
        .route(
            "/tenants/{tenant_id}/journal-entries/{entry_id}",
            patch(update_entry),
        )
        .route(
            "/tenants/{tenant_id}/journal-entries/{entry_id}",
            delete(delete_entry),
        )
        .route(
            "/tenants/{tenant_id}/journal-entries/{entry_id}/post",
            post(post_entry),
        )
        .route(
            "/tenants/{tenant_id}/journal-entries/{entry_id}/void",
            post(void_entry),
        )
        .route(
            "/tenants/{tenant_id}/ledger/invoice-postings",
            post(create_from_invoice),
        )
        .route(
            "/tenants/{tenant_id}/ledger/invoice-payment-postings",
            post(create_from_invoice_payment),
        )
}

/// One line of a journal entry request.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    /// Account ID.
    pub account_id: Uuid,
    /// Debit or credit.
    pub side: Side,
    /// Amount (positive, cent-precise).
    pub amount: Decimal,
    /// Optional memo.
    pub memo: Option<String>,
}

impl LineRequest {
    fn into_input(self) -> JournalLineInput {
        JournalLineInput {
            account_id: AccountId::from_uuid(self.account_id),
            side: self.side,
            amount: self.amount,
            memo: self.memo,
        }
    }
}

/// Request body for creating a journal entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Entry date.
    pub date: NaiveDate,
    /// Description of the underlying event.
    pub description: String,
    /// The lines (at least 2, balanced).
    pub lines: Vec<LineRequest>,
    /// The user creating the entry.
    pub created_by: Uuid,
    /// Post immediately instead of leaving a draft.
    #[serde(default)]
    pub post_immediately: bool,
}

/// Request body for updating a draft entry.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    /// New description.
    pub description: Option<String>,
    /// Replacement lines, revalidated in full.
    pub lines: Option<Vec<LineRequest>>,
}

/// Request body for posting a draft entry.
#[derive(Debug, Deserialize)]
pub struct PostEntryRequest {
    /// The user posting the entry.
    pub posted_by: Uuid,
}

/// Request body for voiding a posted entry.
#[derive(Debug, Deserialize)]
pub struct VoidEntryRequest {
    /// Why the entry is being voided.
    pub reason: String,
    /// The user voiding the entry.
    pub voided_by: Uuid,
}

/// Request body for the invoice posting integrations.
#[derive(Debug, Deserialize)]
pub struct InvoicePostingRequest {
    /// Invoice number for the entry description.
    pub invoice_number: String,
    /// Invoice or payment amount.
    pub amount: Decimal,
    /// Posting date.
    pub date: NaiveDate,
    /// The acting user.
    pub created_by: Uuid,
}

/// Query parameters for listing entries.
#[derive(Debug, Default, Deserialize)]
pub struct ListEntriesQuery {
    /// Filter by date range start.
    pub date_from: Option<NaiveDate>,
    /// Filter by date range end.
    pub date_to: Option<NaiveDate>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// GET `/tenants/{tenant_id}/journal-entries` - list entries.
async fn list_entries(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<ListEntriesQuery>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    let mut page = PageRequest::default();
    if let Some(p) = query.page {
        page.page = p;
    }
    if let Some(pp) = query.per_page {
        page.per_page = pp;
    }

    let filter = EntryFilter {
        date_from: query.date_from,
        date_to: query.date_to,
        ..EntryFilter::default()
    };

    match repo
        .list_entries(TenantId::from_uuid(tenant_id), filter, page)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "entries": result.entries,
                "total": result.total
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list journal entries");
            ledger_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/journal-entries` - create an entry.
async fn create_entry(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<CreateEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    let input = CreateEntryInput {
        tenant_id: TenantId::from_uuid(tenant_id),
        date: payload.date,
        description: payload.description,
        source: EntrySource::Manual,
        lines: payload.lines.into_iter().map(LineRequest::into_input).collect(),
        created_by: UserId::from_uuid(payload.created_by),
        post_immediately: payload.post_immediately,
    };

    match repo.create_entry(input).await {
        Ok(created) => {
            info!(
                tenant_id = %tenant_id,
                entry_number = created.entry.entry_number,
                "Journal entry created"
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "entry": created.entry,
                    "lines": created.lines
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create journal entry");
            ledger_error(&e)
        }
    }
}

/// GET `/tenants/{tenant_id}/journal-entries/{entry_id}` - get an entry.
async fn get_entry(
    State(state): State<AppState>,
    Path((tenant_id, entry_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    match repo
        .get_entry(
            TenantId::from_uuid(tenant_id),
            JournalEntryId::from_uuid(entry_id),
        )
        .await
    {
        Ok(found) => (
            StatusCode::OK,
            Json(json!({
                "entry": found.entry,
                "lines": found.lines
            })),
        )
            .into_response(),
        Err(e) => ledger_error(&e),
    }
}

/// PATCH `/tenants/{tenant_id}/journal-entries/{entry_id}` - update a
/// draft entry.
async fn update_entry(
    State(state): State<AppState>,
    Path((tenant_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    let lines = payload
        .lines
        .map(|lines| lines.into_iter().map(LineRequest::into_input).collect());

    match repo
        .update_entry(
            TenantId::from_uuid(tenant_id),
            JournalEntryId::from_uuid(entry_id),
            payload.description,
            lines,
        )
        .await
    {
        Ok(updated) => (
            StatusCode::OK,
            Json(json!({
                "entry": updated.entry,
                "lines": updated.lines
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update journal entry");
            ledger_error(&e)
        }
    }
}

/// DELETE `/tenants/{tenant_id}/journal-entries/{entry_id}` - delete a
/// draft entry.
async fn delete_entry(
    State(state): State<AppState>,
    Path((tenant_id, entry_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    match repo
        .delete_entry(
            TenantId::from_uuid(tenant_id),
            JournalEntryId::from_uuid(entry_id),
        )
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete journal entry");
            ledger_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/journal-entries/{entry_id}/post` - post a
/// draft entry. The owning period must still be open at commit time.
async fn post_entry(
    State(state): State<AppState>,
    Path((tenant_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<PostEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    match repo
        .post_entry(
            TenantId::from_uuid(tenant_id),
            JournalEntryId::from_uuid(entry_id),
            UserId::from_uuid(payload.posted_by),
        )
        .await
    {
        Ok(entry) => {
            info!(
                tenant_id = %tenant_id,
                entry_number = entry.entry_number,
                "Journal entry posted"
            );
            (StatusCode::OK, Json(json!(entry))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to post journal entry");
            ledger_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/journal-entries/{entry_id}/void` - void a
/// posted entry; the reversing entry posts into the current open period.
async fn void_entry(
    State(state): State<AppState>,
    Path((tenant_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<VoidEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    match repo
        .void_entry(
            TenantId::from_uuid(tenant_id),
            JournalEntryId::from_uuid(entry_id),
            &payload.reason,
            UserId::from_uuid(payload.voided_by),
            Utc::now().date_naive(),
        )
        .await
    {
        Ok(reversal) => {
            info!(
                tenant_id = %tenant_id,
                reversal_number = reversal.entry.entry_number,
                "Journal entry voided"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "reversal_entry": reversal.entry,
                    "reversal_lines": reversal.lines
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to void journal entry");
            ledger_error(&e)
        }
    }
}

/// POST `/tenants/{tenant_id}/ledger/invoice-postings` - ledger entry
/// for an invoice being issued.
///
/// Best-effort two-phase contract: the invoice itself has already
/// committed in the collaborator. A missing chart of accounts is
/// reported as `posted: false`, logged for operators, and returns 200
/// so the caller never blocks the invoice on its ledger side-effect.
async fn create_from_invoice(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<InvoicePostingRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    let result = repo
        .create_from_invoice(
            TenantId::from_uuid(tenant_id),
            &payload.invoice_number,
            payload.amount,
            payload.date,
            UserId::from_uuid(payload.created_by),
        )
        .await;

    invoice_posting_response(tenant_id, &payload.invoice_number, result)
}

/// POST `/tenants/{tenant_id}/ledger/invoice-payment-postings` - ledger
/// entry for an invoice payment received. Same contract as invoice
/// postings.
async fn create_from_invoice_payment(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<InvoicePostingRequest>,
) -> impl IntoResponse {
    let repo = JournalEntryRepository::new((*state.db).clone());

    let result = repo
        .create_from_invoice_payment(
            TenantId::from_uuid(tenant_id),
            &payload.invoice_number,
            payload.amount,
            payload.date,
            UserId::from_uuid(payload.created_by),
        )
        .await;

    invoice_posting_response(tenant_id, &payload.invoice_number, result)
}

fn invoice_posting_response(
    tenant_id: Uuid,
    invoice_number: &str,
    result: Result<kontabil_db::repositories::EntryWithLines, kontabil_core::ledger::LedgerError>,
) -> axum::response::Response {
    match result {
        Ok(created) => (
            StatusCode::OK,
            Json(json!({
                "posted": true,
                "entry": created.entry
            })),
        )
            .into_response(),
        Err(e) => {
            // Surfaced through telemetry, not to the invoicing flow.
            warn!(
                tenant_id = %tenant_id,
                invoice_number = %invoice_number,
                error = %e,
                error_code = e.error_code(),
                "Invoice ledger posting skipped"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "posted": false,
                    "reason": e.error_code().to_lowercase()
                })),
            )
                .into_response()
        }
    }
}
