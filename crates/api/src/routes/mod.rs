//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::AppState;

pub mod accounts;
pub mod filings;
pub mod fiscal;
pub mod health;
pub mod journal_entries;
pub mod reports;
pub mod tax;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(journal_entries::routes())
        .merge(fiscal::routes())
        .merge(reports::routes())
        .merge(tax::routes())
        .merge(filings::routes())
}

/// Builds a JSON error response from a code, status, and message.
pub(crate) fn error_response(status: u16, code: &str, message: &str) -> Response {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({
            "error": code.to_lowercase(),
            "message": message
        })),
    )
        .into_response()
}

/// Maps a ledger error to its HTTP response.
pub(crate) fn ledger_error(e: &kontabil_core::ledger::LedgerError) -> Response {
    error_response(e.http_status_code(), e.error_code(), &e.to_string())
}

/// Maps a chart of accounts error to its HTTP response.
pub(crate) fn coa_error(e: &kontabil_core::coa::CoaError) -> Response {
    error_response(e.http_status_code(), e.error_code(), &e.to_string())
}

/// Maps a fiscal error to its HTTP response.
pub(crate) fn fiscal_error(e: &kontabil_core::fiscal::FiscalError) -> Response {
    error_response(e.http_status_code(), e.error_code(), &e.to_string())
}

/// Maps a tax computation error to its HTTP response.
pub(crate) fn tax_error(e: &kontabil_core::tax::TaxError) -> Response {
    error_response(e.http_status_code(), e.error_code(), &e.to_string())
}

/// Maps a filing error to its HTTP response.
pub(crate) fn filing_error(e: &kontabil_core::filing::FilingError) -> Response {
    error_response(e.http_status_code(), e.error_code(), &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontabil_core::ledger::LedgerError;
    use rstest::rstest;

    #[rstest]
    #[case(400, StatusCode::BAD_REQUEST)]
    #[case(404, StatusCode::NOT_FOUND)]
    #[case(422, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(500, StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_response_status(#[case] status: u16, #[case] expected: StatusCode) {
        let response = error_response(status, "SOME_CODE", "message");
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn test_invalid_status_falls_back_to_500() {
        let response = error_response(99, "SOME_CODE", "message");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ledger_error_mapping() {
        let response = ledger_error(&LedgerError::PeriodClosed);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
