//! Filing upsert and schedule tests against a real Postgres.
//!
//! These tests require `DATABASE_URL`; they are skipped when unset.

#![allow(clippy::uninlined_format_args)]

use chrono::NaiveDate;
use kontabil_core::duedate::HolidayCalendar;
use kontabil_core::filing::period::FilingPeriod;
use kontabil_core::filing::types::{FilingStatus, FilingTotals, FilingType};
use kontabil_shared::types::{TenantId, UserId};
use kontabil_db::migration::{Migrator, MigratorTrait};
use kontabil_db::repositories::{FilingRepository, SaveFilingInput};
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use std::env;

async fn connect() -> Option<DatabaseConnection> {
    let Ok(url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping integration test");
        return None;
    };
    let db = kontabil_db::connect(&url).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    Some(db)
}

fn january() -> FilingPeriod {
    FilingPeriod::Month {
        year: 2026,
        month: 1,
    }
}

fn save_input(user: UserId) -> SaveFilingInput {
    SaveFilingInput {
        filing_type: FilingType::MonthlyWit,
        period: january(),
        data_snapshot: serde_json::json!({"rows": []}),
        totals: FilingTotals {
            total_wages: dec!(2000.00),
            wit_withheld: dec!(150.00),
            inss_employee: dec!(0),
            inss_employer: dec!(0),
        },
        user_id: user,
    }
}

#[tokio::test]
async fn save_filing_is_an_idempotent_upsert() {
    let Some(db) = connect().await else { return };
    let repo = FilingRepository::new(db.clone());
    let tenant = TenantId::new();
    let user = UserId::new();
    let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let calendar = HolidayCalendar::national(&[2026]);

    let first = repo
        .save_filing(tenant, save_input(user), today, &calendar)
        .await
        .expect("first save");
    let second = repo
        .save_filing(tenant, save_input(user), today, &calendar)
        .await
        .expect("second save");

    // Same document, not a duplicate.
    assert_eq!(first.id, second.id);
    assert_eq!(repo.list_filings(tenant).await.expect("list").len(), 1);

    // Due base 2026-02-15 is a Sunday; the stored due date is Monday.
    assert_eq!(
        second.due_date,
        NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
    );
    assert_eq!(second.status, FilingStatus::Pending);
}

#[tokio::test]
async fn regeneration_does_not_unfile_a_filed_record() {
    let Some(db) = connect().await else { return };
    let repo = FilingRepository::new(db.clone());
    let tenant = TenantId::new();
    let user = UserId::new();
    let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let calendar = HolidayCalendar::national(&[2026]);

    let saved = repo
        .save_filing(tenant, save_input(user), today, &calendar)
        .await
        .expect("save");

    let filed = repo
        .mark_as_filed(
            tenant,
            saved.id,
            "portal",
            Some("RCT-123".to_string()),
            None,
            user,
            NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            None,
        )
        .await
        .expect("mark filed");
    assert_eq!(filed.status, FilingStatus::Filed);

    // Regeneration refreshes the snapshot but keeps the filed status
    // and submission details.
    let mut input = save_input(user);
    input.totals.wit_withheld = dec!(175.00);
    let regenerated = repo
        .save_filing(tenant, input, today, &calendar)
        .await
        .expect("regenerate");

    assert_eq!(regenerated.status, FilingStatus::Filed);
    assert_eq!(regenerated.receipt_number, Some("RCT-123".to_string()));
    assert_eq!(regenerated.totals.wit_withheld, dec!(175.00));
}

#[tokio::test]
async fn overdue_status_derived_from_due_date() {
    let Some(db) = connect().await else { return };
    let repo = FilingRepository::new(db.clone());
    let tenant = TenantId::new();
    let user = UserId::new();
    // Well past the 2026-02-16 adjusted due date
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let calendar = HolidayCalendar::national(&[2026]);

    let saved = repo
        .save_filing(tenant, save_input(user), today, &calendar)
        .await
        .expect("save");

    assert_eq!(saved.status, FilingStatus::Overdue);
}

#[tokio::test]
async fn due_soon_joins_stored_filings() {
    let Some(db) = connect().await else { return };
    let repo = FilingRepository::new(db.clone());
    let tenant = TenantId::new();
    let user = UserId::new();
    let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let calendar = HolidayCalendar::national(&[2026]);

    let saved = repo
        .save_filing(tenant, save_input(user), today, &calendar)
        .await
        .expect("save");

    let due_soon = repo
        .get_filings_due_soon(tenant, 1, today, &calendar)
        .await
        .expect("due soon");

    assert!(!due_soon.is_empty());
    for pair in due_soon.windows(2) {
        assert!(pair[0].obligation.due_date <= pair[1].obligation.due_date);
    }

    let january_wit = due_soon
        .iter()
        .find(|f| {
            f.obligation.filing_type == FilingType::MonthlyWit && f.obligation.period == january()
        })
        .expect("january WIT obligation");
    assert_eq!(january_wit.filing_id, Some(saved.id));

    let summary = repo
        .get_filing_status_summary(tenant, today, &calendar)
        .await
        .expect("summary");
    assert_eq!(summary.pending, 1);
    assert!(summary.next_due.is_some());
}
