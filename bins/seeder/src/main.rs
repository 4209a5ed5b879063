//! Database seeder for Kontabil development and testing.
//!
//! Seeds a test tenant with the default Timor-Leste chart of accounts
//! and a fiscal year with 12 open monthly periods.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Utc};
use kontabil_db::repositories::{AccountRepository, FiscalRepository};
use kontabil_shared::types::TenantId;
use uuid::Uuid;

/// Test tenant ID (consistent for all seeds)
const TEST_TENANT_ID: &str = "00000000-0000-0000-0000-000000000001";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = kontabil_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let tenant_id = TenantId::from_uuid(
        Uuid::parse_str(TEST_TENANT_ID).expect("test tenant id parses"),
    );

    println!("Seeding default chart of accounts...");
    let accounts = AccountRepository::new(db.clone());
    let outcome = accounts
        .initialize_defaults(tenant_id)
        .await
        .expect("Failed to seed chart of accounts");
    println!(
        "  chart of accounts: {} created, {} already present",
        outcome.created, outcome.skipped
    );

    let year = Utc::now().year();
    println!("Seeding fiscal year {year}...");
    let fiscal = FiscalRepository::new(db.clone());
    match fiscal.create_fiscal_year(tenant_id, year).await {
        Ok(fy) => println!(
            "  fiscal year {} with {} periods",
            fy.fiscal_year.year,
            fy.periods.len()
        ),
        Err(e) => println!("  fiscal year not created: {e}"),
    }

    println!("Done.");
}
