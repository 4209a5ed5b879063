//! General ledger read side.
//!
//! Derived, never mutated: per-account history and report aggregates are
//! recomputed from posted journal entries on every call. Only entries
//! with status `posted` are visible here.

use chrono::NaiveDate;
use kontabil_core::coa::types::Account;
use kontabil_core::ledger::balance::balance_change;
use kontabil_core::ledger::error::LedgerError;
use kontabil_core::reports::types::AccountActivity;
use kontabil_shared::types::{AccountId, JournalEntryId, PageRequest, TenantId};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder, Statement,
};
use std::collections::HashMap;

use super::convert;
use crate::entities::accounts;

/// One row of an account's ledger history.
#[derive(Debug, Clone)]
pub struct AccountLedgerRow {
    /// The posting entry.
    pub entry_id: JournalEntryId,
    /// The entry's sequential number.
    pub entry_number: i64,
    /// Entry date.
    pub date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Debit amount on this account.
    pub debit: Decimal,
    /// Credit amount on this account.
    pub credit: Decimal,
    /// Balance after this row, per the account's normal side.
    pub running_balance: Decimal,
}

/// An account's ledger history over a date range.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    /// The account.
    pub account: Account,
    /// Balance carried into the range (posted entries strictly before
    /// the range start).
    pub opening_balance: Decimal,
    /// The rows of this page, in posting order.
    pub rows: Vec<AccountLedgerRow>,
    /// Total matching rows across all pages.
    pub total: u64,
}

/// General ledger repository (read-only).
#[derive(Debug, Clone)]
pub struct GeneralLedgerRepository {
    db: DatabaseConnection,
}

impl GeneralLedgerRepository {
    /// Creates a new general ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns an account's posted history over a date range with
    /// running balances.
    ///
    /// The running balance starts from the opening balance (all posted
    /// activity strictly before `from`, netted to the account's normal
    /// side) and accumulates across the range; pagination re-seeds the
    /// balance from the rows preceding the page.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AccountNotFound` for an unknown account.
    pub async fn entries_for_account(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> Result<AccountLedger, LedgerError> {
        let account = accounts::Entity::find_by_id(account_id.into_inner())
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::AccountNotFound(account_id))?;

        let account_type = convert::account_type_to_core(&account.account_type);
        let normal_side = account_type.normal_side();

        let (open_debit, open_credit) = self
            .sum_before(tenant_id, account_id, from)
            .await?;
        let opening_balance = balance_change(normal_side, open_debit, open_credit);

        let total = self.count_in_range(tenant_id, account_id, from, to).await?;

        // Seed the page's running balance with the rows before the page.
        let (prefix_debit, prefix_credit) = self
            .sum_range_prefix(tenant_id, account_id, from, to, page.offset())
            .await?;
        let mut balance =
            opening_balance + balance_change(normal_side, prefix_debit, prefix_credit);

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r"SELECT e.id AS entry_id, e.entry_number, e.entry_date, e.description,
                     l.debit, l.credit
              FROM journal_lines l
              JOIN journal_entries e ON e.id = l.entry_id
              WHERE e.tenant_id = $1
                AND l.account_id = $2
                AND e.status = 'posted'
                AND e.entry_date >= $3
                AND e.entry_date <= $4
              ORDER BY e.entry_date, e.entry_number, l.line_number
              LIMIT $5 OFFSET $6",
            [
                tenant_id.into_inner().into(),
                account_id.into_inner().into(),
                from.into(),
                to.into(),
                i64::try_from(page.limit()).unwrap_or(i64::MAX).into(),
                i64::try_from(page.offset()).unwrap_or(i64::MAX).into(),
            ],
        );

        let rows = self.db.query_all(stmt).await.map_err(db_err)?;
        let mut ledger_rows = Vec::with_capacity(rows.len());

        for row in rows {
            let debit: Decimal = row.try_get("", "debit").map_err(db_err)?;
            let credit: Decimal = row.try_get("", "credit").map_err(db_err)?;
            balance += balance_change(normal_side, debit, credit);

            ledger_rows.push(AccountLedgerRow {
                entry_id: JournalEntryId::from_uuid(row.try_get("", "entry_id").map_err(db_err)?),
                entry_number: row.try_get("", "entry_number").map_err(db_err)?,
                date: row.try_get("", "entry_date").map_err(db_err)?,
                description: row.try_get("", "description").map_err(db_err)?,
                debit,
                credit,
                running_balance: balance,
            });
        }

        Ok(AccountLedger {
            account: account_to_domain(account),
            opening_balance,
            rows: ledger_rows,
            total,
        })
    }

    /// Per-account debit/credit aggregates of posted entries over a
    /// date window, for every active account.
    ///
    /// Feeds the reporting service; accounts without activity come back
    /// with zero totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn account_activity(
        &self,
        tenant_id: TenantId,
        from: Option<NaiveDate>,
        to: NaiveDate,
    ) -> Result<Vec<AccountActivity>, LedgerError> {
        let account_models = accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(accounts::Column::IsActive.eq(true))
            .order_by_asc(accounts::Column::Code)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        // Postgres DATE cannot hold NaiveDate::MIN; any pre-system date
        // works as an unbounded range start.
        let range_start = from
            .or_else(|| NaiveDate::from_ymd_opt(1900, 1, 1))
            .unwrap_or(to);
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r"SELECT l.account_id,
                     COALESCE(SUM(l.debit), 0) AS total_debit,
                     COALESCE(SUM(l.credit), 0) AS total_credit
              FROM journal_lines l
              JOIN journal_entries e ON e.id = l.entry_id
              WHERE e.tenant_id = $1
                AND e.status = 'posted'
                AND e.entry_date >= $2
                AND e.entry_date <= $3
              GROUP BY l.account_id",
            [
                tenant_id.into_inner().into(),
                range_start.into(),
                to.into(),
            ],
        );

        let rows = self.db.query_all(stmt).await.map_err(db_err)?;
        let mut sums: HashMap<uuid::Uuid, (Decimal, Decimal)> = HashMap::with_capacity(rows.len());
        for row in rows {
            let account_id: uuid::Uuid = row.try_get("", "account_id").map_err(db_err)?;
            let total_debit: Decimal = row.try_get("", "total_debit").map_err(db_err)?;
            let total_credit: Decimal = row.try_get("", "total_credit").map_err(db_err)?;
            sums.insert(account_id, (total_debit, total_credit));
        }

        Ok(account_models
            .into_iter()
            .map(|account| {
                let (total_debit, total_credit) =
                    sums.get(&account.id).copied().unwrap_or_default();
                AccountActivity {
                    account_id: AccountId::from_uuid(account.id),
                    code: account.code,
                    name: account.name,
                    account_type: convert::account_type_to_core(&account.account_type),
                    sub_type: convert::sub_type_to_core(&account.sub_type),
                    total_debit,
                    total_credit,
                }
            })
            .collect())
    }

    async fn sum_before(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        before: NaiveDate,
    ) -> Result<(Decimal, Decimal), LedgerError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r"SELECT COALESCE(SUM(l.debit), 0) AS total_debit,
                     COALESCE(SUM(l.credit), 0) AS total_credit
              FROM journal_lines l
              JOIN journal_entries e ON e.id = l.entry_id
              WHERE e.tenant_id = $1
                AND l.account_id = $2
                AND e.status = 'posted'
                AND e.entry_date < $3",
            [
                tenant_id.into_inner().into(),
                account_id.into_inner().into(),
                before.into(),
            ],
        );

        self.sum_row(stmt).await
    }

    async fn sum_range_prefix(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        from: NaiveDate,
        to: NaiveDate,
        offset: u64,
    ) -> Result<(Decimal, Decimal), LedgerError> {
        if offset == 0 {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r"SELECT COALESCE(SUM(p.debit), 0) AS total_debit,
                     COALESCE(SUM(p.credit), 0) AS total_credit
              FROM (
                  SELECT l.debit, l.credit
                  FROM journal_lines l
                  JOIN journal_entries e ON e.id = l.entry_id
                  WHERE e.tenant_id = $1
                    AND l.account_id = $2
                    AND e.status = 'posted'
                    AND e.entry_date >= $3
                    AND e.entry_date <= $4
                  ORDER BY e.entry_date, e.entry_number, l.line_number
                  LIMIT $5
              ) p",
            [
                tenant_id.into_inner().into(),
                account_id.into_inner().into(),
                from.into(),
                to.into(),
                i64::try_from(offset).unwrap_or(i64::MAX).into(),
            ],
        );

        self.sum_row(stmt).await
    }

    async fn count_in_range(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<u64, LedgerError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r"SELECT COUNT(*) AS total
              FROM journal_lines l
              JOIN journal_entries e ON e.id = l.entry_id
              WHERE e.tenant_id = $1
                AND l.account_id = $2
                AND e.status = 'posted'
                AND e.entry_date >= $3
                AND e.entry_date <= $4",
            [
                tenant_id.into_inner().into(),
                account_id.into_inner().into(),
                from.into(),
                to.into(),
            ],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(db_err)?
            .ok_or_else(|| LedgerError::Database("count returned no row".to_string()))?;

        let total: i64 = row.try_get("", "total").map_err(db_err)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn sum_row(&self, stmt: Statement) -> Result<(Decimal, Decimal), LedgerError> {
        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(db_err)?
            .ok_or_else(|| LedgerError::Database("aggregate returned no row".to_string()))?;

        let total_debit: Decimal = row.try_get("", "total_debit").map_err(db_err)?;
        let total_credit: Decimal = row.try_get("", "total_credit").map_err(db_err)?;
        Ok((total_debit, total_credit))
    }
}

fn account_to_domain(model: accounts::Model) -> Account {
    Account {
        id: AccountId::from_uuid(model.id),
        tenant_id: TenantId::from_uuid(model.tenant_id),
        code: model.code,
        name: model.name,
        account_type: convert::account_type_to_core(&model.account_type),
        sub_type: convert::sub_type_to_core(&model.sub_type),
        parent_code: model.parent_code,
        level: model.level,
        is_system: model.is_system,
        is_active: model.is_active,
    }
}

fn db_err(e: sea_orm::DbErr) -> LedgerError {
    LedgerError::Database(e.to_string())
}
