//! Journal entry repository.
//!
//! Sole writer of journal entries and lines. Entry numbers are allocated
//! through an atomic counter upsert inside the insert transaction, and
//! posting re-checks the owning period's status inside the same
//! transaction that flips the entry status, so a period closing between
//! validation and commit is still caught.

use chrono::{NaiveDate, Utc};
use kontabil_core::fiscal::types::FiscalPeriodStatus as CorePeriodStatus;
use kontabil_core::ledger::error::LedgerError;
use kontabil_core::ledger::invoice;
use kontabil_core::ledger::reversal;
use kontabil_core::ledger::types::{
    CreateEntryInput, EntrySource, JournalLine, JournalLineInput,
};
use kontabil_core::ledger::validation::{AccountSnapshot, validate_and_resolve};
use kontabil_shared::types::{AccountId, JournalEntryId, PageRequest, TenantId, UserId};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, Statement,
    TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use super::account::AccountRepository;
use super::convert;
use crate::entities::{
    fiscal_periods, fiscal_years, journal_entries, journal_lines,
    sea_orm_active_enums::{EntrySource as DbEntrySource, EntryStatus as DbEntryStatus,
        FiscalPeriodStatus as DbPeriodStatus},
};

use kontabil_core::coa::defaults::statutory_codes;

/// A journal entry header with its lines.
#[derive(Debug, Clone)]
pub struct EntryWithLines {
    /// The entry header.
    pub entry: journal_entries::Model,
    /// The lines, ordered by line number.
    pub lines: Vec<journal_lines::Model>,
}

/// Filter options for listing entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Filter by status.
    pub status: Option<DbEntryStatus>,
    /// Filter by source.
    pub source: Option<DbEntrySource>,
    /// Filter by date range start.
    pub date_from: Option<NaiveDate>,
    /// Filter by date range end.
    pub date_to: Option<NaiveDate>,
}

/// Paginated entry listing.
#[derive(Debug, Clone)]
pub struct EntryPage {
    /// The entries in this page.
    pub entries: Vec<journal_entries::Model>,
    /// Total matching entries.
    pub total: u64,
}

/// Journal entry repository.
#[derive(Debug, Clone)]
pub struct JournalEntryRepository {
    db: DatabaseConnection,
}

impl JournalEntryRepository {
    /// Creates a new journal entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a journal entry, as a draft or posted immediately.
    ///
    /// Validates balance and accounts, resolves the owning fiscal
    /// period from the entry date, and allocates the next sequential
    /// entry number atomically.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on validation failure, a missing or closed
    /// period, or a database error.
    pub async fn create_entry(&self, input: CreateEntryInput) -> Result<EntryWithLines, LedgerError> {
        let period = self.find_period_for_date(input.tenant_id, input.date).await?;

        let period_status = convert::period_status_to_core(&period.status);
        if input.post_immediately && !period_status.allows_posting() {
            return Err(period_rejection(period_status));
        }

        let year = fiscal_years::Entity::find_by_id(period.fiscal_year_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoFiscalPeriod(input.date))?;

        let snapshots = self.load_snapshots(input.tenant_id, &input.lines).await?;
        let lookup = |id: AccountId| {
            snapshots
                .get(&id)
                .cloned()
                .ok_or(LedgerError::AccountNotFound(id))
        };
        let (resolved, totals) = validate_and_resolve(&input.lines, lookup)?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let entry_number = allocate_entry_number(&txn, input.tenant_id, year.year).await?;
        let now = Utc::now().into();
        let entry_id = Uuid::now_v7();

        let (status, posted_by, posted_at) = if input.post_immediately {
            (
                DbEntryStatus::Posted,
                Some(input.created_by.into_inner()),
                Some(now),
            )
        } else {
            (DbEntryStatus::Draft, None, None)
        };

        let entry = journal_entries::ActiveModel {
            id: Set(entry_id),
            tenant_id: Set(input.tenant_id.into_inner()),
            entry_number: Set(entry_number),
            entry_date: Set(input.date),
            description: Set(input.description.clone()),
            source: Set(convert::source_to_db(input.source)),
            status: Set(status),
            reversal_entry_id: Set(None),
            total_debit: Set(totals.total_debit),
            total_credit: Set(totals.total_credit),
            fiscal_year_id: Set(year.id),
            fiscal_year: Set(year.year),
            fiscal_period_id: Set(period.id),
            created_by: Set(input.created_by.into_inner()),
            posted_by: Set(posted_by),
            posted_at: Set(posted_at),
            voided_by: Set(None),
            voided_at: Set(None),
            void_reason: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let entry = entry.insert(&txn).await.map_err(db_err)?;

        let lines = insert_lines(&txn, entry_id, &resolved).await?;

        txn.commit().await.map_err(db_err)?;

        Ok(EntryWithLines { entry, lines })
    }

    /// Posts a draft entry.
    ///
    /// The owning period's status is re-read inside the transaction:
    /// a period closed after the caller's validation still rejects the
    /// post.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the entry is missing, not a draft, or
    /// the period is no longer open.
    pub async fn post_entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        posted_by: UserId,
    ) -> Result<journal_entries::Model, LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let entry = find_entry_for_update(&txn, tenant_id, entry_id).await?;

        match entry.status {
            DbEntryStatus::Draft => {}
            DbEntryStatus::Posted => {
                return Err(LedgerError::AlreadyPosted(entry_id));
            }
            DbEntryStatus::Void => {
                return Err(LedgerError::AlreadyVoid(entry_id));
            }
        }

        // Read-check-write: the period status check and the status flip
        // commit together.
        let period = fiscal_periods::Entity::find_by_id(entry.fiscal_period_id)
            .lock_shared()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoFiscalPeriod(entry.entry_date))?;

        let period_status = convert::period_status_to_core(&period.status);
        if !period_status.allows_posting() {
            return Err(period_rejection(period_status));
        }

        let now = Utc::now().into();
        let mut active: journal_entries::ActiveModel = entry.into();
        active.status = Set(DbEntryStatus::Posted);
        active.posted_by = Set(Some(posted_by.into_inner()));
        active.posted_at = Set(Some(now));
        active.updated_at = Set(now);
        let updated = active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(updated)
    }

    /// Voids a posted entry and posts a reversing entry.
    ///
    /// The original is flagged Void and keeps its lines; the reversing
    /// entry (debits and credits swapped) is posted into the currently
    /// open period containing `as_of`, never into the original period,
    /// so historical period totals are preserved.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AlreadyVoid` if already void,
    /// `LedgerError::PeriodLocked` if the owning period is locked, and
    /// `LedgerError::NoOpenPeriod` if no open period can receive the
    /// reversal.
    pub async fn void_entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        reason: &str,
        voided_by: UserId,
        as_of: NaiveDate,
    ) -> Result<EntryWithLines, LedgerError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let entry = find_entry_for_update(&txn, tenant_id, entry_id).await?;

        match entry.status {
            DbEntryStatus::Void => return Err(LedgerError::AlreadyVoid(entry_id)),
            DbEntryStatus::Draft => return Err(LedgerError::VoidRequiresPosted),
            DbEntryStatus::Posted => {}
        }

        let period = fiscal_periods::Entity::find_by_id(entry.fiscal_period_id)
            .lock_shared()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoFiscalPeriod(entry.entry_date))?;

        if !convert::period_status_to_core(&period.status).allows_voiding() {
            return Err(LedgerError::PeriodLocked);
        }

        let original_lines = journal_lines::Entity::find()
            .filter(journal_lines::Column::EntryId.eq(entry.id))
            .order_by_asc(journal_lines::Column::LineNumber)
            .all(&txn)
            .await
            .map_err(db_err)?;

        let domain_lines: Vec<JournalLine> = original_lines.iter().map(line_to_domain).collect();
        if !reversal::is_reversible(&domain_lines) {
            return Err(LedgerError::UnbalancedEntry {
                debit: entry.total_debit,
                credit: entry.total_credit,
            });
        }

        // The reversing entry lands in the current open period.
        let open_period = fiscal_periods::Entity::find()
            .filter(fiscal_periods::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(fiscal_periods::Column::StartDate.lte(as_of))
            .filter(fiscal_periods::Column::EndDate.gte(as_of))
            .filter(fiscal_periods::Column::Status.eq(DbPeriodStatus::Open))
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoOpenPeriod)?;

        let open_year = fiscal_years::Entity::find_by_id(open_period.fiscal_year_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoOpenPeriod)?;

        let reversing_inputs = reversal::reversing_lines(&domain_lines);
        let reversing_lines: Vec<JournalLine> = reversing_inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                // Account metadata carries over from the original lines.
                let original = &domain_lines[index];
                let (debit, credit) = match input.side {
                    kontabil_core::ledger::types::Side::Debit => (input.amount, Decimal::ZERO),
                    kontabil_core::ledger::types::Side::Credit => (Decimal::ZERO, input.amount),
                };
                JournalLine {
                    line_number: original.line_number,
                    account_id: input.account_id,
                    account_code: original.account_code.clone(),
                    account_name: original.account_name.clone(),
                    debit,
                    credit,
                    memo: input.memo.clone(),
                }
            })
            .collect();

        let reversal_number = allocate_entry_number(&txn, tenant_id, open_year.year).await?;
        let now = Utc::now().into();
        let reversal_id = Uuid::now_v7();

        let reversal_entry = journal_entries::ActiveModel {
            id: Set(reversal_id),
            tenant_id: Set(tenant_id.into_inner()),
            entry_number: Set(reversal_number),
            entry_date: Set(as_of),
            description: Set(reversal::reversal_description(
                entry.entry_number,
                entry.fiscal_year,
                reason,
            )),
            source: Set(DbEntrySource::Reversal),
            status: Set(DbEntryStatus::Posted),
            reversal_entry_id: Set(None),
            total_debit: Set(entry.total_credit),
            total_credit: Set(entry.total_debit),
            fiscal_year_id: Set(open_year.id),
            fiscal_year: Set(open_year.year),
            fiscal_period_id: Set(open_period.id),
            created_by: Set(voided_by.into_inner()),
            posted_by: Set(Some(voided_by.into_inner())),
            posted_at: Set(Some(now)),
            voided_by: Set(None),
            voided_at: Set(None),
            void_reason: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let reversal_entry = reversal_entry.insert(&txn).await.map_err(db_err)?;
        let inserted_lines = insert_lines(&txn, reversal_id, &reversing_lines).await?;

        let mut active: journal_entries::ActiveModel = entry.into();
        active.status = Set(DbEntryStatus::Void);
        active.reversal_entry_id = Set(Some(reversal_id));
        active.voided_by = Set(Some(voided_by.into_inner()));
        active.voided_at = Set(Some(now));
        active.void_reason = Set(Some(reason.to_string()));
        active.updated_at = Set(now);
        active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(EntryWithLines {
            entry: reversal_entry,
            lines: inserted_lines,
        })
    }

    /// Updates a draft entry's description and, optionally, its lines.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::CannotModifyPosted` (or `AlreadyVoid`) for
    /// non-draft entries; replacement lines go through full validation.
    pub async fn update_entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
        description: Option<String>,
        lines: Option<Vec<JournalLineInput>>,
    ) -> Result<EntryWithLines, LedgerError> {
        let existing = self.get_entry(tenant_id, entry_id).await?;

        match existing.entry.status {
            DbEntryStatus::Draft => {}
            DbEntryStatus::Posted => return Err(LedgerError::CannotModifyPosted),
            DbEntryStatus::Void => return Err(LedgerError::AlreadyVoid(entry_id)),
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        let now = Utc::now().into();

        let mut new_lines = existing.lines.clone();
        let mut active: journal_entries::ActiveModel = existing.entry.into();

        if let Some(description) = description {
            active.description = Set(description);
        }

        if let Some(inputs) = lines {
            let snapshots = self.load_snapshots(tenant_id, &inputs).await?;
            let lookup = |id: AccountId| {
                snapshots
                    .get(&id)
                    .cloned()
                    .ok_or(LedgerError::AccountNotFound(id))
            };
            let (resolved, totals) = validate_and_resolve(&inputs, lookup)?;

            journal_lines::Entity::delete_many()
                .filter(journal_lines::Column::EntryId.eq(entry_id.into_inner()))
                .exec(&txn)
                .await
                .map_err(db_err)?;

            new_lines = insert_lines(&txn, entry_id.into_inner(), &resolved).await?;
            active.total_debit = Set(totals.total_debit);
            active.total_credit = Set(totals.total_credit);
        }

        active.updated_at = Set(now);
        let updated = active.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(EntryWithLines {
            entry: updated,
            lines: new_lines,
        })
    }

    /// Deletes a draft entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::CanOnlyDeleteDraft` for posted or void
    /// entries.
    pub async fn delete_entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
    ) -> Result<(), LedgerError> {
        let existing = self.get_entry(tenant_id, entry_id).await?;

        if existing.entry.status != DbEntryStatus::Draft {
            return Err(LedgerError::CanOnlyDeleteDraft);
        }

        journal_entries::Entity::delete_by_id(entry_id.into_inner())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    /// Gets an entry with its lines.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EntryNotFound` if absent.
    pub async fn get_entry(
        &self,
        tenant_id: TenantId,
        entry_id: JournalEntryId,
    ) -> Result<EntryWithLines, LedgerError> {
        let entry = journal_entries::Entity::find_by_id(entry_id.into_inner())
            .filter(journal_entries::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::EntryNotFound(entry_id))?;

        let lines = journal_lines::Entity::find()
            .filter(journal_lines::Column::EntryId.eq(entry.id))
            .order_by_asc(journal_lines::Column::LineNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(EntryWithLines { entry, lines })
    }

    /// Lists entries with filters and pagination, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_entries(
        &self,
        tenant_id: TenantId,
        filter: EntryFilter,
        page: PageRequest,
    ) -> Result<EntryPage, LedgerError> {
        let mut query = journal_entries::Entity::find()
            .filter(journal_entries::Column::TenantId.eq(tenant_id.into_inner()));

        if let Some(status) = filter.status {
            query = query.filter(journal_entries::Column::Status.eq(status));
        }
        if let Some(source) = filter.source {
            query = query.filter(journal_entries::Column::Source.eq(source));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(journal_entries::Column::EntryDate.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(journal_entries::Column::EntryDate.lte(date_to));
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let entries = query
            .order_by_desc(journal_entries::Column::EntryDate)
            .order_by_desc(journal_entries::Column::EntryNumber)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(EntryPage { entries, total })
    }

    /// Builds and posts the entry for an invoice being issued:
    /// Debit Accounts Receivable / Credit Sales Revenue.
    ///
    /// Best-effort integration: `ChartNotInitialized` signals the caller
    /// to skip ledger posting without failing the invoice operation.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::ChartNotInitialized` when the statutory
    /// accounts are missing, or any entry validation error.
    pub async fn create_from_invoice(
        &self,
        tenant_id: TenantId,
        invoice_number: &str,
        amount: Decimal,
        date: NaiveDate,
        created_by: UserId,
    ) -> Result<EntryWithLines, LedgerError> {
        let accounts = AccountRepository::new(self.db.clone());
        let receivable = find_statutory(&accounts, tenant_id, statutory_codes::ACCOUNTS_RECEIVABLE)
            .await?;
        let revenue = find_statutory(&accounts, tenant_id, statutory_codes::SALES_REVENUE).await?;

        self.create_entry(CreateEntryInput {
            tenant_id,
            date,
            description: invoice::invoice_description(invoice_number),
            source: EntrySource::Invoice,
            lines: invoice::invoice_lines(receivable, revenue, amount),
            created_by,
            post_immediately: true,
        })
        .await
    }

    /// Builds and posts the entry for an invoice payment received:
    /// Debit Cash / Credit Accounts Receivable.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::create_from_invoice`].
    pub async fn create_from_invoice_payment(
        &self,
        tenant_id: TenantId,
        invoice_number: &str,
        amount: Decimal,
        date: NaiveDate,
        created_by: UserId,
    ) -> Result<EntryWithLines, LedgerError> {
        let accounts = AccountRepository::new(self.db.clone());
        let cash = find_statutory(&accounts, tenant_id, statutory_codes::CASH).await?;
        let receivable = find_statutory(&accounts, tenant_id, statutory_codes::ACCOUNTS_RECEIVABLE)
            .await?;

        self.create_entry(CreateEntryInput {
            tenant_id,
            date,
            description: invoice::invoice_payment_description(invoice_number),
            source: EntrySource::Invoice,
            lines: invoice::invoice_payment_lines(cash, receivable, amount),
            created_by,
            post_immediately: true,
        })
        .await
    }

    async fn find_period_for_date(
        &self,
        tenant_id: TenantId,
        date: NaiveDate,
    ) -> Result<fiscal_periods::Model, LedgerError> {
        fiscal_periods::Entity::find()
            .filter(fiscal_periods::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(fiscal_periods::Column::StartDate.lte(date))
            .filter(fiscal_periods::Column::EndDate.gte(date))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NoFiscalPeriod(date))
    }

    async fn load_snapshots(
        &self,
        tenant_id: TenantId,
        lines: &[JournalLineInput],
    ) -> Result<HashMap<AccountId, AccountSnapshot>, LedgerError> {
        let ids: Vec<AccountId> = lines.iter().map(|l| l.account_id).collect();
        AccountRepository::new(self.db.clone())
            .snapshots_for(tenant_id, &ids)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))
    }
}

/// Allocates the next entry number for (tenant, fiscal year).
///
/// Single-statement atomic upsert: two concurrent allocations serialize
/// on the counter row and can never return the same number.
async fn allocate_entry_number(
    txn: &DatabaseTransaction,
    tenant_id: TenantId,
    fiscal_year: i32,
) -> Result<i64, LedgerError> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        r"INSERT INTO entry_counters (tenant_id, fiscal_year, last_number)
          VALUES ($1, $2, 1)
          ON CONFLICT (tenant_id, fiscal_year)
          DO UPDATE SET last_number = entry_counters.last_number + 1
          RETURNING last_number",
        [tenant_id.into_inner().into(), fiscal_year.into()],
    );

    let row = txn
        .query_one(stmt)
        .await
        .map_err(db_err)?
        .ok_or_else(|| LedgerError::Database("counter upsert returned no row".to_string()))?;

    row.try_get("", "last_number").map_err(db_err)
}

async fn find_entry_for_update(
    txn: &DatabaseTransaction,
    tenant_id: TenantId,
    entry_id: JournalEntryId,
) -> Result<journal_entries::Model, LedgerError> {
    journal_entries::Entity::find_by_id(entry_id.into_inner())
        .filter(journal_entries::Column::TenantId.eq(tenant_id.into_inner()))
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(db_err)?
        .ok_or(LedgerError::EntryNotFound(entry_id))
}

async fn insert_lines(
    txn: &DatabaseTransaction,
    entry_id: Uuid,
    lines: &[JournalLine],
) -> Result<Vec<journal_lines::Model>, LedgerError> {
    let now = Utc::now().into();
    let mut inserted = Vec::with_capacity(lines.len());

    for line in lines {
        let model = journal_lines::ActiveModel {
            id: Set(Uuid::now_v7()),
            entry_id: Set(entry_id),
            line_number: Set(line.line_number),
            account_id: Set(line.account_id.into_inner()),
            account_code: Set(line.account_code.clone()),
            account_name: Set(line.account_name.clone()),
            debit: Set(line.debit),
            credit: Set(line.credit),
            memo: Set(line.memo.clone()),
            created_at: Set(now),
        };
        inserted.push(model.insert(txn).await.map_err(db_err)?);
    }

    Ok(inserted)
}

async fn find_statutory(
    accounts: &AccountRepository,
    tenant_id: TenantId,
    code: &str,
) -> Result<AccountId, LedgerError> {
    accounts
        .find_by_code(tenant_id, code)
        .await
        .map_err(|e| LedgerError::Database(e.to_string()))?
        .filter(|a| a.is_active)
        .map(|a| a.id)
        .ok_or(LedgerError::ChartNotInitialized)
}

/// Maps a line model to the domain line.
fn line_to_domain(model: &journal_lines::Model) -> JournalLine {
    JournalLine {
        line_number: model.line_number,
        account_id: AccountId::from_uuid(model.account_id),
        account_code: model.account_code.clone(),
        account_name: model.account_name.clone(),
        debit: model.debit,
        credit: model.credit,
        memo: model.memo.clone(),
    }
}

/// Maps a non-open period status to the matching posting rejection.
fn period_rejection(status: CorePeriodStatus) -> LedgerError {
    match status {
        CorePeriodStatus::Locked => LedgerError::PeriodLocked,
        _ => LedgerError::PeriodClosed,
    }
}

fn db_err(e: sea_orm::DbErr) -> LedgerError {
    LedgerError::Database(e.to_string())
}
