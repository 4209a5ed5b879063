//! Fiscal year and period repository.
//!
//! Sole writer of fiscal year and period status. The period state
//! machine itself lives in `kontabil-core`; this repository applies it
//! against stored rows.

use chrono::{NaiveDate, Utc};
use kontabil_core::fiscal::calendar::monthly_periods;
use kontabil_core::fiscal::error::FiscalError;
use kontabil_core::fiscal::transition::validate_transition;
use kontabil_core::fiscal::types::{
    FiscalPeriod, FiscalPeriodStatus as CorePeriodStatus, FiscalYear,
};
use kontabil_core::ledger::types::{CreateEntryInput, EntrySource, JournalLineInput};
use kontabil_shared::types::{FiscalPeriodId, FiscalYearId, JournalEntryId, TenantId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::convert;
use super::journal_entry::JournalEntryRepository;
use crate::entities::{
    fiscal_periods, fiscal_years,
    sea_orm_active_enums::{FiscalPeriodStatus as DbPeriodStatus, FiscalYearStatus as DbYearStatus},
};

/// A fiscal year with its periods.
#[derive(Debug, Clone)]
pub struct FiscalYearWithPeriods {
    /// The fiscal year.
    pub fiscal_year: FiscalYear,
    /// The periods, ordered by period number.
    pub periods: Vec<FiscalPeriod>,
}

/// Fiscal year and period repository.
#[derive(Debug, Clone)]
pub struct FiscalRepository {
    db: DatabaseConnection,
}

impl FiscalRepository {
    /// Creates a new fiscal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a fiscal year with its 12 monthly periods, all open.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::DuplicateYear` if the tenant already has
    /// this year.
    pub async fn create_fiscal_year(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<FiscalYearWithPeriods, FiscalError> {
        let existing = fiscal_years::Entity::find()
            .filter(fiscal_years::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(fiscal_years::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Err(FiscalError::DuplicateYear(year));
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        let now = Utc::now().into();
        let fiscal_year_id = Uuid::now_v7();

        let fiscal_year = fiscal_years::ActiveModel {
            id: Set(fiscal_year_id),
            tenant_id: Set(tenant_id.into_inner()),
            year: Set(year),
            status: Set(DbYearStatus::Open),
            opening_balances_posted: Set(false),
            opening_balance_entry_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let fiscal_year = fiscal_year.insert(&txn).await.map_err(db_err)?;

        let mut periods = Vec::with_capacity(12);
        for bounds in monthly_periods(year) {
            let period = fiscal_periods::ActiveModel {
                id: Set(Uuid::now_v7()),
                tenant_id: Set(tenant_id.into_inner()),
                fiscal_year_id: Set(fiscal_year_id),
                period_number: Set(bounds.period_number),
                start_date: Set(bounds.start_date),
                end_date: Set(bounds.end_date),
                status: Set(DbPeriodStatus::Open),
                closed_by: Set(None),
                closed_at: Set(None),
                locked_by: Set(None),
                locked_at: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            };
            periods.push(period_to_domain(period.insert(&txn).await.map_err(db_err)?));
        }

        txn.commit().await.map_err(db_err)?;

        Ok(FiscalYearWithPeriods {
            fiscal_year: year_to_domain(fiscal_year),
            periods,
        })
    }

    /// Lists fiscal years with their periods, newest year first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_fiscal_years(
        &self,
        tenant_id: TenantId,
    ) -> Result<Vec<FiscalYearWithPeriods>, FiscalError> {
        let years = fiscal_years::Entity::find()
            .filter(fiscal_years::Column::TenantId.eq(tenant_id.into_inner()))
            .order_by_desc(fiscal_years::Column::Year)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut results = Vec::with_capacity(years.len());
        for fy in years {
            let periods = fiscal_periods::Entity::find()
                .filter(fiscal_periods::Column::FiscalYearId.eq(fy.id))
                .order_by_asc(fiscal_periods::Column::PeriodNumber)
                .all(&self.db)
                .await
                .map_err(db_err)?;

            results.push(FiscalYearWithPeriods {
                fiscal_year: year_to_domain(fy),
                periods: periods.into_iter().map(period_to_domain).collect(),
            });
        }

        Ok(results)
    }

    /// Finds a fiscal year by calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_year(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<Option<FiscalYear>, FiscalError> {
        Ok(self
            .find_year_model(tenant_id, year)
            .await?
            .map(year_to_domain))
    }

    /// Finds a fiscal period by ID within a tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_period(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
    ) -> Result<Option<FiscalPeriod>, FiscalError> {
        Ok(self
            .find_period_model(tenant_id, period_id)
            .await?
            .map(period_to_domain))
    }

    /// Closes an open period.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::InvalidPeriodTransition` unless the period
    /// is open.
    pub async fn close_period(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
        closed_by: UserId,
    ) -> Result<FiscalPeriod, FiscalError> {
        self.transition_period(tenant_id, period_id, CorePeriodStatus::Closed, closed_by)
            .await
    }

    /// Reopens a closed period - the single allowed backward transition.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::InvalidPeriodTransition` unless the period
    /// is closed.
    pub async fn reopen_period(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
        reopened_by: UserId,
    ) -> Result<FiscalPeriod, FiscalError> {
        self.transition_period(tenant_id, period_id, CorePeriodStatus::Open, reopened_by)
            .await
    }

    /// Locks a closed period permanently, used after filing submission.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::InvalidPeriodTransition` unless the period
    /// is closed.
    pub async fn lock_period(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
        locked_by: UserId,
    ) -> Result<FiscalPeriod, FiscalError> {
        self.transition_period(tenant_id, period_id, CorePeriodStatus::Locked, locked_by)
            .await
    }

    /// Posts the opening balance entry for a fiscal year.
    ///
    /// One Opening-source entry posted into period 1; the year records
    /// the entry and rejects a second posting.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::OpeningBalancesAlreadyPosted` on repeat,
    /// `FiscalError::OpeningEntryRejected` when the entry fails ledger
    /// validation.
    pub async fn post_opening_balances(
        &self,
        tenant_id: TenantId,
        year: i32,
        lines: Vec<JournalLineInput>,
        posted_by: UserId,
    ) -> Result<FiscalYear, FiscalError> {
        let fiscal_year = self
            .find_year_model(tenant_id, year)
            .await?
            .ok_or(FiscalError::YearNotFound(year))?;

        if fiscal_year.status == DbYearStatus::Closed {
            return Err(FiscalError::YearClosed(year));
        }
        if fiscal_year.opening_balances_posted {
            return Err(FiscalError::OpeningBalancesAlreadyPosted(year));
        }

        let opening_date = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| FiscalError::Database(format!("invalid year {year}")))?;

        let journal = JournalEntryRepository::new(self.db.clone());
        let entry = journal
            .create_entry(CreateEntryInput {
                tenant_id,
                date: opening_date,
                description: format!("Opening balances {year}"),
                source: EntrySource::Opening,
                lines,
                created_by: posted_by,
                post_immediately: true,
            })
            .await
            .map_err(|e| FiscalError::OpeningEntryRejected(e.to_string()))?;

        let mut active: fiscal_years::ActiveModel = fiscal_year.into();
        active.opening_balances_posted = Set(true);
        active.opening_balance_entry_id = Set(Some(entry.entry.id));
        active.updated_at = Set(Utc::now().into());

        active
            .update(&self.db)
            .await
            .map(year_to_domain)
            .map_err(db_err)
    }

    /// Closes a fiscal year once every period is closed or locked.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::PeriodsStillOpen` if any period is open.
    pub async fn close_fiscal_year(
        &self,
        tenant_id: TenantId,
        year: i32,
        _closed_by: UserId,
    ) -> Result<FiscalYear, FiscalError> {
        let fiscal_year = self
            .find_year_model(tenant_id, year)
            .await?
            .ok_or(FiscalError::YearNotFound(year))?;

        if fiscal_year.status == DbYearStatus::Closed {
            return Err(FiscalError::YearClosed(year));
        }

        let open_period = fiscal_periods::Entity::find()
            .filter(fiscal_periods::Column::FiscalYearId.eq(fiscal_year.id))
            .filter(fiscal_periods::Column::Status.eq(DbPeriodStatus::Open))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if open_period.is_some() {
            return Err(FiscalError::PeriodsStillOpen(year));
        }

        let mut active: fiscal_years::ActiveModel = fiscal_year.into();
        active.status = Set(DbYearStatus::Closed);
        active.updated_at = Set(Utc::now().into());

        active
            .update(&self.db)
            .await
            .map(year_to_domain)
            .map_err(db_err)
    }

    async fn find_year_model(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<Option<fiscal_years::Model>, FiscalError> {
        fiscal_years::Entity::find()
            .filter(fiscal_years::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(fiscal_years::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_period_model(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
    ) -> Result<Option<fiscal_periods::Model>, FiscalError> {
        fiscal_periods::Entity::find_by_id(period_id.into_inner())
            .filter(fiscal_periods::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(db_err)
    }

    async fn transition_period(
        &self,
        tenant_id: TenantId,
        period_id: FiscalPeriodId,
        target: CorePeriodStatus,
        actor: UserId,
    ) -> Result<FiscalPeriod, FiscalError> {
        let period = self
            .find_period_model(tenant_id, period_id)
            .await?
            .ok_or(FiscalError::PeriodNotFound)?;

        let current = convert::period_status_to_core(&period.status);
        validate_transition(current, target)?;

        let now = Utc::now().into();
        let mut active: fiscal_periods::ActiveModel = period.into();
        active.status = Set(convert::period_status_to_db(target));
        active.updated_at = Set(now);

        match target {
            CorePeriodStatus::Closed => {
                active.closed_by = Set(Some(actor.into_inner()));
                active.closed_at = Set(Some(now));
            }
            CorePeriodStatus::Locked => {
                active.locked_by = Set(Some(actor.into_inner()));
                active.locked_at = Set(Some(now));
            }
            CorePeriodStatus::Open => {
                active.closed_by = Set(None);
                active.closed_at = Set(None);
            }
        }

        active
            .update(&self.db)
            .await
            .map(period_to_domain)
            .map_err(db_err)
    }
}

fn year_to_domain(model: fiscal_years::Model) -> FiscalYear {
    FiscalYear {
        id: FiscalYearId::from_uuid(model.id),
        tenant_id: TenantId::from_uuid(model.tenant_id),
        year: model.year,
        status: convert::year_status_to_core(&model.status),
        opening_balances_posted: model.opening_balances_posted,
        opening_balance_entry_id: model.opening_balance_entry_id.map(JournalEntryId::from_uuid),
    }
}

fn period_to_domain(model: fiscal_periods::Model) -> FiscalPeriod {
    FiscalPeriod {
        id: FiscalPeriodId::from_uuid(model.id),
        tenant_id: TenantId::from_uuid(model.tenant_id),
        fiscal_year_id: FiscalYearId::from_uuid(model.fiscal_year_id),
        period_number: model.period_number,
        start_date: model.start_date,
        end_date: model.end_date,
        status: convert::period_status_to_core(&model.status),
    }
}

fn db_err(e: sea_orm::DbErr) -> FiscalError {
    FiscalError::Database(e.to_string())
}
