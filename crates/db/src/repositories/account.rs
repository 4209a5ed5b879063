//! Account repository for chart of accounts database operations.

use kontabil_core::coa::defaults::default_chart;
use kontabil_core::coa::error::CoaError;
use kontabil_core::coa::types::{Account, AccountPatch, AccountType, NewAccount};
use kontabil_core::coa::validation::{
    validate_deactivation, validate_new_account, validate_patch,
};
use kontabil_core::ledger::validation::AccountSnapshot;
use kontabil_shared::types::{AccountId, TenantId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::convert;
use crate::entities::accounts;

/// Filter options for listing accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Filter by account type.
    pub account_type: Option<AccountType>,
    /// Filter by active status.
    pub is_active: Option<bool>,
}

/// Outcome of seeding the default chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOutcome {
    /// Accounts inserted by this run.
    pub created: usize,
    /// Accounts already present and left untouched.
    pub skipped: usize,
}

/// Account repository for chart of accounts operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the code already exists, the parent is
    /// missing or of a different type, or the subtype is inconsistent.
    pub async fn create_account(
        &self,
        tenant_id: TenantId,
        def: NewAccount,
    ) -> Result<Account, CoaError> {
        let existing = self.find_model_by_code(tenant_id, &def.code).await?;
        if existing.is_some() {
            return Err(CoaError::DuplicateCode(def.code));
        }

        let parent = match def.parent_code.as_deref() {
            Some(code) => self
                .find_model_by_code(tenant_id, code)
                .await?
                .map(to_domain),
            None => None,
        };

        let level = validate_new_account(&def, parent.as_ref())?;

        let now = chrono::Utc::now().into();
        let model = accounts::ActiveModel {
            id: Set(Uuid::now_v7()),
            tenant_id: Set(tenant_id.into_inner()),
            code: Set(def.code),
            name: Set(def.name),
            account_type: Set(convert::account_type_to_db(def.account_type)),
            sub_type: Set(convert::sub_type_to_db(def.sub_type)),
            parent_code: Set(def.parent_code),
            level: Set(level),
            is_system: Set(def.is_system),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?;

        Ok(to_domain(inserted))
    }

    /// Updates an account. The code is immutable; system accounts
    /// reject subtype changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is missing or the patch violates
    /// protection rules.
    pub async fn update_account(
        &self,
        tenant_id: TenantId,
        code: &str,
        patch: AccountPatch,
    ) -> Result<Account, CoaError> {
        let model = self
            .find_model_by_code(tenant_id, code)
            .await?
            .ok_or_else(|| CoaError::AccountNotFound(code.to_string()))?;

        let account = to_domain(model.clone());
        validate_patch(&account, &patch)?;

        if patch.is_active == Some(false) {
            validate_deactivation(&account)?;
        }

        let mut active: accounts::ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(sub_type) = patch.sub_type {
            active.sub_type = Set(convert::sub_type_to_db(sub_type));
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?;

        Ok(to_domain(updated))
    }

    /// Lists accounts with optional filters, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(
        &self,
        tenant_id: TenantId,
        filter: AccountFilter,
    ) -> Result<Vec<Account>, CoaError> {
        let mut query = accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()));

        if let Some(account_type) = filter.account_type {
            query = query
                .filter(accounts::Column::AccountType.eq(convert::account_type_to_db(account_type)));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(accounts::Column::IsActive.eq(is_active));
        }

        let models = query
            .order_by_asc(accounts::Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    /// Finds an account by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_code(
        &self,
        tenant_id: TenantId,
        code: &str,
    ) -> Result<Option<Account>, CoaError> {
        Ok(self
            .find_model_by_code(tenant_id, code)
            .await?
            .map(to_domain))
    }

    /// Seeds the default Timor-Leste chart of accounts.
    ///
    /// Idempotent: codes already present are skipped, never duplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn initialize_defaults(&self, tenant_id: TenantId) -> Result<SeedOutcome, CoaError> {
        let existing: HashSet<String> = accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?
            .into_iter()
            .map(|a| a.code)
            .collect();

        let mut outcome = SeedOutcome::default();

        for def in default_chart() {
            if existing.contains(&def.code) {
                outcome.skipped += 1;
                continue;
            }
            self.create_account(tenant_id, def).await?;
            outcome.created += 1;
        }

        Ok(outcome)
    }

    /// Returns true if the tenant has any accounts at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn is_initialized(&self, tenant_id: TenantId) -> Result<bool, CoaError> {
        let any = accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?;
        Ok(any.is_some())
    }

    /// Fetches validation snapshots for a set of accounts.
    ///
    /// Used by the journal entry repository to drive line validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn snapshots_for(
        &self,
        tenant_id: TenantId,
        account_ids: &[AccountId],
    ) -> Result<HashMap<AccountId, AccountSnapshot>, CoaError> {
        let ids: Vec<Uuid> = account_ids.iter().map(|id| id.into_inner()).collect();

        let models = accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(accounts::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(|m| {
                let id = AccountId::from_uuid(m.id);
                (
                    id,
                    AccountSnapshot {
                        id,
                        code: m.code,
                        name: m.name,
                        account_type: convert::account_type_to_core(&m.account_type),
                        is_active: m.is_active,
                    },
                )
            })
            .collect())
    }

    async fn find_model_by_code(
        &self,
        tenant_id: TenantId,
        code: &str,
    ) -> Result<Option<accounts::Model>, CoaError> {
        accounts::Entity::find()
            .filter(accounts::Column::TenantId.eq(tenant_id.into_inner()))
            .filter(accounts::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| CoaError::Database(e.to_string()))
    }
}

/// Maps a database model to the domain account.
fn to_domain(model: accounts::Model) -> Account {
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
