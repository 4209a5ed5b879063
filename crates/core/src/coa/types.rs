//! Account domain types.

use kontabil_shared::types::{AccountId, TenantId};
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// The five fundamental account types of double-entry bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned (cash, receivables, equipment).
    Asset,
    /// Obligations owed (payables, statutory withholdings).
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// Returns the normal balance side for this account type.
    ///
    /// Assets and expenses are debit-normal; liabilities, equity, and
    /// revenue are credit-normal.
    #[must_use]
    pub const fn normal_side(self) -> NormalSide {
        match self {
            Self::Asset | Self::Expense => NormalSide::DebitNormal,
            Self::Liability | Self::Equity | Self::Revenue => NormalSide::CreditNormal,
        }
    }

    /// Returns the lowercase string form used in storage and APIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

/// Normal balance side of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalSide {
    /// Debit-normal accounts (Asset, Expense).
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    CreditNormal,
}

/// Finer account classification.
///
/// Every subtype belongs to exactly one [`AccountType`]; the pairing is
/// validated on account creation and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSubType {
    // Asset subtypes
    /// Cash on hand.
    Cash,
    /// Bank and deposit accounts.
    Bank,
    /// Trade receivables.
    AccountsReceivable,
    /// Goods held for sale.
    Inventory,
    /// Payments made in advance.
    PrepaidExpense,
    /// Property and equipment.
    FixedAsset,
    /// Other assets.
    OtherAsset,

    // Liability subtypes
    /// Trade payables.
    AccountsPayable,
    /// Statutory tax withholdings payable (e.g. wage income tax).
    TaxPayable,
    /// Social security contributions payable.
    SocialSecurityPayable,
    /// Net wages payable to employees.
    WagesPayable,
    /// Other liabilities.
    OtherLiability,

    // Equity subtypes
    /// Owner's capital contributions.
    OwnersEquity,
    /// Accumulated retained earnings.
    RetainedEarnings,
    /// Offset account for opening balances.
    OpeningBalanceEquity,

    // Revenue subtypes
    /// Revenue from goods sold.
    SalesRevenue,
    /// Revenue from services rendered.
    ServiceRevenue,
    /// Other income.
    OtherRevenue,

    // Expense subtypes
    /// Direct cost of goods sold.
    CostOfGoodsSold,
    /// General operating expenses.
    OperatingExpense,
    /// Salaries and wages expense.
    SalaryExpense,
    /// Employer social security contribution expense.
    SocialSecurityExpense,
    /// Tax expense.
    TaxExpense,
    /// Other expenses.
    OtherExpense,
}

impl AccountSubType {
    /// Returns the account type this subtype belongs to.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Cash
            | Self::Bank
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::PrepaidExpense
            | Self::FixedAsset
            | Self::OtherAsset => AccountType::Asset,

            Self::AccountsPayable
            | Self::TaxPayable
            | Self::SocialSecurityPayable
            | Self::WagesPayable
            | Self::OtherLiability => AccountType::Liability,

            Self::OwnersEquity | Self::RetainedEarnings | Self::OpeningBalanceEquity => {
                AccountType::Equity
            }

            Self::SalesRevenue | Self::ServiceRevenue | Self::OtherRevenue => AccountType::Revenue,

            Self::CostOfGoodsSold
            | Self::OperatingExpense
            | Self::SalaryExpense
            | Self::SocialSecurityExpense
            | Self::TaxExpense
            | Self::OtherExpense => AccountType::Expense,
        }
    }

    /// Returns true if this subtype is consistent with the given type.
    #[must_use]
    pub fn matches_type(self, account_type: AccountType) -> bool {
        self.account_type() == account_type
    }
}

/// An account in the tenant's chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Tenant this account belongs to.
    pub tenant_id: TenantId,
    /// Account code, unique per tenant and immutable after creation.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Finer classification, consistent with `account_type`.
    pub sub_type: AccountSubType,
    /// Parent account code, if this account sits below another.
    pub parent_code: Option<String>,
    /// Depth in the account tree (top-level accounts are level 1).
    pub level: i16,
    /// System accounts are seeded and protected from deletion and
    /// type changes.
    pub is_system: bool,
    /// Inactive accounts reject new journal lines.
    pub is_active: bool,
}

/// Input for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Account code (immutable once created).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Finer classification.
    pub sub_type: AccountSubType,
    /// Optional parent account code.
    pub parent_code: Option<String>,
    /// Whether this is a protected system account.
    pub is_system: bool,
}

/// Patch for updating an account.
///
/// The account code is deliberately absent: codes are immutable.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    /// New display name.
    pub name: Option<String>,
    /// New subtype (rejected for system accounts).
    pub sub_type: Option<AccountSubType>,
    /// Activate or deactivate the account.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_sides() {
        assert_eq!(AccountType::Asset.normal_side(), NormalSide::DebitNormal);
        assert_eq!(AccountType::Expense.normal_side(), NormalSide::DebitNormal);
        assert_eq!(
            AccountType::Liability.normal_side(),
            NormalSide::CreditNormal
        );
        assert_eq!(AccountType::Equity.normal_side(), NormalSide::CreditNormal);
        assert_eq!(AccountType::Revenue.normal_side(), NormalSide::CreditNormal);
    }

    #[test]
    fn test_subtype_type_consistency() {
        assert_eq!(AccountSubType::Cash.account_type(), AccountType::Asset);
        assert_eq!(
            AccountSubType::TaxPayable.account_type(),
            AccountType::Liability
        );
        assert_eq!(
            AccountSubType::SocialSecurityPayable.account_type(),
            AccountType::Liability
        );
        assert_eq!(
            AccountSubType::RetainedEarnings.account_type(),
            AccountType::Equity
        );
        assert_eq!(
            AccountSubType::SalesRevenue.account_type(),
            AccountType::Revenue
        );
        assert_eq!(
            AccountSubType::SocialSecurityExpense.account_type(),
            AccountType::Expense
        );
    }

    #[test]
    fn test_matches_type() {
        assert!(AccountSubType::Bank.matches_type(AccountType::Asset));
        assert!(!AccountSubType::Bank.matches_type(AccountType::Liability));
        assert!(AccountSubType::WagesPayable.matches_type(AccountType::Liability));
    }
}
