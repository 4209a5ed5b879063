//! Postgres enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account type classification.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_type")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset accounts.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Liability accounts.
    #[sea_orm(string_value = "liability")]
    Liability,
    /// Equity accounts.
    #[sea_orm(string_value = "equity")]
    Equity,
    /// Revenue accounts.
    #[sea_orm(string_value = "revenue")]
    Revenue,
    /// Expense accounts.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Account subtype classification.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_subtype")]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    /// Cash on hand.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank accounts.
    #[sea_orm(string_value = "bank")]
    Bank,
    /// Trade receivables.
    #[sea_orm(string_value = "accounts_receivable")]
    AccountsReceivable,
    /// Inventory.
    #[sea_orm(string_value = "inventory")]
    Inventory,
    /// Prepaid expenses.
    #[sea_orm(string_value = "prepaid_expense")]
    PrepaidExpense,
    /// Fixed assets.
    #[sea_orm(string_value = "fixed_asset")]
    FixedAsset,
    /// Other assets.
    #[sea_orm(string_value = "other_asset")]
    OtherAsset,
    /// Trade payables.
    #[sea_orm(string_value = "accounts_payable")]
    AccountsPayable,
    /// Statutory tax withholdings payable.
    #[sea_orm(string_value = "tax_payable")]
    TaxPayable,
    /// Social security contributions payable.
    #[sea_orm(string_value = "social_security_payable")]
    SocialSecurityPayable,
    /// Net wages payable.
    #[sea_orm(string_value = "wages_payable")]
    WagesPayable,
    /// Other liabilities.
    #[sea_orm(string_value = "other_liability")]
    OtherLiability,
    /// Owner's capital.
    #[sea_orm(string_value = "owners_equity")]
    OwnersEquity,
    /// Retained earnings.
    #[sea_orm(string_value = "retained_earnings")]
    RetainedEarnings,
    /// Opening balance offset.
    #[sea_orm(string_value = "opening_balance_equity")]
    OpeningBalanceEquity,
    /// Sales revenue.
    #[sea_orm(string_value = "sales_revenue")]
    SalesRevenue,
    /// Service revenue.
    #[sea_orm(string_value = "service_revenue")]
    ServiceRevenue,
    /// Other revenue.
    #[sea_orm(string_value = "other_revenue")]
    OtherRevenue,
    /// Cost of goods sold.
    #[sea_orm(string_value = "cost_of_goods_sold")]
    CostOfGoodsSold,
    /// Operating expenses.
    #[sea_orm(string_value = "operating_expense")]
    OperatingExpense,
    /// Salaries and wages.
    #[sea_orm(string_value = "salary_expense")]
    SalaryExpense,
    /// Employer social security contributions.
    #[sea_orm(string_value = "social_security_expense")]
    SocialSecurityExpense,
    /// Tax expense.
    #[sea_orm(string_value = "tax_expense")]
    TaxExpense,
    /// Other expenses.
    #[sea_orm(string_value = "other_expense")]
    OtherExpense,
}

/// Journal entry source.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_source")]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Manually keyed entry.
    #[sea_orm(string_value = "manual")]
    Manual,
    /// Generated from an invoice.
    #[sea_orm(string_value = "invoice")]
    Invoice,
    /// Generated from a payroll run.
    #[sea_orm(string_value = "payroll")]
    Payroll,
    /// Opening balance entry.
    #[sea_orm(string_value = "opening")]
    Opening,
    /// Reversal of a voided entry.
    #[sea_orm(string_value = "reversal")]
    Reversal,
}

/// Journal entry status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_status")]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Editable draft.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Posted to the ledger.
    #[sea_orm(string_value = "posted")]
    Posted,
    /// Voided; the reversing entry is referenced on the row.
    #[sea_orm(string_value = "void")]
    Void,
}

/// Fiscal year status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "fiscal_year_status")]
#[serde(rename_all = "lowercase")]
pub enum FiscalYearStatus {
    /// Open year.
    #[sea_orm(string_value = "open")]
    Open,
    /// Closed year.
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Fiscal period status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "fiscal_period_status")]
#[serde(rename_all = "lowercase")]
pub enum FiscalPeriodStatus {
    /// Accepts postings.
    #[sea_orm(string_value = "open")]
    Open,
    /// Rejects postings; may reopen or lock.
    #[sea_orm(string_value = "closed")]
    Closed,
    /// Permanently frozen.
    #[sea_orm(string_value = "locked")]
    Locked,
}

/// Tax filing type.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "filing_type")]
#[serde(rename_all = "snake_case")]
pub enum FilingType {
    /// Monthly wage income tax return.
    #[sea_orm(string_value = "monthly_wit")]
    MonthlyWit,
    /// Annual wage income tax reconciliation.
    #[sea_orm(string_value = "annual_wit")]
    AnnualWit,
    /// Monthly social security return.
    #[sea_orm(string_value = "inss_monthly")]
    InssMonthly,
}

/// Tax filing status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "filing_status")]
#[serde(rename_all = "lowercase")]
pub enum FilingStatus {
    /// Generated, not yet due.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Past due and not filed.
    #[sea_orm(string_value = "overdue")]
    Overdue,
    /// Submitted to the authority.
    #[sea_orm(string_value = "filed")]
    Filed,
}
