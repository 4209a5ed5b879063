//! Default Timor-Leste chart of accounts.
//!
//! Seeded by `initialize_defaults`. Seeding is idempotent: codes already
//! present in the tenant's chart are skipped, never duplicated.

use super::types::{AccountSubType, AccountType, NewAccount};

/// A single entry of the default chart.
struct DefaultAccount {
    code: &'static str,
    name: &'static str,
    account_type: AccountType,
    sub_type: AccountSubType,
    parent_code: Option<&'static str>,
}

const DEFAULT_CHART: &[DefaultAccount] = &[
    // ===== Assets =====
    DefaultAccount {
        code: "1000",
        name: "Assets",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::OtherAsset,
        parent_code: None,
    },
    DefaultAccount {
        code: "1100",
        name: "Cash on Hand",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::Cash,
        parent_code: Some("1000"),
    },
    DefaultAccount {
        code: "1200",
        name: "Bank Accounts",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::Bank,
        parent_code: Some("1000"),
    },
    DefaultAccount {
        code: "1300",
        name: "Accounts Receivable",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::AccountsReceivable,
        parent_code: Some("1000"),
    },
    DefaultAccount {
        code: "1400",
        name: "Inventory",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::Inventory,
        parent_code: Some("1000"),
    },
    DefaultAccount {
        code: "1500",
        name: "Prepaid Expenses",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::PrepaidExpense,
        parent_code: Some("1000"),
    },
    DefaultAccount {
        code: "1600",
        name: "Property and Equipment",
        account_type: AccountType::Asset,
        sub_type: AccountSubType::FixedAsset,
        parent_code: Some("1000"),
    },
    // ===== Liabilities =====
    DefaultAccount {
        code: "2000",
        name: "Liabilities",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::OtherLiability,
        parent_code: None,
    },
    DefaultAccount {
        code: "2100",
        name: "Accounts Payable",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::AccountsPayable,
        parent_code: Some("2000"),
    },
    DefaultAccount {
        code: "2200",
        name: "Wages Payable",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::WagesPayable,
        parent_code: Some("2000"),
    },
    DefaultAccount {
        code: "2310",
        name: "Wage Income Tax Payable",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::TaxPayable,
        parent_code: Some("2000"),
    },
    DefaultAccount {
        code: "2320",
        name: "INSS Payable - Employee",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::SocialSecurityPayable,
        parent_code: Some("2000"),
    },
    DefaultAccount {
        code: "2330",
        name: "INSS Payable - Employer",
        account_type: AccountType::Liability,
        sub_type: AccountSubType::SocialSecurityPayable,
        parent_code: Some("2000"),
    },
    // ===== Equity =====
    DefaultAccount {
        code: "3000",
        name: "Equity",
        account_type: AccountType::Equity,
        sub_type: AccountSubType::OwnersEquity,
        parent_code: None,
    },
    DefaultAccount {
        code: "3100",
        name: "Owner's Capital",
        account_type: AccountType::Equity,
        sub_type: AccountSubType::OwnersEquity,
        parent_code: Some("3000"),
    },
    DefaultAccount {
        code: "3200",
        name: "Retained Earnings",
        account_type: AccountType::Equity,
        sub_type: AccountSubType::RetainedEarnings,
        parent_code: Some("3000"),
    },
    DefaultAccount {
        code: "3900",
        name: "Opening Balance Equity",
        account_type: AccountType::Equity,
        sub_type: AccountSubType::OpeningBalanceEquity,
        parent_code: Some("3000"),
    },
    // ===== Revenue =====
    DefaultAccount {
        code: "4000",
        name: "Revenue",
        account_type: AccountType::Revenue,
        sub_type: AccountSubType::OtherRevenue,
        parent_code: None,
    },
    DefaultAccount {
        code: "4100",
        name: "Sales Revenue",
        account_type: AccountType::Revenue,
        sub_type: AccountSubType::SalesRevenue,
        parent_code: Some("4000"),
    },
    DefaultAccount {
        code: "4200",
        name: "Service Revenue",
        account_type: AccountType::Revenue,
        sub_type: AccountSubType::ServiceRevenue,
        parent_code: Some("4000"),
    },
    // ===== Expenses =====
    DefaultAccount {
        code: "5000",
        name: "Cost of Goods Sold",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::CostOfGoodsSold,
        parent_code: None,
    },
    DefaultAccount {
        code: "6000",
        name: "Operating Expenses",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::OperatingExpense,
        parent_code: None,
    },
    DefaultAccount {
        code: "6100",
        name: "Salaries and Wages",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::SalaryExpense,
        parent_code: Some("6000"),
    },
    DefaultAccount {
        code: "6210",
        name: "INSS Employer Contribution",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::SocialSecurityExpense,
        parent_code: Some("6000"),
    },
    DefaultAccount {
        code: "6300",
        name: "Rent Expense",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::OperatingExpense,
        parent_code: Some("6000"),
    },
    DefaultAccount {
        code: "6400",
        name: "Utilities Expense",
        account_type: AccountType::Expense,
        sub_type: AccountSubType::OperatingExpense,
        parent_code: Some("6000"),
    },
];

/// Account codes of the statutory accounts the payroll integration posts to.
pub mod statutory_codes {
    /// Wage income tax payable.
    pub const WIT_PAYABLE: &str = "2310";
    /// Employee social security contributions payable.
    pub const INSS_EMPLOYEE_PAYABLE: &str = "2320";
    /// Employer social security contributions payable.
    pub const INSS_EMPLOYER_PAYABLE: &str = "2330";
    /// Employer social security contribution expense.
    pub const INSS_EXPENSE: &str = "6210";
    /// Salaries and wages expense.
    pub const SALARY_EXPENSE: &str = "6100";
    /// Accounts receivable (invoice integration).
    pub const ACCOUNTS_RECEIVABLE: &str = "1300";
    /// Sales revenue (invoice integration).
    pub const SALES_REVENUE: &str = "4100";
    /// Cash on hand (payment integration).
    pub const CASH: &str = "1100";
}

/// Returns the default chart as `NewAccount` definitions, in insertion
/// order (parents before children). All defaults are system accounts.
#[must_use]
pub fn default_chart() -> Vec<NewAccount> {
    DEFAULT_CHART
        .iter()
        .map(|d| NewAccount {
            code: d.code.to_string(),
            name: d.name.to_string(),
            account_type: d.account_type,
            sub_type: d.sub_type,
            parent_code: d.parent_code.map(ToString::to_string),
            is_system: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_chart_codes_are_unique() {
        let chart = default_chart();
        let codes: HashSet<_> = chart.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes.len(), chart.len());
    }

    #[test]
    fn test_default_chart_subtypes_consistent() {
        for account in default_chart() {
            assert!(
                account.sub_type.matches_type(account.account_type),
                "subtype mismatch for {}",
                account.code
            );
        }
    }

    #[test]
    fn test_parents_precede_children() {
        let chart = default_chart();
        let mut seen = HashSet::new();
        for account in &chart {
            if let Some(parent) = &account.parent_code {
                assert!(seen.contains(parent.as_str()), "parent {parent} not seeded first");
            }
            seen.insert(account.code.as_str());
        }
    }

    #[test]
    fn test_statutory_accounts_present() {
        let chart = default_chart();
        for code in [
            statutory_codes::WIT_PAYABLE,
            statutory_codes::INSS_EMPLOYEE_PAYABLE,
            statutory_codes::INSS_EMPLOYER_PAYABLE,
            statutory_codes::INSS_EXPENSE,
            statutory_codes::SALARY_EXPENSE,
            statutory_codes::ACCOUNTS_RECEIVABLE,
            statutory_codes::SALES_REVENUE,
            statutory_codes::CASH,
        ] {
            assert!(chart.iter().any(|a| a.code == code), "missing {code}");
        }
    }

    #[test]
    fn test_all_defaults_are_system_accounts() {
        assert!(default_chart().iter().all(|a| a.is_system));
    }
}
