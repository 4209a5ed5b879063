//! Conversions between database enums and core domain enums.
//!
//! The Postgres enum types and the core domain enums carry the same
//! variants; these helpers keep the mapping in one place.

use kontabil_core::coa::types as core_coa;
use kontabil_core::filing::types as core_filing;
use kontabil_core::fiscal::types as core_fiscal;
use kontabil_core::ledger::types as core_ledger;

use crate::entities::sea_orm_active_enums as db;

/// Maps a core account type to its database enum.
#[must_use]
pub fn account_type_to_db(value: core_coa::AccountType) -> db::AccountType {
    match value {
        core_coa::AccountType::Asset => db::AccountType::Asset,
        core_coa::AccountType::Liability => db::AccountType::Liability,
        core_coa::AccountType::Equity => db::AccountType::Equity,
        core_coa::AccountType::Revenue => db::AccountType::Revenue,
        core_coa::AccountType::Expense => db::AccountType::Expense,
    }
}

/// Maps a database account type to its core enum.
#[must_use]
pub fn account_type_to_core(value: &db::AccountType) -> core_coa::AccountType {
    match value {
        db::AccountType::Asset => core_coa::AccountType::Asset,
        db::AccountType::Liability => core_coa::AccountType::Liability,
        db::AccountType::Equity => core_coa::AccountType::Equity,
        db::AccountType::Revenue => core_coa::AccountType::Revenue,
        db::AccountType::Expense => core_coa::AccountType::Expense,
    }
}

/// Maps a core account subtype to its database enum.
#[must_use]
pub fn sub_type_to_db(value: core_coa::AccountSubType) -> db::AccountSubtype {
    use core_coa::AccountSubType as C;
    use db::AccountSubtype as D;
    match value {
        C::Cash => D::Cash,
        C::Bank => D::Bank,
        C::AccountsReceivable => D::AccountsReceivable,
        C::Inventory => D::Inventory,
        C::PrepaidExpense => D::PrepaidExpense,
        C::FixedAsset => D::FixedAsset,
        C::OtherAsset => D::OtherAsset,
        C::AccountsPayable => D::AccountsPayable,
        C::TaxPayable => D::TaxPayable,
        C::SocialSecurityPayable => D::SocialSecurityPayable,
        C::WagesPayable => D::WagesPayable,
        C::OtherLiability => D::OtherLiability,
        C::OwnersEquity => D::OwnersEquity,
        C::RetainedEarnings => D::RetainedEarnings,
        C::OpeningBalanceEquity => D::OpeningBalanceEquity,
        C::SalesRevenue => D::SalesRevenue,
        C::ServiceRevenue => D::ServiceRevenue,
        C::OtherRevenue => D::OtherRevenue,
        C::CostOfGoodsSold => D::CostOfGoodsSold,
        C::OperatingExpense => D::OperatingExpense,
        C::SalaryExpense => D::SalaryExpense,
        C::SocialSecurityExpense => D::SocialSecurityExpense,
        C::TaxExpense => D::TaxExpense,
        C::OtherExpense => D::OtherExpense,
    }
}

/// Maps a database account subtype to its core enum.
#[must_use]
pub fn sub_type_to_core(value: &db::AccountSubtype) -> core_coa::AccountSubType {
    use core_coa::AccountSubType as C;
    use db::AccountSubtype as D;
    match value {
        D::Cash => C::Cash,
        D::Bank => C::Bank,
        D::AccountsReceivable => C::AccountsReceivable,
        D::Inventory => C::Inventory,
        D::PrepaidExpense => C::PrepaidExpense,
        D::FixedAsset => C::FixedAsset,
        D::OtherAsset => C::OtherAsset,
        D::AccountsPayable => C::AccountsPayable,
        D::TaxPayable => C::TaxPayable,
        D::SocialSecurityPayable => C::SocialSecurityPayable,
        D::WagesPayable => C::WagesPayable,
        D::OtherLiability => C::OtherLiability,
        D::OwnersEquity => C::OwnersEquity,
        D::RetainedEarnings => C::RetainedEarnings,
        D::OpeningBalanceEquity => C::OpeningBalanceEquity,
        D::SalesRevenue => C::SalesRevenue,
        D::ServiceRevenue => C::ServiceRevenue,
        D::OtherRevenue => C::OtherRevenue,
        D::CostOfGoodsSold => C::CostOfGoodsSold,
        D::OperatingExpense => C::OperatingExpense,
        D::SalaryExpense => C::SalaryExpense,
        D::SocialSecurityExpense => C::SocialSecurityExpense,
        D::TaxExpense => C::TaxExpense,
        D::OtherExpense => C::OtherExpense,
    }
}

/// Maps a core entry source to its database enum.
#[must_use]
pub fn source_to_db(value: core_ledger::EntrySource) -> db::EntrySource {
    match value {
        core_ledger::EntrySource::Manual => db::EntrySource::Manual,
        core_ledger::EntrySource::Invoice => db::EntrySource::Invoice,
        core_ledger::EntrySource::Payroll => db::EntrySource::Payroll,
        core_ledger::EntrySource::Opening => db::EntrySource::Opening,
        core_ledger::EntrySource::Reversal => db::EntrySource::Reversal,
    }
}

/// Maps a database entry source to its core enum.
#[must_use]
pub fn source_to_core(value: &db::EntrySource) -> core_ledger::EntrySource {
    match value {
        db::EntrySource::Manual => core_ledger::EntrySource::Manual,
        db::EntrySource::Invoice => core_ledger::EntrySource::Invoice,
        db::EntrySource::Payroll => core_ledger::EntrySource::Payroll,
        db::EntrySource::Opening => core_ledger::EntrySource::Opening,
        db::EntrySource::Reversal => core_ledger::EntrySource::Reversal,
    }
}

/// Maps a core fiscal year status to its database enum.
#[must_use]
pub fn year_status_to_db(value: core_fiscal::FiscalYearStatus) -> db::FiscalYearStatus {
    match value {
        core_fiscal::FiscalYearStatus::Open => db::FiscalYearStatus::Open,
        core_fiscal::FiscalYearStatus::Closed => db::FiscalYearStatus::Closed,
    }
}

/// Maps a database fiscal year status to its core enum.
#[must_use]
pub fn year_status_to_core(value: &db::FiscalYearStatus) -> core_fiscal::FiscalYearStatus {
    match value {
        db::FiscalYearStatus::Open => core_fiscal::FiscalYearStatus::Open,
        db::FiscalYearStatus::Closed => core_fiscal::FiscalYearStatus::Closed,
    }
}

/// Maps a core fiscal period status to its database enum.
#[must_use]
pub fn period_status_to_db(value: core_fiscal::FiscalPeriodStatus) -> db::FiscalPeriodStatus {
    match value {
        core_fiscal::FiscalPeriodStatus::Open => db::FiscalPeriodStatus::Open,
        core_fiscal::FiscalPeriodStatus::Closed => db::FiscalPeriodStatus::Closed,
        core_fiscal::FiscalPeriodStatus::Locked => db::FiscalPeriodStatus::Locked,
    }
}

/// Maps a database fiscal period status to its core enum.
#[must_use]
pub fn period_status_to_core(value: &db::FiscalPeriodStatus) -> core_fiscal::FiscalPeriodStatus {
    match value {
        db::FiscalPeriodStatus::Open => core_fiscal::FiscalPeriodStatus::Open,
        db::FiscalPeriodStatus::Closed => core_fiscal::FiscalPeriodStatus::Closed,
        db::FiscalPeriodStatus::Locked => core_fiscal::FiscalPeriodStatus::Locked,
    }
}

/// Maps a core filing type to its database enum.
#[must_use]
pub fn filing_type_to_db(value: core_filing::FilingType) -> db::FilingType {
    match value {
        core_filing::FilingType::MonthlyWit => db::FilingType::MonthlyWit,
        core_filing::FilingType::AnnualWit => db::FilingType::AnnualWit,
        core_filing::FilingType::InssMonthly => db::FilingType::InssMonthly,
    }
}

/// Maps a database filing type to its core enum.
#[must_use]
pub fn filing_type_to_core(value: &db::FilingType) -> core_filing::FilingType {
    match value {
        db::FilingType::MonthlyWit => core_filing::FilingType::MonthlyWit,
        db::FilingType::AnnualWit => core_filing::FilingType::AnnualWit,
        db::FilingType::InssMonthly => core_filing::FilingType::InssMonthly,
    }
}

/// Maps a core filing status to its database enum.
#[must_use]
pub fn filing_status_to_db(value: core_filing::FilingStatus) -> db::FilingStatus {
    match value {
        core_filing::FilingStatus::Pending => db::FilingStatus::Pending,
        core_filing::FilingStatus::Overdue => db::FilingStatus::Overdue,
        core_filing::FilingStatus::Filed => db::FilingStatus::Filed,
    }
}

/// Maps a database filing status to its core enum.
#[must_use]
pub fn filing_status_to_core(value: &db::FilingStatus) -> core_filing::FilingStatus {
    match value {
        db::FilingStatus::Pending => core_filing::FilingStatus::Pending,
        db::FilingStatus::Overdue => core_filing::FilingStatus::Overdue,
        db::FilingStatus::Filed => core_filing::FilingStatus::Filed,
    }
}
