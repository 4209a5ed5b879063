//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    AccountActivity, BalanceSheetReport, IncomeStatementReport, StatementLine, StatementSection,
    TrialBalanceReport, TrialBalanceRow,
};
use crate::coa::types::AccountType;
use crate::ledger::balance::net_to_sides;

/// Two totals are considered equal when they differ by less than a cent.
const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Service for generating financial reports.
///
/// Stateless: the persistence layer supplies per-account aggregates of
/// posted journal lines; this service nets, groups, and totals them.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance from account activity up to `as_of_date`.
    ///
    /// Every account is netted to a single debit or credit balance;
    /// accounts with no net balance and no activity are omitted. The
    /// report is balanced when total debits and credits differ by less
    /// than 0.01 — an empty trial balance is balanced and zero.
    #[must_use]
    pub fn generate_trial_balance(
        as_of_date: NaiveDate,
        fiscal_year: i32,
        mut activities: Vec<AccountActivity>,
    ) -> TrialBalanceReport {
        activities.sort_by(|a, b| a.code.cmp(&b.code));

        let mut rows = Vec::with_capacity(activities.len());
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;

        for activity in activities {
            if activity.total_debit == Decimal::ZERO && activity.total_credit == Decimal::ZERO {
                continue;
            }

            let (debit_balance, credit_balance) =
                net_to_sides(activity.total_debit, activity.total_credit);

            total_debit += debit_balance;
            total_credit += credit_balance;

            rows.push(TrialBalanceRow {
                account_id: activity.account_id,
                code: activity.code,
                name: activity.name,
                debit_balance,
                credit_balance,
            });
        }

        let is_balanced = (total_debit - total_credit).abs() < BALANCE_TOLERANCE;

        TrialBalanceReport {
            as_of_date,
            fiscal_year,
            rows,
            total_debit,
            total_credit,
            is_balanced,
        }
    }

    /// Generates an income statement over a date window.
    ///
    /// Only revenue and expense accounts contribute; net income is total
    /// revenue minus total expenses.
    #[must_use]
    pub fn generate_income_statement(
        period_start: NaiveDate,
        period_end: NaiveDate,
        fiscal_year: i32,
        mut activities: Vec<AccountActivity>,
    ) -> IncomeStatementReport {
        activities.sort_by(|a, b| a.code.cmp(&b.code));

        let mut revenue = StatementSection::default();
        let mut expenses = StatementSection::default();

        for activity in activities {
            match activity.account_type {
                AccountType::Revenue => {
                    let amount = activity.total_credit - activity.total_debit;
                    push_line(&mut revenue, &activity, amount);
                }
                AccountType::Expense => {
                    let amount = activity.total_debit - activity.total_credit;
                    push_line(&mut expenses, &activity, amount);
                }
                _ => {}
            }
        }

        let net_income = revenue.total - expenses.total;

        IncomeStatementReport {
            period_start,
            period_end,
            fiscal_year,
            revenue,
            expenses,
            net_income,
        }
    }

    /// Generates a balance sheet as of a point in time.
    ///
    /// Revenue and expense activity up to the as-of date is folded into a
    /// current-earnings line inside equity, so Assets = Liabilities +
    /// Equity holds whenever the underlying postings balance.
    #[must_use]
    pub fn generate_balance_sheet(
        as_of_date: NaiveDate,
        fiscal_year: i32,
        mut activities: Vec<AccountActivity>,
    ) -> BalanceSheetReport {
        activities.sort_by(|a, b| a.code.cmp(&b.code));

        let mut assets = StatementSection::default();
        let mut liabilities = StatementSection::default();
        let mut equity = StatementSection::default();
        let mut current_earnings = Decimal::ZERO;

        for activity in activities {
            match activity.account_type {
                AccountType::Asset => {
                    let amount = activity.total_debit - activity.total_credit;
                    push_line(&mut assets, &activity, amount);
                }
                AccountType::Liability => {
                    let amount = activity.total_credit - activity.total_debit;
                    push_line(&mut liabilities, &activity, amount);
                }
                AccountType::Equity => {
                    let amount = activity.total_credit - activity.total_debit;
                    push_line(&mut equity, &activity, amount);
                }
                AccountType::Revenue => {
                    current_earnings += activity.total_credit - activity.total_debit;
                }
                AccountType::Expense => {
                    current_earnings -= activity.total_debit - activity.total_credit;
                }
            }
        }

        let total_assets = assets.total;
        let total_liabilities = liabilities.total;
        let total_equity = equity.total + current_earnings;
        let liabilities_and_equity = total_liabilities + total_equity;
        let is_balanced = (total_assets - liabilities_and_equity).abs() < BALANCE_TOLERANCE;

        BalanceSheetReport {
            as_of_date,
            fiscal_year,
            assets,
            liabilities,
            equity,
            current_earnings,
            total_assets,
            total_liabilities,
            total_equity,
            liabilities_and_equity,
            is_balanced,
        }
    }
}

fn push_line(section: &mut StatementSection, activity: &AccountActivity, amount: Decimal) {
    if amount == Decimal::ZERO {
        return;
    }
    section.total += amount;
    section.lines.push(StatementLine {
        code: activity.code.clone(),
        name: activity.name.clone(),
        amount,
    });
}
