//! Statutory return generation.
//!
//! Pure aggregation over typed payroll data: deterministic given the
//! same inputs. The engine (`tax::engine`) pulls the data from the
//! collaborator contracts and hands it to these functions.

use chrono::{Datelike, NaiveDate};
use kontabil_shared::types::EmployeeId;
use kontabil_shared::types::money::round_currency;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::inss::{INSS_EMPLOYER_RATE, reconstruct_base};
use super::types::{
    AnnualWitReturn, AnnualWitRow, EmployeeWitCertificate, InssReturnRow, MonthlyInssReturn,
    MonthlyWithholding, MonthlyWitReturn, WitReturnRow,
};
use super::wit::{annual_wit, monthly_taxable_wages};
use crate::contracts::employee::Employee;
use crate::contracts::payroll::{DeductionKind, EmployerTaxKind, PayrollRecord};
use crate::contracts::settings::CompanyDetails;
use crate::filing::period::FilingPeriod;

/// A payroll record joined with the pay date of its run.
#[derive(Debug, Clone)]
pub struct PaidPayrollRecord {
    /// Pay date of the owning run.
    pub pay_date: NaiveDate,
    /// The employee record.
    pub record: PayrollRecord,
}

/// Per-employee wage aggregate.
#[derive(Debug, Default, Clone)]
struct WageAggregate {
    gross: Decimal,
    wit_withheld: Decimal,
    inss_employee: Decimal,
    inss_employer: Decimal,
}

fn aggregate_by_employee(records: &[PaidPayrollRecord]) -> HashMap<EmployeeId, WageAggregate> {
    let mut totals: HashMap<EmployeeId, WageAggregate> = HashMap::new();

    for paid in records {
        let entry = totals.entry(paid.record.employee_id).or_default();
        entry.gross += paid.record.total_gross_pay;
        entry.wit_withheld += paid.record.deduction_total(DeductionKind::WitWithholding);
        entry.inss_employee += paid.record.deduction_total(DeductionKind::InssEmployee);
        entry.inss_employer += paid
            .record
            .employer_tax_total(EmployerTaxKind::InssEmployer);
    }

    totals
}

fn employee_index(employees: &[Employee]) -> HashMap<EmployeeId, &Employee> {
    employees.iter().map(|e| (e.id, e)).collect()
}

/// Generates the monthly wage income tax return.
///
/// One row per employee with wages in the period; employees with zero
/// pay are skipped. All currency figures are rounded to 2 decimals.
#[must_use]
pub fn monthly_wit_return(
    period: FilingPeriod,
    company: CompanyDetails,
    employees: &[Employee],
    records: &[PaidPayrollRecord],
) -> MonthlyWitReturn {
    let index = employee_index(employees);
    let totals = aggregate_by_employee(records);

    let mut rows: Vec<WitReturnRow> = totals
        .into_iter()
        .filter(|(_, agg)| agg.gross != Decimal::ZERO || agg.wit_withheld != Decimal::ZERO)
        .filter_map(|(employee_id, agg)| {
            let employee = index.get(&employee_id)?;
            let gross = round_currency(agg.gross);
            Some(WitReturnRow {
                employee_id,
                employee_name: employee.full_name(),
                tin: employee.tin.clone(),
                gross_wages: gross,
                taxable_wages: monthly_taxable_wages(gross, employee.is_resident),
                wit_withheld: round_currency(agg.wit_withheld),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));

    let total_wages = round_currency(rows.iter().map(|r| r.gross_wages).sum());
    let total_withheld = round_currency(rows.iter().map(|r| r.wit_withheld).sum());

    MonthlyWitReturn {
        period,
        company,
        employee_count: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        total_wages,
        total_withheld,
        rows,
    }
}

/// Generates the monthly social security return.
///
/// The contribution base is reconstructed from the withheld amount;
/// the employer contribution uses the recorded figure when present and
/// falls back to 6% of the reconstructed base.
#[must_use]
pub fn monthly_inss_return(
    period: FilingPeriod,
    company: CompanyDetails,
    employees: &[Employee],
    records: &[PaidPayrollRecord],
) -> MonthlyInssReturn {
    let index = employee_index(employees);
    let totals = aggregate_by_employee(records);

    let mut rows: Vec<InssReturnRow> = totals
        .into_iter()
        .filter(|(_, agg)| {
            agg.inss_employee != Decimal::ZERO || agg.inss_employer != Decimal::ZERO
        })
        .filter_map(|(employee_id, agg)| {
            let employee = index.get(&employee_id)?;
            let employee_contribution = round_currency(agg.inss_employee);
            let contribution_base = reconstruct_base(employee_contribution);
            let employer_contribution = if agg.inss_employer == Decimal::ZERO {
                round_currency(contribution_base * INSS_EMPLOYER_RATE)
            } else {
                round_currency(agg.inss_employer)
            };

            Some(InssReturnRow {
                employee_id,
                employee_name: employee.full_name(),
                tin: employee.tin.clone(),
                contribution_base,
                employee_contribution,
                employer_contribution,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));

    let total_base = round_currency(rows.iter().map(|r| r.contribution_base).sum());
    let total_employee = round_currency(rows.iter().map(|r| r.employee_contribution).sum());
    let total_employer = round_currency(rows.iter().map(|r| r.employer_contribution).sum());

    MonthlyInssReturn {
        period,
        company,
        employee_count: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        total_base,
        total_employee,
        total_employer,
        rows,
    }
}

/// Generates the annual wage income tax reconciliation return.
///
/// Each row carries the statutory liability computed from annual gross
/// wages next to the amount actually withheld.
#[must_use]
pub fn annual_wit_return(
    tax_year: i32,
    company: CompanyDetails,
    employees: &[Employee],
    records: &[PaidPayrollRecord],
) -> AnnualWitReturn {
    let index = employee_index(employees);
    let totals = aggregate_by_employee(records);

    let mut rows: Vec<AnnualWitRow> = totals
        .into_iter()
        .filter(|(_, agg)| agg.gross != Decimal::ZERO || agg.wit_withheld != Decimal::ZERO)
        .filter_map(|(employee_id, agg)| {
            let employee = index.get(&employee_id)?;
            let gross = round_currency(agg.gross);
            let withheld = round_currency(agg.wit_withheld);
            let computed = annual_wit(gross, employee.is_resident);
            Some(AnnualWitRow {
                employee_id,
                employee_name: employee.full_name(),
                tin: employee.tin.clone(),
                gross_wages: gross,
                wit_withheld: withheld,
                computed_liability: computed,
                variance: withheld - computed,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));

    let total_wages = round_currency(rows.iter().map(|r| r.gross_wages).sum());
    let total_withheld = round_currency(rows.iter().map(|r| r.wit_withheld).sum());
    let total_computed = round_currency(rows.iter().map(|r| r.computed_liability).sum());

    AnnualWitReturn {
        tax_year,
        company,
        employee_count: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        total_wages,
        total_withheld,
        total_computed,
        rows,
    }
}

/// Generates the annual withholding certificate for one employee.
///
/// Returns `None` when the employee had no wages in the year.
#[must_use]
pub fn employee_wit_certificate(
    tax_year: i32,
    company: CompanyDetails,
    employee: &Employee,
    records: &[PaidPayrollRecord],
) -> Option<EmployeeWitCertificate> {
    let mut by_month: HashMap<u32, (Decimal, Decimal)> = HashMap::new();

    for paid in records
        .iter()
        .filter(|p| p.record.employee_id == employee.id)
    {
        let (gross, withheld) = by_month.entry(paid.pay_date.month()).or_default();
        *gross += paid.record.total_gross_pay;
        *withheld += paid.record.deduction_total(DeductionKind::WitWithholding);
    }

    if by_month.is_empty() {
        return None;
    }

    let mut months: Vec<MonthlyWithholding> = by_month
        .into_iter()
        .map(|(month, (gross, withheld))| MonthlyWithholding {
            month,
            gross_wages: round_currency(gross),
            wit_withheld: round_currency(withheld),
        })
        .collect();
    months.sort_by_key(|m| m.month);

    let total_gross = round_currency(months.iter().map(|m| m.gross_wages).sum());
    let total_withheld = round_currency(months.iter().map(|m| m.wit_withheld).sum());

    Some(EmployeeWitCertificate {
        tax_year,
        company,
        employee_id: employee.id,
        employee_name: employee.full_name(),
        tin: employee.tin.clone(),
        months,
        total_gross,
        total_withheld,
        computed_liability: annual_wit(total_gross, employee.is_resident),
    })
}
