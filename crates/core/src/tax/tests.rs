//! Return generation and engine tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use kontabil_shared::types::{EmployeeId, PayrollRunId, TenantId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::TaxComputationEngine;
use super::error::TaxError;
use super::returns::{
    self, PaidPayrollRecord,
};
use crate::contracts::employee::{Employee, EmployeeDirectory, EmployeeStatus};
use crate::contracts::error::ContractError;
use crate::contracts::payroll::{
    DeductionKind, EmployerTax, EmployerTaxKind, PayrollDeduction, PayrollRecord, PayrollRun,
    PayrollRunStatus, PayrollSource,
};
use crate::contracts::settings::{CompanyDetails, CompanySettings};
use crate::filing::period::FilingPeriod;

fn company() -> CompanyDetails {
    CompanyDetails {
        legal_name: "Loja Dili Lda".to_string(),
        trading_name: None,
        tin_number: "1000123".to_string(),
        registered_address: "Rua de Motael, Dili".to_string(),
    }
}

fn employee(name: &str, is_resident: bool) -> Employee {
    Employee {
        id: EmployeeId::new(),
        first_name: name.to_string(),
        last_name: "Ximenes".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        is_resident,
        status: EmployeeStatus::Active,
        tin: Some(format!("tin-{name}")),
    }
}

fn paid_record(
    employee_id: EmployeeId,
    pay_date: NaiveDate,
    gross: Decimal,
    wit: Decimal,
    inss_employee: Decimal,
    inss_employer: Decimal,
) -> PaidPayrollRecord {
    let mut deductions = Vec::new();
    if wit != Decimal::ZERO {
        deductions.push(PayrollDeduction {
            kind: DeductionKind::WitWithholding,
            description: "Wage income tax".to_string(),
            amount: wit,
        });
    }
    if inss_employee != Decimal::ZERO {
        deductions.push(PayrollDeduction {
            kind: DeductionKind::InssEmployee,
            description: "Social security".to_string(),
            amount: inss_employee,
        });
    }

    let employer_taxes = if inss_employer == Decimal::ZERO {
        vec![]
    } else {
        vec![EmployerTax {
            kind: EmployerTaxKind::InssEmployer,
            description: "Social security (employer)".to_string(),
            amount: inss_employer,
        }]
    };

    PaidPayrollRecord {
        pay_date,
        record: PayrollRecord {
            run_id: PayrollRunId::new(),
            employee_id,
            total_gross_pay: gross,
            deductions,
            employer_taxes,
        },
    }
}

fn january_period() -> FilingPeriod {
    FilingPeriod::Month {
        year: 2026,
        month: 1,
    }
}

fn pay_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()
}

#[test]
fn test_monthly_wit_return_aggregates_per_employee() {
    let resident = employee("Ana", true);
    let nonresident = employee("Ben", false);
    let employees = vec![resident.clone(), nonresident.clone()];

    let records = vec![
        paid_record(
            resident.id,
            pay_date(),
            dec!(1000.00),
            dec!(50.00),
            dec!(40.00),
            dec!(60.00),
        ),
        paid_record(
            nonresident.id,
            pay_date(),
            dec!(1000.00),
            dec!(100.00),
            dec!(40.00),
            dec!(60.00),
        ),
    ];

    let wit = returns::monthly_wit_return(january_period(), company(), &employees, &records);

    assert_eq!(wit.employee_count, 2);
    assert_eq!(wit.total_wages, dec!(2000.00));
    assert_eq!(wit.total_withheld, dec!(150.00));

    // Rows are sorted by name: Ana first
    assert_eq!(wit.rows[0].employee_name, "Ana Ximenes");
    assert_eq!(wit.rows[0].taxable_wages, dec!(500.00));
    assert_eq!(wit.rows[0].wit_withheld, dec!(50.00));
    assert_eq!(wit.rows[1].taxable_wages, dec!(1000.00));
    assert_eq!(wit.rows[1].wit_withheld, dec!(100.00));
}

#[test]
fn test_monthly_wit_return_skips_zero_pay_employees() {
    let paid = employee("Ana", true);
    let unpaid = employee("Ben", true);
    let employees = vec![paid.clone(), unpaid];

    let records = vec![paid_record(
        paid.id,
        pay_date(),
        dec!(750.00),
        dec!(25.00),
        Decimal::ZERO,
        Decimal::ZERO,
    )];

    let wit = returns::monthly_wit_return(january_period(), company(), &employees, &records);
    assert_eq!(wit.employee_count, 1);
    assert_eq!(wit.rows.len(), 1);
}

#[test]
fn test_monthly_wit_return_merges_multiple_runs() {
    let ana = employee("Ana", true);
    let employees = vec![ana.clone()];

    // Two half-month runs
    let records = vec![
        paid_record(
            ana.id,
            NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            dec!(400.00),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        paid_record(
            ana.id,
            NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
            dec!(600.00),
            dec!(50.00),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
    ];

    let wit = returns::monthly_wit_return(january_period(), company(), &employees, &records);
    assert_eq!(wit.rows.len(), 1);
    assert_eq!(wit.rows[0].gross_wages, dec!(1000.00));
    assert_eq!(wit.rows[0].wit_withheld, dec!(50.00));
}

#[test]
fn test_monthly_inss_return_reconstructs_base() {
    let ana = employee("Ana", true);
    let employees = vec![ana.clone()];

    let records = vec![paid_record(
        ana.id,
        pay_date(),
        dec!(1000.00),
        dec!(50.00),
        dec!(40.00),
        dec!(60.00),
    )];

    let inss = returns::monthly_inss_return(january_period(), company(), &employees, &records);

    assert_eq!(inss.employee_count, 1);
    assert_eq!(inss.rows[0].contribution_base, dec!(1000.00));
    assert_eq!(inss.rows[0].employee_contribution, dec!(40.00));
    assert_eq!(inss.rows[0].employer_contribution, dec!(60.00));
    assert_eq!(inss.total_base, dec!(1000.00));
    assert_eq!(inss.total_employee, dec!(40.00));
    assert_eq!(inss.total_employer, dec!(60.00));
}

#[test]
fn test_monthly_inss_return_computes_missing_employer_side() {
    let ana = employee("Ana", true);
    let employees = vec![ana.clone()];

    // Record carries only the employee withholding
    let records = vec![paid_record(
        ana.id,
        pay_date(),
        dec!(1000.00),
        Decimal::ZERO,
        dec!(40.00),
        Decimal::ZERO,
    )];

    let inss = returns::monthly_inss_return(january_period(), company(), &employees, &records);
    assert_eq!(inss.rows[0].employer_contribution, dec!(60.00));
}

#[test]
fn test_monthly_inss_return_skips_uncovered_employees() {
    let ana = employee("Ana", true);
    let employees = vec![ana.clone()];

    // Pay without any INSS amounts
    let records = vec![paid_record(
        ana.id,
        pay_date(),
        dec!(450.00),
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    )];

    let inss = returns::monthly_inss_return(january_period(), company(), &employees, &records);
    assert!(inss.rows.is_empty());
    assert_eq!(inss.total_base, Decimal::ZERO);
}

#[test]
fn test_annual_wit_return_reconciles() {
    let ana = employee("Ana", true);
    let employees = vec![ana.clone()];

    // 12 months of 1000 gross, 50 withheld each
    let records: Vec<PaidPayrollRecord> = (1..=12u32)
        .map(|month| {
            paid_record(
                ana.id,
                NaiveDate::from_ymd_opt(2026, month, 28).unwrap(),
                dec!(1000.00),
                dec!(50.00),
                Decimal::ZERO,
                Decimal::ZERO,
            )
        })
        .collect();

    let annual = returns::annual_wit_return(2026, company(), &employees, &records);

    assert_eq!(annual.employee_count, 1);
    assert_eq!(annual.total_wages, dec!(12000.00));
    assert_eq!(annual.total_withheld, dec!(600.00));
    // Annual liability: 10% of (12000 - 6000)
    assert_eq!(annual.total_computed, dec!(600.00));
    assert_eq!(annual.rows[0].variance, Decimal::ZERO);
}

#[test]
fn test_employee_certificate_monthly_breakdown() {
    let ana = employee("Ana", true);

    let records = vec![
        paid_record(
            ana.id,
            NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
            dec!(1000.00),
            dec!(50.00),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        paid_record(
            ana.id,
            NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
            dec!(1200.00),
            dec!(70.00),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
    ];

    let cert = returns::employee_wit_certificate(2026, company(), &ana, &records).unwrap();

    assert_eq!(cert.months.len(), 2);
    assert_eq!(cert.months[0].month, 1);
    assert_eq!(cert.months[0].gross_wages, dec!(1000.00));
    assert_eq!(cert.months[1].month, 2);
    assert_eq!(cert.total_gross, dec!(2200.00));
    assert_eq!(cert.total_withheld, dec!(120.00));
}

#[test]
fn test_employee_certificate_none_without_wages() {
    let ana = employee("Ana", true);
    assert!(returns::employee_wit_certificate(2026, company(), &ana, &[]).is_none());
}

// ============================================================================
// Engine tests with in-memory collaborator fakes
// ============================================================================

struct FakePayroll {
    runs: Vec<PayrollRun>,
    records: Vec<PayrollRecord>,
}

#[async_trait]
impl PayrollSource for FakePayroll {
    async fn paid_runs_between(
        &self,
        _tenant_id: TenantId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PayrollRun>, ContractError> {
        Ok(self
            .runs
            .iter()
            .filter(|r| r.status == PayrollRunStatus::Paid)
            .filter(|r| r.pay_date >= from && r.pay_date <= to)
            .cloned()
            .collect())
    }

    async fn records_for_run(
        &self,
        _tenant_id: TenantId,
        run_id: kontabil_shared::types::PayrollRunId,
    ) -> Result<Vec<PayrollRecord>, ContractError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.run_id == run_id)
            .cloned()
            .collect())
    }
}

struct FakeDirectory {
    employees: Vec<Employee>,
}

#[async_trait]
impl EmployeeDirectory for FakeDirectory {
    async fn employees(&self, _tenant_id: TenantId) -> Result<Vec<Employee>, ContractError> {
        Ok(self.employees.clone())
    }
}

struct FakeSettings;

#[async_trait]
impl CompanySettings for FakeSettings {
    async fn company_details(
        &self,
        _tenant_id: TenantId,
    ) -> Result<CompanyDetails, ContractError> {
        Ok(company())
    }
}

fn engine_fixture(
    employees: Vec<Employee>,
    runs: Vec<PayrollRun>,
    records: Vec<PayrollRecord>,
) -> TaxComputationEngine<FakePayroll, FakeDirectory, FakeSettings> {
    TaxComputationEngine::new(
        FakePayroll { runs, records },
        FakeDirectory { employees },
        FakeSettings,
    )
}

#[tokio::test]
async fn test_engine_filters_runs_outside_period() {
    let ana = employee("Ana", true);

    let in_run = PayrollRun {
        id: PayrollRunId::new(),
        pay_date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
        status: PayrollRunStatus::Paid,
    };
    let out_run = PayrollRun {
        id: PayrollRunId::new(),
        pay_date: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
        status: PayrollRunStatus::Paid,
    };
    let draft_run = PayrollRun {
        id: PayrollRunId::new(),
        pay_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        status: PayrollRunStatus::Draft,
    };

    let make_record = |run_id| PayrollRecord {
        run_id,
        employee_id: ana.id,
        total_gross_pay: dec!(1000.00),
        deductions: vec![PayrollDeduction {
            kind: DeductionKind::WitWithholding,
            description: "Wage income tax".to_string(),
            amount: dec!(50.00),
        }],
        employer_taxes: vec![],
    };

    let engine = engine_fixture(
        vec![ana.clone()],
        vec![in_run.clone(), out_run.clone(), draft_run.clone()],
        vec![
            make_record(in_run.id),
            make_record(out_run.id),
            make_record(draft_run.id),
        ],
    );

    let wit = engine
        .generate_monthly_wit_return(TenantId::new(), january_period())
        .await
        .unwrap();

    // Only the paid January run counts
    assert_eq!(wit.total_wages, dec!(1000.00));
    assert_eq!(wit.total_withheld, dec!(50.00));
}

#[tokio::test]
async fn test_engine_rejects_year_period_for_monthly_return() {
    let engine = engine_fixture(vec![], vec![], vec![]);

    let result = engine
        .generate_monthly_wit_return(TenantId::new(), FilingPeriod::Year(2026))
        .await;

    assert!(matches!(result, Err(TaxError::MonthPeriodRequired(_))));
}

#[tokio::test]
async fn test_engine_certificate_unknown_employee() {
    let engine = engine_fixture(vec![], vec![], vec![]);

    let result = engine
        .generate_employee_wit_certificate(TenantId::new(), 2026, EmployeeId::new())
        .await;

    assert!(matches!(result, Err(TaxError::EmployeeNotFound(_))));
}

#[tokio::test]
async fn test_engine_is_deterministic() {
    let ana = employee("Ana", true);
    let run = PayrollRun {
        id: PayrollRunId::new(),
        pay_date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
        status: PayrollRunStatus::Paid,
    };
    let record = PayrollRecord {
        run_id: run.id,
        employee_id: ana.id,
        total_gross_pay: dec!(1000.00),
        deductions: vec![PayrollDeduction {
            kind: DeductionKind::InssEmployee,
            description: "Social security".to_string(),
            amount: dec!(40.00),
        }],
        employer_taxes: vec![],
    };

    let engine = engine_fixture(vec![ana], vec![run], vec![record]);
    let tenant = TenantId::new();

    let first = engine
        .generate_monthly_inss_return(tenant, january_period())
        .await
        .unwrap();
    let second = engine
        .generate_monthly_inss_return(tenant, january_period())
        .await
        .unwrap();

    assert_eq!(first.total_base, second.total_base);
    assert_eq!(first.total_employee, second.total_employee);
    assert_eq!(first.total_employer, second.total_employer);
    assert_eq!(first.rows.len(), second.rows.len());
}
