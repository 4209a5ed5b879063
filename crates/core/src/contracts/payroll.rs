//! Payroll collaborator contract.
//!
//! Payroll computation (gross pay, deductions) happens outside this
//! system; the tax engine only reads finished runs. Deduction and
//! employer-tax kinds are closed enums so aggregation never matches on
//! free-text descriptions.

use async_trait::async_trait;
use chrono::NaiveDate;
use kontabil_shared::types::{EmployeeId, PayrollRunId, TenantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// Status of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollRunStatus {
    /// Run is being prepared.
    Draft,
    /// Run has been approved but not paid out.
    Approved,
    /// Run has been paid; only paid runs enter tax returns.
    Paid,
}

/// A payroll run header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier.
    pub id: PayrollRunId,
    /// The date wages were paid.
    pub pay_date: NaiveDate,
    /// Run status.
    pub status: PayrollRunStatus,
}

/// Kind of an employee-side deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Wage income tax withheld from the employee.
    WitWithholding,
    /// Employee social security contribution.
    InssEmployee,
    /// Any other deduction (advances, garnishments, ...).
    Other,
}

/// An employee-side deduction on a payroll record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollDeduction {
    /// What kind of deduction this is.
    pub kind: DeductionKind,
    /// Human-readable label.
    pub description: String,
    /// Deducted amount.
    pub amount: Decimal,
}

/// Kind of an employer-side tax or contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerTaxKind {
    /// Employer social security contribution.
    InssEmployer,
    /// Any other employer-side charge.
    Other,
}

/// An employer-side tax on a payroll record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerTax {
    /// What kind of charge this is.
    pub kind: EmployerTaxKind,
    /// Human-readable label.
    pub description: String,
    /// Charged amount.
    pub amount: Decimal,
}

/// One employee's record within a payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The run this record belongs to.
    pub run_id: PayrollRunId,
    /// The employee paid.
    pub employee_id: EmployeeId,
    /// Gross wages for the run.
    pub total_gross_pay: Decimal,
    /// Employee-side deductions.
    pub deductions: Vec<PayrollDeduction>,
    /// Employer-side taxes and contributions.
    pub employer_taxes: Vec<EmployerTax>,
}

impl PayrollRecord {
    /// Sums the deductions of a given kind.
    #[must_use]
    pub fn deduction_total(&self, kind: DeductionKind) -> Decimal {
        self.deductions
            .iter()
            .filter(|d| d.kind == kind)
            .map(|d| d.amount)
            .sum()
    }

    /// Sums the employer taxes of a given kind.
    #[must_use]
    pub fn employer_tax_total(&self, kind: EmployerTaxKind) -> Decimal {
        self.employer_taxes
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}

/// Read-only access to payroll data.
#[async_trait]
pub trait PayrollSource: Send + Sync {
    /// Returns the paid runs whose pay date falls within the inclusive
    /// date window.
    async fn paid_runs_between(
        &self,
        tenant_id: TenantId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PayrollRun>, ContractError>;

    /// Returns the employee records of a run.
    async fn records_for_run(
        &self,
        tenant_id: TenantId,
        run_id: PayrollRunId,
    ) -> Result<Vec<PayrollRecord>, ContractError>;
}

#[async_trait]
impl<T> PayrollSource for std::sync::Arc<T>
where
    T: PayrollSource + ?Sized,
{
    async fn paid_runs_between(
        &self,
        tenant_id: TenantId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PayrollRun>, ContractError> {
        (**self).paid_runs_between(tenant_id, from, to).await
    }

    async fn records_for_run(
        &self,
        tenant_id: TenantId,
        run_id: PayrollRunId,
    ) -> Result<Vec<PayrollRecord>, ContractError> {
        (**self).records_for_run(tenant_id, run_id).await
    }
}
