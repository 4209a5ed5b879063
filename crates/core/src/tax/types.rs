//! Statutory return payload types.
//!
//! These structures are what gets snapshotted into a `TaxFiling` and
//! rendered by the filings UI.

use kontabil_shared::types::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contracts::settings::CompanyDetails;
use crate::filing::period::FilingPeriod;

/// One employee row of a monthly WIT return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WitReturnRow {
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Employee taxpayer number, when registered.
    pub tin: Option<String>,
    /// Gross wages paid in the period.
    pub gross_wages: Decimal,
    /// Taxable wages after the residency threshold.
    pub taxable_wages: Decimal,
    /// Wage income tax withheld in the period.
    pub wit_withheld: Decimal,
}

/// Monthly wage income tax return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWitReturn {
    /// The month covered.
    pub period: FilingPeriod,
    /// Employer details.
    pub company: CompanyDetails,
    /// Per-employee rows.
    pub rows: Vec<WitReturnRow>,
    /// Number of employees with wages this period.
    pub employee_count: u32,
    /// Total gross wages.
    pub total_wages: Decimal,
    /// Total WIT withheld.
    pub total_withheld: Decimal,
}

/// One employee row of a monthly INSS return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InssReturnRow {
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Employee taxpayer number, when registered.
    pub tin: Option<String>,
    /// Contribution base. Reconstructed from the withheld amount when
    /// payroll records carry only the withheld figure.
    pub contribution_base: Decimal,
    /// Employee contribution withheld (4% of base).
    pub employee_contribution: Decimal,
    /// Employer contribution (6% of base).
    pub employer_contribution: Decimal,
}

/// Monthly social security return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyInssReturn {
    /// The month covered.
    pub period: FilingPeriod,
    /// Employer details.
    pub company: CompanyDetails,
    /// Per-employee rows.
    pub rows: Vec<InssReturnRow>,
    /// Number of employees with contributions this period.
    pub employee_count: u32,
    /// Total contribution base.
    pub total_base: Decimal,
    /// Total employee contributions.
    pub total_employee: Decimal,
    /// Total employer contributions.
    pub total_employer: Decimal,
}

/// One employee row of the annual WIT reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualWitRow {
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Employee taxpayer number, when registered.
    pub tin: Option<String>,
    /// Gross wages paid across the year.
    pub gross_wages: Decimal,
    /// WIT withheld across the year.
    pub wit_withheld: Decimal,
    /// Statutory annual liability computed from gross wages.
    pub computed_liability: Decimal,
    /// Withheld minus computed liability (positive = over-withheld).
    pub variance: Decimal,
}

/// Annual wage income tax return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualWitReturn {
    /// The tax year covered.
    pub tax_year: i32,
    /// Employer details.
    pub company: CompanyDetails,
    /// Per-employee rows.
    pub rows: Vec<AnnualWitRow>,
    /// Number of employees with wages this year.
    pub employee_count: u32,
    /// Total gross wages.
    pub total_wages: Decimal,
    /// Total WIT withheld.
    pub total_withheld: Decimal,
    /// Total computed annual liability.
    pub total_computed: Decimal,
}

/// One month of an employee withholding certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWithholding {
    /// Month (1-12).
    pub month: u32,
    /// Gross wages paid that month.
    pub gross_wages: Decimal,
    /// WIT withheld that month.
    pub wit_withheld: Decimal,
}

/// Annual per-employee withholding certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWitCertificate {
    /// The tax year covered.
    pub tax_year: i32,
    /// Employer details.
    pub company: CompanyDetails,
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Employee taxpayer number, when registered.
    pub tin: Option<String>,
    /// Monthly breakdown, ordered by month.
    pub months: Vec<MonthlyWithholding>,
    /// Total gross wages for the year.
    pub total_gross: Decimal,
    /// Total WIT withheld for the year.
    pub total_withheld: Decimal,
    /// Statutory annual liability computed from total gross wages.
    pub computed_liability: Decimal,
}
