//! Tax computation engine.
//!
//! Pulls payroll, employee, and company data through the collaborator
//! contracts and drives the pure return generators. Deterministic given
//! the same upstream data; regeneration after backdated payroll
//! corrections is an explicit caller action, never automatic.

use kontabil_shared::types::{EmployeeId, TenantId};

use super::error::TaxError;
use super::returns::{
    self, PaidPayrollRecord,
};
use super::types::{
    AnnualWitReturn, EmployeeWitCertificate, MonthlyInssReturn, MonthlyWitReturn,
};
use crate::contracts::employee::EmployeeDirectory;
use crate::contracts::payroll::PayrollSource;
use crate::contracts::settings::CompanySettings;
use crate::filing::period::FilingPeriod;

/// Computes WIT and INSS aggregates from external payroll data.
///
/// Collaborators are injected explicitly; the engine holds no storage
/// handle of its own.
pub struct TaxComputationEngine<P, E, S> {
    payroll: P,
    employees: E,
    settings: S,
}

impl<P, E, S> TaxComputationEngine<P, E, S>
where
    P: PayrollSource,
    E: EmployeeDirectory,
    S: CompanySettings,
{
    /// Creates a new engine over the given collaborators.
    pub const fn new(payroll: P, employees: E, settings: S) -> Self {
        Self {
            payroll,
            employees,
            settings,
        }
    }

    /// Generates the monthly WIT return for a month period.
    ///
    /// # Errors
    ///
    /// Returns `TaxError` if the period is not a month or a collaborator
    /// fails.
    pub async fn generate_monthly_wit_return(
        &self,
        tenant_id: TenantId,
        period: FilingPeriod,
    ) -> Result<MonthlyWitReturn, TaxError> {
        if !matches!(period, FilingPeriod::Month { .. }) {
            return Err(TaxError::MonthPeriodRequired(period));
        }

        let company = self.settings.company_details(tenant_id).await?;
        let employees = self.employees.employees(tenant_id).await?;
        let records = self
            .collect_records(tenant_id, period)
            .await?;

        Ok(returns::monthly_wit_return(
            period, company, &employees, &records,
        ))
    }

    /// Generates the monthly INSS return for a month period.
    ///
    /// # Errors
    ///
    /// Returns `TaxError` if the period is not a month or a collaborator
    /// fails.
    pub async fn generate_monthly_inss_return(
        &self,
        tenant_id: TenantId,
        period: FilingPeriod,
    ) -> Result<MonthlyInssReturn, TaxError> {
        if !matches!(period, FilingPeriod::Month { .. }) {
            return Err(TaxError::MonthPeriodRequired(period));
        }

        let company = self.settings.company_details(tenant_id).await?;
        let employees = self.employees.employees(tenant_id).await?;
        let records = self
            .collect_records(tenant_id, period)
            .await?;

        Ok(returns::monthly_inss_return(
            period, company, &employees, &records,
        ))
    }

    /// Generates the annual WIT reconciliation return for a tax year.
    ///
    /// # Errors
    ///
    /// Returns `TaxError` if a collaborator fails.
    pub async fn generate_annual_wit_return(
        &self,
        tenant_id: TenantId,
        tax_year: i32,
    ) -> Result<AnnualWitReturn, TaxError> {
        let company = self.settings.company_details(tenant_id).await?;
        let employees = self.employees.employees(tenant_id).await?;
        let records = self
            .collect_records(tenant_id, FilingPeriod::Year(tax_year))
            .await?;

        Ok(returns::annual_wit_return(
            tax_year, company, &employees, &records,
        ))
    }

    /// Generates the annual withholding certificate for one employee.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::EmployeeNotFound` if the employee is not in
    /// the directory, `TaxError::NoWagesForYear` if they had no wages.
    pub async fn generate_employee_wit_certificate(
        &self,
        tenant_id: TenantId,
        tax_year: i32,
        employee_id: EmployeeId,
    ) -> Result<EmployeeWitCertificate, TaxError> {
        let company = self.settings.company_details(tenant_id).await?;
        let employees = self.employees.employees(tenant_id).await?;
        let employee = employees
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or(TaxError::EmployeeNotFound(employee_id))?;

        let records = self
            .collect_records(tenant_id, FilingPeriod::Year(tax_year))
            .await?;

        returns::employee_wit_certificate(tax_year, company, employee, &records)
            .ok_or(TaxError::NoWagesForYear(employee_id))
    }

    /// Pulls the paid payroll records whose pay date falls in the period.
    async fn collect_records(
        &self,
        tenant_id: TenantId,
        period: FilingPeriod,
    ) -> Result<Vec<PaidPayrollRecord>, TaxError> {
        let runs = self
            .payroll
            .paid_runs_between(tenant_id, period.start_date(), period.end_date())
            .await?;

        let mut records = Vec::new();
        for run in runs {
            let run_records = self.payroll.records_for_run(tenant_id, run.id).await?;
            records.extend(run_records.into_iter().map(|record| PaidPayrollRecord {
                pay_date: run.pay_date,
                record,
            }));
        }

        Ok(records)
    }
}
