//! Default collaborator implementations.
//!
//! The payroll, employee-directory, and settings services are external
//! systems; deployments wire real integrations into `AppState`. The
//! defaults here keep the server honest when an integration is not
//! configured: reads fail with a collaborator error, the holiday
//! calendar falls back to national defaults, and audit events go to the
//! structured log.

use async_trait::async_trait;
use chrono::NaiveDate;
use kontabil_core::contracts::{
    AuditEvent, AuditLog, CompanyDetails, CompanySettings, ContractError, Employee,
    EmployeeDirectory, HolidayOverride, HolidaySource, PayrollRecord, PayrollRun, PayrollSource,
};
use kontabil_shared::types::{PayrollRunId, TenantId};
use tracing::{info, warn};

/// Payroll source for deployments without a payroll integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredPayroll;

#[async_trait]
impl PayrollSource for UnconfiguredPayroll {
    async fn paid_runs_between(
        &self,
        _tenant_id: TenantId,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<PayrollRun>, ContractError> {
        Err(ContractError::Unavailable(
            "payroll integration is not configured".to_string(),
        ))
    }

    async fn records_for_run(
        &self,
        _tenant_id: TenantId,
        _run_id: PayrollRunId,
    ) -> Result<Vec<PayrollRecord>, ContractError> {
        Err(ContractError::Unavailable(
            "payroll integration is not configured".to_string(),
        ))
    }
}

/// Employee directory for deployments without an HR integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredDirectory;

#[async_trait]
impl EmployeeDirectory for UnconfiguredDirectory {
    async fn employees(&self, _tenant_id: TenantId) -> Result<Vec<Employee>, ContractError> {
        Err(ContractError::Unavailable(
            "employee directory integration is not configured".to_string(),
        ))
    }
}

/// Company settings for deployments without a settings integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSettings;

#[async_trait]
impl CompanySettings for UnconfiguredSettings {
    async fn company_details(
        &self,
        _tenant_id: TenantId,
    ) -> Result<CompanyDetails, ContractError> {
        Err(ContractError::Unavailable(
            "company settings integration is not configured".to_string(),
        ))
    }
}

/// Holiday source with no tenant overrides: national defaults apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidayOverrides;

#[async_trait]
impl HolidaySource for NoHolidayOverrides {
    async fn overrides_for_year(
        &self,
        _tenant_id: TenantId,
        _year: i32,
    ) -> Result<Vec<HolidayOverride>, ContractError> {
        Ok(Vec::new())
    }
}

/// Audit log that writes events to the structured log.
///
/// Fire-and-forget by construction: there is nothing here that can
/// fail, and a real delivery implementation is expected to swallow its
/// own errors the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn log(&self, event: AuditEvent) {
        match serde_json::to_string(&event.metadata) {
            Ok(metadata) => info!(
                tenant_id = %event.tenant_id,
                action = %event.action,
                entity_id = %event.entity_id,
                severity = ?event.severity,
                metadata = %metadata,
                "audit event"
            ),
            Err(e) => warn!(
                action = %event.action,
                error = %e,
                "audit event metadata failed to serialize"
            ),
        }
    }
}
