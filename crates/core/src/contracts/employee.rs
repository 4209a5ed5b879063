//! Employee directory collaborator contract.

use async_trait::async_trait;
use chrono::NaiveDate;
use kontabil_shared::types::{EmployeeId, TenantId};
use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    /// Currently employed.
    Active,
    /// No longer employed.
    Inactive,
}

/// An employee as seen by the tax engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Tax residency: residents get the monthly wage threshold,
    /// non-residents are taxed from the first dollar.
    pub is_resident: bool,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Taxpayer identification number, when registered.
    pub tin: Option<String>,
}

impl Employee {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Read-only access to the employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns all employees of a tenant, any status.
    async fn employees(&self, tenant_id: TenantId) -> Result<Vec<Employee>, ContractError>;
}

#[async_trait]
impl<T> EmployeeDirectory for std::sync::Arc<T>
where
    T: EmployeeDirectory + ?Sized,
{
    async fn employees(&self, tenant_id: TenantId) -> Result<Vec<Employee>, ContractError> {
        (**self).employees(tenant_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let employee = Employee {
            id: EmployeeId::new(),
            first_name: "Maria".to_string(),
            last_name: "Soares".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            is_resident: true,
            status: EmployeeStatus::Active,
            tin: Some("1234567".to_string()),
        };
        assert_eq!(employee.full_name(), "Maria Soares");
    }
}
