//! Company settings collaborator contract.

use async_trait::async_trait;
use kontabil_shared::types::TenantId;
use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// Company details used on statutory return headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetails {
    /// Registered legal name.
    pub legal_name: String,
    /// Trading name, when different from the legal name.
    pub trading_name: Option<String>,
    /// Taxpayer identification number.
    pub tin_number: String,
    /// Registered address.
    pub registered_address: String,
}

/// Read-only access to tenant company settings.
#[async_trait]
pub trait CompanySettings: Send + Sync {
    /// Returns the tenant's company details.
    async fn company_details(&self, tenant_id: TenantId) -> Result<CompanyDetails, ContractError>;
}

#[async_trait]
impl<T> CompanySettings for std::sync::Arc<T>
where
    T: CompanySettings + ?Sized,
{
    async fn company_details(&self, tenant_id: TenantId) -> Result<CompanyDetails, ContractError> {
        (**self).company_details(tenant_id).await
    }
}
