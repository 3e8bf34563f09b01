use crate::landing::domain::model::{
    enums::tenant_resolution::TenantResolution, value_objects::resolved_tenant::ResolvedTenant,
};

/// Latest value published by the resolution service, field for field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TenantResolutionSnapshot {
    pub tenant: Option<ResolvedTenant>,
    pub subdomain: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl TenantResolutionSnapshot {
    pub fn pending() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn resolved(tenant: ResolvedTenant) -> Self {
        Self {
            subdomain: Some(tenant.subdomain().to_string()),
            tenant: Some(tenant),
            ..Self::default()
        }
    }

    pub fn no_subdomain() -> Self {
        Self::default()
    }

    pub fn not_found(subdomain: String) -> Self {
        Self {
            subdomain: Some(subdomain),
            ..Self::default()
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }

    /// Loading gates everything, then error, tenant, and finally the subdomain.
    pub fn to_resolution(&self) -> TenantResolution {
        if self.is_loading {
            return TenantResolution::Pending;
        }
        if let Some(message) = &self.error {
            return TenantResolution::Failed(message.clone());
        }
        if let Some(tenant) = &self.tenant {
            return TenantResolution::Resolved(tenant.clone());
        }
        match &self.subdomain {
            None => TenantResolution::NoSubdomain,
            Some(subdomain) => TenantResolution::NotFound(subdomain.clone()),
        }
    }
}
