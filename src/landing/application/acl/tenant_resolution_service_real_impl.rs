use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    landing::{
        domain::model::value_objects::{
            resolved_tenant::ResolvedTenant, tenant_resolution_snapshot::TenantResolutionSnapshot,
        },
        interfaces::acl::tenant_resolution_service::TenantResolutionService,
    },
    tenancy::interfaces::acl::tenant_resolution_facade::TenantResolutionFacade,
};

pub struct TenantResolutionServiceRealImpl {
    facade: Arc<dyn TenantResolutionFacade>,
}

impl TenantResolutionServiceRealImpl {
    pub fn new(facade: Arc<dyn TenantResolutionFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl TenantResolutionService for TenantResolutionServiceRealImpl {
    async fn resolve(&self, host: &str) -> TenantResolutionSnapshot {
        let report = self.facade.resolve_host(host).await;

        TenantResolutionSnapshot {
            tenant: report.church.map(|church| {
                ResolvedTenant::new(
                    church.church_id.to_string(),
                    church.subdomain,
                    church.display_name,
                )
            }),
            subdomain: report.subdomain,
            is_loading: false,
            error: report.error,
        }
    }
}
