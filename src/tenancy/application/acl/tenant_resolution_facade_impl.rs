use std::sync::Arc;

use async_trait::async_trait;

use crate::tenancy::{
    domain::{
        model::{
            enums::tenancy_domain_error::TenancyDomainError,
            queries::resolve_tenant_query::ResolveTenantQuery,
        },
        services::tenant_resolution_query_service::TenantResolutionQueryService,
    },
    interfaces::acl::tenant_resolution_facade::{
        ResolvedChurch, TenantResolutionFacade, TenantResolutionReport,
    },
};

pub struct TenantResolutionFacadeImpl {
    query_service: Arc<dyn TenantResolutionQueryService>,
}

impl TenantResolutionFacadeImpl {
    pub fn new(query_service: Arc<dyn TenantResolutionQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl TenantResolutionFacade for TenantResolutionFacadeImpl {
    async fn resolve_host(&self, host: &str) -> TenantResolutionReport {
        let query = match ResolveTenantQuery::new(host.to_string()) {
            Ok(query) => query,
            // no usable host means no tenant was addressed
            Err(TenancyDomainError::InvalidHost) => return TenantResolutionReport::default(),
            Err(error) => {
                return TenantResolutionReport {
                    error: Some(error.to_string()),
                    ..TenantResolutionReport::default()
                };
            }
        };

        match self.query_service.handle_resolve(query).await {
            Ok(lookup) => TenantResolutionReport {
                church: lookup.church().map(|church| ResolvedChurch {
                    church_id: church.id().value(),
                    subdomain: church.subdomain().value().to_string(),
                    display_name: church.display_name().to_string(),
                    created_at: church.created_at(),
                }),
                subdomain: lookup.subdomain().map(str::to_string),
                error: None,
            },
            Err(error) => {
                tracing::warn!(host, error = %error, "tenant resolution failed");
                TenantResolutionReport {
                    error: Some(error.to_string()),
                    ..TenantResolutionReport::default()
                }
            }
        }
    }
}
