use std::{collections::HashSet, sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::tenancy::{
    domain::{
        model::{
            enums::tenancy_domain_error::TenancyDomainError,
            queries::resolve_tenant_query::ResolveTenantQuery,
            value_objects::{subdomain::Subdomain, tenant_lookup::TenantLookup},
        },
        services::tenant_resolution_query_service::TenantResolutionQueryService,
    },
    infrastructure::persistence::repositories::{
        church_repository::ChurchRepository,
        tenant_lookup_cache_repository::TenantLookupCacheRepository,
    },
};

pub struct TenantResolutionQueryServiceImpl {
    church_repository: Arc<dyn ChurchRepository>,
    lookup_cache: Arc<dyn TenantLookupCacheRepository>,
    root_domain: String,
    reserved_subdomains: HashSet<String>,
    lookup_timeout: Duration,
}

impl TenantResolutionQueryServiceImpl {
    pub fn new(
        church_repository: Arc<dyn ChurchRepository>,
        lookup_cache: Arc<dyn TenantLookupCacheRepository>,
        root_domain: String,
        reserved_subdomains: HashSet<String>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            church_repository,
            lookup_cache,
            root_domain,
            reserved_subdomains,
            lookup_timeout,
        }
    }
}

#[async_trait]
impl TenantResolutionQueryService for TenantResolutionQueryServiceImpl {
    async fn handle_resolve(
        &self,
        query: ResolveTenantQuery,
    ) -> Result<TenantLookup, TenancyDomainError> {
        let Some(label) = query
            .host()
            .subdomain_label(&self.root_domain, &self.reserved_subdomains)
        else {
            return Ok(TenantLookup::without_subdomain());
        };

        // a label that can never be registered is still "present but unmatched"
        let Ok(subdomain) = Subdomain::new(label.clone()) else {
            return Ok(TenantLookup::unmatched(label));
        };

        let church = match self.lookup_cache.get(&subdomain).await {
            Some(cached) => {
                tracing::debug!(subdomain = %subdomain, "tenant lookup served from cache");
                cached
            }
            None => {
                let found = tokio::time::timeout(
                    self.lookup_timeout,
                    self.church_repository.find_by_subdomain(&subdomain),
                )
                .await
                .map_err(|_| TenancyDomainError::ResolutionTimedOut)??;

                self.lookup_cache.put(&subdomain, found.clone()).await;
                found
            }
        };

        match church {
            Some(church) if church.is_resolvable() => Ok(TenantLookup::matched(church)),
            Some(church) => {
                tracing::info!(
                    subdomain = %subdomain,
                    status = church.status().as_str(),
                    "church exists but is not resolvable"
                );
                Ok(TenantLookup::unmatched(label))
            }
            None => Ok(TenantLookup::unmatched(label)),
        }
    }
}
