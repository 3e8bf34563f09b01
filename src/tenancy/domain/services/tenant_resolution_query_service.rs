use async_trait::async_trait;

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError, queries::resolve_tenant_query::ResolveTenantQuery,
    value_objects::tenant_lookup::TenantLookup,
};

#[async_trait]
pub trait TenantResolutionQueryService: Send + Sync {
    async fn handle_resolve(
        &self,
        query: ResolveTenantQuery,
    ) -> Result<TenantLookup, TenancyDomainError>;
}
