use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    config::app_config::AppConfig,
    tenancy::{
        application::{
            acl::tenant_resolution_facade_impl::TenantResolutionFacadeImpl,
            query_services::tenant_resolution_query_service_impl::TenantResolutionQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            in_memory::in_memory_tenant_lookup_cache_repository_impl::InMemoryTenantLookupCacheRepositoryImpl,
            postgres::sqlx_church_repository_impl::SqlxChurchRepositoryImpl,
        },
        interfaces::{
            acl::tenant_resolution_facade::TenantResolutionFacade,
            rest::controllers::tenancy_rest_controller::{TenancyRestControllerState, router},
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub struct TenancyModule {
    pub router: Router,
    pub resolution_facade: Arc<dyn TenantResolutionFacade>,
}

pub async fn build_tenancy_module(config: &AppConfig) -> Result<TenancyModule, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let church_repository = Arc::new(SqlxChurchRepositoryImpl::new(pool));
    let lookup_cache = Arc::new(InMemoryTenantLookupCacheRepositoryImpl::new(
        config.tenant_cache_ttl(),
        config.tenant_cache_max_entries,
    ));

    let query_service = Arc::new(TenantResolutionQueryServiceImpl::new(
        church_repository,
        lookup_cache,
        config.tenant_root_domain.clone(),
        config.tenant_reserved_subdomains.clone(),
        config.tenant_resolution_timeout(),
    ));
    let resolution_facade: Arc<dyn TenantResolutionFacade> =
        Arc::new(TenantResolutionFacadeImpl::new(query_service));

    Ok(TenancyModule {
        router: router(TenancyRestControllerState {
            resolution_facade: resolution_facade.clone(),
        }),
        resolution_facade,
    })
}
