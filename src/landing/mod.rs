use std::sync::Arc;

use axum::Router;

use crate::{
    landing::{
        application::{
            acl::tenant_resolution_service_real_impl::TenantResolutionServiceRealImpl,
            query_services::landing_query_service_impl::LandingQueryServiceImpl,
        },
        infrastructure::navigation::tracing_navigation_service_impl::TracingNavigationServiceImpl,
        interfaces::{
            acl::tenant_resolution_service::TenantResolutionService,
            rest::controllers::landing_rest_controller::{LandingRestControllerState, router},
        },
    },
    tenancy::interfaces::acl::tenant_resolution_facade::TenantResolutionFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_landing_router(resolution_facade: Arc<dyn TenantResolutionFacade>) -> Router {
    let resolution_service: Arc<dyn TenantResolutionService> =
        Arc::new(TenantResolutionServiceRealImpl::new(resolution_facade));
    let navigation_service = Arc::new(TracingNavigationServiceImpl);

    let query_service = Arc::new(LandingQueryServiceImpl::new(
        resolution_service.clone(),
        navigation_service,
    ));

    router(LandingRestControllerState {
        query_service,
        resolution_service,
    })
}
