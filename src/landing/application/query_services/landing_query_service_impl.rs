use std::sync::Arc;

use async_trait::async_trait;

use crate::landing::{
    application::lifecycle::{
        landing_view_driver::LandingViewDriver, tenant_resolution_lifecycle::TenantResolutionLifecycle,
    },
    domain::{
        model::{
            enums::landing_domain_error::LandingDomainError,
            queries::render_landing_query::RenderLandingQuery,
            value_objects::landing_render::LandingRender,
        },
        services::landing_query_service::LandingQueryService,
    },
    interfaces::acl::{
        navigation_service::NavigationService, tenant_resolution_service::TenantResolutionService,
    },
};

pub struct LandingQueryServiceImpl {
    resolution_service: Arc<dyn TenantResolutionService>,
    navigation_service: Arc<dyn NavigationService>,
}

impl LandingQueryServiceImpl {
    pub fn new(
        resolution_service: Arc<dyn TenantResolutionService>,
        navigation_service: Arc<dyn NavigationService>,
    ) -> Self {
        Self {
            resolution_service,
            navigation_service,
        }
    }
}

#[async_trait]
impl LandingQueryService for LandingQueryServiceImpl {
    async fn handle_render(
        &self,
        query: RenderLandingQuery,
    ) -> Result<LandingRender, LandingDomainError> {
        let (_lifecycle, receiver) = TenantResolutionLifecycle::start(
            self.resolution_service.clone(),
            query.host().to_string(),
        );
        let mut driver = LandingViewDriver::new(receiver, self.navigation_service.clone());

        while let Some(render) = driver.next_render().await {
            if !render.view().is_loading() {
                driver.tear_down();
                return Ok(render);
            }
        }

        Err(LandingDomainError::ResolutionInterrupted)
    }
}
