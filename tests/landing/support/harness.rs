use std::{sync::Arc, time::Duration};

use church_landing_api::landing::{
    application::{
        lifecycle::landing_view_driver::LandingViewDriver,
        query_services::landing_query_service_impl::LandingQueryServiceImpl,
    },
    domain::model::value_objects::{
        landing_render::LandingRender, tenant_resolution_snapshot::TenantResolutionSnapshot,
    },
    interfaces::{
        acl::tenant_resolution_service::TenantResolutionService,
        rest::controllers::landing_rest_controller::LandingRestControllerState,
    },
};

use super::fakes::{
    FakeTenantResolutionService, PanickingTenantResolutionService, RecordingNavigationService,
};

pub struct LandingQueryHarness {
    pub resolution_service: Arc<FakeTenantResolutionService>,
    pub navigation_service: Arc<RecordingNavigationService>,
    pub service: LandingQueryServiceImpl,
}

pub fn create_query_harness(snapshot: TenantResolutionSnapshot) -> LandingQueryHarness {
    let resolution_service = Arc::new(FakeTenantResolutionService::returning(snapshot));
    let navigation_service = Arc::new(RecordingNavigationService::default());

    let service =
        LandingQueryServiceImpl::new(resolution_service.clone(), navigation_service.clone());

    LandingQueryHarness {
        resolution_service,
        navigation_service,
        service,
    }
}

pub fn create_endpoint_state(snapshot: TenantResolutionSnapshot) -> LandingRestControllerState {
    let harness = create_query_harness(snapshot);

    LandingRestControllerState {
        query_service: Arc::new(harness.service),
        resolution_service: harness.resolution_service,
    }
}

pub fn create_panicking_query_harness() -> (LandingQueryServiceImpl, Arc<RecordingNavigationService>) {
    let navigation_service = Arc::new(RecordingNavigationService::default());
    let service = LandingQueryServiceImpl::new(
        Arc::new(PanickingTenantResolutionService),
        navigation_service.clone(),
    );

    (service, navigation_service)
}

pub fn create_panicking_endpoint_state() -> LandingRestControllerState {
    let resolution_service: Arc<dyn TenantResolutionService> =
        Arc::new(PanickingTenantResolutionService);
    let (service, _) = create_panicking_query_harness();

    LandingRestControllerState {
        query_service: Arc::new(service),
        resolution_service,
    }
}

/// Renders until the view leaves the loading state.
pub async fn settle(driver: &mut LandingViewDriver) -> LandingRender {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            let render = driver.next_render().await.expect("publisher still alive");
            if !render.view().is_loading() {
                return render;
            }
        }
    })
    .await
    .expect("resolution should settle")
}
