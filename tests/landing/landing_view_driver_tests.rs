use std::{sync::Arc, time::Duration};

use church_landing_api::landing::{
    application::lifecycle::{
        landing_view_driver::LandingViewDriver,
        tenant_resolution_lifecycle::TenantResolutionLifecycle,
    },
    domain::model::{
        enums::landing_view::LandingView,
        value_objects::{
            navigation_route::NavigationRoute, tenant_resolution_snapshot::TenantResolutionSnapshot,
        },
    },
};

use crate::support::{
    TENANT_HOST,
    fakes::{FakeTenantResolutionService, RecordingNavigationService},
    settle, tenant,
};

async fn wait_until_delivered(lifecycle: &TenantResolutionLifecycle) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while lifecycle.is_resolving() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("resolution should finish");
}

#[tokio::test]
async fn driver_renders_loading_then_navigates_once_when_resolved() {
    let (service, gate) =
        FakeTenantResolutionService::gated(TenantResolutionSnapshot::resolved(tenant("t1")));
    let service = Arc::new(service);
    let navigation = Arc::new(RecordingNavigationService::default());
    let (_lifecycle, receiver) =
        TenantResolutionLifecycle::start(service.clone(), TENANT_HOST.to_string());
    let mut driver = LandingViewDriver::new(receiver, navigation.clone());

    let first = driver.next_render().await.expect("initial render");
    assert_eq!(first.view(), &LandingView::Loading);
    assert_eq!(first.navigation(), None);

    gate.notify_one();
    let resolved = settle(&mut driver).await;
    assert_eq!(resolved.navigation(), Some(&NavigationRoute::dashboard()));

    let rerender = driver.render_current();
    assert_eq!(rerender.navigation(), None);
    assert_eq!(navigation.routes(), vec!["/dashboard".to_string()]);
    assert_eq!(service.hosts(), vec![TENANT_HOST.to_string()]);
}

#[tokio::test]
async fn teardown_before_resolution_prevents_navigation() {
    let (service, gate) =
        FakeTenantResolutionService::gated(TenantResolutionSnapshot::resolved(tenant("t1")));
    let navigation = Arc::new(RecordingNavigationService::default());
    let (lifecycle, receiver) =
        TenantResolutionLifecycle::start(Arc::new(service), TENANT_HOST.to_string());
    let mut driver = LandingViewDriver::new(receiver, navigation.clone());

    driver.next_render().await.expect("initial render");
    driver.tear_down();
    gate.notify_one();
    wait_until_delivered(&lifecycle).await;

    assert!(driver.next_render().await.is_none());
    let late = driver.render_current();
    assert!(matches!(late.view(), LandingView::Redirecting { .. }));
    assert_eq!(late.navigation(), None);
    assert!(navigation.routes().is_empty());
}

#[tokio::test]
async fn retry_resolves_again_from_scratch() {
    let service = Arc::new(FakeTenantResolutionService::returning(
        TenantResolutionSnapshot::failed("tenant resolution timed out".to_string()),
    ));
    let navigation = Arc::new(RecordingNavigationService::default());
    let (mut lifecycle, receiver) =
        TenantResolutionLifecycle::start(service.clone(), TENANT_HOST.to_string());
    let mut driver = LandingViewDriver::new(receiver, navigation.clone());

    let failed = settle(&mut driver).await;
    assert!(matches!(
        failed.view(),
        LandingView::ResolutionError { message, .. } if message == "tenant resolution timed out"
    ));
    assert!(navigation.routes().is_empty());

    service.set_snapshot(TenantResolutionSnapshot::resolved(tenant("t1")));
    lifecycle.retry();
    let resolved = settle(&mut driver).await;

    assert_eq!(resolved.navigation(), Some(&NavigationRoute::dashboard()));
    assert_eq!(navigation.routes(), vec!["/dashboard".to_string()]);
    assert_eq!(service.hosts().len(), 2);
}

#[tokio::test]
async fn retry_after_navigation_does_not_navigate_again() {
    let service = Arc::new(FakeTenantResolutionService::returning(
        TenantResolutionSnapshot::resolved(tenant("t1")),
    ));
    let navigation = Arc::new(RecordingNavigationService::default());
    let (mut lifecycle, receiver) =
        TenantResolutionLifecycle::start(service.clone(), TENANT_HOST.to_string());
    let mut driver = LandingViewDriver::new(receiver, navigation.clone());

    settle(&mut driver).await;
    lifecycle.retry();
    let again = settle(&mut driver).await;

    assert_eq!(again.navigation(), None);
    assert_eq!(navigation.routes().len(), 1);
}

#[tokio::test]
async fn dropping_lifecycle_ends_the_driver_without_navigation() {
    let (service, _gate) =
        FakeTenantResolutionService::gated(TenantResolutionSnapshot::resolved(tenant("t1")));
    let navigation = Arc::new(RecordingNavigationService::default());
    let (lifecycle, receiver) =
        TenantResolutionLifecycle::start(Arc::new(service), TENANT_HOST.to_string());
    let mut driver = LandingViewDriver::new(receiver, navigation.clone());

    driver.next_render().await.expect("initial render");
    drop(lifecycle);

    let next = tokio::time::timeout(Duration::from_secs(1), driver.next_render())
        .await
        .expect("driver should observe the closed channel");
    assert!(next.is_none());
    assert!(navigation.routes().is_empty());
}
