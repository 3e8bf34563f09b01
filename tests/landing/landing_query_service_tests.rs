use std::time::Duration;

use church_landing_api::landing::{
    application::lifecycle::tenant_resolution_lifecycle::RESOLUTION_PANICKED_MESSAGE,
    domain::{
        model::{
            enums::{landing_domain_error::LandingDomainError, landing_view::LandingView},
            queries::render_landing_query::RenderLandingQuery,
            value_objects::{
                navigation_route::NavigationRoute,
                tenant_resolution_snapshot::TenantResolutionSnapshot,
            },
        },
        services::landing_query_service::LandingQueryService,
    },
};

use crate::support::{TENANT_HOST, create_panicking_query_harness, create_query_harness, tenant};

fn query(host: &str) -> RenderLandingQuery {
    RenderLandingQuery::new(host.to_string()).expect("valid query")
}

#[tokio::test]
async fn handle_render_navigates_to_dashboard_for_resolved_church() {
    let harness = create_query_harness(TenantResolutionSnapshot::resolved(tenant("t1")));

    let render = harness
        .service
        .handle_render(query(TENANT_HOST))
        .await
        .expect("render should settle");

    assert_eq!(render.navigation(), Some(&NavigationRoute::dashboard()));
    assert!(matches!(
        render.view(),
        LandingView::Redirecting { tenant, .. } if tenant.id() == "t1"
    ));
    assert_eq!(
        harness.navigation_service.routes(),
        vec!["/dashboard".to_string()]
    );
    assert_eq!(
        harness.resolution_service.hosts(),
        vec![TENANT_HOST.to_string()]
    );
}

#[tokio::test]
async fn handle_render_returns_settled_views_without_navigation() {
    let cases = [
        (TenantResolutionSnapshot::no_subdomain(), "welcome"),
        (
            TenantResolutionSnapshot::not_found("acme".to_string()),
            "tenant_not_found",
        ),
        (
            TenantResolutionSnapshot::failed("infrastructure error: db down".to_string()),
            "error",
        ),
    ];

    for (snapshot, expected_view) in cases {
        let harness = create_query_harness(snapshot);

        let render = harness
            .service
            .handle_render(query(TENANT_HOST))
            .await
            .expect("render should settle");

        assert_eq!(render.view().name(), expected_view);
        assert_eq!(render.navigation(), None);
        assert!(harness.navigation_service.routes().is_empty());
    }
}

#[test]
fn render_landing_query_rejects_oversized_hosts() {
    let host = format!("{}.igrejas.app", "a".repeat(300));

    assert!(matches!(
        RenderLandingQuery::new(host),
        Err(LandingDomainError::InvalidHost)
    ));
}

#[tokio::test]
async fn handle_render_settles_on_error_view_when_resolution_panics() {
    let (service, navigation_service) = create_panicking_query_harness();

    let render = tokio::time::timeout(
        Duration::from_secs(2),
        service.handle_render(query(TENANT_HOST)),
    )
    .await
    .expect("render should not hang")
    .expect("render should settle");

    assert!(matches!(
        render.view(),
        LandingView::ResolutionError { message, .. } if message == RESOLUTION_PANICKED_MESSAGE
    ));
    assert_eq!(render.navigation(), None);
    assert!(navigation_service.routes().is_empty());
}
