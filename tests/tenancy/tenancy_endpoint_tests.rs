use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use church_landing_api::tenancy::{
    domain::model::{entities::church::Church, enums::church_status::ChurchStatus},
    interfaces::rest::{
        controllers::tenancy_rest_controller::{TenancyRestControllerState, resolve_tenant},
        resources::resolve_tenant_query_resource::ResolveTenantQueryResource,
    },
};

use crate::support::{church_with_status, create_harness};

fn state_with(entries: Vec<Church>) -> TenancyRestControllerState {
    let harness = create_harness(entries);
    TenancyRestControllerState {
        resolution_facade: Arc::new(harness.facade),
    }
}

fn headers_for(host: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("host", HeaderValue::from_static(host));
    headers
}

#[tokio::test]
async fn resolve_tenant_uses_request_host() {
    let church = church_with_status("acme", ChurchStatus::Active);
    let created_at = church.created_at().to_rfc3339();
    let state = state_with(vec![church]);

    let Json(resource) = resolve_tenant(
        State(state),
        headers_for("acme.igrejas.app"),
        Query(ResolveTenantQueryResource { host: None }),
    )
    .await
    .expect("resolution endpoint should succeed");

    let tenant = resource.tenant.expect("tenant should resolve");
    assert_eq!(tenant.subdomain, "acme");
    assert_eq!(tenant.created_at, created_at);
    assert_eq!(resource.subdomain.as_deref(), Some("acme"));
    assert!(!resource.is_loading);
    assert_eq!(resource.error, None);
}

#[tokio::test]
async fn resolve_tenant_prefers_host_override() {
    let state = state_with(vec![]);

    let Json(resource) = resolve_tenant(
        State(state),
        headers_for("igrejas.app"),
        Query(ResolveTenantQueryResource {
            host: Some("ghost.igrejas.app".to_string()),
        }),
    )
    .await
    .expect("resolution endpoint should succeed");

    assert!(resource.tenant.is_none());
    assert_eq!(resource.subdomain.as_deref(), Some("ghost"));
}

#[tokio::test]
async fn resolve_tenant_rejects_empty_host_override() {
    let state = state_with(vec![]);

    let result = resolve_tenant(
        State(state),
        HeaderMap::new(),
        Query(ResolveTenantQueryResource {
            host: Some(String::new()),
        }),
    )
    .await;

    let Err((status, _)) = result else {
        panic!("empty host override should be rejected");
    };
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
