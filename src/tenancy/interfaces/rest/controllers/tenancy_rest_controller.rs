use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use validator::Validate;

use crate::{
    shared::interfaces::rest::request_host::request_host,
    tenancy::interfaces::{
        acl::tenant_resolution_facade::{TenantResolutionFacade, TenantResolutionReport},
        rest::resources::{
            resolve_tenant_query_resource::ResolveTenantQueryResource,
            tenancy_error_response_resource::TenancyErrorResponseResource,
            tenant_resolution_resource::{ResolvedChurchResource, TenantResolutionResource},
        },
    },
};

#[derive(Clone)]
pub struct TenancyRestControllerState {
    pub resolution_facade: Arc<dyn TenantResolutionFacade>,
}

pub fn router(state: TenancyRestControllerState) -> Router {
    Router::new()
        .route("/tenancy/resolution", get(resolve_tenant))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/tenancy/resolution",
    tag = "tenancy",
    params(
        ResolveTenantQueryResource,
        ("x-forwarded-host" = Option<String>, Header, description = "Host forwarded by the edge proxy")
    ),
    responses(
        (status = 200, description = "Resolution snapshot for the host", body = TenantResolutionResource),
        (status = 400, description = "Invalid host override", body = TenancyErrorResponseResource)
    )
)]
pub async fn resolve_tenant(
    State(state): State<TenancyRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ResolveTenantQueryResource>,
) -> Result<Json<TenantResolutionResource>, (StatusCode, Json<TenancyErrorResponseResource>)> {
    if let Err(validation_error) = query.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(TenancyErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let host = query.host.unwrap_or_else(|| request_host(&headers));
    let report = state.resolution_facade.resolve_host(&host).await;

    Ok(Json(to_resource(report)))
}

fn to_resource(report: TenantResolutionReport) -> TenantResolutionResource {
    TenantResolutionResource {
        tenant: report.church.map(|church| ResolvedChurchResource {
            id: church.church_id.to_string(),
            subdomain: church.subdomain,
            display_name: church.display_name,
            created_at: church.created_at.to_rfc3339(),
        }),
        subdomain: report.subdomain,
        is_loading: false,
        error: report.error,
    }
}
