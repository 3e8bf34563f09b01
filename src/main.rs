use axum::Router;
use church_landing_api::{
    config::app_config::AppConfig,
    landing::{
        build_landing_router,
        interfaces::rest::resources::{
            health_resource::HealthResource,
            landing_error_response_resource::LandingErrorResponseResource,
            landing_view_resource::{
                LandingActionResource, LandingFeatureResource, LandingTenantResource,
                LandingViewResource,
            },
        },
    },
    shared::telemetry::init_tracing,
    tenancy::{
        build_tenancy_module,
        interfaces::rest::resources::{
            resolve_tenant_query_resource::ResolveTenantQueryResource,
            tenancy_error_response_resource::TenancyErrorResponseResource,
            tenant_resolution_resource::{ResolvedChurchResource, TenantResolutionResource},
        },
    },
};
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        church_landing_api::landing::interfaces::rest::controllers::landing_rest_controller::render_landing_page,
        church_landing_api::landing::interfaces::rest::controllers::landing_rest_controller::stream_landing_events,
        church_landing_api::landing::interfaces::rest::controllers::landing_rest_controller::health,
        church_landing_api::tenancy::interfaces::rest::controllers::tenancy_rest_controller::resolve_tenant
    ),
    components(
        schemas(
            LandingViewResource,
            LandingActionResource,
            LandingFeatureResource,
            LandingTenantResource,
            LandingErrorResponseResource,
            HealthResource,
            ResolveTenantQueryResource,
            TenantResolutionResource,
            ResolvedChurchResource,
            TenancyErrorResponseResource
        )
    ),
    tags(
        (name = "landing", description = "Landing page resolved per church subdomain"),
        (name = "tenancy", description = "Church resolution from the request host")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let tenancy_module = build_tenancy_module(&config)
        .await
        .expect("failed to build tenancy module");
    let landing_router = build_landing_router(tenancy_module.resolution_facade.clone());

    let app = Router::new()
        .merge(tenancy_module.router)
        .merge(landing_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        root_domain = %config.tenant_root_domain,
        "landing service listening; Swagger UI at /swagger-ui"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
