use std::{collections::VecDeque, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use futures::{Stream, stream};
use tokio::sync::mpsc;

use crate::{
    landing::{
        application::lifecycle::{
            landing_view_driver::LandingViewDriver,
            tenant_resolution_lifecycle::TenantResolutionLifecycle,
        },
        domain::{
            model::{
                enums::{landing_domain_error::LandingDomainError, landing_view::LandingView},
                queries::render_landing_query::RenderLandingQuery,
                value_objects::navigation_route::NavigationRoute,
            },
            services::landing_query_service::LandingQueryService,
        },
        infrastructure::navigation::channel_navigation_service_impl::ChannelNavigationServiceImpl,
        interfaces::{
            acl::tenant_resolution_service::TenantResolutionService,
            rest::resources::{
                health_resource::HealthResource,
                landing_error_response_resource::LandingErrorResponseResource,
                landing_view_resource::LandingViewResource,
            },
            web::landing_html_renderer::landing_page_html,
        },
    },
    shared::interfaces::rest::request_host::request_host,
};

#[derive(Clone)]
pub struct LandingRestControllerState {
    pub query_service: Arc<dyn LandingQueryService>,
    pub resolution_service: Arc<dyn TenantResolutionService>,
}

pub fn router(state: LandingRestControllerState) -> Router {
    Router::new()
        .route("/", get(render_landing_page))
        .route("/landing/events", get(stream_landing_events))
        .route("/health", get(health))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "landing",
    params(
        ("host" = Option<String>, Header, description = "Host addressed by the client"),
        ("x-forwarded-host" = Option<String>, Header, description = "Host forwarded by the edge proxy")
    ),
    responses(
        (status = 200, description = "Welcome page", content_type = "text/html", body = String),
        (status = 303, description = "Church resolved; continue at the dashboard"),
        (status = 400, description = "Malformed host", body = LandingErrorResponseResource),
        (status = 404, description = "No church behind the subdomain", content_type = "text/html", body = String),
        (status = 503, description = "Tenant resolution failed", content_type = "text/html", body = String)
    )
)]
pub async fn render_landing_page(
    State(state): State<LandingRestControllerState>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, Json<LandingErrorResponseResource>)> {
    let query = RenderLandingQuery::new(request_host(&headers)).map_err(map_domain_error)?;

    let render = state
        .query_service
        .handle_render(query)
        .await
        .map_err(map_domain_error)?;

    if let Some(route) = render.navigation() {
        return Ok(Redirect::to(route.value()).into_response());
    }

    let status = match render.view() {
        LandingView::Loading | LandingView::Welcome(_) | LandingView::Redirecting { .. } => {
            StatusCode::OK
        }
        LandingView::TenantNotFound { .. } => StatusCode::NOT_FOUND,
        LandingView::ResolutionError { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };

    Ok((status, Html(landing_page_html(render.view()))).into_response())
}

#[utoipa::path(
    get,
    path = "/landing/events",
    tag = "landing",
    responses(
        (status = 200, description = "`view` events for every render, then at most one `navigate` event", content_type = "text/event-stream", body = LandingViewResource)
    )
)]
pub async fn stream_landing_events(
    State(state): State<LandingRestControllerState>,
    headers: HeaderMap,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let session = LandingEventSession::open(state.resolution_service.clone(), request_host(&headers));

    let events = stream::unfold(session, |mut session| async move {
        let event = session.next_event().await?;
        Some((event, session))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "landing",
    responses((status = 200, description = "Service is up", body = HealthResource))
)]
pub async fn health() -> Json<HealthResource> {
    Json(HealthResource {
        status: "ok".to_string(),
    })
}

/// One event-stream subscriber. Dropping it (client disconnect) aborts the
/// lookup and discards the driver, so nothing navigates afterwards.
struct LandingEventSession {
    _lifecycle: TenantResolutionLifecycle,
    driver: LandingViewDriver,
    navigations: mpsc::UnboundedReceiver<NavigationRoute>,
    queued: VecDeque<Result<Event, axum::Error>>,
    settled: bool,
}

impl LandingEventSession {
    fn open(resolution_service: Arc<dyn TenantResolutionService>, host: String) -> Self {
        let (lifecycle, receiver) = TenantResolutionLifecycle::start(resolution_service, host);
        let (navigation_service, navigations) = ChannelNavigationServiceImpl::channel();

        Self {
            _lifecycle: lifecycle,
            driver: LandingViewDriver::new(receiver, Arc::new(navigation_service)),
            navigations,
            queued: VecDeque::new(),
            settled: false,
        }
    }

    async fn next_event(&mut self) -> Option<Result<Event, axum::Error>> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Some(event);
            }
            if self.settled {
                return None;
            }

            let render = self.driver.next_render().await?;
            self.queued.push_back(
                Event::default()
                    .event("view")
                    .json_data(LandingViewResource::from(render.view())),
            );
            while let Ok(route) = self.navigations.try_recv() {
                self.queued
                    .push_back(Ok(Event::default().event("navigate").data(route.value())));
            }

            if !render.view().is_loading() {
                self.settled = true;
                self.driver.tear_down();
            }
        }
    }
}

fn map_domain_error(error: LandingDomainError) -> (StatusCode, Json<LandingErrorResponseResource>) {
    let status = match error {
        LandingDomainError::InvalidHost | LandingDomainError::InvalidNavigationRoute => {
            StatusCode::BAD_REQUEST
        }
        LandingDomainError::ResolutionInterrupted => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(LandingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
