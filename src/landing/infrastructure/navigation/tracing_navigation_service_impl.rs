use crate::landing::{
    domain::model::value_objects::navigation_route::NavigationRoute,
    interfaces::acl::navigation_service::NavigationService,
};

/// Records navigation intents of server-rendered pages, where the HTTP redirect
/// itself performs the navigation.
#[derive(Default)]
pub struct TracingNavigationServiceImpl;

impl NavigationService for TracingNavigationServiceImpl {
    fn navigate(&self, route: &NavigationRoute) {
        tracing::info!(route = %route, "redirecting landing request");
    }
}
