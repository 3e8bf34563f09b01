use crate::landing::domain::model::value_objects::navigation_route::NavigationRoute;

/// Fire-and-forget navigation requests.
pub trait NavigationService: Send + Sync {
    fn navigate(&self, route: &NavigationRoute);
}
