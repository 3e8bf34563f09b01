use crate::landing::domain::model::{
    enums::{
        landing_view::LandingView,
        tenant_resolution::{TenantResolution, TenantResolutionKind},
    },
    value_objects::{landing_render::LandingRender, navigation_route::NavigationRoute},
};

/// Landing view state machine.
///
/// Rendering is a pure function of the resolution passed in. Navigation to the
/// dashboard is emitted only on the transition from any non-resolved state (or
/// from nothing rendered yet) into `Resolved`, at most once for the lifetime of
/// the resolver, and never after `tear_down`.
#[derive(Clone, Debug)]
pub struct LandingResolver {
    dashboard_route: NavigationRoute,
    previous: Option<TenantResolutionKind>,
    navigated: bool,
    torn_down: bool,
}

impl LandingResolver {
    pub fn new() -> Self {
        Self::with_dashboard_route(NavigationRoute::dashboard())
    }

    pub fn with_dashboard_route(dashboard_route: NavigationRoute) -> Self {
        Self {
            dashboard_route,
            previous: None,
            navigated: false,
            torn_down: false,
        }
    }

    pub fn render(&mut self, resolution: &TenantResolution) -> LandingRender {
        let current = resolution.kind();
        let view = LandingView::for_resolution(resolution, &self.dashboard_route);
        let navigation = self.guard_navigation(current);
        self.previous = Some(current);

        LandingRender::new(view, navigation)
    }

    fn guard_navigation(&mut self, current: TenantResolutionKind) -> Option<NavigationRoute> {
        if self.torn_down || self.navigated || current != TenantResolutionKind::Resolved {
            return None;
        }
        if self.previous == Some(TenantResolutionKind::Resolved) {
            return None;
        }

        self.navigated = true;
        Some(self.dashboard_route.clone())
    }

    pub fn tear_down(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated
    }
}

impl Default for LandingResolver {
    fn default() -> Self {
        Self::new()
    }
}
