use std::sync::Arc;

use tokio::sync::watch;

use crate::landing::{
    domain::model::{
        entities::landing_resolver::LandingResolver,
        value_objects::{
            landing_render::LandingRender, tenant_resolution_snapshot::TenantResolutionSnapshot,
        },
    },
    interfaces::acl::navigation_service::NavigationService,
};

/// Re-renders the landing view whenever a new resolution value is delivered and
/// forwards the resolver's navigation intents to the navigation port.
pub struct LandingViewDriver {
    receiver: watch::Receiver<TenantResolutionSnapshot>,
    resolver: LandingResolver,
    navigation_service: Arc<dyn NavigationService>,
    rendered_once: bool,
}

impl LandingViewDriver {
    pub fn new(
        receiver: watch::Receiver<TenantResolutionSnapshot>,
        navigation_service: Arc<dyn NavigationService>,
    ) -> Self {
        Self {
            receiver,
            resolver: LandingResolver::new(),
            navigation_service,
            rendered_once: false,
        }
    }

    /// Renders the latest delivered value, whether or not it changed.
    pub fn render_current(&mut self) -> LandingRender {
        self.rendered_once = true;
        let snapshot = self.receiver.borrow_and_update().clone();
        let render = self.resolver.render(&snapshot.to_resolution());

        if let Some(route) = render.navigation() {
            tracing::debug!(route = %route, "landing view navigating");
            self.navigation_service.navigate(route);
        }

        render
    }

    /// First call renders immediately; later calls wait for the next delivered
    /// value. `None` once torn down or when the publisher is gone.
    pub async fn next_render(&mut self) -> Option<LandingRender> {
        if self.resolver.is_torn_down() {
            return None;
        }
        if !self.rendered_once {
            return Some(self.render_current());
        }
        if self.receiver.changed().await.is_err() {
            return None;
        }

        Some(self.render_current())
    }

    pub fn tear_down(&mut self) {
        self.resolver.tear_down();
    }
}
