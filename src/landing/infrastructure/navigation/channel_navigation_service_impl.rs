use tokio::sync::mpsc;

use crate::landing::{
    domain::model::value_objects::navigation_route::NavigationRoute,
    interfaces::acl::navigation_service::NavigationService,
};

/// Forwards navigation requests to whoever holds the receiving end, e.g. an
/// open event stream. Requests made after the receiver is gone are dropped.
pub struct ChannelNavigationServiceImpl {
    sender: mpsc::UnboundedSender<NavigationRoute>,
}

impl ChannelNavigationServiceImpl {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavigationRoute>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NavigationService for ChannelNavigationServiceImpl {
    fn navigate(&self, route: &NavigationRoute) {
        let _ = self.sender.send(route.clone());
    }
}
