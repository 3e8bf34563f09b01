use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::{sync::watch, task::JoinHandle};

use crate::landing::{
    domain::model::value_objects::tenant_resolution_snapshot::TenantResolutionSnapshot,
    interfaces::acl::tenant_resolution_service::TenantResolutionService,
};

pub const RESOLUTION_PANICKED_MESSAGE: &str = "tenant resolution stopped unexpectedly";

/// Owns obtaining the resolution for one page view and publishes every value on
/// a watch channel: single writer here, single reader in the view driver.
pub struct TenantResolutionLifecycle {
    resolution_service: Arc<dyn TenantResolutionService>,
    host: String,
    sender: Arc<watch::Sender<TenantResolutionSnapshot>>,
    in_flight: Option<JoinHandle<()>>,
}

impl TenantResolutionLifecycle {
    pub fn start(
        resolution_service: Arc<dyn TenantResolutionService>,
        host: String,
    ) -> (Self, watch::Receiver<TenantResolutionSnapshot>) {
        let (sender, receiver) = watch::channel(TenantResolutionSnapshot::pending());
        let mut lifecycle = Self {
            resolution_service,
            host,
            sender: Arc::new(sender),
            in_flight: None,
        };
        lifecycle.spawn_resolution();

        (lifecycle, receiver)
    }

    /// Drops whatever is in flight and resolves again from scratch.
    pub fn retry(&mut self) {
        self.abort_in_flight();
        self.sender.send_replace(TenantResolutionSnapshot::pending());
        self.spawn_resolution();
    }

    pub fn is_resolving(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn spawn_resolution(&mut self) {
        let resolution_service = self.resolution_service.clone();
        let sender = self.sender.clone();
        let host = self.host.clone();

        self.in_flight = Some(tokio::spawn(async move {
            // A panicking lookup must still settle the view.
            let snapshot = AssertUnwindSafe(resolution_service.resolve(&host))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    tracing::error!(host = %host, "tenant resolution panicked");
                    TenantResolutionSnapshot::failed(RESOLUTION_PANICKED_MESSAGE.to_string())
                });
            tracing::debug!(
                host = %host,
                resolution = snapshot.to_resolution().kind().as_str(),
                "tenant resolution delivered"
            );
            sender.send_replace(snapshot);
        }));
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for TenantResolutionLifecycle {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
