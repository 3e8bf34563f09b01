use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use church_landing_api::landing::{
    domain::model::value_objects::{
        navigation_route::NavigationRoute, tenant_resolution_snapshot::TenantResolutionSnapshot,
    },
    interfaces::acl::{
        navigation_service::NavigationService, tenant_resolution_service::TenantResolutionService,
    },
};
use tokio::sync::Notify;

struct FakeTenantResolutionState {
    snapshot: TenantResolutionSnapshot,
    hosts: Vec<String>,
}

pub struct FakeTenantResolutionService {
    state: Mutex<FakeTenantResolutionState>,
    gate: Option<Arc<Notify>>,
}

impl FakeTenantResolutionService {
    pub fn returning(snapshot: TenantResolutionSnapshot) -> Self {
        Self {
            state: Mutex::new(FakeTenantResolutionState {
                snapshot,
                hosts: Vec::new(),
            }),
            gate: None,
        }
    }

    /// Each resolution waits for one `notify_one` on the returned gate.
    pub fn gated(snapshot: TenantResolutionSnapshot) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut service = Self::returning(snapshot);
        service.gate = Some(gate.clone());
        (service, gate)
    }

    pub fn set_snapshot(&self, snapshot: TenantResolutionSnapshot) {
        self.state.lock().expect("mutex poisoned").snapshot = snapshot;
    }

    pub fn hosts(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").hosts.clone()
    }
}

#[async_trait]
impl TenantResolutionService for FakeTenantResolutionService {
    async fn resolve(&self, host: &str) -> TenantResolutionSnapshot {
        self.state
            .lock()
            .expect("mutex poisoned")
            .hosts
            .push(host.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.state.lock().expect("mutex poisoned").snapshot.clone()
    }
}

/// Every lookup panics, as a crashed directory client would.
pub struct PanickingTenantResolutionService;

#[async_trait]
impl TenantResolutionService for PanickingTenantResolutionService {
    async fn resolve(&self, host: &str) -> TenantResolutionSnapshot {
        panic!("directory client crashed while resolving {host}");
    }
}

#[derive(Default)]
pub struct RecordingNavigationService {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigationService {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("mutex poisoned").clone()
    }
}

impl NavigationService for RecordingNavigationService {
    fn navigate(&self, route: &NavigationRoute) {
        self.routes
            .lock()
            .expect("mutex poisoned")
            .push(route.value().to_string());
    }
}
