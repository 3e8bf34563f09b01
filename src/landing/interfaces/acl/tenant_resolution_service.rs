use async_trait::async_trait;

use crate::landing::domain::model::value_objects::tenant_resolution_snapshot::TenantResolutionSnapshot;

/// Port to whoever maps a host to a church. Never reports `is_loading`; the
/// lifecycle publishes the pending state itself.
#[async_trait]
pub trait TenantResolutionService: Send + Sync {
    async fn resolve(&self, host: &str) -> TenantResolutionSnapshot;
}
