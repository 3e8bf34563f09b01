use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedChurch {
    pub church_id: Uuid,
    pub subdomain: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// What the tenancy context reports about one host. Lookup failures are data here,
/// not an `Err`, so consumers can render them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TenantResolutionReport {
    pub church: Option<ResolvedChurch>,
    pub subdomain: Option<String>,
    pub error: Option<String>,
}

#[async_trait]
pub trait TenantResolutionFacade: Send + Sync {
    async fn resolve_host(&self, host: &str) -> TenantResolutionReport;
}
