use async_trait::async_trait;

use crate::tenancy::domain::model::{entities::church::Church, value_objects::subdomain::Subdomain};

/// Short-lived memo of directory lookups, misses included.
#[async_trait]
pub trait TenantLookupCacheRepository: Send + Sync {
    /// `None` when nothing fresh is cached, `Some(None)` for a cached miss.
    async fn get(&self, subdomain: &Subdomain) -> Option<Option<Church>>;

    async fn put(&self, subdomain: &Subdomain, church: Option<Church>);
}
