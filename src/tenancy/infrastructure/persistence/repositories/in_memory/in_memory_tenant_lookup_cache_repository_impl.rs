use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::tenancy::{
    domain::model::{entities::church::Church, value_objects::subdomain::Subdomain},
    infrastructure::persistence::repositories::tenant_lookup_cache_repository::TenantLookupCacheRepository,
};

struct CachedLookup {
    church: Option<Church>,
    stored_at: Instant,
}

/// Keys come from client-supplied hosts, so the map is bounded: once it holds
/// `max_entries`, expired lookups are pruned and then the oldest one evicted.
pub struct InMemoryTenantLookupCacheRepositoryImpl {
    entries: Arc<RwLock<HashMap<String, CachedLookup>>>,
    ttl: Duration,
    max_entries: usize,
}

impl InMemoryTenantLookupCacheRepositoryImpl {
    /// A zero `ttl` or `max_entries` disables caching.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_entries,
        }
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    fn is_disabled(&self) -> bool {
        self.ttl.is_zero() || self.max_entries == 0
    }
}

#[async_trait]
impl TenantLookupCacheRepository for InMemoryTenantLookupCacheRepositoryImpl {
    async fn get(&self, subdomain: &Subdomain) -> Option<Option<Church>> {
        if self.is_disabled() {
            return None;
        }

        {
            let read_guard = self.entries.read().await;
            match read_guard.get(subdomain.value()) {
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.church.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        let mut write_guard = self.entries.write().await;
        if let Some(entry) = write_guard.get(subdomain.value()) {
            if entry.stored_at.elapsed() < self.ttl {
                return Some(entry.church.clone());
            }
        }
        write_guard.remove(subdomain.value());
        None
    }

    async fn put(&self, subdomain: &Subdomain, church: Option<Church>) {
        if self.is_disabled() {
            return;
        }

        let mut write_guard = self.entries.write().await;
        if write_guard.len() >= self.max_entries && !write_guard.contains_key(subdomain.value()) {
            let ttl = self.ttl;
            write_guard.retain(|_, entry| entry.stored_at.elapsed() < ttl);

            if write_guard.len() >= self.max_entries {
                let oldest = write_guard
                    .iter()
                    .min_by_key(|(_, entry)| entry.stored_at)
                    .map(|(key, _)| key.clone());
                if let Some(key) = oldest {
                    write_guard.remove(&key);
                }
            }
        }

        write_guard.insert(
            subdomain.value().to_string(),
            CachedLookup {
                church,
                stored_at: Instant::now(),
            },
        );
    }
}
