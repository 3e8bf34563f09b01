use std::{collections::HashSet, time::Duration};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub tenant_root_domain: String,
    pub tenant_reserved_subdomains: HashSet<String>,
    pub tenant_resolution_timeout_ms: u64,
    pub tenant_cache_ttl_seconds: u64,
    pub tenant_cache_max_entries: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "church_saas".to_string()),
            tenant_root_domain: std::env::var("TENANT_ROOT_DOMAIN")
                .map(|raw| raw.trim().trim_end_matches('.').to_lowercase())
                .unwrap_or_else(|_| "localhost".to_string()),
            tenant_reserved_subdomains: read_reserved_subdomains(),
            tenant_resolution_timeout_ms: std::env::var("TENANT_RESOLUTION_TIMEOUT_MS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(5000),
            tenant_cache_ttl_seconds: std::env::var("TENANT_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(60),
            tenant_cache_max_entries: std::env::var("TENANT_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(10_000),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn tenant_resolution_timeout(&self) -> Duration {
        Duration::from_millis(self.tenant_resolution_timeout_ms)
    }

    pub fn tenant_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.tenant_cache_ttl_seconds)
    }
}

fn read_reserved_subdomains() -> HashSet<String> {
    std::env::var("TENANT_RESERVED_SUBDOMAINS")
        .ok()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect::<HashSet<_>>()
        })
        .unwrap_or_else(|| HashSet::from(["www".to_string()]))
}
