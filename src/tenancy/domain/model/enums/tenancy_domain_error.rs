use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyDomainError {
    #[error("request host is missing or malformed")]
    InvalidHost,

    #[error("subdomain is invalid; use [a-z0-9-] and length 1..63")]
    InvalidSubdomain,

    #[error("church display name is required")]
    InvalidDisplayName,

    #[error("tenant resolution timed out")]
    ResolutionTimedOut,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
