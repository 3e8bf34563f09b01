use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingDomainError {
    #[error("request host is too long")]
    InvalidHost,

    #[error("navigation route must be an absolute path")]
    InvalidNavigationRoute,

    #[error("tenant resolution ended before a final state was delivered")]
    ResolutionInterrupted,
}
