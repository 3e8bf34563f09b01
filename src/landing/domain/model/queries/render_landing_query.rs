use crate::landing::domain::model::enums::landing_domain_error::LandingDomainError;

const MAX_HOST_LENGTH: usize = 253 + ":65535".len();

#[derive(Clone, Debug)]
pub struct RenderLandingQuery {
    host: String,
}

impl RenderLandingQuery {
    pub fn new(host: String) -> Result<Self, LandingDomainError> {
        let host = host.trim().to_string();
        if host.len() > MAX_HOST_LENGTH {
            return Err(LandingDomainError::InvalidHost);
        }
        Ok(Self { host })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
