use std::fmt;

use crate::landing::domain::model::enums::landing_domain_error::LandingDomainError;

const HOME: &str = "/";
const DASHBOARD: &str = "/dashboard";
const SIGN_IN: &str = "/auth/signin";
const REGISTER_CHURCH: &str = "/register-church";
const PRICING: &str = "/pricing";

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NavigationRoute(String);

impl NavigationRoute {
    pub fn new(value: String) -> Result<Self, LandingDomainError> {
        let trimmed = value.trim();
        if !trimmed.starts_with('/') || trimmed.starts_with("//") {
            return Err(LandingDomainError::InvalidNavigationRoute);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn home() -> Self {
        Self(HOME.to_string())
    }

    pub fn dashboard() -> Self {
        Self(DASHBOARD.to_string())
    }

    pub fn sign_in() -> Self {
        Self(SIGN_IN.to_string())
    }

    pub fn register_church() -> Self {
        Self(REGISTER_CHURCH.to_string())
    }

    pub fn pricing() -> Self {
        Self(PRICING.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
