use std::fmt;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

lazy_static::lazy_static! {
    static ref SUBDOMAIN_LABEL_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").expect("valid regex");
}

/// A single DNS label that addresses one church, e.g. `acme` in `acme.example.com`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Subdomain(String);

impl Subdomain {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let normalized = value.trim().to_lowercase();

        if !SUBDOMAIN_LABEL_REGEX.is_match(&normalized) {
            return Err(TenancyDomainError::InvalidSubdomain);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
