use std::collections::HashSet;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Normalized host of an incoming request: lowercase, no port, no trailing dot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestHost(String);

impl RequestHost {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let trimmed = value.trim();

        let without_port = if let Some(bracketed) = trimmed.strip_prefix('[') {
            // IPv6 literal, never carries a tenant
            let end = bracketed.find(']').ok_or(TenancyDomainError::InvalidHost)?;
            &trimmed[..end + 2]
        } else {
            trimmed.split(':').next().unwrap_or_default()
        };

        let normalized = without_port.trim_end_matches('.').to_lowercase();
        if normalized.is_empty() || normalized.contains(char::is_whitespace) {
            return Err(TenancyDomainError::InvalidHost);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Leftmost label of the host when it sits below `root_domain` and is not reserved.
    pub fn subdomain_label(
        &self,
        root_domain: &str,
        reserved_subdomains: &HashSet<String>,
    ) -> Option<String> {
        let prefix = self
            .0
            .strip_suffix(root_domain)?
            .strip_suffix('.')
            .filter(|prefix| !prefix.is_empty())?;

        let label = prefix.split('.').next()?;
        if reserved_subdomains.contains(label) {
            return None;
        }

        Some(label.to_string())
    }
}
