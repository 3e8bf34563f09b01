use crate::tenancy::domain::model::entities::church::Church;

/// Outcome of a finished lookup. `subdomain` is the raw label found in the host,
/// `church` is set only when that label belongs to an active church.
#[derive(Clone, Debug, Default)]
pub struct TenantLookup {
    church: Option<Church>,
    subdomain: Option<String>,
}

impl TenantLookup {
    pub fn without_subdomain() -> Self {
        Self::default()
    }

    pub fn unmatched(subdomain: String) -> Self {
        Self {
            church: None,
            subdomain: Some(subdomain),
        }
    }

    pub fn matched(church: Church) -> Self {
        Self {
            subdomain: Some(church.subdomain().value().to_string()),
            church: Some(church),
        }
    }

    pub fn church(&self) -> Option<&Church> {
        self.church.as_ref()
    }

    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }
}
