use crate::landing::domain::model::value_objects::resolved_tenant::ResolvedTenant;

/// The one state the landing view reads per render.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TenantResolution {
    Pending,
    Resolved(ResolvedTenant),
    NoSubdomain,
    NotFound(String),
    Failed(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TenantResolutionKind {
    Pending,
    Resolved,
    NoSubdomain,
    NotFound,
    Failed,
}

impl TenantResolution {
    pub fn kind(&self) -> TenantResolutionKind {
        match self {
            Self::Pending => TenantResolutionKind::Pending,
            Self::Resolved(_) => TenantResolutionKind::Resolved,
            Self::NoSubdomain => TenantResolutionKind::NoSubdomain,
            Self::NotFound(_) => TenantResolutionKind::NotFound,
            Self::Failed(_) => TenantResolutionKind::Failed,
        }
    }
}

impl TenantResolutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::NoSubdomain => "no_subdomain",
            Self::NotFound => "not_found",
            Self::Failed => "failed",
        }
    }
}
