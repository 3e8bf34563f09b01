use crate::landing::domain::model::{
    enums::tenant_resolution::TenantResolution,
    value_objects::{
        marketing_content::MarketingContent, navigation_route::NavigationRoute,
        resolved_tenant::ResolvedTenant,
    },
};

/// Exactly one of these is shown for any resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LandingView {
    Loading,
    ResolutionError {
        message: String,
        retry_route: NavigationRoute,
    },
    Redirecting {
        tenant: ResolvedTenant,
        target: NavigationRoute,
    },
    Welcome(MarketingContent),
    TenantNotFound {
        subdomain: String,
        home_route: NavigationRoute,
    },
}

impl LandingView {
    pub fn for_resolution(resolution: &TenantResolution, dashboard_route: &NavigationRoute) -> Self {
        match resolution {
            TenantResolution::Pending => Self::Loading,
            TenantResolution::Failed(message) => Self::ResolutionError {
                message: message.clone(),
                // a reload of the landing route resolves from scratch
                retry_route: NavigationRoute::home(),
            },
            TenantResolution::Resolved(tenant) => Self::Redirecting {
                tenant: tenant.clone(),
                target: dashboard_route.clone(),
            },
            TenantResolution::NoSubdomain => Self::Welcome(MarketingContent::church_saas()),
            TenantResolution::NotFound(subdomain) => Self::TenantNotFound {
                subdomain: subdomain.clone(),
                home_route: NavigationRoute::home(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::ResolutionError { .. } => "error",
            Self::Redirecting { .. } => "redirecting",
            Self::Welcome(_) => "welcome",
            Self::TenantNotFound { .. } => "tenant_not_found",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
