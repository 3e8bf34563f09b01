use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResolvedChurchResource {
    pub id: String,
    pub subdomain: String,
    pub display_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TenantResolutionResource {
    pub tenant: Option<ResolvedChurchResource>,
    pub subdomain: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}
