use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveTenantQueryResource {
    /// Overrides the request host, e.g. `acme.example.com`.
    #[validate(length(min = 1, max = 253))]
    pub host: Option<String>,
}
