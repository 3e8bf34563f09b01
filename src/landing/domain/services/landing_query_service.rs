use async_trait::async_trait;

use crate::landing::domain::model::{
    enums::landing_domain_error::LandingDomainError,
    queries::render_landing_query::RenderLandingQuery,
    value_objects::landing_render::LandingRender,
};

#[async_trait]
pub trait LandingQueryService: Send + Sync {
    /// Resolves the host and returns the first settled render of the landing view.
    async fn handle_render(
        &self,
        query: RenderLandingQuery,
    ) -> Result<LandingRender, LandingDomainError>;
}
