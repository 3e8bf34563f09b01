use async_trait::async_trait;

use crate::tenancy::domain::model::{
    entities::church::Church, enums::tenancy_domain_error::TenancyDomainError,
    value_objects::subdomain::Subdomain,
};

#[async_trait]
pub trait ChurchRepository: Send + Sync {
    async fn find_by_subdomain(
        &self,
        subdomain: &Subdomain,
    ) -> Result<Option<Church>, TenancyDomainError>;
}
