use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError, value_objects::request_host::RequestHost,
};

#[derive(Clone, Debug)]
pub struct ResolveTenantQuery {
    host: RequestHost,
}

impl ResolveTenantQuery {
    pub fn new(host: String) -> Result<Self, TenancyDomainError> {
        Ok(Self {
            host: RequestHost::new(host)?,
        })
    }

    pub fn host(&self) -> &RequestHost {
        &self.host
    }
}
