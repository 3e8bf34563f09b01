use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::{
    enums::{church_status::ChurchStatus, tenancy_domain_error::TenancyDomainError},
    value_objects::{church_id::ChurchId, subdomain::Subdomain},
};

#[derive(Clone, Debug)]
pub struct Church {
    id: ChurchId,
    subdomain: Subdomain,
    display_name: String,
    status: ChurchStatus,
    created_at: DateTime<Utc>,
}

impl Church {
    pub fn restore(
        id: ChurchId,
        subdomain: Subdomain,
        display_name: String,
        status: ChurchStatus,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TenancyDomainError> {
        let display_name = display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(TenancyDomainError::InvalidDisplayName);
        }

        Ok(Self {
            id,
            subdomain,
            display_name,
            status,
            created_at,
        })
    }

    pub fn is_resolvable(&self) -> bool {
        self.status == ChurchStatus::Active
    }

    pub fn id(&self) -> ChurchId {
        self.id
    }

    pub fn subdomain(&self) -> &Subdomain {
        &self.subdomain
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn status(&self) -> ChurchStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
