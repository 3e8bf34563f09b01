use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use crate::tenancy::{
    domain::model::{
        entities::church::Church,
        enums::{church_status::ChurchStatus, tenancy_domain_error::TenancyDomainError},
        value_objects::{church_id::ChurchId, subdomain::Subdomain},
    },
    infrastructure::persistence::repositories::church_repository::ChurchRepository,
};

pub struct SqlxChurchRepositoryImpl {
    pool: PgPool,
}

impl SqlxChurchRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Church, TenancyDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let subdomain_raw: String = row.try_get("subdomain").map_err(map_infra_error)?;
        let display_name: String = row.try_get("display_name").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let status = ChurchStatus::from_str(&status_raw).map_err(|_| {
            TenancyDomainError::InfrastructureError("unknown church status stored".to_string())
        })?;

        Church::restore(
            ChurchId::from_uuid(id),
            Subdomain::new(subdomain_raw)?,
            display_name,
            status,
            created_at,
        )
    }
}

#[async_trait]
impl ChurchRepository for SqlxChurchRepositoryImpl {
    async fn find_by_subdomain(
        &self,
        subdomain: &Subdomain,
    ) -> Result<Option<Church>, TenancyDomainError> {
        let statement = r#"
            SELECT id, subdomain, display_name, status, created_at
            FROM churches
            WHERE subdomain = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(subdomain.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }
}

fn map_infra_error(error: sqlx::Error) -> TenancyDomainError {
    TenancyDomainError::InfrastructureError(error.to_string())
}
