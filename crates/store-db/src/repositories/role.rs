//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::RoleAssignment;
use store_core::traits::{RepoResult, RoleRepository};
use store_core::value_objects::UserId;

use crate::models::UserRoleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn find_role(&self, user_id: UserId, role: &str) -> RepoResult<Option<RoleAssignment>> {
        let result = sqlx::query_as::<_, UserRoleModel>(
            r"
            SELECT user_id, role
            FROM user_roles
            WHERE user_id = $1 AND role = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RoleAssignment::from))
    }
}
