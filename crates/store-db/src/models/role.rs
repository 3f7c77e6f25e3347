//! User role database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for user_roles table
#[derive(Debug, Clone, FromRow)]
pub struct UserRoleModel {
    pub user_id: Uuid,
    pub role: String,
}
