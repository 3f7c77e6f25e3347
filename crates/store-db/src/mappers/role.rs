//! Role assignment <-> model mapper

use store_core::entities::RoleAssignment;
use store_core::value_objects::UserId;

use crate::models::UserRoleModel;

/// Convert UserRoleModel to RoleAssignment entity
impl From<UserRoleModel> for RoleAssignment {
    fn from(model: UserRoleModel) -> Self {
        RoleAssignment {
            user_id: UserId::new(model.user_id),
            role: model.role,
        }
    }
}
