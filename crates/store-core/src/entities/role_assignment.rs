//! Role assignment - a (user, role) row

use crate::value_objects::UserId;

/// Role name granting administrative access
pub const ADMIN_ROLE: &str = "admin";

/// Row of the role table. The presence of an admin row is the only admin signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub user_id: UserId,
    pub role: String,
}

impl RoleAssignment {
    pub fn new(user_id: UserId, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: role.into(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
