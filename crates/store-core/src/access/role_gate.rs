//! Role gate - is a user an admin

use tracing::{debug, warn};

use crate::entities::{RoleAssignment, ADMIN_ROLE};
use crate::traits::RoleRepository;
use crate::value_objects::UserId;

/// True iff one of `rows` grants `user_id` the admin role
pub fn is_admin_row(user_id: UserId, rows: &[RoleAssignment]) -> bool {
    rows.iter().any(|r| r.user_id == user_id && r.is_admin())
}

/// Look up whether a user is an admin.
///
/// Anonymous callers are never admins and cause no lookup. A failed lookup
/// counts as "not admin". The result is never cached.
pub async fn check_admin<R>(roles: &R, user_id: Option<UserId>) -> bool
where
    R: RoleRepository + ?Sized,
{
    let Some(user_id) = user_id else {
        return false;
    };

    match roles.find_role(user_id, ADMIN_ROLE).await {
        Ok(row) => {
            let is_admin = is_admin_row(user_id, row.as_slice());
            debug!(user_id = %user_id, is_admin, "Role lookup");
            is_admin
        }
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Role lookup failed, denying admin");
            false
        }
    }
}
