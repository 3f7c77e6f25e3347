//! Ownership filter - who may change a comment or rating

use crate::value_objects::UserId;

/// The caller of a mutating operation, with an authoritatively looked-up role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actor {
    pub user_id: Option<UserId>,
    pub is_admin: bool,
}

impl Actor {
    pub const ANONYMOUS: Self = Self {
        user_id: None,
        is_admin: false,
    };

    pub fn new(user_id: UserId, is_admin: bool) -> Self {
        Self {
            user_id: Some(user_id),
            is_admin,
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    #[inline]
    pub fn is_author(&self, author_id: UserId) -> bool {
        self.user_id == Some(author_id)
    }
}

/// Delete permission: the author, or any admin. Anonymous actors never.
pub fn can_modify(actor: &Actor, author_id: UserId) -> bool {
    actor.is_authenticated() && (actor.is_author(author_id) || actor.is_admin)
}

/// Edit permission: the author only
pub fn can_edit(actor: &Actor, author_id: UserId) -> bool {
    actor.is_author(author_id)
}
