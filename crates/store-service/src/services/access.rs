//! Access service
//!
//! Resolves who is calling: fresh admin lookups, the ownership actor, and the
//! profile row backing an authenticated user.

use store_cache::Invalidation;
use store_core::{check_admin, Actor, DomainError, Profile, UserId};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// An authenticated caller, as described by a verified access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub email: Option<String>,
}

impl Caller {
    pub fn new(user_id: UserId, email: Option<String>) -> Self {
        Self { user_id, email }
    }
}

/// Access service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the user holds the admin role right now
    pub async fn is_admin(&self, user_id: Option<UserId>) -> bool {
        check_admin(self.ctx.role_repo(), user_id).await
    }

    /// Build the ownership actor from a fresh role lookup
    pub async fn actor(&self, user_id: Option<UserId>) -> Actor {
        match user_id {
            Some(id) => Actor::new(id, self.is_admin(Some(id)).await),
            None => Actor::ANONYMOUS,
        }
    }

    /// Fail with `AdminRequired` unless the user is an admin
    #[instrument(skip(self))]
    pub async fn require_admin(&self, user_id: UserId) -> ServiceResult<Actor> {
        if self.is_admin(Some(user_id)).await {
            Ok(Actor::new(user_id, true))
        } else {
            debug!(user_id = %user_id, "Admin access denied");
            Err(DomainError::AdminRequired.into())
        }
    }

    /// Make sure a profile row exists for the caller.
    ///
    /// Users are created by the hosted auth service, so the first write of a
    /// new user is also the first time this service sees them.
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn ensure_profile(&self, caller: &Caller) -> ServiceResult<()> {
        let profile = Profile::new(
            caller.user_id,
            None,
            caller.email.clone().unwrap_or_default(),
        );
        if self.ctx.profile_repo().ensure(&profile).await? {
            self.ctx.invalidate(Invalidation::ProfileCreated).await;
            info!("Profile created");
        }
        Ok(())
    }
}
