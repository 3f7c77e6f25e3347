//! User service
//!
//! The signed-in user's profile and dashboard.

use store_core::{profile_stats, DomainError, GameId};
use tracing::instrument;

use crate::dto::{
    CommentWithGameResponse, CurrentUserResponse, RatingWithGameResponse, UserStatsResponse,
};

use super::access::{AccessService, Caller};
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::Lookup;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current user profile, with a fresh admin flag
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn get_current_user(&self, caller: &Caller) -> ServiceResult<CurrentUserResponse> {
        let access = AccessService::new(self.ctx);
        access.ensure_profile(caller).await?;

        let (profile, is_admin) = tokio::join!(
            self.ctx.profile_repo().find_by_id(caller.user_id),
            access.is_admin(Some(caller.user_id)),
        );
        let profile = profile?.ok_or(DomainError::ProfileNotFound(caller.user_id))?;

        Ok(CurrentUserResponse::new(&profile, is_admin))
    }

    /// Dashboard statistics: totals, mean given rating and favorite category
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn get_stats(&self, caller: &Caller) -> ServiceResult<UserStatsResponse> {
        let (comments, ratings) = tokio::try_join!(
            self.ctx.comment_repo().find_by_user(caller.user_id),
            self.ctx.rating_repo().find_by_user(caller.user_id),
        )?;

        let mut game_ids: Vec<GameId> = ratings.iter().map(|r| r.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();
        let games = if game_ids.is_empty() {
            Vec::new()
        } else {
            self.ctx.game_repo().find_by_ids(&game_ids).await?
        };

        Ok(profile_stats(&comments, &ratings, &games).into())
    }

    /// The caller's comments, newest first, with game titles
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn my_comments(&self, caller: &Caller) -> ServiceResult<Vec<CommentWithGameResponse>> {
        let comments = self.ctx.comment_repo().find_by_user(caller.user_id).await?;
        let lookup = Lookup::for_comments(self.ctx, &comments).await?;
        Ok(comments.iter().map(|c| lookup.comment(c)).collect())
    }

    /// The caller's ratings, newest first, with game titles
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn my_ratings(&self, caller: &Caller) -> ServiceResult<Vec<RatingWithGameResponse>> {
        let ratings = self.ctx.rating_repo().find_by_user(caller.user_id).await?;
        let lookup = Lookup::for_ratings(self.ctx, &ratings).await?;
        Ok(ratings.iter().map(|r| lookup.rating(r)).collect())
    }
}
