//! Comment service
//!
//! Handles comment creation, editing, deletion, and queries.

use std::collections::HashMap;

use store_cache::{Invalidation, QueryKey};
use store_core::{can_edit, can_modify, Comment, CommentId, DomainError, GameId, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::access::{AccessService, Caller};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments on a game, newest first, with author display names
    #[instrument(skip(self))]
    pub async fn list_comments(&self, game_id: GameId) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .read_through(QueryKey::Comments(game_id), || self.load_comments(game_id))
            .await
    }

    async fn load_comments(&self, game_id: GameId) -> ServiceResult<Vec<CommentResponse>> {
        let (game, comments) = tokio::try_join!(
            self.ctx.game_repo().find_by_id(game_id),
            self.ctx.comment_repo().find_by_game(game_id),
        )?;
        if game.is_none() {
            return Err(DomainError::GameNotFound(game_id).into());
        }

        let mut author_ids: Vec<UserId> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<UserId, _> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            self.ctx
                .profile_repo()
                .find_by_ids(&author_ids)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(comments
            .iter()
            .map(|c| CommentResponse::new(c, authors.get(&c.user_id)))
            .collect())
    }

    /// Add a comment to a game
    #[instrument(skip(self, caller, request), fields(user_id = %caller.user_id))]
    pub async fn create_comment(
        &self,
        caller: &Caller,
        game_id: GameId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = Comment::new(
            CommentId::generate(),
            game_id,
            caller.user_id,
            &request.content,
        )?;

        AccessService::new(self.ctx).ensure_profile(caller).await?;
        self.ctx.comment_repo().create(&comment).await?;
        self.ctx.invalidate(Invalidation::CommentChanged(game_id)).await;

        info!(comment_id = %comment.id, game_id = %game_id, "Comment created");

        let author = self.ctx.profile_repo().find_by_id(caller.user_id).await?;
        Ok(CommentResponse::new(&comment, author.as_ref()))
    }

    /// Edit a comment's content (author only)
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        user_id: UserId,
        comment_id: CommentId,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let access = AccessService::new(self.ctx);
        let (comment, actor) = tokio::join!(
            self.ctx.comment_repo().find_by_id(comment_id),
            access.actor(Some(user_id)),
        );
        let mut comment = comment?.ok_or(DomainError::CommentNotFound(comment_id))?;

        if !can_edit(&actor, comment.user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment edit denied");
            return Err(DomainError::NotAuthor("comment").into());
        }

        comment.edit(&request.content)?;
        self.ctx.comment_repo().update(&comment).await?;
        self.ctx
            .invalidate(Invalidation::CommentChanged(comment.game_id))
            .await;

        info!(comment_id = %comment_id, "Comment updated");

        let author = self.ctx.profile_repo().find_by_id(comment.user_id).await?;
        Ok(CommentResponse::new(&comment, author.as_ref()))
    }

    /// Delete a comment (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, user_id: UserId, comment_id: CommentId) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let (comment, actor) = tokio::join!(
            self.ctx.comment_repo().find_by_id(comment_id),
            access.actor(Some(user_id)),
        );
        let comment = comment?.ok_or(DomainError::CommentNotFound(comment_id))?;

        if !can_modify(&actor, comment.user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment delete denied");
            return Err(DomainError::NotAuthor("comment").into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;
        self.ctx
            .invalidate(Invalidation::CommentChanged(comment.game_id))
            .await;

        info!(
            comment_id = %comment_id,
            moderated = comment.user_id != user_id,
            "Comment deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{context, FakeStore};

    fn caller(user_id: UserId) -> Caller {
        Caller::new(user_id, Some(format!("{user_id}@example.com")))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let (ctx, store) = context(store);
        let service = CommentService::new(&ctx);
        let me = caller(UserId::generate());

        assert!(service.list_comments(game.id).await.unwrap().is_empty());

        let created = service
            .create_comment(&me, game.id, CreateCommentRequest { content: "  so good  ".into() })
            .await
            .unwrap();
        assert_eq!(created.content, "so good");
        assert_eq!(store.profiles.lock().unwrap().len(), 1);

        let listed = service.list_comments(game.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].author.as_ref().unwrap().display_name,
            me.email.clone().unwrap()
        );
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let (ctx, store) = context(store);

        let err = CommentService::new(&ctx)
            .create_comment(
                &caller(UserId::generate()),
                game.id,
                CreateCommentRequest { content: "   ".into() },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "EMPTY_CONTENT");
        assert!(store.comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_on_missing_game() {
        let (ctx, _) = context(FakeStore::default());
        let service = CommentService::new(&ctx);
        let missing = GameId::generate();

        let err = service
            .create_comment(
                &caller(UserId::generate()),
                missing,
                CreateCommentRequest { content: "hello".into() },
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GAME");
        assert_eq!(service.list_comments(missing).await.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_only_author_edits() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let author = UserId::generate();
        let admin = UserId::generate();
        store.grant_admin(admin);
        let comment = store.add_comment(game.id, author, "first take");
        let (ctx, _) = context(store);
        let service = CommentService::new(&ctx);

        let err = service
            .update_comment(admin, comment.id, UpdateCommentRequest { content: "moderated".into() })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "NOT_AUTHOR");

        let edited = service
            .update_comment(author, comment.id, UpdateCommentRequest { content: "second take".into() })
            .await
            .unwrap();
        assert_eq!(edited.content, "second take");
        assert!(edited.edited);
    }

    #[tokio::test]
    async fn test_delete_by_author_admin_and_stranger() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let author = UserId::generate();
        let admin = UserId::generate();
        let stranger = UserId::generate();
        store.grant_admin(admin);
        let by_author = store.add_comment(game.id, author, "mine");
        let by_admin = store.add_comment(game.id, author, "spam");
        let (ctx, store) = context(store);
        let service = CommentService::new(&ctx);

        let err = service.delete_comment(stranger, by_author.id).await.unwrap_err();
        assert!(err.is_forbidden());

        service.delete_comment(author, by_author.id).await.unwrap();
        service.delete_comment(admin, by_admin.id).await.unwrap();
        assert!(store.comments.lock().unwrap().is_empty());

        let err = service.delete_comment(author, by_author.id).await.unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_COMMENT");
    }

    #[tokio::test]
    async fn test_role_lookup_failure_denies_moderation() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let admin = UserId::generate();
        store.grant_admin(admin);
        let comment = store.add_comment(game.id, UserId::generate(), "spam");
        store.fail_role_lookups();
        let (ctx, _) = context(store);

        let err = CommentService::new(&ctx)
            .delete_comment(admin, comment.id)
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
    }

    #[tokio::test]
    async fn test_new_comment_invalidates_listing() {
        let store = FakeStore::default();
        let game = store.add_game("Hades", "Roguelike");
        let (ctx, _) = context(store);
        let service = CommentService::new(&ctx);
        let me = caller(UserId::generate());

        assert!(service.list_comments(game.id).await.unwrap().is_empty());
        let created = service
            .create_comment(&me, game.id, CreateCommentRequest { content: "one".into() })
            .await
            .unwrap();
        assert_eq!(service.list_comments(game.id).await.unwrap().len(), 1);

        service.delete_comment(me.user_id, created.id).await.unwrap();
        assert!(service.list_comments(game.id).await.unwrap().is_empty());
    }
}
