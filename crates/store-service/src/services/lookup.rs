//! Batched joins of comments and ratings with their games and authors

use std::collections::HashMap;

use store_core::{Comment, Game, GameId, Profile, Rating, UserId};

use crate::dto::{
    AuthorResponse, CommentResponse, CommentWithGameResponse, RatingResponse,
    RatingWithGameResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Games and profiles referenced by a batch of rows
#[derive(Debug, Default)]
pub(crate) struct Lookup {
    games: HashMap<GameId, Game>,
    profiles: HashMap<UserId, Profile>,
}

fn unique<T: Copy + Ord>(ids: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut ids: Vec<T> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl Lookup {
    /// Fetch the games and profiles with one membership query each
    pub(crate) async fn load(
        ctx: &ServiceContext,
        game_ids: impl IntoIterator<Item = GameId>,
        user_ids: impl IntoIterator<Item = UserId>,
    ) -> ServiceResult<Self> {
        let game_ids = unique(game_ids);
        let user_ids = unique(user_ids);

        let (games, profiles) = tokio::try_join!(
            async {
                if game_ids.is_empty() {
                    Ok(Vec::new())
                } else {
                    ctx.game_repo().find_by_ids(&game_ids).await
                }
            },
            async {
                if user_ids.is_empty() {
                    Ok(Vec::new())
                } else {
                    ctx.profile_repo().find_by_ids(&user_ids).await
                }
            },
        )?;

        Ok(Self {
            games: games.into_iter().map(|g| (g.id, g)).collect(),
            profiles: profiles.into_iter().map(|p| (p.id, p)).collect(),
        })
    }

    pub(crate) async fn for_comments(
        ctx: &ServiceContext,
        comments: &[Comment],
    ) -> ServiceResult<Self> {
        Self::load(
            ctx,
            comments.iter().map(|c| c.game_id),
            comments.iter().map(|c| c.user_id),
        )
        .await
    }

    pub(crate) async fn for_ratings(ctx: &ServiceContext, ratings: &[Rating]) -> ServiceResult<Self> {
        Self::load(
            ctx,
            ratings.iter().map(|r| r.game_id),
            ratings.iter().map(|r| r.user_id),
        )
        .await
    }

    pub(crate) fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    pub(crate) fn profile(&self, id: UserId) -> Option<&Profile> {
        self.profiles.get(&id)
    }

    pub(crate) fn comment(&self, comment: &Comment) -> CommentWithGameResponse {
        CommentWithGameResponse {
            comment: CommentResponse::new(comment, self.profile(comment.user_id)),
            game_title: self.game(comment.game_id).map(|g| g.title.clone()),
        }
    }

    pub(crate) fn rating(&self, rating: &Rating) -> RatingWithGameResponse {
        RatingWithGameResponse {
            rating: RatingResponse::from(rating),
            game_title: self.game(rating.game_id).map(|g| g.title.clone()),
            author: self.profile(rating.user_id).map(AuthorResponse::from),
        }
    }
}
