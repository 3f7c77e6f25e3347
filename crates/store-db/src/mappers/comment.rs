//! Comment entity <-> model mapper

use uuid::Uuid;

use store_core::entities::Comment;
use store_core::value_objects::{CommentId, GameId, UserId};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            game_id: GameId::new(model.game_id),
            user_id: UserId::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Comment entity values for insertion
pub struct CommentInsert<'a> {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub content: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            game_id: comment.game_id.into_inner(),
            user_id: comment.user_id.into_inner(),
            content: &comment.content,
        }
    }
}
