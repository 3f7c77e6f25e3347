//! Comment entity - a user's comment on a game

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{CommentId, GameId, UserId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Maximum content length in characters
    pub const MAX_CONTENT_LEN: usize = 2000;

    /// Create a new Comment, trimming and validating the content
    pub fn new(
        id: CommentId,
        game_id: GameId,
        user_id: UserId,
        content: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            game_id,
            user_id,
            content: Self::validate_content(content)?,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Trim content and enforce the non-empty and length rules
    pub fn validate_content(content: &str) -> Result<String, DomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if trimmed.chars().count() > Self::MAX_CONTENT_LEN {
            return Err(DomainError::ContentTooLong {
                max: Self::MAX_CONTENT_LEN,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Replace the content
    pub fn edit(&mut self, content: &str) -> Result<(), DomainError> {
        self.content = Self::validate_content(content)?;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Check if comment has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}
