//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod game;
mod profile;
mod rating;
mod role;

pub use comment::CommentModel;
pub use game::{CategoryModel, GameModel};
pub use profile::ProfileModel;
pub use rating::RatingModel;
pub use role::UserRoleModel;
