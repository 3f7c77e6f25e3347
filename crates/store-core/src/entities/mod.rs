//! Domain entities - core business objects

mod comment;
mod game;
mod profile;
mod rating;
mod role_assignment;

pub use comment::Comment;
pub use game::Game;
pub use profile::Profile;
pub use rating::Rating;
pub use role_assignment::{RoleAssignment, ADMIN_ROLE};
