//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod admin;
pub mod comment;
pub mod context;
pub mod error;
pub mod game;
mod lookup;
pub mod rating;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use access::{AccessService, Caller};
pub use admin::AdminService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use game::GameService;
pub use rating::RatingService;
pub use user::UserService;
