//! # store-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] and are cheap to construct per
//! request:
//!
//! ```rust,ignore
//! let games = GameService::new(&ctx).list_games(GameFilter::default()).await?;
//! ```

pub mod dto;
pub mod services;

pub use services::{
    AccessService, AdminService, Caller, CommentService, GameService, RatingService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
pub use dto::*;
