//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, GameFilter, GameRepository, ProfileRepository, RatingRepository,
    RepoResult, RoleRepository,
};
