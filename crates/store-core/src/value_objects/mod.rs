//! Value objects - immutable types that represent domain concepts

mod category;
mod ids;
mod price;
mod rating_value;

pub use category::Category;
pub use ids::{CommentId, GameId, IdParseError, RatingId, UserId};
pub use price::Price;
pub use rating_value::RatingValue;
