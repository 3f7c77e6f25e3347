//! Aggregations - pure, total functions over immutable record snapshots

mod activity;
mod category;
mod profile_stats;
mod rating;

pub use activity::{monthly_activity, MonthBucket, MonthLocale, Timestamped};
pub use category::{category_breakdown, CategoryCount};
pub use profile_stats::{profile_stats, ProfileStats};
pub use rating::{distribution, summarize, summarize_values, RatingSummary, StarCount};
