//! Rating aggregator - average, count and star distribution

use serde::{Deserialize, Serialize};

use crate::entities::Rating;
use crate::value_objects::RatingValue;

/// Average and count of a set of ratings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Unrounded arithmetic mean, 0 when there are no ratings
    pub average: f64,
    pub count: u64,
}

impl RatingSummary {
    pub const EMPTY: Self = Self {
        average: 0.0,
        count: 0,
    };

    /// Average rounded to one decimal place, half away from zero
    pub fn display_average(&self) -> f64 {
        (self.average * 10.0).round() / 10.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Summarize a game's ratings
pub fn summarize(ratings: &[Rating]) -> RatingSummary {
    summarize_values(ratings.iter().map(|r| r.rating))
}

/// Summarize raw validated values
pub fn summarize_values<I>(values: I) -> RatingSummary
where
    I: IntoIterator<Item = RatingValue>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v.get()), count + 1));

    if count == 0 {
        return RatingSummary::EMPTY;
    }

    RatingSummary {
        average: sum as f64 / count as f64,
        count,
    }
}

/// Number and share of ratings with a given star value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarCount {
    pub stars: u8,
    pub count: u64,
    /// Share of all ratings in percent, 0 when there are no ratings
    pub percentage: f64,
}

/// Per-star breakdown, five stars first
pub fn distribution(ratings: &[Rating]) -> [StarCount; 5] {
    let mut counts = [0u64; 5];
    for r in ratings {
        counts[usize::from(r.stars() - RatingValue::MIN)] += 1;
    }
    let total = ratings.len() as f64;

    std::array::from_fn(|i| {
        let stars = RatingValue::MAX - i as u8;
        let count = counts[usize::from(stars - RatingValue::MIN)];
        let percentage = if count == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total
        };
        StarCount {
            stars,
            count,
            percentage,
        }
    })
}
