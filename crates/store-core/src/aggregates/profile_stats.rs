//! Dashboard statistics for a single user

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Game, Rating};
use crate::value_objects::GameId;

use super::rating::{summarize, RatingSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_comments: u64,
    pub total_ratings: u64,
    /// Summary of the ratings the user has given
    pub average_given: RatingSummary,
    /// Category the user rated most often
    pub favorite_category: Option<String>,
}

#[derive(Default)]
struct Tally {
    count: u64,
    sum: u64,
}

impl Tally {
    /// Compare means without floating point
    fn cmp_mean(&self, other: &Self) -> Ordering {
        (self.sum * other.count).cmp(&(other.sum * self.count))
    }
}

/// Build a user's statistics from their own comments and ratings.
///
/// `games` must contain the games referenced by `ratings`; ratings on games
/// that are missing do not count towards the favorite category.
pub fn profile_stats(comments: &[Comment], ratings: &[Rating], games: &[Game]) -> ProfileStats {
    ProfileStats {
        total_comments: comments.len() as u64,
        total_ratings: ratings.len() as u64,
        average_given: summarize(ratings),
        favorite_category: favorite_category(ratings, games),
    }
}

fn favorite_category(ratings: &[Rating], games: &[Game]) -> Option<String> {
    let categories: HashMap<GameId, &str> = games
        .iter()
        .map(|g| (g.id, g.category.as_str()))
        .collect();

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for rating in ratings {
        if let Some(&category) = categories.get(&rating.game_id) {
            let tally = tallies.entry(category).or_default();
            tally.count += 1;
            tally.sum += u64::from(rating.stars());
        }
    }

    tallies
        .into_iter()
        .max_by(|(name_a, a), (name_b, b)| {
            a.count
                .cmp(&b.count)
                .then_with(|| a.cmp_mean(b))
                .then_with(|| name_b.cmp(name_a))
        })
        .map(|(name, _)| name.to_string())
}
