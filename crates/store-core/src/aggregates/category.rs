//! Games per category

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Count games per category, largest first, ties alphabetical
pub fn category_breakdown(games: &[Game]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for game in games {
        *counts.entry(game.category.as_str()).or_default() += 1;
    }

    let mut breakdown: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    // stable: keeps alphabetical order among equal counts
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}
