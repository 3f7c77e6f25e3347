//! Monthly activity bucketer - trailing twelve months of catalog activity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Game, Rating};
use crate::error::DomainError;

/// Number of buckets produced by [`monthly_activity`]
pub const MONTHS: usize = 12;

/// Records that carry a creation instant
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Timestamped for Game {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for Comment {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for Rating {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// Month labels
// ============================================================================

/// Display locale for month labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthLocale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

const PT_BR_MONTHS: [&str; MONTHS] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const EN_MONTHS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthLocale {
    /// Abbreviated name of a zero-based month
    pub fn label(self, month0: u32) -> &'static str {
        let names = match self {
            Self::PtBr => &PT_BR_MONTHS,
            Self::En => &EN_MONTHS,
        };
        names[month0 as usize % MONTHS]
    }
}

impl FromStr for MonthLocale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(DomainError::ValidationError(format!(
                "unsupported month locale: {other}"
            ))),
        }
    }
}

impl fmt::Display for MonthLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => f.write_str("pt-BR"),
            Self::En => f.write_str("en"),
        }
    }
}

// ============================================================================
// Buckets
// ============================================================================

/// Activity counts for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month_label: String,
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub game_count: u64,
    pub comment_count: u64,
    pub rating_count: u64,
}

impl MonthBucket {
    fn from_index(index: i32, locale: MonthLocale) -> Self {
        let month0 = index.rem_euclid(12) as u32;
        Self {
            month_label: locale.label(month0).to_string(),
            year: index.div_euclid(12),
            month: month0 + 1,
            game_count: 0,
            comment_count: 0,
            rating_count: 0,
        }
    }

    /// Whether a local calendar date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Linear month index: `year * 12 + month0`
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Bucket index of each record's local date relative to `first`, if in range
fn bucket_indices<'a, T, Tz>(
    records: &'a [T],
    tz: &'a Tz,
    first: i32,
) -> impl Iterator<Item = usize> + 'a
where
    T: Timestamped,
    Tz: TimeZone,
{
    records.iter().filter_map(move |r| {
        let local = r.created_at().with_timezone(tz).date_naive();
        usize::try_from(month_index(local) - first)
            .ok()
            .filter(|&i| i < MONTHS)
    })
}

/// Twelve monthly buckets, oldest first, ending with the month of `today`.
///
/// A record is counted in the month of its creation date as seen in `tz`;
/// records outside the window are ignored.
pub fn monthly_activity<Tz: TimeZone>(
    today: NaiveDate,
    tz: &Tz,
    games: &[Game],
    comments: &[Comment],
    ratings: &[Rating],
    locale: MonthLocale,
) -> Vec<MonthBucket> {
    let first = month_index(today) - (MONTHS as i32 - 1);
    let mut buckets: Vec<MonthBucket> = (0..MONTHS as i32)
        .map(|offset| MonthBucket::from_index(first + offset, locale))
        .collect();

    for i in bucket_indices(games, tz, first) {
        buckets[i].game_count += 1;
    }
    for i in bucket_indices(comments, tz, first) {
        buckets[i].comment_count += 1;
    }
    for i in bucket_indices(ratings, tz, first) {
        buckets[i].rating_count += 1;
    }

    buckets
}
