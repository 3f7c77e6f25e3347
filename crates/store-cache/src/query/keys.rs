//! Query identities and the keys each kind of write makes stale

use store_core::traits::GameFilter;
use store_core::value_objects::GameId;

/// Prefix shared by every filtered game listing
pub const GAME_LIST_PREFIX: &str = "games:list:";

/// Identity of a cacheable read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKey {
    /// Catalog listing for one filter
    GameList(GameFilter),
    /// Public game detail (game, rating summary, distribution)
    Game(GameId),
    Categories,
    Comments(GameId),
    Ratings(GameId),
    AdminOverview,
    AdminActivity,
    AdminCategories,
    AdminComments,
    AdminRatings,
}

impl QueryKey {
    /// Storage key for this query
    pub fn key(&self) -> String {
        match self {
            Self::GameList(filter) => {
                // JSON keeps user text from forging another filter's key
                let parts = serde_json::json!([
                    filter.search.as_deref().map(str::to_lowercase),
                    filter.category.as_ref().map(|c| c.as_str()),
                ]);
                format!("{GAME_LIST_PREFIX}{parts}")
            }
            Self::Game(id) => format!("games:{id}"),
            Self::Categories => "games:categories".to_string(),
            Self::Comments(id) => format!("comments:game:{id}"),
            Self::Ratings(id) => format!("ratings:game:{id}"),
            Self::AdminOverview => "admin:overview".to_string(),
            Self::AdminActivity => "admin:activity".to_string(),
            Self::AdminCategories => "admin:categories".to_string(),
            Self::AdminComments => "admin:comments".to_string(),
            Self::AdminRatings => "admin:ratings".to_string(),
        }
    }
}

/// A successful write, described by what it touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// A game was created, updated or deleted
    GameChanged(GameId),
    /// A comment on the game was created, edited or deleted
    CommentChanged(GameId),
    /// A rating on the game was upserted or deleted
    RatingChanged(GameId),
    /// A user was seen for the first time
    ProfileCreated,
}

impl Invalidation {
    /// Exact keys made stale by the write
    pub fn stale_keys(&self) -> Vec<QueryKey> {
        match *self {
            Self::GameChanged(id) => vec![
                QueryKey::Game(id),
                QueryKey::Categories,
                QueryKey::Comments(id),
                QueryKey::Ratings(id),
                QueryKey::AdminOverview,
                QueryKey::AdminActivity,
                QueryKey::AdminCategories,
                QueryKey::AdminComments,
                QueryKey::AdminRatings,
            ],
            Self::CommentChanged(id) => vec![
                QueryKey::Comments(id),
                QueryKey::AdminOverview,
                QueryKey::AdminActivity,
                QueryKey::AdminComments,
            ],
            Self::RatingChanged(id) => vec![
                QueryKey::Game(id),
                QueryKey::Ratings(id),
                QueryKey::AdminOverview,
                QueryKey::AdminActivity,
                QueryKey::AdminRatings,
            ],
            Self::ProfileCreated => vec![QueryKey::AdminOverview],
        }
    }

    /// Key prefixes made stale by the write. Listings embed rating summaries,
    /// so rating writes clear them too.
    pub fn stale_prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::GameChanged(_) | Self::RatingChanged(_) => &[GAME_LIST_PREFIX],
            Self::CommentChanged(_) | Self::ProfileCreated => &[],
        }
    }
}
