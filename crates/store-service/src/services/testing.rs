//! In-memory repositories for service tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use store_cache::{CacheError, CacheResult, MemoryQueryCache, QueryCache, RedisPoolError, SharedQueryCache};
use store_common::JwtService;
use store_core::traits::{
    CommentRepository, GameFilter, GameRepository, ProfileRepository, RatingRepository,
    RepoResult, RoleRepository,
};
use store_core::{
    Category, Comment, CommentId, DomainError, Game, GameId, MonthLocale, Price, Profile, Rating,
    RatingId, RatingValue, RoleAssignment, UserId, ADMIN_ROLE,
};

use super::context::{ServiceContext, ServiceContextBuilder};

/// One store backing every repository trait
#[derive(Default)]
pub struct FakeStore {
    pub games: Mutex<Vec<Game>>,
    pub comments: Mutex<Vec<Comment>>,
    pub ratings: Mutex<Vec<Rating>>,
    pub profiles: Mutex<Vec<Profile>>,
    pub roles: Mutex<Vec<RoleAssignment>>,
    pub role_lookups: AtomicUsize,
    fail_roles: AtomicBool,
}

impl FakeStore {
    pub fn grant_admin(&self, user_id: UserId) {
        self.roles
            .lock()
            .unwrap()
            .push(RoleAssignment::new(user_id, ADMIN_ROLE));
    }

    pub fn fail_role_lookups(&self) {
        self.fail_roles.store(true, Ordering::SeqCst);
    }

    pub fn add_game(&self, title: &str, category: &str) -> Game {
        let game = Game::new(
            GameId::generate(),
            title.to_string(),
            Price::FREE,
            Category::new(category).unwrap(),
        );
        self.games.lock().unwrap().push(game.clone());
        game
    }

    pub fn add_profile(&self, username: Option<&str>, email: &str) -> Profile {
        let profile = Profile::new(
            UserId::generate(),
            username.map(str::to_string),
            email.to_string(),
        );
        self.profiles.lock().unwrap().push(profile.clone());
        profile
    }

    pub fn add_rating(&self, game_id: GameId, user_id: UserId, value: i32) -> Rating {
        let rating = Rating::new(
            RatingId::generate(),
            game_id,
            user_id,
            RatingValue::new(value).unwrap(),
        );
        self.ratings.lock().unwrap().push(rating.clone());
        rating
    }

    pub fn add_comment(&self, game_id: GameId, user_id: UserId, content: &str) -> Comment {
        let comment = Comment::new(CommentId::generate(), game_id, user_id, content).unwrap();
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }

    fn game_exists(&self, id: GameId) -> bool {
        self.games.lock().unwrap().iter().any(|g| g.id == id)
    }
}

fn newest_first<T, F>(mut items: Vec<T>, created: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
{
    items.sort_by_key(|item| std::cmp::Reverse(created(item)));
    items
}

#[async_trait]
impl GameRepository for FakeStore {
    async fn find_by_id(&self, id: GameId) -> RepoResult<Option<Game>> {
        Ok(self.games.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .iter()
            .filter(|g| ids.contains(&g.id))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &GameFilter) -> RepoResult<Vec<Game>> {
        let games: Vec<Game> = self
            .games
            .lock()
            .unwrap()
            .iter()
            .filter(|g| filter.matches(g))
            .cloned()
            .collect();
        Ok(newest_first(games, |g| g.created_at))
    }

    async fn categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .games
            .lock()
            .unwrap()
            .iter()
            .map(|g| g.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn create(&self, game: &Game) -> RepoResult<()> {
        self.games.lock().unwrap().push(game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> RepoResult<()> {
        let mut games = self.games.lock().unwrap();
        let slot = games
            .iter_mut()
            .find(|g| g.id == game.id)
            .ok_or(DomainError::GameNotFound(game.id))?;
        *slot = game.clone();
        Ok(())
    }

    async fn delete(&self, id: GameId) -> RepoResult<()> {
        let mut games = self.games.lock().unwrap();
        let before = games.len();
        games.retain(|g| g.id != id);
        if games.len() == before {
            return Err(DomainError::GameNotFound(id));
        }
        self.comments.lock().unwrap().retain(|c| c.game_id != id);
        self.ratings.lock().unwrap().retain(|r| r.game_id != id);
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.games.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl CommentRepository for FakeStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Comment>> {
        let comments = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.game_id == game_id)
            .cloned()
            .collect();
        Ok(newest_first(comments, |c| c.created_at))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Comment>> {
        let comments = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(comments, |c| c.created_at))
    }

    async fn list_all(&self) -> RepoResult<Vec<Comment>> {
        let comments = self.comments.lock().unwrap().clone();
        Ok(newest_first(comments, |c| c.created_at))
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        if !self.game_exists(comment.game_id) {
            return Err(DomainError::GameNotFound(comment.game_id));
        }
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let slot = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        *slot = comment.clone();
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::CommentNotFound(id));
        }
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.comments.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl RatingRepository for FakeStore {
    async fn find_by_id(&self, id: RatingId) -> RepoResult<Option<Rating>> {
        Ok(self.ratings.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Rating>> {
        let ratings = self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();
        Ok(newest_first(ratings, |r| r.created_at))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Rating>> {
        let ratings = self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(ratings, |r| r.created_at))
    }

    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> RepoResult<Option<Rating>> {
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.game_id == game_id)
            .cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Rating>> {
        let ratings = self.ratings.lock().unwrap().clone();
        Ok(newest_first(ratings, |r| r.created_at))
    }

    async fn upsert(&self, rating: &Rating) -> RepoResult<Rating> {
        if !self.game_exists(rating.game_id) {
            return Err(DomainError::GameNotFound(rating.game_id));
        }
        let mut ratings = self.ratings.lock().unwrap();
        if let Some(existing) = ratings
            .iter_mut()
            .find(|r| r.user_id == rating.user_id && r.game_id == rating.game_id)
        {
            existing.rating = rating.rating;
            existing.updated_at = Some(chrono::Utc::now());
            return Ok(existing.clone());
        }
        ratings.push(rating.clone());
        Ok(rating.clone())
    }

    async fn delete(&self, id: RatingId) -> RepoResult<()> {
        let mut ratings = self.ratings.lock().unwrap();
        let before = ratings.len();
        ratings.retain(|r| r.id != id);
        if ratings.len() == before {
            return Err(DomainError::RatingNotFound(id));
        }
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.ratings.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl ProfileRepository for FakeStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn ensure(&self, profile: &Profile) -> RepoResult<bool> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.id == profile.id) {
            return Ok(false);
        }
        profiles.push(profile.clone());
        Ok(true)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.profiles.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl RoleRepository for FakeStore {
    async fn find_role(&self, user_id: UserId, role: &str) -> RepoResult<Option<RoleAssignment>> {
        self.role_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_roles.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".into()));
        }
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.role == role)
            .cloned())
    }
}

/// A cache whose every operation fails
pub struct FailingCache;

fn down() -> CacheError {
    CacheError::Redis(RedisPoolError::CreatePool("redis is down".into()))
}

#[async_trait]
impl QueryCache for FailingCache {
    async fn get_raw(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(down())
    }

    async fn set_raw(&self, _key: &str, _value: String) -> CacheResult<()> {
        Err(down())
    }

    async fn remove(&self, _keys: &[String]) -> CacheResult<()> {
        Err(down())
    }

    async fn remove_prefix(&self, _prefix: &str) -> CacheResult<()> {
        Err(down())
    }
}

pub fn context_with_cache(store: FakeStore, cache: SharedQueryCache) -> ServiceContext {
    build(Arc::new(store), cache)
}

/// Context over a fresh store and an in-memory cache
pub fn context(store: FakeStore) -> (ServiceContext, Arc<FakeStore>) {
    let store = Arc::new(store);
    let cache: SharedQueryCache = Arc::new(MemoryQueryCache::new(Duration::from_secs(60)));
    (build(Arc::clone(&store), cache), store)
}

fn build(store: Arc<FakeStore>, cache: SharedQueryCache) -> ServiceContext {
    ServiceContextBuilder::new()
        .game_repo(store.clone())
        .comment_repo(store.clone())
        .rating_repo(store.clone())
        .profile_repo(store.clone())
        .role_repo(store)
        .cache(cache)
        .jwt_service(Arc::new(JwtService::new("test-secret", None)))
        .month_locale(MonthLocale::En)
        .build()
        .unwrap()
}
