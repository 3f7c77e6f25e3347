//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, signing tokens, and making
//! HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use store_api::{create_app, create_app_state};
use store_common::{
    AppConfig, AppSettings, CacheConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    JwtService, RateLimitConfig, RedisConfig, ServerConfig, StatsConfig,
};
use store_core::{MonthLocale, UserId};
use store_db::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret shared by the test server and the tokens it accepts
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A signed-in test user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pool: PgPool,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.issuer.clone());

        let state = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            pool,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// A fresh user with a valid access token
    pub fn user(&self) -> Result<TestUser> {
        let id = UserId::generate();
        let email = format!("player-{id}@example.com");
        let token = self.jwt.issue_access_token(id, Some(email.clone()), 900)?;
        Ok(TestUser { id, email, token })
    }

    /// A fresh user holding the admin role
    pub async fn admin(&self) -> Result<TestUser> {
        let user = self.user()?;
        sqlx::query("INSERT INTO profiles (id, email) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(user.id.into_inner())
            .bind(&user.email)
            .execute(&self.pool)
            .await?;
        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, 'admin') ON CONFLICT DO NOTHING")
            .bind(user.id.into_inner())
            .execute(&self.pool)
            .await?;
        Ok(user)
    }

    fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authed(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::authed(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::authed(self.client.patch(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::authed(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authed(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }
}

/// Create a test configuration from `DATABASE_URL` (and `REDIS_URL` if set)
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")?;
    let migrations_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();

    Ok(AppConfig {
        app: AppSettings {
            name: format!("game-store-test-{}", uuid::Uuid::new_v4().simple()),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            migrations_dir: Some(migrations_dir),
        },
        redis: RedisConfig {
            url: std::env::var("REDIS_URL").ok(),
            max_connections: 4,
        },
        cache: CacheConfig { ttl_seconds: 60 },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.into(),
            issuer: None,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        stats: StatsConfig {
            month_locale: MonthLocale::En,
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response carries the given code
pub async fn assert_error(response: Response, expected_status: StatusCode, code: &str) -> Result<()> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    anyhow::ensure!(
        body["error"]["code"] == code,
        "Expected error code {code}, got {}",
        body["error"]["code"]
    );
    Ok(())
}
