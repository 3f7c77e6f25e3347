//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use store_cache::{MemoryQueryCache, RedisPool, RedisPoolConfig, RedisQueryCache, SharedQueryCache};
use store_common::{AppConfig, AppError, JwtService};
use store_db::{
    create_pool, run_migrations, PgCommentRepository, PgGameRepository, PgPool,
    PgProfileRepository, PgRatingRepository, PgRoleRepository, PoolConfig,
};
use store_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let is_production = config.app.env.is_production();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let app = apply_middleware(api.merge(health_routes()), &config.cors, is_production);

    Ok(app.with_state(state))
}

/// Wire repositories, cache, and token verification into a service context
pub fn build_service_context(
    pool: PgPool,
    cache: SharedQueryCache,
    config: &AppConfig,
) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.issuer.clone()));

    ServiceContextBuilder::new()
        .game_repo(Arc::new(PgGameRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .rating_repo(Arc::new(PgRatingRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
        .role_repo(Arc::new(PgRoleRepository::new(pool)))
        .cache(cache)
        .jwt_service(jwt_service)
        .month_locale(config.stats.month_locale)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if let Some(dir) = &config.database.migrations_dir {
        run_migrations(&pool, dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let ttl = Duration::from_secs(config.cache.ttl_seconds);
    let (cache, redis_pool) = match RedisPoolConfig::from_config(&config.redis) {
        Some(redis_config) => {
            info!("Connecting to Redis...");
            let redis_pool =
                RedisPool::new(&redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
            let cache: SharedQueryCache = Arc::new(RedisQueryCache::new(
                redis_pool.clone(),
                config.app.name.clone(),
                ttl,
            ));
            (cache, Some(redis_pool))
        }
        None => {
            info!("REDIS_URL not set, caching queries in memory");
            let cache: SharedQueryCache = Arc::new(MemoryQueryCache::new(ttl));
            (cache, None)
        }
    };

    let service_context = build_service_context(pool.clone(), cache, &config)?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
