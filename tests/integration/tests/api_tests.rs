//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (schema is migrated on startup)
//! - Environment variable: DATABASE_URL (REDIS_URL optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Create a game as a fresh admin and return it
async fn create_game(server: &TestServer, request: &CreateGameRequest) -> GameResponse {
    let admin = server.admin().await.unwrap();
    let response = server
        .post_auth("/api/v1/games", &admin.token, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_admin_creates_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = CreateGameRequest::unique().free();
    let game = create_game(&server, &request).await;

    assert_eq!(game.title, request.title);
    assert!(game.is_free);

    let response = server.get(&format!("/api/v1/games/{}", game.id)).await.unwrap();
    let detail: GameDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.rating.count, 0);
    assert_eq!(detail.distribution.len(), 5);
    assert!(detail.my_rating.is_none());
}

#[tokio::test]
async fn test_non_admin_cannot_create_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.user().unwrap();
    let response = server
        .post_auth("/api/v1/games", &user.token, &CreateGameRequest::unique())
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "ADMIN_REQUIRED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_negative_price_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin().await.unwrap();
    let mut request = CreateGameRequest::unique();
    request.price = -1.0;

    let response = server
        .post_auth("/api/v1/games", &admin.token, &request)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PRICE")
        .await
        .unwrap();

    request.price = 1_000_000_000.0;
    let response = server
        .post_auth("/api/v1/games", &admin.token, &request)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PRICE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_filters_by_category_and_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = CreateGameRequest::unique();
    let game = create_game(&server, &request).await;

    let path = format!(
        "/api/v1/games?category={}",
        request.category.replace(' ', "%20")
    );
    let listed: Vec<GameListItem> = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].game.id, game.id);

    let needle = request.title.split('-').next_back().unwrap().to_uppercase();
    let path = format!("/api/v1/games?search={needle}&category=all");
    let found: Vec<GameListItem> = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(found.iter().any(|g| g.game.id == game.id));

    let categories: Vec<String> =
        assert_json(server.get("/api/v1/games/categories").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(categories.contains(&request.category));
}

#[tokio::test]
async fn test_update_and_delete_game() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.admin().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let path = format!("/api/v1/games/{}", game.id);

    let response = server
        .patch_auth(&path, &admin.token, &json!({ "price": 0 }))
        .await
        .unwrap();
    let updated: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.is_free);
    assert_eq!(updated.title, game.title);

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_GAME")
        .await
        .unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let author = server.user().unwrap();
    let stranger = server.user().unwrap();
    let comments_path = format!("/api/v1/games/{}/comments", game.id);

    let response = server
        .post_auth(&comments_path, &author.token, &CommentRequest::new("  Great soundtrack  "))
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.content, "Great soundtrack");
    assert!(!comment.edited);

    let listed: Vec<CommentResponse> =
        assert_json(server.get(&comments_path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0].author.as_ref().map(|a| a.display_name.as_str()),
        Some(author.email.as_str())
    );

    let comment_path = format!("/api/v1/comments/{}", comment.id);
    let response = server
        .patch_auth(&comment_path, &stranger.token, &CommentRequest::new("hijacked"))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_AUTHOR")
        .await
        .unwrap();

    let response = server
        .patch_auth(&comment_path, &author.token, &CommentRequest::new("Great soundtrack!"))
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(edited.edited);

    let response = server.delete_auth(&comment_path, &author.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let listed: Vec<CommentResponse> =
        assert_json(server.get(&comments_path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_admin_deletes_any_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let author = server.user().unwrap();
    let admin = server.admin().await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &author.token,
            &CommentRequest::new("spam"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", comment.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_blank_comment_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let user = server.user().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &user.token,
            &CommentRequest::new("    "),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "EMPTY_CONTENT")
        .await
        .unwrap();
}

// ============================================================================
// Rating Tests
// ============================================================================

#[tokio::test]
async fn test_rating_upsert_and_summary() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let me = server.user().unwrap();
    let mine = format!("/api/v1/games/{}/ratings/@me", game.id);

    let response = server.get_auth(&mine, &me.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let first: RatingResponse = assert_json(
        server.put_auth(&mine, &me.token, &RatingRequest { rating: 2 }).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let second: RatingResponse = assert_json(
        server.put_auth(&mine, &me.token, &RatingRequest { rating: 5 }).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.rating, 5);

    for value in [5, 4] {
        let other = server.user().unwrap();
        let response = server
            .put_auth(&mine, &other.token, &RatingRequest { rating: value })
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get_auth(&format!("/api/v1/games/{}", game.id), &me.token).await.unwrap();
    let detail: GameDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.rating.count, 3);
    assert!((detail.rating.average - 4.7).abs() < 1e-9);
    assert_eq!(detail.distribution[0].stars, 5);
    assert_eq!(detail.distribution[0].count, 2);
    assert_eq!(detail.my_rating.map(|r| r.rating), Some(5));

    let response = server.put_auth(&mine, &me.token, &RatingRequest { rating: 6 }).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_rating_delete_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let game = create_game(&server, &CreateGameRequest::unique()).await;
    let me = server.user().unwrap();
    let stranger = server.user().unwrap();

    let rating: RatingResponse = assert_json(
        server
            .put_auth(
                &format!("/api/v1/games/{}/ratings/@me", game.id),
                &me.token,
                &RatingRequest { rating: 3 },
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let path = format!("/api/v1/ratings/{}", rating.id);

    let response = server.delete_auth(&path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &me.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let summary: Value = assert_json(
        server
            .get(&format!("/api/v1/games/{}/ratings", game.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(summary["rating"]["count"], 0);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.user().unwrap();

    let response = server.get_auth("/api/v1/users/@me", &user.token).await.unwrap();
    let me: CurrentUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id.to_string());
    assert_eq!(me.email, user.email);
    assert!(!me.is_admin);

    let admin = server.admin().await.unwrap();
    let response = server.get_auth("/api/v1/users/@me", &admin.token).await.unwrap();
    let me: CurrentUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(me.is_admin);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dashboard_stats_and_lists() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let favorite = CreateGameRequest::unique();
    let first = create_game(&server, &favorite).await;
    let mut same_category = CreateGameRequest::unique();
    same_category.category = favorite.category.clone();
    let second = create_game(&server, &same_category).await;
    let other = create_game(&server, &CreateGameRequest::unique()).await;
    let me = server.user().unwrap();

    for (game, value) in [(&first, 5), (&second, 4), (&other, 3)] {
        let response = server
            .put_auth(
                &format!("/api/v1/games/{}/ratings/@me", game.id),
                &me.token,
                &RatingRequest { rating: value },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", other.id),
            &me.token,
            &CommentRequest::new("Short but sweet"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let stats: UserStats = assert_json(
        server.get_auth("/api/v1/users/@me/stats", &me.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(stats.total_comments, 1);
    assert_eq!(stats.total_ratings, 3);
    assert!((stats.average_rating - 4.0).abs() < 1e-9);
    assert_eq!(stats.favorite_category, Some(favorite.category));

    let comments: Vec<CommentWithGame> = assert_json(
        server.get_auth("/api/v1/users/@me/comments", &me.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].game_title.as_deref(), Some(other.title.as_str()));

    let ratings: Vec<Value> = assert_json(
        server.get_auth("/api/v1/users/@me/ratings", &me.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(ratings.len(), 3);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints_require_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.user().unwrap();

    for path in [
        "/api/v1/admin/overview",
        "/api/v1/admin/activity",
        "/api/v1/admin/categories",
        "/api/v1/admin/comments",
        "/api/v1/admin/ratings",
    ] {
        let response = server.get_auth(path, &user.token).await.unwrap();
        assert_error(response, StatusCode::FORBIDDEN, "ADMIN_REQUIRED")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_admin_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = CreateGameRequest::unique();
    let game = create_game(&server, &request).await;
    let admin = server.admin().await.unwrap();
    let user = server.user().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/games/{}/comments", game.id),
            &user.token,
            &CommentRequest::new("Needs a sequel"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let overview: AdminOverview = assert_json(
        server.get_auth("/api/v1/admin/overview", &admin.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(overview.total_games >= 1);
    assert!(overview.total_users >= 2);
    assert!(overview.total_comments >= 1);

    let activity: Vec<Value> = assert_json(
        server.get_auth("/api/v1/admin/activity", &admin.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(activity.len(), 12);
    assert!(activity[11]["game_count"].as_u64().unwrap() >= 1);

    let categories: Vec<Value> = assert_json(
        server.get_auth("/api/v1/admin/categories", &admin.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(categories
        .iter()
        .any(|c| c["category"] == request.category.as_str() && c["count"] == 1));

    let comments: Vec<CommentWithGame> = assert_json(
        server.get_auth("/api/v1/admin/comments", &admin.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let listed = comments
        .iter()
        .find(|c| c.comment.id == comment.id)
        .expect("new comment in moderation list");
    assert_eq!(listed.game_title.as_deref(), Some(game.title.as_str()));
}
