pub mod extract;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    feed::FeedController, feed_follow::FeedFollowController, health, user::UserController,
};
use crate::domain::{
    feed::FeedService,
    feed_follow::FeedFollowService,
    user::{UserService, UserServiceApi},
};
use crate::infrastructure::auth::{auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::Repositories;

/// Wire services and controllers over the given repositories and build the router
pub fn build_app(repos: Repositories) -> Router {
    // 1. Services (inject repositories)
    let user_service: Arc<dyn UserServiceApi> = Arc::new(UserService::new(repos.users.clone()));
    let feed_service = Arc::new(FeedService::new(
        repos.feeds.clone(),
        repos.feed_follows.clone(),
    ));
    let feed_follow_service = Arc::new(FeedFollowService::new(repos.feed_follows.clone()));

    // 2. Controllers (inject services)
    let user_controller = Arc::new(UserController::new(user_service.clone()));
    let feed_controller = Arc::new(FeedController::new(feed_service));
    let feed_follow_controller = Arc::new(FeedFollowController::new(feed_follow_service));

    let auth = middleware::from_fn_with_state(user_service, auth_middleware);

    // GET needs a key, POST is open enrollment
    let user_routes = Router::new()
        .route(
            "/v1/users",
            get(UserController::get_me)
                .route_layer(auth.clone())
                .post(UserController::create_user),
        )
        .with_state(user_controller);

    // POST needs a key, GET is public
    let feed_routes = Router::new()
        .route(
            "/v1/feeds",
            post(FeedController::create_feed)
                .route_layer(auth.clone())
                .get(FeedController::list_feeds),
        )
        .with_state(feed_controller);

    // Every follow route needs a key
    let feed_follow_routes = Router::new()
        .route(
            "/v1/feed_follows",
            get(FeedFollowController::list_feed_follows).post(FeedFollowController::follow_feed),
        )
        .route(
            "/v1/feed_follows/:feedFollowID",
            delete(FeedFollowController::unfollow_feed),
        )
        .route_layer(auth)
        .with_state(feed_follow_controller);

    Router::new()
        .route("/v1/healthz", get(health::healthz))
        .route("/v1/error", get(health::error_probe))
        .route("/health/ready", get(health::health_ready))
        .with_state(repos.health)
        .merge(user_routes)
        .merge(feed_routes)
        .merge(feed_follow_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>, repos: Repositories) -> anyhow::Result<()> {
    let app = build_app(repos);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
