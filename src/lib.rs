pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName},
    },
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    services::{auth_service::UserDirectory, forum_store::ForumStore},
};

/// Shared handles. The store has exactly one writer at a time: every
/// mutation runs to completion under the write lock.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ForumStore>>,
    pub users: Arc<RwLock<UserDirectory>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = if config.seed_data {
            ForumStore::seeded()
        } else {
            ForumStore::new()
        };

        Self {
            store: Arc::new(RwLock::new(store)),
            users: Arc::new(RwLock::new(UserDirectory::new())),
            config: Arc::new(config),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            AUTHORIZATION,
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static(handlers::questions::SESSION_HEADER),
        ]);

    let api = Router::new()
        // Auth routes
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        // User routes
        .route(
            "/api/users/me",
            get(handlers::users::get_current_user).put(handlers::users::update_current_user),
        )
        .route("/api/users/me/stats", get(handlers::users::get_my_stats))
        .route(
            "/api/users/me/questions",
            get(handlers::users::get_my_questions),
        )
        // Question routes
        .route(
            "/api/questions",
            get(handlers::questions::get_questions).post(handlers::questions::create_question),
        )
        .route(
            "/api/questions/{question_id}",
            get(handlers::questions::get_question),
        )
        .route(
            "/api/questions/{question_id}/vote",
            post(handlers::questions::vote_question),
        )
        .route(
            "/api/questions/{question_id}/accept",
            post(handlers::questions::accept_answer),
        )
        // Answer routes
        .route(
            "/api/questions/{question_id}/answers",
            get(handlers::answers::get_answers).post(handlers::answers::create_answer),
        )
        .route(
            "/api/answers/{answer_id}/vote",
            post(handlers::answers::vote_answer),
        )
        // Tag routes
        .route("/api/tags", get(handlers::tags::get_tags))
        .route("/api/tags/{name}", get(handlers::tags::get_tag))
        // Search
        .route("/api/search", get(handlers::questions::search))
        // Notification routes
        .route(
            "/api/notifications",
            get(handlers::notifications::get_notifications),
        )
        .route(
            "/api/notifications/unread-count",
            get(handlers::notifications::get_unread_count),
        )
        .route(
            "/api/notifications/read-all",
            post(handlers::notifications::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            post(handlers::notifications::mark_notification_read),
        );

    api.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
    .with_state(state)
}
