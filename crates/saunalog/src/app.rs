use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        favorites::{
            add_favorite, list_favorites, list_user_favorites, remove_favorite,
            remove_favorite_by_id,
        },
        health::{healthz, livez},
        posts::{create_post, delete_post, list_posts},
        root::root,
        saunas::{get_sauna, search_saunas},
        users::{get_user, list_users, upsert_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        // User routes
        .route("/users", get(list_users).post(upsert_user))
        .route("/users/{id}", get(get_user))
        // Post routes
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{post_id}", delete(delete_post))
        // Sauna routes (provider-backed)
        .route("/saunas", get(search_saunas))
        .route("/saunas/{place_id}", get(get_sauna))
        // Favorite routes; `{key}` is a user id for GET and a favorite id for DELETE
        .route(
            "/favorites",
            get(list_favorites)
                .post(add_favorite)
                .delete(remove_favorite),
        )
        .route(
            "/favorites/{key}",
            get(list_user_favorites).delete(remove_favorite_by_id),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
