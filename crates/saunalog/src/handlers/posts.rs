use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use saunalog_core::sauna::{CreatePostRequest, ListPostsQuery, MessageResponse, Post, PostView};

use crate::{handlers::AppError, state::AppState};

/// List posts, optionally filtered by sauna and/or user (GET /posts).
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<Vec<PostView>>, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    tracing::debug!(filter = ?filter, "Listing posts");

    let posts = state.posts.list_posts(&filter).await?;
    Ok(Json(posts))
}

/// Create a post, materialising its sauna on first reference (POST /posts).
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create post request");

    let post = state.guard().create_post(payload.into_new_post()).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Delete a post by id (DELETE /posts/{post_id}).
pub async fn delete_post(
    State(state): State<AppState>,
    post_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(post_id) = post_id?;
    state.guard().delete_post(post_id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Post {post_id} deleted successfully"
    ))))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        http::{Method, StatusCode},
        Router,
    };
    use serde_json::json;

    use crate::{
        app::create_app, handlers::test_support::send, places::fake::FakePlaceResolver,
        state::AppState,
    };

    async fn app_with_user(places: Arc<FakePlaceResolver>) -> Router {
        let app = create_app(AppState::with_places(places), Duration::from_secs(5));
        send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"id": "user-1", "email": "aki@example.com", "name": "Aki"})),
        )
        .await;
        app
    }

    fn places() -> Arc<FakePlaceResolver> {
        Arc::new(
            FakePlaceResolver::new()
                .with_place("ChIJabc", "Spa X", "1 Main St")
                .with_place("ChIJdef", "Spa Y", "2 Side St"),
        )
    }

    #[tokio::test]
    async fn test_create_post_reconciles_sauna() {
        let places = places();
        let app = app_with_user(places.clone()).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"user_id": "user-1", "sauna_id": "ChIJabc", "content": "Great!"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["sauna_id"], "ChIJabc");
        assert_eq!(body["content"], "Great!");
        assert!(body["created_at"].as_str().unwrap().ends_with("+09:00"));
        assert_eq!(places.resolve_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_post_unknown_user_is_404() {
        let app = create_app(AppState::with_places(places()), Duration::from_secs(5));

        let (status, body) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"user_id": "ghost", "sauna_id": "ChIJabc"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "User not found: ghost");

        let (_, body) = send(&app, Method::GET, "/posts", None).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_posts_embeds_summaries_and_filters() {
        let app = app_with_user(places()).await;
        for sauna_id in ["ChIJabc", "ChIJdef"] {
            send(
                &app,
                Method::POST,
                "/posts",
                Some(json!({"user_id": "user-1", "sauna_id": sauna_id})),
            )
            .await;
        }

        let (status, body) = send(&app, Method::GET, "/posts?sauna_id=ChIJabc", None).await;

        assert_eq!(status, StatusCode::OK);
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["user"], json!({"id": "user-1", "name": "Aki"}));
        assert_eq!(posts[0]["sauna"], json!({"id": "ChIJabc", "name": "Spa X"}));

        let (_, body) = send(&app, Method::GET, "/posts?user_id=user-1&sauna_id=", None).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_post() {
        let app = app_with_user(places()).await;
        let (_, post) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"user_id": "user-1", "sauna_id": "ChIJabc"})),
        )
        .await;
        let uri = format!("/posts/{}", post["id"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            format!("Post {} deleted successfully", post["id"])
        );

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_post_rejects_non_numeric_id() {
        let app = create_app(AppState::default(), Duration::from_secs(5));

        let (status, _) = send(&app, Method::DELETE, "/posts/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
