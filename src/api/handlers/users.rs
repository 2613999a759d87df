//! User CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use mongodb::bson::oid::ObjectId;

use crate::api::dto::{MessageResponse, UserPayload, UserResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates user-related routes.
///
/// Routes:
/// - GET /users         - List all users
/// - POST /users        - Create a new user
/// - GET /users/{id}    - Get user by ID
/// - PUT /users/{id}    - Update user by ID
/// - DELETE /users/{id} - Delete user by ID
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Parses a path segment into an ObjectId.
///
/// A segment that is not a valid ObjectId can never match a stored user, so
/// it is reported as `NotFound` rather than as a bad request.
fn parse_user_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| AppError::not_found("User", "_id", raw))
}

/// GET /users - List all users
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.repositories.users.find_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id} - Get user by ID
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_user_id(&id)?;
    let user = state.repositories.users.find_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /users - Create new user
///
/// Returns 201 Created with the stored user, including its new `_id`.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .repositories
        .users
        .insert(payload.into_new_user())
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id} - Update user
///
/// The id always comes from the path; an `_id` in the body is ignored.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_user_id(&id)?;
    let user = state.repositories.users.update(payload.into_user(id)).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - Delete user
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;
    state.repositories.users.delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
