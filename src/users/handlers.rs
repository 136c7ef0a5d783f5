use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, UpdateUserRequest, UserFilter};
use crate::users::repo_types::{NewUser, User};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/filter", get(filter_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    // No duplicate pre-check here; a unique violation surfaces as a store error.
    let user = User::insert(
        &state.db,
        NewUser {
            name: &payload.name,
            email: &payload.email,
            password_hash: None,
            role: &payload.role,
            status: &payload.status,
        },
    )
    .await?;
    info!(user_id = %user.id, email = %user.email, "user row created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = User::update(&state.db, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(user_id = %user.id, "user row updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = User::delete(&state.db, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    info!(user_id = %id, "user row deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn filter_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<User>>, ApiError> {
    let (role, status) = filter.normalized();
    let users = User::filter(&state.db, role, status).await?;
    Ok(Json(users))
}
