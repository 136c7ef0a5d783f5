use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{
            AuthResponse, LoginRequest, ProtectedResponse, PublicUser, RegisterRequest,
            TokenResponse,
        },
        extractors::AuthClaims,
        jwt::JwtKeys,
        services,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
        .route("/refresh-token", post(refresh_token))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let user = services::register(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(&user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let (token, user) = services::login(&state.db, &keys, payload).await?;
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

#[instrument]
pub async fn protected(AuthClaims(claims): AuthClaims) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "Access granted".into(),
        user: claims,
    })
}

#[instrument(skip(state))]
pub async fn refresh_token(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<TokenResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let token = services::refresh(&keys, &claims)?;
    Ok(Json(TokenResponse { token }))
}
