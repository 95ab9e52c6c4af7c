use axum::{extract::State, http::StatusCode, response::Json};
use validator::Validate;

use crate::{
    AppState,
    auth::{Claims, hash_password, verify_password},
    error::Result,
    models::{AuthResponse, LoginRequest, RegisterRequest},
    services::auth_service::invalid_credentials,
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    // Hash before taking the directory lock
    let password_hash = hash_password(payload.password).await?;

    let user = state
        .users
        .write()
        .await
        .sign_up(&payload.email, password_hash, &payload.name)?;

    let (token, _claims) = Claims::new(
        &user,
        &state.config.jwt_secret,
        state.config.token_ttl_hours,
    )?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    payload.validate()?;

    let (user, password_hash) = state.users.read().await.credentials(&payload.email)?;

    if !verify_password(payload.password, password_hash).await? {
        return Err(invalid_credentials());
    }

    let (token, claims) = Claims::new(
        &user,
        &state.config.jwt_secret,
        state.config.token_ttl_hours,
    )?;
    tracing::info!(user_id = %user.id, jti = %claims.jti, "User signed in");

    Ok(Json(AuthResponse { token, user }))
}
