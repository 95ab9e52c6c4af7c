use axum::{extract::State, response::Json};
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    AppState,
    auth::AuthUser,
    error::Result,
    models::{Question, UpdateUserRequest, User, UserStats},
    services::question_service,
};

pub async fn get_current_user(auth_user: AuthUser) -> Result<Json<User>> {
    Ok(Json(auth_user.user))
}

pub async fn update_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>> {
    payload.validate()?;

    let user = state
        .users
        .write()
        .await
        .update_user(auth_user.user_id(), payload)?;

    Ok(Json(user))
}

pub async fn get_my_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserStats>> {
    let store = state.store.read().await;
    Ok(Json(question_service::user_stats(&store, auth_user.user_id())))
}

pub async fn get_my_questions(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>> {
    let store = state.store.read().await;
    let questions: Vec<Question> = question_service::by_author(&store, auth_user.user_id())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(json!({
        "questions": questions,
        "count": questions.len()
    })))
}
