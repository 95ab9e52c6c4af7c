use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    auth::AuthUser,
    error::{AppError, Result},
    models::{Answer, CreateAnswerRequest, NewAnswer, TargetType, VoteRequest, VoteResponse},
};

pub async fn get_answers(
    State(state): State<AppState>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<Value>> {
    let store = state.store.read().await;

    if store.get_question_by_id(question_id).is_none() {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    let answers: Vec<Answer> = store
        .get_answers_by_question_id(question_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(json!({
        "answers": answers,
        "count": answers.len()
    })))
}

pub async fn create_answer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(question_id): Path<Uuid>,
    Json(payload): Json<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<Answer>)> {
    payload.validate()?;

    let mut store = state.store.write().await;

    // The store would keep an orphan answer; over HTTP that is a 404
    if store.get_question_by_id(question_id).is_none() {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    let answer = store.add_answer(NewAnswer {
        question_id,
        content: payload.content,
        author: auth_user.user,
    });

    Ok((StatusCode::CREATED, Json(answer)))
}

pub async fn vote_answer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(answer_id): Path<Uuid>,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<VoteResponse>> {
    let mut store = state.store.write().await;

    let outcome = store
        .vote_on_item(
            answer_id,
            TargetType::Answer,
            payload.vote_type,
            auth_user.user_id(),
        )
        .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

    let votes = store
        .get_answer_by_id(answer_id)
        .map(|a| a.votes)
        .unwrap_or_default();

    Ok(Json(VoteResponse {
        target_id: answer_id,
        votes,
        user_vote: outcome.vote.map(|vote| vote.vote_type),
    }))
}
