use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    AppState,
    auth::{AuthUser, OptionalAuthUser},
    error::{AppError, Result},
    models::{
        AcceptAnswerRequest, CreateQuestionRequest, NewQuestion, Question, QuestionDetailResponse,
        QuestionFilter, QuestionSort, QuestionStatus, TargetType, VoteRequest, VoteResponse,
    },
    services::question_service,
};

/// Header carrying an anonymous viewer's session key.
pub const SESSION_HEADER: &str = "x-session-id";

/// Longer session keys are not counted as viewers.
pub const MAX_SESSION_KEY_LEN: usize = 128;

#[derive(Debug, Deserialize)]
pub struct GetQuestionsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort: Option<QuestionSort>,
    pub tag: Option<String>,
    pub q: Option<String>,
    pub author: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<GetQuestionsQuery>,
) -> Result<Json<Value>> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params
        .limit
        .unwrap_or(25)
        .clamp(1, question_service::MAX_PAGE_SIZE);

    let filter = QuestionFilter {
        tag: params.tag,
        author_id: params.author,
        search: params.q,
        sort: params.sort.unwrap_or_default(),
    };

    let store = state.store.read().await;
    let matching: Vec<Question> = question_service::list(&store, &filter)
        .into_iter()
        .cloned()
        .collect();
    let total = matching.len();
    let questions = question_service::paginate(matching, page, limit);

    Ok(Json(json!({
        "questions": questions,
        "pagination": {
            "page": page,
            "limit": limit,
            "total": total,
            "pages": total.div_ceil(limit)
        }
    })))
}

pub async fn create_question(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(mut payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<Question>)> {
    // Trim and drop duplicate tags before counting them
    let mut tags: Vec<String> = Vec::with_capacity(payload.tags.len());
    for tag in payload.tags.drain(..) {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }
    payload.tags = tags;
    payload.title = payload.title.trim().to_string();

    payload.validate()?;

    let question = state.store.write().await.add_question(NewQuestion {
        title: payload.title,
        description: payload.description,
        tags: payload.tags,
        author: auth_user.user,
        status: QuestionStatus::Open,
    });

    Ok((StatusCode::CREATED, Json(question)))
}

/// Question page: the question, its answers in posting order and the
/// caller's own votes. Each signed-in user, or anonymous session, adds one
/// view the first time it loads the page.
pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<Uuid>,
    auth_user: OptionalAuthUser,
    headers: HeaderMap,
) -> Result<Json<QuestionDetailResponse>> {
    let viewer_key = match &auth_user.0 {
        Some(user) => Some(user.user_id().to_string()),
        None => headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|session| !session.is_empty() && session.len() <= MAX_SESSION_KEY_LEN)
            .map(|session| format!("session:{session}")),
    };

    let mut store = state.store.write().await;

    if let Some(key) = viewer_key {
        store.record_view(question_id, &key);
    }

    let question = store
        .get_question_by_id(question_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    let answers = store
        .get_answers_by_question_id(question_id)
        .into_iter()
        .cloned()
        .collect();

    let user_votes = match &auth_user.0 {
        Some(user) => store
            .user_votes_for_question(question_id, user.user_id())
            .into_iter()
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(QuestionDetailResponse {
        question,
        answers,
        user_votes,
    }))
}

pub async fn vote_question(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(question_id): Path<Uuid>,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<VoteResponse>> {
    let mut store = state.store.write().await;

    let outcome = store
        .vote_on_item(
            question_id,
            TargetType::Question,
            payload.vote_type,
            auth_user.user_id(),
        )
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    let votes = store
        .get_question_by_id(question_id)
        .map(|q| q.votes)
        .unwrap_or_default();

    Ok(Json(VoteResponse {
        target_id: question_id,
        votes,
        user_vote: outcome.vote.map(|vote| vote.vote_type),
    }))
}

pub async fn accept_answer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(question_id): Path<Uuid>,
    Json(payload): Json<AcceptAnswerRequest>,
) -> Result<Json<Value>> {
    let mut store = state.store.write().await;

    let question = store
        .get_question_by_id(question_id)
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

    if question.author_id != auth_user.user_id() {
        return Err(AppError::Authorization(
            "Only the question author can accept an answer".to_string(),
        ));
    }

    if !store.accept_answer(payload.answer_id, question_id) {
        return Err(AppError::NotFound(
            "Answer not found for this question".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Answer accepted",
        "question_id": question_id,
        "accepted_answer_id": payload.answer_id
    })))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let query = params.q.unwrap_or_default();

    let store = state.store.read().await;
    let results: Vec<Question> = question_service::search(&store, &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(json!({
        "query": query,
        "count": results.len(),
        "questions": results
    })))
}
