use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Tag, TagResponse},
    services::question_service,
};

pub async fn get_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>> {
    let store = state.store.read().await;
    Ok(Json(store.tags().to_vec()))
}

/// Tag page. Questions may use tags that have no catalogue entry, so the
/// page is served whenever either the tag or a tagged question exists.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TagResponse>> {
    let store = state.store.read().await;

    let tag = store.tag_by_name(&name).cloned();
    let questions: Vec<_> = question_service::by_tag(&store, &name)
        .into_iter()
        .cloned()
        .collect();

    if tag.is_none() && questions.is_empty() {
        return Err(AppError::NotFound(format!("Tag '{}' not found", name)));
    }

    Ok(Json(TagResponse { tag, questions }))
}
