use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthUser,
    error::{AppError, Result},
    models::Notification,
};

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub unread_only: Option<bool>,
}

pub async fn get_notifications(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<NotificationQuery>,
) -> Result<Json<Value>> {
    let limit = params.limit.unwrap_or(20).min(100);
    let offset = params.offset.unwrap_or(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let store = state.store.read().await;

    let notifications: Vec<Notification> = store
        .notifications_for(auth_user.user_id())
        .into_iter()
        .filter(|n| !unread_only || !n.read)
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    let unread_count = store.unread_count_for(auth_user.user_id());

    Ok(Json(json!({
        "notifications": notifications,
        "unread_count": unread_count,
        "pagination": {
            "limit": limit,
            "offset": offset,
            "has_more": notifications.len() == limit
        }
    })))
}

pub async fn get_unread_count(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>> {
    let count = state
        .store
        .read()
        .await
        .unread_count_for(auth_user.user_id());

    Ok(Json(json!({
        "unread_count": count
    })))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<Value>> {
    let mut store = state.store.write().await;

    // Only the recipient may flag a notification
    let owned = store
        .notifications_for(auth_user.user_id())
        .iter()
        .any(|n| n.id == notification_id);

    if !owned || !store.mark_notification_as_read(notification_id) {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Notification marked as read"
    })))
}

pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Value>> {
    let marked = state
        .store
        .write()
        .await
        .mark_all_notifications_read(auth_user.user_id());

    Ok(Json(json!({
        "message": "All notifications marked as read",
        "marked": marked
    })))
}
