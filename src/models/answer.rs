use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub votes: i32,
    pub is_accepted: bool,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: Uuid,
    pub content: String,
    pub author: User,
}

// Create answer request
#[derive(Debug, Validate, Deserialize)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 50, message = "Answer must be at least 50 characters long"))]
    pub content: String,
}

// Accept answer request
#[derive(Debug, Deserialize)]
pub struct AcceptAnswerRequest {
    pub answer_id: Uuid,
}
