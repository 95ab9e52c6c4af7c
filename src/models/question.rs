use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Answer, User, Vote};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Open,
    Closed,
    Answered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author_id: Uuid,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub votes: i32,
    pub view_count: u32,
    pub answer_count: u32,
    pub status: QuestionStatus,
    pub accepted_answer_id: Option<Uuid>,
}

impl Question {
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(name))
    }
}

/// Input to `ForumStore::add_question`. The store fills in the id,
/// timestamps and counters.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: User,
    pub status: QuestionStatus,
}

// Create question request
#[derive(Debug, Validate, Deserialize)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 10,
        max = 150,
        message = "Title must be between 10 and 150 characters long"
    ))]
    pub title: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters long"))]
    pub description: String,
    #[validate(length(min = 1, max = 5, message = "Please add between 1 and 5 tags"))]
    pub tags: Vec<String>,
}

// Question detail response
#[derive(Debug, Serialize)]
pub struct QuestionDetailResponse {
    pub question: Question,
    pub answers: Vec<Answer>,
    pub user_votes: Vec<Vote>,
}

// Sorting options for question listings
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSort {
    #[default]
    Newest,
    Active,
    Unanswered,
    Votes,
}

/// Filter applied by the listing query. Empty fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub tag: Option<String>,
    pub author_id: Option<Uuid>,
    pub search: Option<String>,
    pub sort: QuestionSort,
}
