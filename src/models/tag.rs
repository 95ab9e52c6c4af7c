use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Question;

/// Topic label. `question_count` is reference data and is not kept in step
/// with the question collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub question_count: u32,
    pub color: Option<String>,
}

// Tag page response
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub tag: Option<Tag>,
    pub questions: Vec<Question>,
}
