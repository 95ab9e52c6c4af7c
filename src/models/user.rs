use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// Public profile of a forum member.
///
/// Questions and answers embed a copy of this taken when they are created.
/// The copy is never refreshed, so later profile edits do not show up on
/// existing posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub reputation: i32,
    pub join_date: DateTime<Utc>,
    pub avatar: Option<String>,
}

// Directory record; the hash never leaves the process
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: String,
}

// Register request
#[derive(Debug, Validate, Deserialize)]
pub struct RegisterRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
}

// Login request
#[derive(Debug, Validate, Deserialize)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// Update user request
#[derive(Debug, Default, Validate, Deserialize)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Activity totals shown on a member's profile page.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct UserStats {
    pub questions_asked: usize,
    pub answers_given: usize,
    pub votes_received: i64,
}
