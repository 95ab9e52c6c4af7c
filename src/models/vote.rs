use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Question,
    Answer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Tally contribution of a single vote of this type.
    pub fn weight(self) -> i32 {
        match self {
            VoteType::Up => 1,
            VoteType::Down => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub target_type: TargetType,
    #[serde(rename = "type")]
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
}

/// What a single cast did to the ledger and to the target's tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub delta: i32,
    /// The caller's vote after the cast; `None` when it was toggled off.
    pub vote: Option<Vote>,
}

// Vote request
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}

// Vote response
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub target_id: Uuid,
    pub votes: i32,
    pub user_vote: Option<VoteType>,
}
