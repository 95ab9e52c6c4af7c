use std::collections::{HashMap, hash_map::Entry};

use chrono::Utc;
use uuid::Uuid;

use crate::models::{TargetType, Vote, VoteOutcome, VoteType};

/// Holds at most one vote per (user, target) pair.
///
/// The ledger never rejects a cast. A repeated vote of the same type removes
/// the existing vote and an opposite vote flips it in place. The returned
/// delta is what the caller must add to the target's tally.
#[derive(Debug, Default)]
pub struct VoteLedger {
    votes: HashMap<(Uuid, Uuid), Vote>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(
        &mut self,
        user_id: Uuid,
        target_id: Uuid,
        target_type: TargetType,
        vote_type: VoteType,
    ) -> VoteOutcome {
        match self.votes.entry((user_id, target_id)) {
            // Toggle off
            Entry::Occupied(entry) if entry.get().vote_type == vote_type => {
                entry.remove();
                VoteOutcome {
                    delta: -vote_type.weight(),
                    vote: None,
                }
            }
            // Flip
            Entry::Occupied(mut entry) => {
                entry.get_mut().vote_type = vote_type;
                VoteOutcome {
                    delta: 2 * vote_type.weight(),
                    vote: Some(entry.get().clone()),
                }
            }
            Entry::Vacant(entry) => {
                let vote = Vote {
                    id: Uuid::new_v4(),
                    user_id,
                    target_id,
                    target_type,
                    vote_type,
                    created_at: Utc::now(),
                };
                entry.insert(vote.clone());
                VoteOutcome {
                    delta: vote_type.weight(),
                    vote: Some(vote),
                }
            }
        }
    }

    pub fn get(&self, target_id: Uuid, user_id: Uuid) -> Option<&Vote> {
        self.votes.get(&(user_id, target_id))
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
