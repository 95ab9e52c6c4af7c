//! In-memory forum state.
//!
//! `ForumStore` is the single owner of questions, answers, votes,
//! notifications and tags for the lifetime of the process. Nothing is
//! persisted; a fresh store is either empty or filled with the seed set.
//!
//! Mutations never fail. A mutation naming an id the store does not know is
//! a no-op, reported through the `Option`/`bool` return value so the HTTP
//! layer can decide whether that is a 404.
//!
//! ## Ordering
//!
//! - questions are listed newest first (`add_question` prepends)
//! - answers under a question are listed in the order they were posted
//! - notifications are listed newest first
//!
//! ## Views
//!
//! Every distinct (question, viewer key) pair counted by `record_view` is
//! kept for the life of the process, so the set grows with the number of
//! viewers. Callers bound the key length before recording.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::{
        Answer, NewAnswer, NewQuestion, Notification, Question, TargetType, Tag, Vote,
        VoteOutcome, VoteType,
    },
    services::{notification_service::NotificationEmitter, seed, vote_ledger::VoteLedger},
};

#[derive(Debug, Default)]
pub struct ForumStore {
    questions: HashMap<Uuid, Question>,
    /// Newest first.
    question_order: Vec<Uuid>,
    answers: HashMap<Uuid, Answer>,
    /// Question id → answer ids in posting order.
    question_answers: HashMap<Uuid, Vec<Uuid>>,
    votes: VoteLedger,
    /// Newest first.
    notifications: Vec<Notification>,
    tags: Vec<Tag>,
    /// (question id, viewer key) pairs already counted by `record_view`.
    views: HashSet<(Uuid, String)>,
}

impl ForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the fixed data set served on startup.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        store
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn add_question(&mut self, data: NewQuestion) -> Question {
        let now = Utc::now();
        let question = Question {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            tags: data.tags,
            author_id: data.author.id,
            author: data.author,
            created_at: now,
            updated_at: now,
            votes: 0,
            view_count: 0,
            answer_count: 0,
            status: data.status,
            accepted_answer_id: None,
        };

        self.question_order.insert(0, question.id);
        self.questions.insert(question.id, question.clone());

        tracing::info!(question_id = %question.id, author = %question.author_id, "Question added");
        question
    }

    /// Stores the answer and, when the parent question exists, bumps its
    /// answer count and notifies its author. An unknown `question_id` still
    /// stores the answer but skips both side effects.
    pub fn add_answer(&mut self, data: NewAnswer) -> Answer {
        let now = Utc::now();
        let answer = Answer {
            id: Uuid::new_v4(),
            question_id: data.question_id,
            content: data.content,
            author_id: data.author.id,
            author: data.author,
            created_at: now,
            updated_at: now,
            votes: 0,
            is_accepted: false,
        };

        self.push_answer(answer.clone());

        match self.questions.get_mut(&answer.question_id) {
            Some(question) => {
                question.answer_count += 1;
                if let Some(notification) = NotificationEmitter::answer_posted(question, &answer) {
                    self.notifications.insert(0, notification);
                }
            }
            None => {
                tracing::debug!(
                    question_id = %answer.question_id,
                    "Answer stored for unknown question; count and notification skipped"
                );
            }
        }

        tracing::info!(answer_id = %answer.id, question_id = %answer.question_id, "Answer added");
        answer
    }

    /// Casts `user_id`'s vote and applies the resulting delta to the target.
    ///
    /// Returns `None` without touching the ledger when no target of
    /// `target_type` has that id.
    pub fn vote_on_item(
        &mut self,
        target_id: Uuid,
        target_type: TargetType,
        vote_type: VoteType,
        user_id: Uuid,
    ) -> Option<VoteOutcome> {
        let exists = match target_type {
            TargetType::Question => self.questions.contains_key(&target_id),
            TargetType::Answer => self.answers.contains_key(&target_id),
        };
        if !exists {
            tracing::debug!(%target_id, ?target_type, "Vote on unknown target ignored");
            return None;
        }

        let outcome = self.votes.cast(user_id, target_id, target_type, vote_type);

        match target_type {
            TargetType::Question => {
                if let Some(question) = self.questions.get_mut(&target_id) {
                    question.votes += outcome.delta;
                }
            }
            TargetType::Answer => {
                if let Some(answer) = self.answers.get_mut(&target_id) {
                    answer.votes += outcome.delta;
                }
            }
        }

        tracing::info!(%target_id, %user_id, delta = outcome.delta, "Vote applied");
        Some(outcome)
    }

    /// Marks `answer_id` as the accepted answer of `question_id` and clears
    /// the flag on its siblings. A previous acceptance is overwritten.
    ///
    /// Callers must check that the caller owns the question. Returns `false`
    /// if either id is unknown or the answer belongs to another question.
    pub fn accept_answer(&mut self, answer_id: Uuid, question_id: Uuid) -> bool {
        let belongs = self
            .answers
            .get(&answer_id)
            .is_some_and(|answer| answer.question_id == question_id);
        let Some(question) = self.questions.get_mut(&question_id) else {
            return false;
        };
        if !belongs {
            tracing::debug!(%answer_id, %question_id, "Answer does not belong to question");
            return false;
        }

        question.accepted_answer_id = Some(answer_id);

        let siblings = self
            .question_answers
            .get(&question_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for id in siblings {
            if let Some(answer) = self.answers.get_mut(id) {
                answer.is_accepted = *id == answer_id;
            }
        }

        tracing::info!(%answer_id, %question_id, "Answer accepted");
        true
    }

    pub fn mark_notification_as_read(&mut self, notification_id: Uuid) -> bool {
        match self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Returns how many notifications changed state.
    pub fn mark_all_notifications_read(&mut self, user_id: Uuid) -> usize {
        let mut marked = 0;
        for notification in self
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            notification.read = true;
            marked += 1;
        }
        marked
    }

    pub fn increment_view_count(&mut self, question_id: Uuid) -> bool {
        match self.questions.get_mut(&question_id) {
            Some(question) => {
                question.view_count += 1;
                true
            }
            None => false,
        }
    }

    /// Counts a view of `question_id` once per `viewer_key`. Later calls with
    /// the same key (re-renders, reloads) leave the count alone.
    ///
    /// Returns `true` only when the count was incremented.
    pub fn record_view(&mut self, question_id: Uuid, viewer_key: &str) -> bool {
        if !self.questions.contains_key(&question_id) {
            return false;
        }
        if !self.views.insert((question_id, viewer_key.to_string())) {
            return false;
        }
        self.increment_view_count(question_id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn get_question_by_id(&self, id: Uuid) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn get_answer_by_id(&self, id: Uuid) -> Option<&Answer> {
        self.answers.get(&id)
    }

    pub fn get_answers_by_question_id(&self, question_id: Uuid) -> Vec<&Answer> {
        self.question_answers
            .get(&question_id)
            .map(|ids| ids.iter().filter_map(|id| self.answers.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn get_user_vote(&self, target_id: Uuid, user_id: Uuid) -> Option<&Vote> {
        self.votes.get(target_id, user_id)
    }

    /// The caller's votes on a question and on each of its answers.
    pub fn user_votes_for_question(&self, question_id: Uuid, user_id: Uuid) -> Vec<&Vote> {
        let mut targets = vec![question_id];
        if let Some(ids) = self.question_answers.get(&question_id) {
            targets.extend(ids.iter().copied());
        }
        targets
            .into_iter()
            .filter_map(|target_id| self.votes.get(target_id, user_id))
            .collect()
    }

    /// Newest first.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.question_order
            .iter()
            .filter_map(|id| self.questions.get(id))
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notifications_for(&self, user_id: Uuid) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .collect()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn unread_count_for(&self, user_id: Uuid) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name.eq_ignore_ascii_case(name))
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    // ------------------------------------------------------------------
    // Seeding
    // ------------------------------------------------------------------

    /// Inserts a fully formed question after the existing ones, without
    /// touching any counters.
    pub(crate) fn restore_question(&mut self, question: Question) {
        self.question_order.push(question.id);
        self.questions.insert(question.id, question);
    }

    /// Inserts a fully formed answer without side effects on its question.
    pub(crate) fn restore_answer(&mut self, answer: Answer) {
        self.push_answer(answer);
    }

    pub(crate) fn restore_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    fn push_answer(&mut self, answer: Answer) {
        self.question_answers
            .entry(answer.question_id)
            .or_default()
            .push(answer.id);
        self.answers.insert(answer.id, answer);
    }
}
