use std::cmp::Reverse;

use uuid::Uuid;

use crate::{
    models::{Question, QuestionFilter, QuestionSort, UserStats},
    services::forum_store::ForumStore,
};

pub const MAX_PAGE_SIZE: usize = 100;

/// Case-insensitive match against title, description, tags and author name.
/// A blank term matches every question.
pub fn matches_search(question: &Question, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    question.title.to_lowercase().contains(&term)
        || question.description.to_lowercase().contains(&term)
        || question
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&term))
        || question.author.name.to_lowercase().contains(&term)
}

pub fn search<'a>(store: &'a ForumStore, term: &str) -> Vec<&'a Question> {
    store
        .questions()
        .filter(|question| matches_search(question, term))
        .collect()
}

pub fn by_tag<'a>(store: &'a ForumStore, tag: &str) -> Vec<&'a Question> {
    store
        .questions()
        .filter(|question| question.has_tag(tag))
        .collect()
}

pub fn by_author(store: &ForumStore, author_id: Uuid) -> Vec<&Question> {
    store
        .questions()
        .filter(|question| question.author_id == author_id)
        .collect()
}

/// Applies `filter` and its sort order. The store's newest-first order is the
/// tie breaker for every sort.
pub fn list<'a>(store: &'a ForumStore, filter: &QuestionFilter) -> Vec<&'a Question> {
    let mut questions: Vec<&Question> = store
        .questions()
        .filter(|q| filter.tag.as_deref().is_none_or(|tag| q.has_tag(tag)))
        .filter(|q| filter.author_id.is_none_or(|author| q.author_id == author))
        .filter(|q| {
            filter
                .search
                .as_deref()
                .is_none_or(|term| matches_search(q, term))
        })
        .collect();

    match filter.sort {
        QuestionSort::Newest => questions.sort_by_key(|q| Reverse(q.created_at)),
        QuestionSort::Active => {
            questions.sort_by_key(|q| (Reverse(q.updated_at), Reverse(q.answer_count)))
        }
        QuestionSort::Unanswered => {
            questions.retain(|q| q.answer_count == 0);
            questions.sort_by_key(|q| Reverse(q.created_at));
        }
        QuestionSort::Votes => questions.sort_by_key(|q| Reverse(q.votes)),
    }

    questions
}

/// One page of `items`, 1-based. `limit` is clamped to `1..=MAX_PAGE_SIZE`.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Vec<T> {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    // A page past `usize::MAX` items is simply empty
    let Some(offset) = page.saturating_sub(1).checked_mul(limit) else {
        return Vec::new();
    };
    items.into_iter().skip(offset).take(limit).collect()
}

pub fn user_stats(store: &ForumStore, user_id: Uuid) -> UserStats {
    let mut stats = UserStats::default();

    for question in by_author(store, user_id) {
        stats.questions_asked += 1;
        stats.votes_received += i64::from(question.votes);
    }
    for answer in store.answers().filter(|a| a.author_id == user_id) {
        stats.answers_given += 1;
        stats.votes_received += i64::from(answer.votes);
    }

    stats
}
