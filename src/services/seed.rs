use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    models::{Answer, Question, QuestionStatus, Tag, User, UserRole},
    services::forum_store::ForumStore,
};

pub const JOHN_ID: Uuid = Uuid::from_u128(0x1);
pub const JANE_ID: Uuid = Uuid::from_u128(0x2);
pub const AUTH_QUESTION_ID: Uuid = Uuid::from_u128(0x1_0001);
pub const STATE_QUESTION_ID: Uuid = Uuid::from_u128(0x1_0002);
pub const AUTH_ANSWER_ID: Uuid = Uuid::from_u128(0x2_0001);
pub const STATE_ANSWER_ID: Uuid = Uuid::from_u128(0x2_0002);

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn avatar_for(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}",
        name.replace(' ', "%20")
    )
}

fn seed_user(id: Uuid, name: &str, email: &str, reputation: i32, joined: &str) -> User {
    User {
        id,
        email: email.to_string(),
        name: name.to_string(),
        role: UserRole::User,
        reputation,
        join_date: at(joined),
        avatar: Some(avatar_for(name)),
    }
}

fn tag(id: u128, name: &str, description: &str, question_count: u32, color: &str) -> Tag {
    Tag {
        id: Uuid::from_u128(0x3_0000 + id),
        name: name.to_string(),
        description: description.to_string(),
        question_count,
        color: Some(color.to_string()),
    }
}

/// Loads the startup data set: five tags, two questions and one answer to
/// each. The second question's answer is accepted. Answer counts are the
/// published reference figures, not derived from the answers loaded here.
pub fn populate(store: &mut ForumStore) {
    let john = seed_user(JOHN_ID, "John Doe", "john@example.com", 150, "2024-01-01T00:00:00Z");
    let jane = seed_user(JANE_ID, "Jane Smith", "jane@example.com", 89, "2024-01-05T00:00:00Z");

    store.restore_tags(vec![
        tag(1, "React", "A JavaScript library for building user interfaces", 45, "#61DAFB"),
        tag(2, "JavaScript", "Programming language of the web", 78, "#F7DF1E"),
        tag(3, "TypeScript", "Typed superset of JavaScript", 32, "#3178C6"),
        tag(4, "Next.js", "React framework for production", 28, "#000000"),
        tag(5, "CSS", "Styling language for web pages", 56, "#1572B6"),
    ]);

    store.restore_question(Question {
        id: AUTH_QUESTION_ID,
        title: "How to implement authentication in Next.js?".to_string(),
        description: "I'm building a Next.js application and need to implement user \
                      authentication. What are the best practices?"
            .to_string(),
        tags: vec![
            "Next.js".to_string(),
            "React".to_string(),
            "JavaScript".to_string(),
        ],
        author_id: john.id,
        author: john.clone(),
        created_at: at("2024-01-15T10:00:00Z"),
        updated_at: at("2024-01-15T10:00:00Z"),
        votes: 5,
        view_count: 123,
        answer_count: 3,
        status: QuestionStatus::Open,
        accepted_answer_id: None,
    });

    store.restore_question(Question {
        id: STATE_QUESTION_ID,
        title: "Best practices for React state management?".to_string(),
        description: "What are the current best practices for managing state in React \
                      applications? Should I use Context API, Redux, or something else?"
            .to_string(),
        tags: vec!["React".to_string(), "JavaScript".to_string()],
        author_id: jane.id,
        author: jane.clone(),
        created_at: at("2024-01-14T15:30:00Z"),
        updated_at: at("2024-01-14T15:30:00Z"),
        votes: 8,
        view_count: 89,
        answer_count: 2,
        status: QuestionStatus::Open,
        accepted_answer_id: Some(STATE_ANSWER_ID),
    });

    store.restore_answer(Answer {
        id: AUTH_ANSWER_ID,
        question_id: AUTH_QUESTION_ID,
        content: "You can use NextAuth.js for authentication in Next.js. It supports \
                  multiple providers and is easy to set up."
            .to_string(),
        author_id: jane.id,
        author: jane,
        created_at: at("2024-01-15T11:00:00Z"),
        updated_at: at("2024-01-15T11:00:00Z"),
        votes: 3,
        is_accepted: false,
    });

    store.restore_answer(Answer {
        id: STATE_ANSWER_ID,
        question_id: STATE_QUESTION_ID,
        content: "For most applications, React Context API is sufficient. Use Redux \
                  only for complex state management needs."
            .to_string(),
        author_id: john.id,
        author: john,
        created_at: at("2024-01-14T16:00:00Z"),
        updated_at: at("2024-01-14T16:00:00Z"),
        votes: 5,
        is_accepted: true,
    });

    tracing::info!(
        questions = 2,
        answers = 2,
        tags = store.tags().len(),
        "Seed data loaded"
    );
}
