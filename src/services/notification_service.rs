use chrono::Utc;
use uuid::Uuid;

use crate::models::{Answer, Notification, NotificationType, Question};

/// Builds the notifications that store mutations produce.
pub struct NotificationEmitter;

impl NotificationEmitter {
    /// Notification for the question author about a new answer. Authors
    /// answering their own question are not notified.
    pub fn answer_posted(question: &Question, answer: &Answer) -> Option<Notification> {
        if question.author_id == answer.author_id {
            return None;
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: question.author_id,
            notification_type: NotificationType::Answer,
            title: "New Answer".to_string(),
            message: format!(
                "{} answered your question: {}",
                answer.author.name, question.title
            ),
            read: false,
            created_at: Utc::now(),
            related_id: Some(question.id),
        };

        tracing::info!(
            recipient = %notification.user_id,
            question_id = %question.id,
            answer_id = %answer.id,
            "Answer notification created"
        );

        Some(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionStatus, User, UserRole};

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            role: UserRole::User,
            reputation: 0,
            join_date: Utc::now(),
            avatar: None,
        }
    }

    fn question_by(author: &User) -> Question {
        let now = Utc::now();
        Question {
            id: Uuid::new_v4(),
            title: "How do lifetimes work?".to_string(),
            description: "Looking for an explanation of lifetimes".to_string(),
            tags: vec!["Rust".to_string()],
            author_id: author.id,
            author: author.clone(),
            created_at: now,
            updated_at: now,
            votes: 0,
            view_count: 0,
            answer_count: 0,
            status: QuestionStatus::Open,
            accepted_answer_id: None,
        }
    }

    fn answer_by(author: &User, question: &Question) -> Answer {
        let now = Utc::now();
        Answer {
            id: Uuid::new_v4(),
            question_id: question.id,
            content: "They describe how long references stay valid.".to_string(),
            author_id: author.id,
            author: author.clone(),
            created_at: now,
            updated_at: now,
            votes: 0,
            is_accepted: false,
        }
    }

    #[test]
    fn test_answer_from_other_user_notifies_question_author() {
        let asker = user("John");
        let helper = user("Jane");
        let question = question_by(&asker);
        let answer = answer_by(&helper, &question);

        let notification = NotificationEmitter::answer_posted(&question, &answer).unwrap();

        assert_eq!(notification.user_id, asker.id);
        assert_eq!(notification.notification_type, NotificationType::Answer);
        assert_eq!(notification.title, "New Answer");
        assert_eq!(
            notification.message,
            "Jane answered your question: How do lifetimes work?"
        );
        assert_eq!(notification.related_id, Some(question.id));
        assert!(!notification.read);
    }

    #[test]
    fn test_self_answer_is_silent() {
        let asker = user("John");
        let question = question_by(&asker);
        let answer = answer_by(&asker, &question);

        assert!(NotificationEmitter::answer_posted(&question, &answer).is_none());
    }
}
