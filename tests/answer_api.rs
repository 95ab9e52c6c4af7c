mod common;

use axum::http::{Method, StatusCode};
use qa_forum::services::seed::{AUTH_ANSWER_ID, AUTH_QUESTION_ID};
use serde_json::json;

use common::helpers::{
    create_answer, create_empty_test_app, create_question, create_test_app, register, send,
};

#[tokio::test]
async fn test_answers_append_and_bump_count() {
    let app = create_empty_test_app();
    let (asker, _) = register(&app, "asker@example.com", "Asker").await;
    let (helper, helper_id) = register(&app, "helper@example.com", "Helper").await;
    let question_id = create_question(&app, &asker, "Why does my future not run?").await;

    let first = create_answer(&app, &helper, &question_id).await;
    let second = create_answer(&app, &asker, &question_id).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/questions/{}/answers", question_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["answers"][0]["id"], first);
    assert_eq!(body["answers"][1]["id"], second);
    assert_eq!(body["answers"][0]["author_id"], helper_id);
    assert_eq!(body["answers"][0]["is_accepted"], false);

    let (_, detail) = send(
        &app,
        Method::GET,
        &format!("/api/questions/{}", question_id),
        None,
        None,
    )
    .await;
    assert_eq!(detail["question"]["answer_count"], 2);
}

#[tokio::test]
async fn test_answer_validation_and_unknown_question() {
    let app = create_test_app();
    let (helper, _) = register(&app, "helper@example.com", "Helper").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/questions/{}/answers", AUTH_QUESTION_ID),
        Some(&helper),
        Some(json!({ "content": "Too short to help anyone." })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "content: Answer must be at least 50 characters long"
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/questions/00000000-0000-0000-0000-00000000ffff/answers",
        Some(&helper),
        Some(json!({
            "content": "A long enough answer that would be fine if the question existed."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/questions/00000000-0000-0000-0000-00000000ffff/answers",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_answer_votes_from_several_users() {
    let app = create_test_app();
    let (alice, _) = register(&app, "alice@example.com", "Alice").await;
    let (bob, _) = register(&app, "bob@example.com", "Bob").await;
    let uri = format!("/api/answers/{}/vote", AUTH_ANSWER_ID);

    // Seed tally is 3
    let (status, body) = send(&app, Method::POST, &uri, Some(&alice), Some(json!({ "vote_type": "up" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["votes"], 4);

    let (_, body) = send(&app, Method::POST, &uri, Some(&bob), Some(json!({ "vote_type": "down" }))).await;
    assert_eq!(body["votes"], 3);

    let (_, body) = send(&app, Method::POST, &uri, Some(&alice), Some(json!({ "vote_type": "down" }))).await;
    assert_eq!(body["votes"], 1);
    assert_eq!(body["user_vote"], "down");

    let (status, _) = send(&app, Method::POST, &uri, None, Some(json!({ "vote_type": "up" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/answers/{}/vote", AUTH_QUESTION_ID),
        Some(&alice),
        Some(json!({ "vote_type": "up" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
