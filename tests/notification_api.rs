mod common;

use axum::http::{Method, StatusCode};

use common::helpers::{create_answer, create_empty_test_app, create_question, register, send};

#[tokio::test]
async fn test_new_answer_notifies_question_author() {
    let app = create_empty_test_app();
    let (asker, asker_id) = register(&app, "asker@example.com", "Asker").await;
    let (helper, _) = register(&app, "helper@example.com", "Helper").await;
    let question_id = create_question(&app, &asker, "Where do my notifications go?").await;

    create_answer(&app, &helper, &question_id).await;
    // Answering your own question is silent
    create_answer(&app, &asker, &question_id).await;

    let (status, body) = send(&app, Method::GET, "/api/notifications", Some(&asker), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unread_count"], 1);

    let notification = &body["notifications"][0];
    assert_eq!(notification["user_id"], asker_id);
    assert_eq!(notification["type"], "answer");
    assert_eq!(notification["title"], "New Answer");
    assert_eq!(
        notification["message"],
        "Helper answered your question: Where do my notifications go?"
    );
    assert_eq!(notification["related_id"], question_id);
    assert_eq!(notification["read"], false);

    let (_, body) = send(&app, Method::GET, "/api/notifications", Some(&helper), None).await;
    assert!(body["notifications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_mark_read_flows() {
    let app = create_empty_test_app();
    let (asker, _) = register(&app, "asker@example.com", "Asker").await;
    let (helper, _) = register(&app, "helper@example.com", "Helper").await;
    let question_id = create_question(&app, &asker, "Please notify me a few times").await;
    for _ in 0..3 {
        create_answer(&app, &helper, &question_id).await;
    }

    let (_, body) = send(&app, Method::GET, "/api/notifications", Some(&asker), None).await;
    let first_id = body["notifications"][0]["id"].as_str().unwrap().to_string();
    let read_uri = format!("/api/notifications/{}/read", first_id);

    // Someone else's notification looks missing
    let (status, _) = send(&app, Method::POST, &read_uri, Some(&helper), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, &read_uri, Some(&asker), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/notifications/unread-count", Some(&asker), None).await;
    assert_eq!(body["unread_count"], 2);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/notifications?unread_only=true",
        Some(&asker),
        None,
    )
    .await;
    assert_eq!(body["notifications"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::POST, "/api/notifications/read-all", Some(&asker), None).await;
    assert_eq!(body["marked"], 2);

    let (_, body) = send(&app, Method::GET, "/api/notifications/unread-count", Some(&asker), None).await;
    assert_eq!(body["unread_count"], 0);
}
