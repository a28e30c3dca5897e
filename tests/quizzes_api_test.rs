use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use oop_learning_api::{
    config::Config, routes, services::grading_service::DuplicateAnswerPolicy,
    store::ContentStore, AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn setup_app(policy: DuplicateAnswerPolicy) -> Router {
    let store = ContentStore::seeded().expect("seeded content");
    let state = AppState::with_policy(store, policy);
    routes::app(state, &Config::default())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn submit(app: &Router, quiz_id: i32, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(format!("/quizzes/{}/submit", quiz_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn lists_and_fetches_quizzes() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);

    let (status, body) = send(&app, get_request("/quizzes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, get_request("/quizzes/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lesson_id"], 1);
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
    assert_eq!(body["questions"][2]["correct_answer"], 2);

    let (status, body) = send(&app, get_request("/quizzes/9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Quiz not found");
}

#[tokio::test]
async fn lists_quizzes_for_lesson() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);

    let (status, body) = send(&app, get_request("/quizzes/lesson/2")).await;
    assert_eq!(status, StatusCode::OK);
    let quizzes = body.as_array().unwrap();
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0]["title"], "Inheritance Quiz");

    let (status, body) = send(&app, get_request("/quizzes/lesson/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn grades_partial_submission() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);
    let (status, body) = submit(
        &app,
        1,
        json!({
            "answers": [
                {"question_id": 1, "answer": 1},
                {"question_id": 2, "answer": 0},
                {"question_id": 3, "answer": 2}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["percentage"], 66.67);
    assert_eq!(body["passed"], false);
    let feedback = body["feedback"].as_array().unwrap();
    assert_eq!(feedback.len(), 3);
    assert_eq!(
        feedback[0],
        "Q1: ✓ Correct! A class is a blueprint or template that defines the structure and behavior for objects."
    );
    assert!(feedback[1].as_str().unwrap().starts_with("Q2: ✗ Incorrect. "));
}

#[tokio::test]
async fn full_marks_pass() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);
    let (status, body) = submit(
        &app,
        2,
        json!({"answers": [{"question_id": 1, "answer": 1}, {"question_id": 2, "answer": 2}]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 2);
    assert_eq!(body["percentage"], 100.0);
    assert_eq!(body["passed"], true);
}

#[tokio::test]
async fn empty_and_unknown_answers_score_nothing() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);

    let (status, body) = submit(&app, 1, json!({"answers": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert_eq!(body["total"], 3);
    assert_eq!(body["passed"], false);
    assert!(body["feedback"].as_array().unwrap().is_empty());

    let (status, body) = submit(&app, 1, json!({"answers": [{"question_id": 99, "answer": 1}]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert!(body["feedback"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_answers_follow_policy() {
    let dupes = json!({"answers": [{"question_id": 1, "answer": 1}, {"question_id": 1, "answer": 1}]});

    let app = setup_app(DuplicateAnswerPolicy::CountEach);
    let (_, body) = submit(&app, 1, dupes.clone()).await;
    assert_eq!(body["score"], 2);
    assert_eq!(body["total"], 3);

    let app = setup_app(DuplicateAnswerPolicy::FirstOnly);
    let (_, body) = submit(&app, 1, dupes).await;
    assert_eq!(body["score"], 1);
    assert_eq!(body["feedback"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn submitting_to_unknown_quiz_is_404() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);
    let (status, body) = submit(&app, 3, json!({"answers": [{"question_id": 1, "answer": 1}]})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Quiz not found");
}

#[tokio::test]
async fn malformed_submission_is_rejected() {
    let app = setup_app(DuplicateAnswerPolicy::CountEach);
    let (status, _) = submit(&app, 1, json!({"answers": [{"question_id": "one"}]})).await;
    assert!(status.is_client_error());
}
