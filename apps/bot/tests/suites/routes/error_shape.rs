use actix_web::http::StatusCode;
use actix_web::test;
use bot_test_support::problem_details::assert_problem_details;
use serde_json::json;

use crate::support::payloads::signed_raw;
use crate::support::{create_test_app, signed_post, TestBot};

#[actix_web::test]
async fn unknown_interaction_type_is_400() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let body = json!({ "id": "1", "type": 4, "token": "t" });
    let resp = test::call_service(&app, signed_post(&body).to_request()).await;
    let problem =
        assert_problem_details(resp, "UNKNOWN_INTERACTION_TYPE", StatusCode::BAD_REQUEST).await;
    assert_eq!(problem.title, "Unknown Interaction Type");
    assert!(problem.type_.ends_with("/UNKNOWN_INTERACTION_TYPE"));
}

#[actix_web::test]
async fn malformed_body_is_invalid_payload() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let resp = test::call_service(&app, signed_raw(b"{not json".to_vec()).to_request()).await;
    assert_problem_details(resp, "INVALID_PAYLOAD", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn command_without_user_is_rejected() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let body = json!({ "id": "1", "type": 2, "token": "t", "data": { "name": "test" } });
    let resp = test::call_service(&app, signed_post(&body).to_request()).await;
    assert_problem_details(resp, "INVALID_PAYLOAD", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn success_responses_carry_trace_header() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let resp = test::call_service(&app, signed_post(&crate::support::ping()).to_request()).await;
    let trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace.is_empty());
}
