use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use bot_test_support::problem_details::assert_problem_details;
use duel_bot::auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use duel_bot::services::registry::SessionStore;
use serde_json::json;

use crate::support::payloads::TIMESTAMP;
use crate::support::{command, create_test_app, ping, signed_post, TestBot};

#[actix_web::test]
async fn unsigned_request_is_rejected() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let req = TestRequest::post()
        .uri("/interactions")
        .set_json(ping())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "MISSING_SIGNATURE", StatusCode::UNAUTHORIZED).await;
}

#[actix_web::test]
async fn signature_over_other_bytes_is_rejected_before_dispatch() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let signed_for = bot_test_support::signing::sign(TIMESTAMP, br#"{"id":"1","type":1}"#);
    let open = command("900", "111", "sim", json!([{ "name": "object", "value": "rock" }]));
    let req = TestRequest::post()
        .uri("/interactions")
        .insert_header((SIGNATURE_HEADER, signed_for))
        .insert_header((TIMESTAMP_HEADER, TIMESTAMP))
        .set_json(open)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_SIGNATURE", StatusCode::UNAUTHORIZED).await;

    assert_eq!(bot.sessions.len().await.unwrap(), 0);
}

#[actix_web::test]
async fn valid_signature_passes() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let resp = test::call_service(&app, signed_post(&ping()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
