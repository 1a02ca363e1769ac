use actix_web::test;
use serde_json::{json, Value};

use crate::support::{command, create_test_app, signed_post, TestBot};

#[actix_web::test]
async fn health_reports_active_sessions() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["active_sessions"], 0);
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));

    let open = command("1", "2", "sim", json!([{ "name": "object", "value": "rock" }]));
    test::call_service(&app, signed_post(&open).to_request()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active_sessions"], 1);
}

#[actix_web::test]
async fn root_greets() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
