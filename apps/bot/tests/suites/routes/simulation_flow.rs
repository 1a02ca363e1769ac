use actix_web::test;
use duel_bot::domain::{GameSession, SessionKey, SimPhase};
use duel_bot::services::follow_up::FollowUp;
use duel_bot::services::registry::SessionStore;
use serde_json::{json, Value};

use crate::support::{command, component, create_test_app, signed_post, TestBot};

#[actix_web::test]
async fn test_start_buy_walks_the_simulation() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let test_cmd = command("10", "42", "test", json!([]));
    let body: Value =
        test::call_and_read_body_json(&app, signed_post(&test_cmd).to_request()).await;
    assert_eq!(body["data"]["content"], "Click to start the simulation.");
    assert_eq!(
        body["data"]["components"][0]["components"][0]["custom_id"],
        "start_sim"
    );

    let start = component("11", "42", "start_sim", "msg-start", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&start).to_request()).await;
    assert_eq!(body["data"]["content"], "Do you want to buy or sell?");
    assert_eq!(body["data"]["flags"], 64);
    let buttons = body["data"]["components"][0]["components"].as_array().unwrap();
    assert_eq!(buttons[0]["custom_id"], "buy_42");
    assert_eq!(buttons[1]["custom_id"], "sell_42");
    assert_eq!(buttons[1]["style"], 4);

    let calls = bot.recorder.wait_for(1).await;
    assert!(matches!(&calls[0], FollowUp::DeleteMessage(t) if t.message_id == "msg-start"));

    let buy = component("12", "42", "buy_42", "msg-prompt", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&buy).to_request()).await;
    assert_eq!(
        body["data"]["content"],
        "Simulation started. Please enter the stock price."
    );
    let calls = bot.recorder.wait_for(2).await;
    let FollowUp::PatchMessage(_, data) = &calls[1] else {
        panic!("expected patch, got {calls:?}");
    };
    assert_eq!(data.content, "You chose to buy.");

    let Some(GameSession::Simulation(sim)) = bot.sessions.get(&SessionKey::new("42")).await.unwrap()
    else {
        panic!("simulation missing");
    };
    assert_eq!(sim.phase, SimPhase::AwaitingPrice);
}

#[actix_web::test]
async fn start_without_test_reports_no_simulation() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let start = component("11", "42", "start_sim", "msg-start", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&start).to_request()).await;
    assert_eq!(body["data"]["content"], "No active simulation found.");
    assert_eq!(body["data"]["flags"], 64);
    assert_eq!(bot.sessions.len().await.unwrap(), 0);
}

#[actix_web::test]
async fn second_start_click_is_rejected_after_trade() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    for payload in [
        command("10", "42", "test", json!([])),
        component("11", "42", "start_sim", "m1", &[]),
        component("12", "42", "sell_42", "m2", &[]),
    ] {
        test::call_service(&app, signed_post(&payload).to_request()).await;
    }

    let again = component("13", "42", "start_sim", "m1", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&again).to_request()).await;
    assert_eq!(body["data"]["flags"], 64);
    assert_ne!(body["data"]["content"], "Do you want to buy or sell?");
}
