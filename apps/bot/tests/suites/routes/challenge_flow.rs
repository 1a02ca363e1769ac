use actix_web::test;
use duel_bot::domain::SessionKey;
use duel_bot::services::follow_up::FollowUp;
use duel_bot::services::registry::SessionStore;
use serde_json::{json, Value};

use crate::support::{
    command, component, create_test_app, ping, signed_post, RecordingExecutor, TestBot,
};

#[actix_web::test]
async fn ping_is_answered_with_pong() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let body: Value = test::call_and_read_body_json(&app, signed_post(&ping()).to_request()).await;
    assert_eq!(body, json!({ "type": 1 }));
}

#[actix_web::test]
async fn challenge_accept_select_round_trip() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    // Challenger opens with rock.
    let open = command("900", "111", "sim", json!([{ "name": "object", "value": "rock" }]));
    let body: Value = test::call_and_read_body_json(&app, signed_post(&open).to_request()).await;
    assert_eq!(body["type"], 4);
    assert_eq!(body["data"]["content"], "Rock papers scissors challenge from <@111>");
    assert_eq!(
        body["data"]["components"][0]["components"][0]["custom_id"],
        "accept_button_900"
    );
    assert!(body["data"].get("flags").is_none());

    // Opponent accepts; the public challenge message is deleted afterwards.
    let accept = component("901", "222", "accept_button_900", "msg-challenge", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&accept).to_request()).await;
    assert_eq!(body["data"]["content"], "What is your object of choice?");
    assert_eq!(body["data"]["flags"], 64);
    let select = &body["data"]["components"][0]["components"][0];
    assert_eq!(select["type"], 3);
    assert_eq!(select["custom_id"], "select_choice_900");
    assert_eq!(select["options"].as_array().unwrap().len(), 3);

    let calls = bot.recorder.wait_for(1).await;
    let FollowUp::DeleteMessage(target) = &calls[0] else {
        panic!("expected delete, got {calls:?}");
    };
    assert_eq!(target.message_id, "msg-challenge");
    assert_eq!(target.token, "tok-901");

    // Opponent picks scissors; rock crushes scissors.
    let pick = component("902", "222", "select_choice_900", "msg-select", &["scissors"]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&pick).to_request()).await;
    assert_eq!(body["type"], 4);
    assert_eq!(
        body["data"]["content"],
        "<@111>'s **rock** crushes <@222>'s **scissors**"
    );

    let calls = bot.recorder.wait_for(2).await;
    let FollowUp::PatchMessage(target, data) = &calls[1] else {
        panic!("expected patch, got {calls:?}");
    };
    assert_eq!(target.message_id, "msg-select");
    assert!(data.content.starts_with("Nice choice "));
    assert_eq!(data.components, Some(Vec::new()));

    assert!(bot
        .sessions
        .get(&SessionKey::new("900"))
        .await
        .unwrap()
        .is_none());

    // A replayed pick finds nothing and is acknowledged silently.
    let body: Value = test::call_and_read_body_json(&app, signed_post(&pick).to_request()).await;
    assert_eq!(body, json!({ "type": 6 }));
}

#[actix_web::test]
async fn draw_is_reported_as_draw() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let open = command("77", "1", "sim", json!([{ "name": "object", "value": "paper" }]));
    test::call_service(&app, signed_post(&open).to_request()).await;

    let pick = component("78", "2", "select_choice_77", "m", &["paper"]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&pick).to_request()).await;
    assert_eq!(body["data"]["content"], "<@1> and <@2> draw with **paper**");
}

#[actix_web::test]
async fn failing_follow_up_does_not_affect_ack_or_later_calls() {
    let bot = TestBot::with_executor(RecordingExecutor::failing_first(1));
    let app = create_test_app(bot.state.clone()).await;

    let open = command("900", "111", "sim", json!([{ "name": "object", "value": "scissors" }]));
    test::call_service(&app, signed_post(&open).to_request()).await;

    let accept = component("901", "222", "accept_button_900", "m1", &[]);
    let body: Value =
        test::call_and_read_body_json(&app, signed_post(&accept).to_request()).await;
    assert_eq!(body["type"], 4);
    assert_eq!(body["data"]["content"], "What is your object of choice?");
    assert_eq!(body["data"]["flags"], 64);
    let select = &body["data"]["components"][0]["components"][0];
    assert_eq!(select["custom_id"], "select_choice_900");
    let values: Vec<&str> = select["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["rock", "paper", "scissors"]);

    // The rejected delete is still the one recorded for the accept.
    let calls = bot.recorder.wait_for(1).await;
    let FollowUp::DeleteMessage(target) = &calls[0] else {
        panic!("expected delete, got {calls:?}");
    };
    assert_eq!(target.message_id, "m1");
    assert_eq!(target.token, "tok-901");

    let pick = component("902", "222", "select_choice_900", "m2", &["rock"]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&pick).to_request()).await;
    assert_eq!(
        body["data"]["content"],
        "<@222>'s **rock** crushes <@111>'s **scissors**"
    );
    assert_eq!(bot.recorder.wait_for(2).await.len(), 2);
}

#[actix_web::test]
async fn unknown_command_and_control_get_ephemeral_notices() {
    let bot = TestBot::new();
    let app = create_test_app(bot.state.clone()).await;

    let unknown = command("5", "1", "dance", json!([]));
    let body: Value = test::call_and_read_body_json(&app, signed_post(&unknown).to_request()).await;
    assert_eq!(body["type"], 4);
    assert_eq!(body["data"]["flags"], 64);

    let stale = component("6", "1", "button1", "m", &[]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&stale).to_request()).await;
    assert_eq!(body["data"]["flags"], 64);
    assert!(bot.recorder.calls().is_empty());
}

#[actix_web::test]
async fn expired_challenge_cannot_be_resolved() {
    let bot = TestBot::with_session_ttl(std::time::Duration::from_millis(20));
    let app = create_test_app(bot.state.clone()).await;

    let open = command("900", "111", "sim", json!([{ "name": "object", "value": "rock" }]));
    test::call_service(&app, signed_post(&open).to_request()).await;
    tokio::time::sleep(std::time::Duration::from_millis(40)).await;

    let pick = component("902", "222", "select_choice_900", "m", &["paper"]);
    let body: Value = test::call_and_read_body_json(&app, signed_post(&pick).to_request()).await;
    assert_eq!(body, json!({ "type": 6 }));
}
