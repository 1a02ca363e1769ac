//! Interaction bodies in the platform's wire shape, plus signing.

use actix_web::test::TestRequest;
use bot_test_support::signing::sign;
use duel_bot::auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use serde_json::{json, Value};

pub const TIMESTAMP: &str = "1700000000";

pub fn ping() -> Value {
    json!({ "id": "1", "type": 1, "token": "tok-ping" })
}

pub fn command(id: &str, user: &str, name: &str, options: Value) -> Value {
    json!({
        "id": id,
        "type": 2,
        "token": format!("tok-{id}"),
        "data": { "name": name, "options": options },
        "member": { "user": { "id": user } }
    })
}

pub fn component(
    id: &str,
    user: &str,
    custom_id: &str,
    message_id: &str,
    values: &[&str],
) -> Value {
    json!({
        "id": id,
        "type": 3,
        "token": format!("tok-{id}"),
        "data": { "custom_id": custom_id, "component_type": 2, "values": values },
        "member": { "user": { "id": user } },
        "message": { "id": message_id }
    })
}

/// POST to `/interactions` with a valid signature over the exact bytes sent.
pub fn signed_post(body: &Value) -> TestRequest {
    signed_raw(serde_json::to_vec(body).expect("serializable body"))
}

pub fn signed_raw(raw: Vec<u8>) -> TestRequest {
    TestRequest::post()
        .uri("/interactions")
        .insert_header(("content-type", "application/json"))
        .insert_header((SIGNATURE_HEADER, sign(TIMESTAMP, &raw)))
        .insert_header((TIMESTAMP_HEADER, TIMESTAMP))
        .set_payload(raw)
}
