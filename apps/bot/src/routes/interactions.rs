//! The interactions webhook: verify, classify, dispatch, ack, then follow up.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, info};

use crate::auth::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::protocol::{Ack, Interaction, InteractionEvent};
use crate::services::interactions::Dispatch;
use crate::state::app_state::AppState;

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

async fn interactions(
    req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.verifier.verify(
        header(&req, SIGNATURE_HEADER),
        header(&req, TIMESTAMP_HEADER),
        &body,
    )?;

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request(
            ErrorCode::InvalidPayload,
            format!("Interaction body is not valid JSON: {e}"),
        )
    })?;
    debug!(interaction_id = %interaction.id, kind = interaction.kind, "Interaction received");
    let event = InteractionEvent::try_from(interaction)?;

    match app_state.dispatcher.dispatch(event).await? {
        Dispatch::Reply(reply) => {
            let (ack, follow_ups) = reply.into_parts();
            let response = HttpResponse::Ok().json(&ack);
            // Workers run a current-thread runtime, so the spawned follow-ups
            // cannot start before this handler returns the ack.
            app_state.follow_ups.spawn(follow_ups);
            Ok(response)
        }
        Dispatch::Ignored(reason) => {
            info!(reason = %reason, "Acknowledging without a message");
            Ok(HttpResponse::Ok().json(Ack::DeferredUpdate))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/interactions", web::post().to(interactions));
}
