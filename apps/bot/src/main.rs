use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use duel_bot::routes;
use duel_bot::telemetry;
use duel_bot::{
    build_state, spawn_reaper, Config, DiscordClient, RequestTrace, StructuredLogger, TraceSpan,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let discord = match DiscordClient::new(&config.discord) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Failed to build platform client");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .from_config(&config)
        .with_executor(discord)
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let reaper = spawn_reaper(app_state.sessions.clone(), config.reap_interval);

    info!(host = %config.host, port = config.port, "Starting duel-bot");

    let data = web::Data::new(app_state);
    let result = HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    reaper.abort();
    result
}
