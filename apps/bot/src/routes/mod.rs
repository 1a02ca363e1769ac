use actix_web::web;

pub mod health;
pub mod interactions;

/// Register every route. `main.rs` and the integration tests share this so
/// the tested surface is the served surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);
    cfg.configure(interactions::configure_routes);
}
