// Route exports
pub mod analyze;
pub mod auth;
pub mod errors;
pub mod health;

use actix_web::web;
use crate::core::Recommender;
use crate::services::TokenVerifier;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub verifier: TokenVerifier,
    pub max_upload_bytes: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(analyze::configure),
    );
}
