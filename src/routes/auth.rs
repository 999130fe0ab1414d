use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest, HttpResponse, Responder};
use std::future::{ready, Ready};
use crate::models::{SessionResponse, SessionUser};
use crate::routes::AppState;
use crate::services::{AuthError, Claims};

/// Principal of a request that carried a valid bearer token
///
/// Taking this as a handler argument keeps the handler from running for
/// unauthenticated requests; they get a 401 instead.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.verifier.verify_header(header),
            None => {
                tracing::error!("Token verifier missing from application state");
                Err(AuthError::InvalidToken)
            }
        };

        if let Err(e) = &result {
            tracing::debug!("Rejected request to {}: {}", req.path(), e);
        }

        ready(result.map(AuthenticatedUser))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/me", web::get().to(current_user));
}

/// Current session endpoint
///
/// GET /api/auth/me
async fn current_user(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(SessionResponse {
        user: SessionUser {
            id: user.0.user_id,
            email: user.0.email,
        },
    })
}
