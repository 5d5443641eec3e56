use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::{LoginRequest, SignupRequest};
use crate::routes::{error_response, AppState};
use crate::services::FormError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/auth/signup", web::post().to(signup));
}

/// Login endpoint
///
/// POST /api/v1/auth/login
///
/// ```json
/// { "email": "string", "password": "string" }
/// ```
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    match state.auth.login(&req).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => form_error(e),
    }
}

/// Signup endpoint
///
/// POST /api/v1/auth/signup
///
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "password": "string",
///   "confirmPassword": "string",
///   "agreeToTerms": true
/// }
/// ```
async fn signup(state: web::Data<AppState>, req: web::Json<SignupRequest>) -> impl Responder {
    match state.auth.signup(&req).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => form_error(e),
    }
}

fn form_error(e: FormError) -> HttpResponse {
    let (status, error) = match e {
        FormError::MissingFields => (StatusCode::BAD_REQUEST, "missing_fields"),
        FormError::PasswordMismatch => (StatusCode::BAD_REQUEST, "password_mismatch"),
        FormError::TermsNotAccepted => (StatusCode::BAD_REQUEST, "terms_not_accepted"),
        FormError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
        FormError::Unexpected => (StatusCode::INTERNAL_SERVER_ERROR, "unexpected"),
    };
    tracing::info!("Auth form rejected: {}", e);
    error_response(status, error, e.to_string())
}
