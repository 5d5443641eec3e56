use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::wizard::build_profile;
use crate::models::ProfileDraft;
use crate::routes::error_response;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::post().to(create_profile));
}

/// Submit a completed profile wizard
///
/// POST /api/v1/profile
///
/// Every wizard step is validated; the first failing step is reported.
async fn create_profile(draft: web::Json<ProfileDraft>) -> impl Responder {
    let id = uuid::Uuid::new_v4().to_string();
    match build_profile(&draft, id) {
        Ok(profile) => {
            tracing::info!("Created profile {} for {}", profile.id, profile.name);
            HttpResponse::Created().json(profile)
        }
        Err(e) => {
            tracing::info!("Profile draft rejected: {}", e);
            error_response(StatusCode::BAD_REQUEST, "invalid_profile", e.to_string())
        }
    }
}
