// Route exports
pub mod auth;
pub mod matching;
pub mod messages;
pub mod profile;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::config::Settings;
use crate::core::{ConversationSimulator, GestureClassifier, MatchSimulator, MatchingSession};
use crate::models::{ErrorResponse, HealthResponse, Profile};
use crate::services::{sample_profiles, sample_threads, AuthService};

const MATCHING_STREAM: u64 = 1;
const MESSAGING_STREAM: u64 = 2;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub classifier: GestureClassifier,
    pub session: Arc<Mutex<MatchingSession>>,
    pub inbox: ConversationSimulator,
    pub profiles: Arc<Vec<Profile>>,
}

impl AppState {
    /// Build state from settings and load the fixtures
    pub async fn from_settings(settings: &Settings) -> Self {
        let profiles = sample_profiles();

        let session = MatchingSession::new(
            profiles.clone(),
            MatchSimulator::new(settings.matching.thresholds()),
            simulation_rng(settings.simulation.seed, MATCHING_STREAM),
        );

        let inbox = ConversationSimulator::new(
            settings.messaging.reply_settings(),
            simulation_rng(settings.simulation.seed, MESSAGING_STREAM),
        );
        for thread in sample_threads() {
            inbox.add_thread(thread).await;
        }

        Self {
            auth: AuthService::new(settings.auth.auth_settings()),
            classifier: GestureClassifier::new(settings.gesture.thresholds()),
            session: Arc::new(Mutex::new(session)),
            inbox,
            profiles: Arc::new(profiles),
        }
    }
}

/// Seeded generator when a seed is configured, one independent stream per component
pub fn simulation_rng(seed: Option<u64>, stream: u64) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(stream);
            rng
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(auth::configure)
            .configure(profile::configure)
            .configure(matching::configure)
            .configure(messages::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// JSON error body with the given status
pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}
