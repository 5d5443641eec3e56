use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{SwipeError, Thread};
use crate::models::{DeckResponse, DragInput, GestureRequest, GestureResponse, SwipeOutcome, SwipeRequest, SwipeResponse};
use crate::routes::{error_response, AppState};

/// Configure all matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/matching/current", web::get().to(current_deck))
        .route("/matching/gesture", web::post().to(gesture))
        .route("/matching/swipe", web::post().to(swipe))
        .route("/matching/reset", web::post().to(reset));
}

/// Current card, remaining count and matches so far
///
/// GET /api/v1/matching/current
async fn current_deck(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(deck_snapshot(&state).await)
}

/// Button swipe
///
/// POST /api/v1/matching/swipe
///
/// ```json
/// { "profileId": "string", "direction": "left|right|up" }
/// ```
async fn swipe(state: web::Data<AppState>, req: web::Json<SwipeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string());
    }

    match apply_swipe(&state, &req.profile_id, req.direction).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => swipe_error(e),
    }
}

/// Drag event on the current card
///
/// POST /api/v1/matching/gesture
///
/// Returns the card transform to render. A release classified as a swipe is
/// applied to the deck and the swipe result is included.
async fn gesture(state: web::Data<AppState>, req: web::Json<GestureRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string());
    }

    let result = state.classifier.classify(&DragInput {
        down: req.down,
        movement: req.movement,
        direction_x: req.direction_x,
        velocity: req.velocity,
    });

    let swipe = match result.outcome {
        Some(outcome) => match apply_swipe(&state, &req.profile_id, outcome).await {
            Ok(swipe) => Some(swipe),
            Err(e) => return swipe_error(e),
        },
        None => None,
    };

    HttpResponse::Ok().json(GestureResponse {
        transform: result.transform,
        outcome: result.outcome,
        swipe,
    })
}

/// Start a new session over the same profiles (demo only)
///
/// POST /api/v1/matching/reset
async fn reset(state: web::Data<AppState>) -> impl Responder {
    state.session.lock().await.restart(state.profiles.to_vec());
    HttpResponse::Ok().json(deck_snapshot(&state).await)
}

async fn deck_snapshot(state: &AppState) -> DeckResponse {
    let session = state.session.lock().await;
    let deck = session.deck();
    DeckResponse {
        session_id: session.id().to_string(),
        current: deck.current().cloned(),
        remaining: deck.remaining(),
        matches: deck.matches().to_vec(),
    }
}

/// Swipe on the deck; a match opens a conversation thread
async fn apply_swipe(
    state: &AppState,
    profile_id: &str,
    outcome: SwipeOutcome,
) -> Result<SwipeResponse, SwipeError> {
    let (result, match_count) = {
        let mut session = state.session.lock().await;
        let result = session.swipe(profile_id, outcome)?;
        (result, session.deck().matches().len())
    };

    if let Some(profile) = &result.matched {
        state.inbox.add_thread(Thread::for_profile(profile)).await;
    }

    Ok(SwipeResponse {
        outcome: result.outcome,
        matched: result.matched,
        next: result.next,
        match_count,
    })
}

fn swipe_error(e: SwipeError) -> HttpResponse {
    let error = match e {
        SwipeError::DeckExhausted => "deck_exhausted",
        SwipeError::StaleProfile { .. } => "stale_profile",
    };
    tracing::info!("Swipe rejected: {}", e);
    error_response(StatusCode::CONFLICT, error, e.to_string())
}
