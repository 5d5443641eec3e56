use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{ConversationError, ConversationView};
use crate::models::{ConversationResponse, InboxResponse, SendMessageRequest, SendMessageResponse};
use crate::routes::{error_response, AppState};

/// Configure all messaging routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/messages", web::get().to(inbox))
        .route("/messages/{id}", web::get().to(open_conversation))
        .route("/messages/{id}", web::post().to(send_message))
        .route("/messages/{id}/leave", web::post().to(leave_conversation));
}

/// Inbox listing
///
/// GET /api/v1/messages
async fn inbox(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(InboxResponse {
        matches: state.inbox.summaries().await,
    })
}

/// Open a conversation and mark it read
///
/// GET /api/v1/messages/{id}
async fn open_conversation(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.inbox.open(&path).await {
        Ok(view) => HttpResponse::Ok().json(conversation_response(view)),
        Err(e) => conversation_error(e),
    }
}

/// Send a message
///
/// POST /api/v1/messages/{id}
///
/// ```json
/// { "text": "string" }
/// ```
async fn send_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SendMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string());
    }

    match state.inbox.send(&path, &req.text).await {
        Ok(receipt) => HttpResponse::Ok().json(SendMessageResponse {
            message: receipt.message,
            reply_scheduled: receipt.reply_in.is_some(),
            reply_delay_ms: receipt.reply_in.map(|d| d.as_millis() as u64),
        }),
        Err(e) => conversation_error(e),
    }
}

/// Leave a conversation, cancelling any pending reply
///
/// POST /api/v1/messages/{id}/leave
async fn leave_conversation(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.inbox.leave(&path).await {
        Ok(cancelled) => HttpResponse::Ok().json(serde_json::json!({
            "id": path.into_inner(),
            "cancelledReply": cancelled,
        })),
        Err(e) => conversation_error(e),
    }
}

fn conversation_response(view: ConversationView) -> ConversationResponse {
    ConversationResponse {
        id: view.id,
        messages: view.messages,
        typing: view.typing,
    }
}

fn conversation_error(e: ConversationError) -> HttpResponse {
    match e {
        ConversationError::UnknownConversation(_) => {
            error_response(StatusCode::NOT_FOUND, "conversation_not_found", e.to_string())
        }
        ConversationError::EmptyMessage => {
            error_response(StatusCode::BAD_REQUEST, "empty_message", e.to_string())
        }
    }
}
