use serde::{Deserialize, Serialize};
use crate::models::domain::{CardTransform, Match, MatchSummary, Message, Profile, SwipeOutcome};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Successful login or signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    /// Where the client should go next
    pub redirect: String,
}

/// State of the matching page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub current: Option<Profile>,
    pub remaining: usize,
    pub matches: Vec<Match>,
}

/// Result of a swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub outcome: SwipeOutcome,
    pub matched: Option<Profile>,
    pub next: Option<Profile>,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}

/// Result of a drag event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureResponse {
    pub transform: CardTransform,
    pub outcome: Option<SwipeOutcome>,
    pub swipe: Option<SwipeResponse>,
}

/// Inbox listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxResponse {
    pub matches: Vec<MatchSummary>,
}

/// Open conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub id: String,
    pub messages: Vec<Message>,
    pub typing: bool,
}

/// Accepted outgoing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message: Message,
    #[serde(rename = "replyScheduled")]
    pub reply_scheduled: bool,
    #[serde(rename = "replyDelayMs")]
    pub reply_delay_ms: Option<u64>,
}
