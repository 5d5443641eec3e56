// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, CardTransform, DragInput, Match, MatchSummary, Message, Profile, ProfileDraft, ProfileType, SwipeOutcome};
pub use requests::{GestureRequest, LoginRequest, SendMessageRequest, SignupRequest, SwipeRequest};
pub use responses::{AuthResponse, ConversationResponse, DeckResponse, ErrorResponse, GestureResponse, HealthResponse, InboxResponse, SendMessageResponse, SwipeResponse};
