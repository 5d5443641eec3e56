//! SwipeU - swipe, match and messaging simulation for a campus social app
//!
//! The library holds the interaction core: classifying drag gestures into
//! swipes, simulating whether a swipe becomes a match, and faking the other
//! side of each conversation with cancellable reply timers. All randomness is
//! injected so runs can be replayed from a seed.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ConversationSimulator, GestureClassifier, MatchSimulator, MatchingSession, SwipeDeck};
pub use crate::models::{DragInput, Message, Profile, SwipeOutcome};
