// Core simulation exports
pub mod conversation;
pub mod deck;
pub mod gesture;
pub mod matcher;
pub mod scheduler;
pub mod wizard;

pub use conversation::{ConversationError, ConversationSimulator, ConversationView, ReplySettings, SendReceipt, Thread, SCRIPTED_REPLIES};
pub use deck::{MatchingSession, SwipeDeck, SwipeError, SwipeResult};
pub use gesture::{GestureClassifier, GestureResult, GestureThresholds};
pub use matcher::{MatchSimulator, MatchThresholds};
pub use scheduler::KeyedTasks;
pub use wizard::{ProfileWizard, TagList, WizardError};
