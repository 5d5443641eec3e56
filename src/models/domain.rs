use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campus profile shown on a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub major: String,
    #[serde(rename = "classYear")]
    pub class_year: String,
    #[serde(rename = "profileType", default)]
    pub profile_type: Vec<ProfileType>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Similarity percentage (0-100) shown as a badge when present
    #[serde(default)]
    pub similarity: Option<u8>,
}

/// What a student is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Relationship,
    Friendship,
    Roommate,
    Study,
}

/// Discrete result of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeOutcome {
    /// Skip
    Left,
    /// Like
    Right,
    /// Superlike
    Up,
}

impl SwipeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SwipeOutcome::Left => "skip",
            SwipeOutcome::Right => "like",
            SwipeOutcome::Up => "superlike",
        }
    }
}

/// Mutually liked profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub outcome: SwipeOutcome,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

/// Single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// True when written by the local user
    pub sent: bool,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl Message {
    /// Outgoing message, not yet read by the other side
    pub fn outgoing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sent: true,
            time: Utc::now(),
            read: Some(false),
        }
    }

    pub fn incoming(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sent: false,
            time: Utc::now(),
            read: None,
        }
    }
}

/// Inbox row for a matched profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub online: bool,
    pub unread: bool,
    #[serde(rename = "lastMessage")]
    pub last_message: Option<String>,
    #[serde(rename = "lastMessageAt")]
    pub last_message_at: Option<DateTime<Utc>>,
    pub typing: bool,
}

/// Drag event as reported by the pointer/gesture layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragInput {
    /// Pointer still pressed
    pub down: bool,
    /// Cumulative displacement (dx, dy); negative dy is upward
    pub movement: (f64, f64),
    /// Sign of the horizontal direction of travel
    #[serde(rename = "directionX")]
    pub direction_x: f64,
    pub velocity: f64,
}

/// Card position to render
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

impl CardTransform {
    pub const ORIGIN: CardTransform = CardTransform { x: 0.0, y: 0.0, rotate: 0.0 };

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

/// Preferred partner age range (relationship profiles only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 25 }
    }
}

/// Profile wizard fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDraft {
    // Basic info
    pub name: String,
    pub age: Option<u8>,
    pub gender: String,
    pub pronouns: String,
    pub major: String,
    pub class_year: String,

    pub profile_type: Vec<ProfileType>,

    // Activities
    pub clubs: Vec<String>,
    pub athletics: Vec<String>,
    pub interests: Vec<String>,

    // Social media
    pub instagram: String,
    pub snapchat: String,

    // Lifestyle
    pub sleep_schedule: String,
    pub social_preferences: String,
    pub study_habits: String,

    // Relationship specific
    pub orientation: String,
    pub preferred_age_range: AgeRange,

    pub bio: Option<String>,
    pub image_url: Option<String>,
}
