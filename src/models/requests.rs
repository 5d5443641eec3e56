use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::SwipeOutcome;

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Signup form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
    #[validate(length(min = 1))]
    #[serde(default, alias = "confirm_password", rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(default, alias = "agree_to_terms", rename = "agreeToTerms")]
    pub agree_to_terms: bool,
}

/// Button press on the matching page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    pub direction: SwipeOutcome,
}

/// Drag event against the current card
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GestureRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    pub down: bool,
    pub movement: (f64, f64),
    #[serde(alias = "direction_x", rename = "directionX")]
    pub direction_x: f64,
    pub velocity: f64,
}

/// Outgoing chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    pub text: String,
}
