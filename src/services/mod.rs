// Service exports
pub mod auth;
pub mod fixtures;

pub use auth::{AuthService, AuthSettings, FormError};
pub use fixtures::{sample_profiles, sample_threads};
