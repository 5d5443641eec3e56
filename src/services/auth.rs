use std::time::Duration;
use thiserror::Error;
use validator::Validate;
use crate::models::{AuthResponse, LoginRequest, SignupRequest};

/// User-visible form errors
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Invalid credentials. Try using a demo email.")]
    InvalidCredentials,

    #[error("Something went wrong. Please try again.")]
    Unexpected,
}

/// Mock authentication settings
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Simulated network latency
    pub latency: Duration,
    /// The simulated call fails if it takes longer than this
    pub timeout: Duration,
    /// Emails containing this are accepted
    pub demo_marker: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000),
            timeout: Duration::from_secs(10),
            demo_marker: "demo".to_string(),
        }
    }
}

/// Login and signup with a simulated network round trip
#[derive(Debug, Clone, Default)]
pub struct AuthService {
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(settings: AuthSettings) -> Self {
        Self { settings }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, FormError> {
        req.validate().map_err(|_| FormError::MissingFields)?;

        self.simulate_call().await?;

        if !req.email.contains(&self.settings.demo_marker) {
            tracing::info!("Rejected login for non-demo email");
            return Err(FormError::InvalidCredentials);
        }

        tracing::info!("Login accepted for {}", req.email);
        Ok(session_for(&req.email))
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, FormError> {
        req.validate().map_err(|_| FormError::MissingFields)?;
        if req.password != req.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !req.agree_to_terms {
            return Err(FormError::TermsNotAccepted);
        }

        self.simulate_call().await?;

        tracing::info!("Signup accepted for {}", req.email);
        Ok(session_for(&req.email))
    }

    /// Stand-in for the backend round trip. Anything going wrong here
    /// surfaces as the generic error.
    async fn simulate_call(&self) -> Result<(), FormError> {
        tokio::time::timeout(self.settings.timeout, tokio::time::sleep(self.settings.latency))
            .await
            .map_err(|e| {
                tracing::error!("Simulated auth call failed: {}", e);
                FormError::Unexpected
            })
    }
}

fn session_for(email: &str) -> AuthResponse {
    AuthResponse {
        token: uuid::Uuid::new_v4().to_string(),
        email: email.to_string(),
        redirect: "/profile".to_string(),
    }
}
