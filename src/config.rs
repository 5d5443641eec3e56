use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use crate::core::{GestureThresholds, MatchThresholds, ReplySettings};
use crate::services::AuthSettings;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub messaging: MessagingSettings,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct GestureSettings {
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
    #[serde(default = "default_like_max_vertical")]
    pub like_max_vertical: f64,
    #[serde(default = "default_superlike_min_rise")]
    pub superlike_min_rise: f64,
    #[serde(default = "default_fling_distance")]
    pub fling_distance: f64,
    #[serde(default = "default_fling_rotation")]
    pub fling_rotation: f64,
    #[serde(default = "default_drag_rotation_divisor")]
    pub drag_rotation_divisor: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            velocity_threshold: default_velocity_threshold(),
            like_max_vertical: default_like_max_vertical(),
            superlike_min_rise: default_superlike_min_rise(),
            fling_distance: default_fling_distance(),
            fling_rotation: default_fling_rotation(),
            drag_rotation_divisor: default_drag_rotation_divisor(),
        }
    }
}

impl GestureSettings {
    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            velocity: self.velocity_threshold,
            like_max_vertical: self.like_max_vertical,
            superlike_min_rise: self.superlike_min_rise,
            fling_distance: self.fling_distance,
            fling_rotation: self.fling_rotation,
            drag_rotation_divisor: self.drag_rotation_divisor,
        }
    }
}

fn default_velocity_threshold() -> f64 { 0.2 }
fn default_like_max_vertical() -> f64 { 100.0 }
fn default_superlike_min_rise() -> f64 { 50.0 }
fn default_fling_distance() -> f64 { 500.0 }
fn default_fling_rotation() -> f64 { 15.0 }
fn default_drag_rotation_divisor() -> f64 { 20.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Draw must exceed this for a like to match
    #[serde(default = "default_like_threshold")]
    pub like_threshold: f64,
    #[serde(default = "default_superlike_threshold")]
    pub superlike_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            like_threshold: default_like_threshold(),
            superlike_threshold: default_superlike_threshold(),
        }
    }
}

impl MatchingSettings {
    pub fn thresholds(&self) -> MatchThresholds {
        MatchThresholds {
            like: self.like_threshold,
            superlike: self.superlike_threshold,
        }
    }
}

fn default_like_threshold() -> f64 { 0.3 }
fn default_superlike_threshold() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct MessagingSettings {
    #[serde(default = "default_reply_threshold")]
    pub reply_threshold: f64,
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,
}

impl Default for MessagingSettings {
    fn default() -> Self {
        Self {
            reply_threshold: default_reply_threshold(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
        }
    }
}

impl MessagingSettings {
    pub fn reply_settings(&self) -> ReplySettings {
        ReplySettings {
            gate_threshold: self.reply_threshold,
            min_delay: Duration::from_millis(self.reply_delay_min_ms),
            max_delay: Duration::from_millis(self.reply_delay_max_ms),
        }
    }
}

fn default_reply_threshold() -> f64 { 0.3 }
fn default_reply_delay_min_ms() -> u64 { 1000 }
fn default_reply_delay_max_ms() -> u64 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_auth_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_demo_marker")]
    pub demo_marker: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_auth_latency_ms(),
            timeout_ms: default_auth_timeout_ms(),
            demo_marker: default_demo_marker(),
        }
    }
}

impl AuthConfig {
    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            latency: Duration::from_millis(self.latency_ms),
            timeout: Duration::from_millis(self.timeout_ms),
            demo_marker: self.demo_marker.clone(),
        }
    }
}

fn default_auth_latency_ms() -> u64 { 1000 }
fn default_auth_timeout_ms() -> u64 { 10_000 }
fn default_demo_marker() -> String { "demo".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationSettings {
    /// Fixed seed for reproducible runs; entropy when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output style for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    /// Plain single-line text
    Full,
}

impl LoggingSettings {
    /// Unknown format names fall back to plain text
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Full,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SWIPEU_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SWIPEU__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SWIPEU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_match_simulation_constants() {
        let settings = Settings::default();
        assert_eq!(settings.gesture.thresholds(), GestureThresholds::default());
        assert_eq!(settings.matching.thresholds(), MatchThresholds::default());
        assert_eq!(settings.messaging.reply_settings(), ReplySettings::default());
        assert_eq!(settings.auth.auth_settings().demo_marker, "demo");
        assert!(settings.simulation.seed.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_log_format_selection() {
        let mut logging = LoggingSettings::default();
        assert_eq!(logging.log_format(), LogFormat::Json);

        logging.format = "Pretty".to_string();
        assert_eq!(logging.log_format(), LogFormat::Pretty);

        logging.format = "text".to_string();
        assert_eq!(logging.log_format(), LogFormat::Full);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[matching]\nlike_threshold = 0.5\n[simulation]\nseed = 9\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.like_threshold, 0.5);
        assert_eq!(settings.matching.superlike_threshold, 0.1);
        assert_eq!(settings.simulation.seed, Some(9));
        assert_eq!(settings.server.port, 8080);
    }
}
