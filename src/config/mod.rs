use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub alerts: AlertConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let recipient = env::var("ALERT_RECIPIENT")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let scorecard_base_url = env::var("SCORECARD_BASE_URL")
            .unwrap_or_else(|_| "https://supplierportal.example.com".to_string());
        if scorecard_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            alerts: AlertConfig {
                recipient,
                scorecard_base_url,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for composing alert notifications.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Default recipient address; a CLI flag may override it.
    pub recipient: Option<String>,
    /// Base URL of the scorecard system used for deep links in alert bodies.
    pub scorecard_base_url: String,
}

/// Settings controlling log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBaseUrl,
    MissingRecipient,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBaseUrl => {
                write!(f, "SCORECARD_BASE_URL is set but empty")
            }
            ConfigError::MissingRecipient => {
                write!(
                    f,
                    "no alert recipient configured; set ALERT_RECIPIENT or pass --recipient"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
