//! Kalshi environment configuration.
//!
//! Supports production and demo environments with appropriate URLs.

use std::fmt;
use std::str::FromStr;

/// Kalshi environment (production or demo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KalshiEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Demo environment (paper trading).
    Demo,
}

impl KalshiEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.elections.kalshi.com",
            Self::Demo => "https://demo-api.kalshi.co",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns true if this is the demo environment.
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }

    /// Load environment from `KALSHI_ENVIRONMENT` env var.
    ///
    /// Returns `Production` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("KALSHI_ENVIRONMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for KalshiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for KalshiEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "live" | "main" => Ok(Self::Production),
            "demo" | "paper" | "sandbox" => Ok(Self::Demo),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'demo'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}
