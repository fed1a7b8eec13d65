//! Configuration module for the registration service
//!
//! This module loads configuration from environment variables (and a `.env`
//! file when present) into strongly-typed sections.

use envconfig::Envconfig;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{Clock, SystemClock, ValidationRules};

/// Main configuration structure
#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    /// Server configuration
    #[envconfig(nested)]
    pub server: ServerConfig,

    /// Validation thresholds
    #[envconfig(nested)]
    pub validation: ValidationConfig,

    /// Feature flags
    #[envconfig(nested)]
    pub features: FeatureFlags,
}

/// Server configuration
#[derive(Debug, Clone, Envconfig)]
pub struct ServerConfig {
    /// Host to bind to
    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[envconfig(from = "PORT", default = "5000")]
    pub port: u16,

    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,

    /// Request timeout in seconds
    #[envconfig(from = "REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Registration rule thresholds
#[derive(Debug, Clone, Envconfig)]
pub struct ValidationConfig {
    /// Minimum username length in characters
    #[envconfig(from = "MIN_USERNAME_LENGTH", default = "3")]
    pub min_username_length: usize,

    /// Earliest accepted birth year
    #[envconfig(from = "MIN_BIRTH_YEAR", default = "1900")]
    pub min_birth_year: i32,
}

impl ValidationConfig {
    /// Rules handed to the registration validator
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            min_username_length: self.min_username_length,
            min_birth_year: self.min_birth_year,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let rules = ValidationRules::default();
        Self {
            min_username_length: rules.min_username_length,
            min_birth_year: rules.min_birth_year,
        }
    }
}

/// Feature flags
#[derive(Debug, Clone, Envconfig)]
pub struct FeatureFlags {
    /// Serve the HTML registration form at `/`
    #[envconfig(from = "ENABLE_REGISTRATION_PAGE", default = "true")]
    pub registration_page: bool,

    /// Allow cross-origin requests
    #[envconfig(from = "ENABLE_CORS", default = "true")]
    pub cors: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::config("Server port cannot be 0"));
        }

        if self.validation.min_username_length == 0 {
            return Err(Error::config("Minimum username length must be at least 1"));
        }

        let current_year = SystemClock.today().year();
        if self.validation.min_birth_year > current_year {
            return Err(Error::config(format!(
                "Minimum birth year {} is later than the current year {}",
                self.validation.min_birth_year, current_year
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            server_address = %self.server.address(),
            environment = %self.server.environment,
            log_level = %self.server.log_level,
            "Server configuration"
        );

        tracing::info!(
            min_username_length = %self.validation.min_username_length,
            min_birth_year = %self.validation.min_birth_year,
            "Validation configuration"
        );

        tracing::info!(
            registration_page = %self.features.registration_page,
            cors = %self.features.cors,
            "Feature flags"
        );
    }
}
