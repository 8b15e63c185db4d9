//! Runtime configuration.
//!
//! Everything comes from `SAVVY__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file. Every key has a default, so an
//! empty environment gives an in-memory development server on port 8080.
//!
//! ```no_run
//! use savvy_advisor::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("configuration");
//! println!("binding {:?}", config.server.socket_addr());
//! ```

mod assessment;
mod assistant;
mod error;
mod otp;
mod server;
mod storage;

pub use assessment::AssessmentConfig;
pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use otp::OtpConfig;
pub use server::{CorsPolicy, Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Where session records live.
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub assessment: AssessmentConfig,

    #[serde(default)]
    pub otp: OtpConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `SAVVY__` environment.
    ///
    /// `SAVVY__STORAGE__BACKEND=file` sets `storage.backend`; single
    /// underscores stay part of the key, as in `SAVVY__OTP__TTL_SECS`.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::LoadError(config::ConfigError::Message(
                    e.to_string(),
                )));
            }
        }

        let source = config::Environment::default()
            .prefix("SAVVY")
            .prefix_separator("__")
            .separator("__");

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// [`AppConfig::load`] followed by [`AppConfig::validate`].
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks each section; the first offending key wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.otp.validate()?;
        self.assistant.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
