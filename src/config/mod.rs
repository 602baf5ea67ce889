//! Configuration for conf-booking
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults (`Default` impls below)
//! 2. A TOML/YAML/JSON file (`--config FILE`, or `config.toml` in the
//!    platform config directory if it exists)
//! 3. Environment variables prefixed with `CONF_BOOKING`, using `__` between
//!    levels, e.g. `CONF_BOOKING__CONFERENCE__TICKETS=10`
//! 4. Command-line overrides applied by the caller

use crate::error::{BookingError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CONF_BOOKING";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub conference: ConferenceConfig,
    pub notification: NotificationConfig,
    pub validation: ValidationConfig,
}

/// Conference being booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceConfig {
    /// Name shown in the greeting and confirmations
    pub name: String,
    /// Ticket capacity the ledger starts with
    pub tickets: u32,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: "Go Conference".to_string(),
            tickets: 50,
        }
    }
}

/// Simulated confirmation delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay before a confirmation is "sent", in milliseconds
    pub delay_ms: u64,
    /// Wait for outstanding confirmations before the program exits
    pub drain_on_exit: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 50_000,
            drain_on_exit: false,
        }
    }
}

impl NotificationConfig {
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Validation reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report one message per failed rule instead of one per field group
    pub detailed_errors: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            detailed_errors: true,
        }
    }
}

impl Config {
    /// Default location of the user configuration file
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "conf-booking").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from defaults, an optional file and the environment
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Missing keys fall back to the serde defaults on each section
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(BookingError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        } else if let Some(default_path) = Self::default_path() {
            builder = builder.add_source(config::File::from(default_path).required(false));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, name: Option<String>, tickets: Option<u32>) -> Result<Self> {
        if let Some(name) = name {
            self.conference.name = name;
        }
        if let Some(tickets) = tickets {
            self.conference.tickets = tickets;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.conference.name.trim().is_empty() {
            return Err(BookingError::Config(
                "conference.name cannot be empty".to_string(),
            ));
        }
        if self.conference.tickets == 0 {
            return Err(BookingError::Config(
                "conference.tickets must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
