//! Configuration Management
//!
//! Loads ring buffer settings from TOML files, with environment overrides:
//! - `ringbuffer.toml` in the working directory when no path is given
//! - `RINGBUFFER_CAPACITY` overrides the capacity from any source

use crate::buffer::RingBuffer;
use crate::element::Element;
use crate::errors::RingBufferError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Capacity used when neither a file nor the environment sets one.
pub const DEFAULT_CAPACITY: i64 = 64;

/// Default config file looked up when `load` gets no explicit path.
pub const DEFAULT_CONFIG_FILE: &str = "ringbuffer.toml";

/// Environment variable that overrides the configured capacity.
pub const CAPACITY_ENV_VAR: &str = "RINGBUFFER_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBufferConfig {
    /// Signed so that a negative value in a file is reported as an invalid
    /// capacity rather than a parse failure.
    #[serde(default = "default_capacity")]
    pub capacity: i64,
}

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

impl Default for RingBufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl RingBufferConfig {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Failed to load config from {}", p))?
            }
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(content) => Self::from_toml_str(&content)?,
                Err(_) => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        if let Ok(capacity) = std::env::var(CAPACITY_ENV_VAR) {
            if let Ok(n) = capacity.parse::<i64>() {
                config.capacity = n;
            }
        }

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Construct a buffer sized by this config.
    pub fn build<T: Element>(&self) -> crate::Result<RingBuffer<T>> {
        let capacity =
            usize::try_from(self.capacity).map_err(|_| RingBufferError::InvalidCapacity)?;
        RingBuffer::new(capacity)
    }
}

impl<T: Element> RingBuffer<T> {
    pub fn from_config(config: &RingBufferConfig) -> crate::Result<Self> {
        config.build()
    }
}
