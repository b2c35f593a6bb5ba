//! # GLINT Configuration
//!
//! Marquee and controller defaults, loaded once at startup from TOML.
//! Durations are written in milliseconds:
//!
//! ```toml
//! [marquee]
//! marquee_on = "hover"
//! marquee_delay_ms = 500
//! marquee_speed = 90.0
//!
//! [controller]
//! start_on_focus = true
//! stall_timeout_ms = 10000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GlintError, GlintResult};
use crate::marquee::{ControllerConfig, MarqueeConfig};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlintConfig {
    /// Defaults for every marquee.
    pub marquee: MarqueeConfig,
    /// Defaults for marquee groups.
    pub controller: ControllerConfig,
}

impl GlintConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Parse`] for malformed TOML or unknown keys and
    /// [`GlintError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> GlintResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`GlintConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> GlintResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| GlintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Serialize`] if a value cannot be represented.
    pub fn to_toml_string(&self) -> GlintResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::InvalidConfig`] for an invalid marquee config
    /// or a zero stall timeout.
    pub fn validate(&self) -> GlintResult<()> {
        self.marquee.validate()?;
        if self.controller.stall_timeout == Some(Duration::ZERO) {
            return Err(GlintError::InvalidConfig(
                "stall_timeout_ms must be greater than zero, omit it to wait forever".into(),
            ));
        }
        Ok(())
    }
}
