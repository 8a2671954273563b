//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::designed::DesignedFilter;
use crate::error::ConfigError;
use crate::filter_config::FilterConfig;
use crate::validation::{ValidationResult, validate_preset};

/// A named filter design.
///
/// The design itself is normalized; `sample_rate` records which rate the
/// cutoff was chosen for so that it can be shown in Hz and checked against
/// the audio it is applied to.
///
/// # TOML Format
///
/// ```toml
/// name = "Telephone"
/// description = "Narrowband voice channel"
/// sample_rate = 8000
///
/// [filter]
/// family = "chebyshev"
/// order = 6
/// cutoff = 0.425
/// ripple_db = 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate the cutoff was chosen for (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// The filter design.
    #[serde(default)]
    pub filter: FilterConfig,
}

fn default_sample_rate() -> u32 {
    48000
}

impl FilterPreset {
    /// Create a preset for `filter`.
    pub fn new(name: impl Into<String>, filter: FilterConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            filter,
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the sample rate and filter fields.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_preset(self)
    }

    /// Cutoff in Hz at the preset's sample rate.
    pub fn cutoff_hz(&self) -> f64 {
        self.filter.cutoff_hz(f64::from(self.sample_rate))
    }

    /// Design the filter, rejecting invalid configuration.
    pub fn build(&self) -> Result<DesignedFilter, ConfigError> {
        self.validate()?;
        Ok(self.filter.build())
    }
}

impl Default for FilterPreset {
    fn default() -> Self {
        Self::new("Untitled", FilterConfig::default())
    }
}
