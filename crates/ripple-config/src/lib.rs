//! Configuration and preset management for ripple filters.
//!
//! `ripple-core` clamps whatever it is given; this crate is the layer that
//! checks user-facing configuration strictly and reports what is wrong before
//! a filter is designed.
//!
//! # Features
//!
//! - **Filter configs**: [`FilterConfig`] names a family, order, cutoff and ripple
//! - **Runtime family choice**: [`DesignedFilter`] wraps either cascade type
//! - **Presets**: Load and save [`FilterPreset`]s as TOML
//! - **Validation**: Range checks with every problem reported at once
//! - **Factory presets**: Built-in designs for common jobs
//!
//! # Example
//!
//! ```rust,no_run
//! use ripple_config::{Family, FilterConfig, FilterPreset};
//! use ripple_core::SampleProcessor;
//!
//! // Load a preset from file
//! let preset = FilterPreset::load("anti_alias.toml").unwrap();
//!
//! // Or describe one in code
//! let preset = FilterPreset::new(
//!     "Telephone",
//!     FilterConfig::new(Family::Chebyshev)
//!         .with_order(6)
//!         .with_cutoff_hz(3400.0, 8000.0)
//!         .with_ripple_db(0.5),
//! )
//! .with_sample_rate(8000);
//!
//! preset.validate().unwrap();
//! let mut filter = preset.filter.build();
//! let _ = filter.process(1.0);
//! preset.save("telephone.toml").unwrap();
//! ```

mod designed;
mod error;
mod filter_config;
mod preset;

/// Strict validation of filter configurations and presets.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use designed::DesignedFilter;
pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, find_preset, get_factory_preset,
    is_factory_preset,
};
pub use filter_config::{Family, FilterConfig};
pub use preset::FilterPreset;
pub use validation::{ValidationError, ValidationResult, validate_filter, validate_preset};
