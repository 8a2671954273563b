//! Filter and preset validation.
//!
//! `ripple-core` never fails: it clamps orders, cutoffs and ripples into
//! range. Configuration coming from files or the command line is checked here
//! first so that a typo is reported instead of silently designing a different
//! filter.
//!
//! # Example
//!
//! ```rust
//! use ripple_config::{FilterConfig, ValidationError, validate_filter};
//!
//! assert!(validate_filter(&FilterConfig::chebyshev(6, 0.1, 0.5)).is_ok());
//!
//! let err = validate_filter(&FilterConfig::chebyshev(0, 0.7, -1.0)).unwrap_err();
//! assert!(matches!(err, ValidationError::Multiple(ref errors) if errors.len() == 3));
//! ```

use ripple_core::{MAX_CUTOFF, MAX_ORDER, MAX_RIPPLE_DB, MIN_CUTOFF, MIN_ORDER, MIN_RIPPLE_DB};
use thiserror::Error;

use crate::filter_config::FilterConfig;
use crate::preset::FilterPreset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown filter family name.
    #[error("unknown filter family: {0}")]
    UnknownFamily(String),

    /// Order outside `[min, max]`.
    #[error("order {order} out of range [{min}, {max}]")]
    OrderOutOfRange {
        /// The rejected order.
        order: u32,
        /// Minimum allowed order.
        min: u32,
        /// Maximum allowed order.
        max: u32,
    },

    /// Normalized cutoff outside `[min, max]` or not finite.
    #[error("cutoff {cutoff} out of range [{min}, {max}]")]
    CutoffOutOfRange {
        /// The rejected cutoff.
        cutoff: f64,
        /// Minimum allowed cutoff.
        min: f64,
        /// Maximum allowed cutoff.
        max: f64,
    },

    /// Ripple outside `[min, max]` dB or not finite.
    #[error("ripple {ripple_db} dB out of range [{min}, {max}] dB")]
    RippleOutOfRange {
        /// The rejected ripple.
        ripple_db: f64,
        /// Minimum allowed ripple.
        min: f64,
        /// Maximum allowed ripple.
        max: f64,
    },

    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    InvalidSampleRate,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check a filter order.
pub fn validate_order(order: u32) -> ValidationResult<()> {
    if (MIN_ORDER..=MAX_ORDER).contains(&order) {
        Ok(())
    } else {
        Err(ValidationError::OrderOutOfRange {
            order,
            min: MIN_ORDER,
            max: MAX_ORDER,
        })
    }
}

/// Check a normalized cutoff.
pub fn validate_cutoff(cutoff: f64) -> ValidationResult<()> {
    if (MIN_CUTOFF..=MAX_CUTOFF).contains(&cutoff) {
        Ok(())
    } else {
        Err(ValidationError::CutoffOutOfRange {
            cutoff,
            min: MIN_CUTOFF,
            max: MAX_CUTOFF,
        })
    }
}

/// Check a passband ripple.
pub fn validate_ripple(ripple_db: f64) -> ValidationResult<()> {
    if (MIN_RIPPLE_DB..=MAX_RIPPLE_DB).contains(&ripple_db) {
        Ok(())
    } else {
        Err(ValidationError::RippleOutOfRange {
            ripple_db,
            min: MIN_RIPPLE_DB,
            max: MAX_RIPPLE_DB,
        })
    }
}

fn collect(errors: Vec<ValidationError>) -> ValidationResult<()> {
    let mut errors = errors;
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Validate every field of a filter config.
///
/// Ripple is only checked for families that use it.
pub fn validate_filter(config: &FilterConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_order(config.order) {
        errors.push(e);
    }
    if let Err(e) = validate_cutoff(config.cutoff) {
        errors.push(e);
    }
    if config.family.uses_ripple()
        && let Err(e) = validate_ripple(config.ripple_db)
    {
        errors.push(e);
    }

    collect(errors)
}

/// Validate a preset's sample rate and filter.
pub fn validate_preset(preset: &FilterPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.sample_rate == 0 {
        errors.push(ValidationError::InvalidSampleRate);
    }
    match validate_filter(&preset.filter) {
        Ok(()) => {}
        Err(ValidationError::Multiple(inner)) => errors.extend(inner),
        Err(e) => errors.push(e),
    }

    collect(errors)
}
