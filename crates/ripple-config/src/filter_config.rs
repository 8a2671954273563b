//! Serializable description of one low-pass design.

use std::fmt;
use std::str::FromStr;

use ripple_core::{
    ButterworthLowpass, ChebyshevLowpass, DEFAULT_CUTOFF, DEFAULT_ORDER, DEFAULT_RIPPLE_DB,
};
use serde::{Deserialize, Serialize};

use crate::designed::DesignedFilter;
use crate::validation::{ValidationError, ValidationResult, validate_filter};

/// Low-pass prototype family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Maximally flat passband.
    #[default]
    Butterworth,
    /// Equiripple passband, steeper roll-off.
    Chebyshev,
}

impl Family {
    /// All families, in display order.
    pub const ALL: [Family; 2] = [Family::Butterworth, Family::Chebyshev];

    /// Lowercase identifier used in TOML and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Butterworth => "butterworth",
            Family::Chebyshev => "chebyshev",
        }
    }

    /// Whether the family uses the ripple setting.
    pub fn uses_ripple(self) -> bool {
        matches!(self, Family::Chebyshev)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Family {
    type Err = ValidationError;

    /// Parses a family name; case-insensitive, accepts `cheby` and `butter`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "butterworth" | "butter" => Ok(Family::Butterworth),
            "chebyshev" | "cheby" => Ok(Family::Chebyshev),
            _ => Err(ValidationError::UnknownFamily(s.to_string())),
        }
    }
}

fn default_order() -> u32 {
    DEFAULT_ORDER
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

fn default_ripple_db() -> f64 {
    DEFAULT_RIPPLE_DB
}

/// Configuration for one low-pass cascade.
///
/// The cutoff is normalized (a fraction of the sample rate). Use
/// [`with_cutoff_hz`](Self::with_cutoff_hz) to convert from Hz.
///
/// # TOML Format
///
/// ```toml
/// family = "chebyshev"
/// order = 6
/// cutoff = 0.1
/// ripple_db = 0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Prototype family.
    #[serde(default)]
    pub family: Family,

    /// Filter order (number of poles).
    #[serde(default = "default_order")]
    pub order: u32,

    /// Normalized cutoff in `(0, 0.5)`.
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,

    /// Passband ripple in dB. Ignored by Butterworth designs.
    #[serde(default = "default_ripple_db")]
    pub ripple_db: f64,
}

impl FilterConfig {
    /// Creates a config for `family` with default order, cutoff and ripple.
    pub fn new(family: Family) -> Self {
        Self {
            family,
            order: DEFAULT_ORDER,
            cutoff: DEFAULT_CUTOFF,
            ripple_db: DEFAULT_RIPPLE_DB,
        }
    }

    /// Shorthand for a Butterworth config.
    pub fn butterworth(order: u32, cutoff: f64) -> Self {
        Self::new(Family::Butterworth)
            .with_order(order)
            .with_cutoff(cutoff)
    }

    /// Shorthand for a Chebyshev config.
    pub fn chebyshev(order: u32, cutoff: f64, ripple_db: f64) -> Self {
        Self::new(Family::Chebyshev)
            .with_order(order)
            .with_cutoff(cutoff)
            .with_ripple_db(ripple_db)
    }

    /// Set the order.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set the normalized cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the cutoff in Hz for a given sample rate.
    pub fn with_cutoff_hz(mut self, cutoff_hz: f64, sample_rate: f64) -> Self {
        self.cutoff = cutoff_hz / sample_rate;
        self
    }

    /// Set the passband ripple in dB.
    pub fn with_ripple_db(mut self, ripple_db: f64) -> Self {
        self.ripple_db = ripple_db;
        self
    }

    /// Cutoff in Hz for a given sample rate.
    pub fn cutoff_hz(&self, sample_rate: f64) -> f64 {
        self.cutoff * sample_rate
    }

    /// Checks every field, reporting all problems at once.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_filter(self)
    }

    /// Designs the filter.
    ///
    /// Out-of-range values are clamped the way `ripple-core` clamps them;
    /// call [`validate`](Self::validate) or [`try_build`](Self::try_build)
    /// first to reject them instead.
    pub fn build(&self) -> DesignedFilter {
        match self.family {
            Family::Butterworth => {
                DesignedFilter::Butterworth(ButterworthLowpass::butterworth(self.order, self.cutoff))
            }
            Family::Chebyshev => DesignedFilter::Chebyshev(ChebyshevLowpass::chebyshev(
                self.order,
                self.cutoff,
                self.ripple_db,
            )),
        }
    }

    /// Validates, then designs the filter.
    pub fn try_build(&self) -> ValidationResult<DesignedFilter> {
        self.validate()?;
        Ok(self.build())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(Family::default())
    }
}
