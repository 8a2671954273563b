//! Analog prototype designers.
//!
//! Every family starts from the same base geometry: the upper-half-plane poles
//! of an `order`-pole Butterworth filter on the unit circle, at
//!
//! ```text
//! θ_k = π/2 + π/(2·order) + k·π/order,   k = 0 .. (order + 1)/2
//! ```
//!
//! The first pole sits half a step counter-clockwise from `+j`, nearest the jω
//! axis; the last one is the real pole `-1` when the order is odd. A designer
//! turns a base pole and the pre-warped cutoff `v = tan(π·f)` into the analog
//! pole the cascade feeds to the bilinear map.
//!
//! - [`Butterworth`] scales the circle by `v` (maximally flat passband).
//! - [`Chebyshev`] stretches it into an ellipse, scaling real and imaginary
//!   parts separately by `warp_r·v` and `warp_i·v` (equiripple passband).

use libm::{asinh, cosh, pow, sinh, sqrt};
use num_complex::Complex64;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::limits::{DEFAULT_RIPPLE_DB, sanitize_ripple};

/// Number of non-conjugate poles for `order`: `(order + 1) / 2`.
#[inline]
pub fn num_poles(order: u32) -> usize {
    ((order + 1) >> 1) as usize
}

/// Number of biquad sections for `order`: `order / 2`.
#[inline]
pub fn num_biquads(order: u32) -> usize {
    (order >> 1) as usize
}

/// Base prototype poles for `order`, closest to the jω axis first.
///
/// Only the upper-half-plane representative of each conjugate pair is
/// returned; for odd orders the last entry is the real pole at `-1`.
pub fn base_poles(order: u32) -> Vec<Complex64> {
    let n = f64::from(order.max(1));
    let start = core::f64::consts::FRAC_PI_2 + core::f64::consts::FRAC_PI_2 / n;
    let step = core::f64::consts::PI / n;
    (0..num_poles(order.max(1)))
        .map(|k| Complex64::from_polar(1.0, start + k as f64 * step))
        .collect()
}

/// Pre-warps a normalized cutoff for the bilinear map: `tan(π·f)`.
#[inline]
pub fn prewarp(cutoff: f64) -> f64 {
    libm::tan(core::f64::consts::PI * cutoff)
}

/// A low-pass analog prototype family.
///
/// The cascade owns the base geometry and the section sequence; a prototype
/// only decides where each base pole lands for a given cutoff.
pub trait Prototype {
    /// Short lowercase family name, e.g. `"butterworth"`.
    fn name(&self) -> &'static str;

    /// Called after the cascade order changed, before coefficients are
    /// recomputed.
    fn on_order_change(&mut self, _order: u32) {}

    /// Places one base pole for pre-warped cutoff `v`.
    fn warp_pole(&self, base: Complex64, v: f64) -> Complex64;
}

/// Maximally flat (Butterworth) prototype.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Butterworth;

impl Butterworth {
    /// Creates the Butterworth prototype.
    pub fn new() -> Self {
        Self
    }
}

impl Prototype for Butterworth {
    fn name(&self) -> &'static str {
        "butterworth"
    }

    #[inline]
    fn warp_pole(&self, base: Complex64, v: f64) -> Complex64 {
        Complex64::new(base.re * v, base.im * v)
    }
}

/// Ellipse warp factors derived from an order and a passband ripple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevWarp {
    /// Ripple factor `sqrt(10^(ripple/10) - 1)`.
    pub epsilon: f64,
    /// `asinh(1/epsilon) / order`.
    pub v0: f64,
    /// Real-axis scale, `sinh(v0)` (times `a0` for even orders).
    pub warp_r: f64,
    /// Imaginary-axis scale, `cosh(v0)` (times `a0` for even orders).
    pub warp_i: f64,
    /// Even-order correction `10^(-ripple/20)`, or `1.0` for odd orders.
    pub a0: f64,
}

impl ChebyshevWarp {
    /// Computes the warp factors for `order` poles and `ripple_db` of ripple.
    ///
    /// `ripple_db` must already be positive; see
    /// [`sanitize_ripple`](crate::limits::sanitize_ripple).
    pub fn compute(order: u32, ripple_db: f64) -> Self {
        let epsilon = sqrt(pow(10.0, ripple_db * 0.1) - 1.0);
        let v0 = asinh(1.0 / epsilon) / f64::from(order.max(1));
        // Even-order ellipses miss the real-axis pole that anchors the odd
        // normalization, so both axes shrink by the passband floor.
        let a0 = if order & 1 == 0 {
            pow(10.0, -0.05 * ripple_db)
        } else {
            1.0
        };
        Self {
            epsilon,
            v0,
            warp_r: sinh(v0) * a0,
            warp_i: cosh(v0) * a0,
            a0,
        }
    }
}

/// Equiripple (Chebyshev type I) prototype.
///
/// The passband oscillates between unity and `-ripple_db`; the stopband falls
/// off faster than a Butterworth of the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chebyshev {
    ripple_db: f64,
    order: u32,
    warp: ChebyshevWarp,
}

impl Chebyshev {
    /// Creates a Chebyshev prototype with `ripple_db` of passband ripple.
    ///
    /// Ripple is clamped into
    /// [`MIN_RIPPLE_DB`](crate::limits::MIN_RIPPLE_DB)..=[`MAX_RIPPLE_DB`](crate::limits::MAX_RIPPLE_DB);
    /// non-finite ripple falls back to [`DEFAULT_RIPPLE_DB`].
    pub fn new(ripple_db: f64) -> Self {
        let ripple_db = sanitize_ripple(ripple_db).unwrap_or(DEFAULT_RIPPLE_DB);
        Self {
            ripple_db,
            order: 1,
            warp: ChebyshevWarp::compute(1, ripple_db),
        }
    }

    /// Passband ripple in dB.
    pub fn ripple_db(&self) -> f64 {
        self.ripple_db
    }

    /// Current warp factors.
    pub fn warp(&self) -> &ChebyshevWarp {
        &self.warp
    }

    /// Sets the passband ripple and recomputes the warp factors.
    ///
    /// Non-finite input is ignored.
    pub fn set_ripple(&mut self, ripple_db: f64) {
        if let Some(ripple_db) = sanitize_ripple(ripple_db) {
            self.ripple_db = ripple_db;
            self.warp = ChebyshevWarp::compute(self.order, ripple_db);
        }
    }

    /// Highest passband gain in dB relative to the (unity) DC gain.
    ///
    /// Odd orders peak at DC. Even orders start at the bottom of a ripple, so
    /// normalizing DC to unity lifts the passband peaks `ripple_db` above it.
    pub fn passband_peak_db(&self) -> f64 {
        if self.order & 1 == 0 { self.ripple_db } else { 0.0 }
    }
}

impl Default for Chebyshev {
    fn default() -> Self {
        Self::new(DEFAULT_RIPPLE_DB)
    }
}

impl Prototype for Chebyshev {
    fn name(&self) -> &'static str {
        "chebyshev"
    }

    fn on_order_change(&mut self, order: u32) {
        self.order = order;
        self.warp = ChebyshevWarp::compute(order, self.ripple_db);
    }

    #[inline]
    fn warp_pole(&self, base: Complex64, v: f64) -> Complex64 {
        Complex64::new(base.re * self.warp.warp_r * v, base.im * self.warp.warp_i * v)
    }
}
