//! Accepted parameter ranges and the clamp-and-continue sanitizers.
//!
//! Out-of-range configuration never produces an error: values are pulled back
//! into range at the configuration boundary so that `process` only ever sees
//! finite, stable coefficients.

/// Smallest accepted filter order.
pub const MIN_ORDER: u32 = 1;

/// Largest accepted filter order.
pub const MAX_ORDER: u32 = 64;

/// Lowest accepted normalized cutoff (fraction of the sample rate), about
/// 4.8 Hz at 48 kHz.
///
/// Together with [`MAX_RIPPLE_DB`] this keeps the smallest analog pole far
/// enough from the origin that the bilinear transform leaves every digital
/// pole inside the unit circle with a non-zero DC denominator.
pub const MIN_CUTOFF: f64 = 1e-4;

/// Highest accepted normalized cutoff, just below Nyquist where `tan(π·f)`
/// diverges.
pub const MAX_CUTOFF: f64 = 0.5 - 1e-6;

/// Smallest accepted Chebyshev passband ripple in dB.
pub const MIN_RIPPLE_DB: f64 = 1e-3;

/// Largest accepted Chebyshev passband ripple in dB.
///
/// Larger ripple shrinks the warp toward zero and pushes low-cutoff poles onto
/// the unit circle at `z = 1`.
pub const MAX_RIPPLE_DB: f64 = 20.0;

/// Order used by the default constructors.
pub const DEFAULT_ORDER: u32 = 2;

/// Normalized cutoff used by the default constructors (a quarter of the
/// sample rate).
pub const DEFAULT_CUTOFF: f64 = 0.25;

/// Passband ripple used by the default Chebyshev constructor.
pub const DEFAULT_RIPPLE_DB: f64 = 1.0;

/// Clamps an order into `[MIN_ORDER, MAX_ORDER]`.
pub fn sanitize_order(order: u32) -> u32 {
    let clamped = order.clamp(MIN_ORDER, MAX_ORDER);
    #[cfg(feature = "tracing")]
    if clamped != order {
        tracing::warn!(requested = order, clamped, "filter order out of range");
    }
    clamped
}

/// Clamps a normalized cutoff into `[MIN_CUTOFF, MAX_CUTOFF]`.
///
/// Returns `None` for NaN or infinite input, which callers treat as "keep the
/// previous cutoff".
pub fn sanitize_cutoff(cutoff: f64) -> Option<f64> {
    if !cutoff.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::warn!(cutoff, "ignoring non-finite cutoff");
        return None;
    }
    let clamped = cutoff.clamp(MIN_CUTOFF, MAX_CUTOFF);
    #[cfg(feature = "tracing")]
    if clamped != cutoff {
        tracing::warn!(requested = cutoff, clamped, "cutoff out of range");
    }
    Some(clamped)
}

/// Clamps a passband ripple into `[MIN_RIPPLE_DB, MAX_RIPPLE_DB]`.
///
/// Returns `None` for NaN or infinite input.
pub fn sanitize_ripple(ripple_db: f64) -> Option<f64> {
    if !ripple_db.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::warn!(ripple_db, "ignoring non-finite ripple");
        return None;
    }
    let clamped = ripple_db.clamp(MIN_RIPPLE_DB, MAX_RIPPLE_DB);
    #[cfg(feature = "tracing")]
    if clamped != ripple_db {
        tracing::warn!(requested = ripple_db, clamped, "ripple out of range");
    }
    Some(clamped)
}
