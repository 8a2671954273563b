//! Frequency response of a designed cascade.
//!
//! The response is evaluated directly from the section coefficients,
//! `H(z) = Π H_k(z)` at `z = e^{j2πf}`, so it reflects exactly what
//! `process` computes rather than the ideal analog prototype.

use libm::{cos, log10, sin};
use num_complex::Complex64;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::cascade::FilterCascade;
use crate::prototype::Prototype;

/// Magnitudes below this are reported as this many dB.
const FLOOR_DB: f64 = -300.0;

/// Converts a linear magnitude to dB with a floor for zeros.
#[inline]
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        (20.0 * log10(magnitude)).max(FLOOR_DB)
    } else {
        FLOOR_DB
    }
}

/// One point of a magnitude response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Normalized frequency (fraction of the sample rate).
    pub frequency: f64,
    /// Linear magnitude.
    pub magnitude: f64,
    /// Magnitude in dB.
    pub magnitude_db: f64,
}

impl<P: Prototype> FilterCascade<P> {
    /// Complex response at normalized frequency `frequency`.
    pub fn response_at(&self, frequency: f64) -> Complex64 {
        let w = core::f64::consts::TAU * frequency;
        let z_inv = Complex64::new(cos(w), -sin(w));
        let mut h = Complex64::new(1.0, 0.0);
        for section in self.biquads() {
            h *= section.response(z_inv);
        }
        if let Some(single) = self.single_pole() {
            h *= single.response(z_inv);
        }
        h
    }

    /// Linear magnitude at normalized `frequency`.
    pub fn magnitude_at(&self, frequency: f64) -> f64 {
        self.response_at(frequency).norm()
    }

    /// Magnitude in dB at normalized `frequency`.
    pub fn magnitude_db_at(&self, frequency: f64) -> f64 {
        magnitude_to_db(self.magnitude_at(frequency))
    }

    /// Gain at 0 Hz, the product of the per-section DC gains.
    pub fn dc_gain(&self) -> f64 {
        let biquads: f64 = self.biquads().iter().map(|s| s.dc_gain()).product();
        biquads * self.single_pole().map_or(1.0, |s| s.dc_gain())
    }

    /// Magnitude response at `points` frequencies evenly spaced over
    /// `[0, 0.5)`.
    pub fn response(&self, points: usize) -> Vec<ResponsePoint> {
        let points = points.max(1);
        (0..points)
            .map(|i| {
                let frequency = 0.5 * i as f64 / points as f64;
                let magnitude = self.magnitude_at(frequency);
                ResponsePoint {
                    frequency,
                    magnitude,
                    magnitude_db: magnitude_to_db(magnitude),
                }
            })
            .collect()
    }

    /// Highest magnitude in dB among `points` frequencies in `[0, cutoff]`.
    pub fn passband_peak_db(&self, points: usize) -> f64 {
        let points = points.max(1);
        let cutoff = self.cutoff();
        (0..=points)
            .map(|i| self.magnitude_db_at(cutoff * i as f64 / points as f64))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
