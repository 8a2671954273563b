//! First- and second-order recursive filter sections.
//!
//! Both sections use the direct form II structure: a single delay line holds
//! the intermediate (feedback-filtered) signal, shared between the feedback and
//! feedforward paths.
//!
//! ```text
//! x[n] ──(+)──────── d0 ──[ci0]──(+)──> y[n]
//!         ^           |           ^
//!         |         z^-1          |
//!         |           |           |
//!         └──[-co1]── d1 ──[ci1]──┘
//!         ^           |           ^
//!         |         z^-1          |     (biquad only)
//!         └──[-co2]── d2 ──[ci2]──┘
//! ```
//!
//! Coefficients are stored as small fixed arrays addressed through the named
//! index constants ([`SinglePoleSection::CO1`], [`BiquadSection::CI2`], ...),
//! so they can be read or written either by name or as a contiguous slice.
//!
//! A section knows nothing about the cascade it lives in; it is a pure
//! function of its coefficients and delay state.

use num_complex::Complex64;

/// First-order IIR section (one pole, one zero).
///
/// ```text
/// d0 = x - d1*co1
/// y  = d0*ci0 + d1*ci1
/// d1 = d0
/// ```
///
/// # Example
///
/// ```rust
/// use ripple_core::SinglePoleSection;
///
/// // Two-tap moving average: y[n] = 0.5*x[n] + 0.5*x[n-1]
/// let mut section = SinglePoleSection::new();
/// section.set_coefficients(0.5, 0.5, 0.0);
/// assert_eq!(section.process(1.0), 0.5);
/// assert_eq!(section.process(0.0), 0.5);
/// assert_eq!(section.process(0.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePoleSection {
    coeffs: [f64; 3],
    d1: f64,
}

impl SinglePoleSection {
    /// Index of the direct feedforward coefficient.
    pub const CI0: usize = 0;
    /// Index of the one-sample-delayed feedforward coefficient.
    pub const CI1: usize = 1;
    /// Index of the feedback coefficient.
    pub const CO1: usize = 2;

    /// Creates a section with passthrough coefficients and zeroed state.
    pub fn new() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0],
            d1: 0.0,
        }
    }

    /// Creates a section from `[ci0, ci1, co1]`.
    pub fn with_coefficients(coeffs: [f64; 3]) -> Self {
        Self { coeffs, d1: 0.0 }
    }

    /// Replaces all coefficients. Delay state is left untouched.
    pub fn set_coefficients(&mut self, ci0: f64, ci1: f64, co1: f64) {
        self.coeffs = [ci0, ci1, co1];
    }

    /// Coefficients as `[ci0, ci1, co1]`.
    pub fn coefficients(&self) -> &[f64; 3] {
        &self.coeffs
    }

    /// Direct feedforward coefficient.
    pub fn ci0(&self) -> f64 {
        self.coeffs[Self::CI0]
    }

    /// Delayed feedforward coefficient.
    pub fn ci1(&self) -> f64 {
        self.coeffs[Self::CI1]
    }

    /// Feedback coefficient.
    pub fn co1(&self) -> f64 {
        self.coeffs[Self::CO1]
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let d0 = input - self.d1 * c[Self::CO1];
        let output = d0 * c[Self::CI0] + self.d1 * c[Self::CI1];
        self.d1 = d0;
        output
    }

    /// Zeroes the delay register.
    pub fn reset(&mut self) {
        self.d1 = 0.0;
    }

    /// Current delay register contents.
    pub fn state(&self) -> [f64; 1] {
        [self.d1]
    }

    /// Gain at 0 Hz, `H(1) = (ci0 + ci1) / (1 + co1)`.
    pub fn dc_gain(&self) -> f64 {
        (self.ci0() + self.ci1()) / (1.0 + self.co1())
    }

    /// Realized z-plane pole, the root of `z + co1`.
    pub fn pole(&self) -> f64 {
        -self.co1()
    }

    /// Complex frequency response at `z^-1 = z_inv`.
    pub fn response(&self, z_inv: Complex64) -> Complex64 {
        let num = self.ci0() + z_inv * self.ci1();
        let den = 1.0 + z_inv * self.co1();
        num / den
    }
}

impl Default for SinglePoleSection {
    fn default() -> Self {
        Self::new()
    }
}

/// Second-order IIR section (two poles, two zeros).
///
/// ```text
/// d0 = x - d1*co1 - d2*co2
/// y  = d0*ci0 + d1*ci1 + d2*ci2
/// d2 = d1
/// d1 = d0
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BiquadSection {
    coeffs: [f64; 5],
    d1: f64,
    d2: f64,
}

impl BiquadSection {
    /// Index of the direct feedforward coefficient.
    pub const CI0: usize = 0;
    /// Index of the one-sample-delayed feedforward coefficient.
    pub const CI1: usize = 1;
    /// Index of the two-sample-delayed feedforward coefficient.
    pub const CI2: usize = 2;
    /// Index of the first feedback coefficient.
    pub const CO1: usize = 3;
    /// Index of the second feedback coefficient.
    pub const CO2: usize = 4;

    /// Creates a section with passthrough coefficients and zeroed state.
    pub fn new() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 0.0],
            d1: 0.0,
            d2: 0.0,
        }
    }

    /// Creates a section from `[ci0, ci1, ci2, co1, co2]`.
    pub fn with_coefficients(coeffs: [f64; 5]) -> Self {
        Self {
            coeffs,
            d1: 0.0,
            d2: 0.0,
        }
    }

    /// Replaces all coefficients. Delay state is left untouched.
    pub fn set_coefficients(&mut self, ci0: f64, ci1: f64, ci2: f64, co1: f64, co2: f64) {
        self.coeffs = [ci0, ci1, ci2, co1, co2];
    }

    /// Coefficients as `[ci0, ci1, ci2, co1, co2]`.
    pub fn coefficients(&self) -> &[f64; 5] {
        &self.coeffs
    }

    /// Direct feedforward coefficient.
    pub fn ci0(&self) -> f64 {
        self.coeffs[Self::CI0]
    }

    /// One-sample feedforward coefficient.
    pub fn ci1(&self) -> f64 {
        self.coeffs[Self::CI1]
    }

    /// Two-sample feedforward coefficient.
    pub fn ci2(&self) -> f64 {
        self.coeffs[Self::CI2]
    }

    /// First feedback coefficient.
    pub fn co1(&self) -> f64 {
        self.coeffs[Self::CO1]
    }

    /// Second feedback coefficient.
    pub fn co2(&self) -> f64 {
        self.coeffs[Self::CO2]
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let d0 = input - self.d1 * c[Self::CO1] - self.d2 * c[Self::CO2];
        let output = d0 * c[Self::CI0] + self.d1 * c[Self::CI1] + self.d2 * c[Self::CI2];
        self.d2 = self.d1;
        self.d1 = d0;
        output
    }

    /// Zeroes both delay registers.
    pub fn reset(&mut self) {
        self.d1 = 0.0;
        self.d2 = 0.0;
    }

    /// Current delay register contents as `[d1, d2]`.
    pub fn state(&self) -> [f64; 2] {
        [self.d1, self.d2]
    }

    /// Gain at 0 Hz, `H(1) = (ci0 + ci1 + ci2) / (1 + co1 + co2)`.
    pub fn dc_gain(&self) -> f64 {
        (self.ci0() + self.ci1() + self.ci2()) / (1.0 + self.co1() + self.co2())
    }

    /// Realized z-plane poles, the roots of `z² + co1·z + co2`.
    ///
    /// For a complex pair the upper-half-plane root comes first.
    pub fn poles(&self) -> [Complex64; 2] {
        let b = self.co1();
        let disc = Complex64::new(b * b - 4.0 * self.co2(), 0.0).sqrt();
        let p0 = (disc - b) * 0.5;
        let p1 = (-disc - b) * 0.5;
        if p0.im >= p1.im { [p0, p1] } else { [p1, p0] }
    }

    /// Complex frequency response at `z^-1 = z_inv`.
    pub fn response(&self, z_inv: Complex64) -> Complex64 {
        let z_inv2 = z_inv * z_inv;
        let num = self.ci0() + z_inv * self.ci1() + z_inv2 * self.ci2();
        let den = 1.0 + z_inv * self.co1() + z_inv2 * self.co2();
        num / den
    }
}

impl Default for BiquadSection {
    fn default() -> Self {
        Self::new()
    }
}
