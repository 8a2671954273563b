//! Conversion of poles into normalized low-pass section coefficients.
//!
//! Both converters place the section zeros at Nyquist (`z = -1`) and scale the
//! feedforward path so the DC gain is exactly one. Every section of a cascade
//! therefore passes DC unchanged, whatever the family, order or cutoff.

use num_complex::Complex64;

use crate::section::{BiquadSection, SinglePoleSection};

/// Single-pole low-pass coefficients `[ci0, ci1, co1]` from a scaled analog
/// real pole.
///
/// The real-axis bilinear map is folded into the formula:
///
/// ```text
/// pr  = -pr
/// pr  = (pr - 1) / (pr + 1)
/// co1 = pr
/// ci0 = ci1 = (1 + pr) / 2
/// ```
pub fn single_pole_lowpass(pole_re: f64) -> [f64; 3] {
    let pr = -pole_re;
    let pr = (pr - 1.0) / (pr + 1.0);
    let ci = (1.0 + pr) * 0.5;
    [ci, ci, pr]
}

/// Biquad low-pass coefficients `[ci0, ci1, ci2, co1, co2]` from a
/// [`bilinear`](crate::bilinear::bilinear)-mapped pole.
///
/// ```text
/// co2 = 1 / |p|²
/// co1 = -2·Re(p)·co2
/// ci0 = ci2 = (1 + co1 + co2) / 4
/// ci1 = 2·ci0
/// ```
pub fn biquad_lowpass(mapped: Complex64) -> [f64; 5] {
    let co2 = 1.0 / mapped.norm_sqr();
    let co1 = -2.0 * mapped.re * co2;
    let ci = (1.0 + co1 + co2) * 0.25;
    [ci, ci * 2.0, ci, co1, co2]
}

/// Writes [`single_pole_lowpass`] coefficients into `section`.
pub fn apply_single_pole_lowpass(section: &mut SinglePoleSection, pole_re: f64) {
    let [ci0, ci1, co1] = single_pole_lowpass(pole_re);
    section.set_coefficients(ci0, ci1, co1);
}

/// Writes [`biquad_lowpass`] coefficients into `section`.
pub fn apply_biquad_lowpass(section: &mut BiquadSection, mapped: Complex64) {
    let [ci0, ci1, ci2, co1, co2] = biquad_lowpass(mapped);
    section.set_coefficients(ci0, ci1, ci2, co1, co2);
}
