//! Conformal map from the analog (s) plane to the digital (z) plane.
//!
//! The map is the Möbius transform `z = (1 + s) / (1 - s)`, which sends the
//! jω axis onto the unit circle and the stable left half-plane into its
//! interior. Frequencies are compressed along the way (`ω_d = 2·atan(ω_a)`),
//! which is why prototype designers pre-warp the cutoff with `tan(π·f)`.
//!
//! [`bilinear`] first reflects the pole across the imaginary axis, so what
//! it returns is the realized pole mirrored through the unit circle
//! (`z = 1 / conj(p')`). The coefficient converter expects exactly that form;
//! use [`realized_pole`] to recover the pole the section actually implements.

use num_complex::Complex64;

/// Maps a left half-plane analog pole through the reflected bilinear transform.
///
/// Applies `p.re = -p.re` followed by `p' = (1 + p) / (1 - p)`.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex64;
/// use ripple_core::bilinear::{bilinear, realized_pole};
///
/// let s = Complex64::new(-0.5, 0.5);
/// let mapped = bilinear(s);
/// assert!(mapped.norm() > 1.0);
/// assert!(realized_pole(mapped).norm() < 1.0);
/// ```
#[inline]
pub fn bilinear(pole: Complex64) -> Complex64 {
    let p = Complex64::new(-pole.re, pole.im);
    let den = Complex64::new(1.0 - p.re, -p.im);
    Complex64::new(p.re + 1.0, p.im) / den
}

/// The z-plane pole realized by a section built from a [`bilinear`] output.
#[inline]
pub fn realized_pole(mapped: Complex64) -> Complex64 {
    mapped.conj().inv()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_bilinear(s: Complex64) -> Complex64 {
        (1.0 + s) / (1.0 - s)
    }

    #[test]
    fn realized_pole_matches_standard_transform() {
        for &(re, im) in &[(-0.2, 0.9), (-1.0, 0.0), (-3.0, 4.0), (-0.01, 0.05)] {
            let s = Complex64::new(re, im);
            let z = realized_pole(bilinear(s));
            let expected = standard_bilinear(s);
            assert!((z - expected).norm() < 1e-12, "s={s}: got {z}, expected {expected}");
        }
    }

    #[test]
    fn left_half_plane_maps_inside_unit_circle() {
        for k in 1..50 {
            let angle = core::f64::consts::FRAC_PI_2 + k as f64 * core::f64::consts::PI / 51.0;
            let s = Complex64::from_polar(0.1 * k as f64, angle);
            assert!(realized_pole(bilinear(s)).norm() < 1.0, "s={s} escaped the unit circle");
        }
    }

    #[test]
    fn imaginary_axis_maps_to_unit_circle() {
        let z = realized_pole(bilinear(Complex64::new(0.0, 0.7)));
        assert!((z.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn origin_maps_to_one() {
        let z = bilinear(Complex64::new(0.0, 0.0));
        assert!((z - Complex64::new(1.0, 0.0)).norm() < 1e-15);
    }
}
