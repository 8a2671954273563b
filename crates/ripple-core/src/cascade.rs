//! Order-dependent cascade of biquad and single-pole sections.
//!
//! A cascade of order `N` owns:
//!
//! - `(N + 1) / 2` base analog poles (one per conjugate pair, plus the real
//!   pole for odd orders), which depend only on `N`;
//! - `N / 2` [`BiquadSection`]s, one per complex pole pair;
//! - one [`SinglePoleSection`] iff `N` is odd, fed by the real pole.
//!
//! Changing the order rebuilds all three; changing the cutoff (or a
//! prototype parameter such as Chebyshev ripple) rewrites coefficients in
//! place. The stored cutoff is re-applied after every order change, so
//! coefficients are always designed before they are used.
//!
//! Design pipeline for one pole:
//!
//! ```text
//! base pole ──warp(v = tan(π·f))──> analog pole ──bilinear──> convert ──> section
//! ```
//!
//! Configuration and processing both take `&mut self`; reconfigure between
//! processed blocks, never concurrently with `process`.

use num_complex::Complex64;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bilinear::bilinear;
use crate::coefficients::{apply_biquad_lowpass, apply_single_pole_lowpass};
use crate::limits::{DEFAULT_CUTOFF, DEFAULT_ORDER, sanitize_cutoff, sanitize_order};
use crate::processor::SampleProcessor;
use crate::prototype::{
    Butterworth, Chebyshev, Prototype, base_poles, num_biquads, prewarp,
};
use crate::section::{BiquadSection, SinglePoleSection};

/// Low-pass filter built from a cascade of recursive sections.
///
/// The family is chosen by the prototype `P`; see [`ButterworthLowpass`] and
/// [`ChebyshevLowpass`].
///
/// # Example
///
/// ```rust
/// use ripple_core::ButterworthLowpass;
///
/// let mut lp = ButterworthLowpass::butterworth(5, 0.1);
/// assert_eq!(lp.num_biquads(), 2);
/// assert!(lp.single_pole().is_some());
///
/// // Unity DC gain
/// let mut out = 0.0;
/// for _ in 0..2000 {
///     out = lp.process(1.0);
/// }
/// assert!((out - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct FilterCascade<P> {
    prototype: P,
    order: u32,
    cutoff: f64,
    poles: Vec<Complex64>,
    biquads: Vec<BiquadSection>,
    single: Option<SinglePoleSection>,
}

/// Butterworth (maximally flat) low-pass cascade.
pub type ButterworthLowpass = FilterCascade<Butterworth>;

/// Chebyshev type I (equiripple passband) low-pass cascade.
pub type ChebyshevLowpass = FilterCascade<Chebyshev>;

impl<P: Prototype> FilterCascade<P> {
    /// Creates a cascade for `prototype` with the given order and normalized
    /// cutoff. Both are sanitized; a non-finite cutoff falls back to
    /// [`DEFAULT_CUTOFF`].
    pub fn new(prototype: P, order: u32, cutoff: f64) -> Self {
        let mut cascade = Self {
            prototype,
            order: 0,
            cutoff: sanitize_cutoff(cutoff).unwrap_or(DEFAULT_CUTOFF),
            poles: Vec::new(),
            biquads: Vec::new(),
            single: None,
        };
        cascade.rebuild(sanitize_order(order));
        cascade
    }

    /// Filter order.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Whether the cascade ends with a single-pole section.
    pub fn is_odd_order(&self) -> bool {
        self.order & 1 == 1
    }

    /// Normalized cutoff (fraction of the sample rate) currently designed.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// The prototype designer.
    pub fn prototype(&self) -> &P {
        &self.prototype
    }

    /// Number of base analog poles, `(order + 1) / 2`.
    pub fn num_poles(&self) -> usize {
        self.poles.len()
    }

    /// Number of biquad sections, `order / 2`.
    pub fn num_biquads(&self) -> usize {
        self.biquads.len()
    }

    /// Base analog poles (unit circle), closest to the jω axis first.
    pub fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    /// Biquad sections in processing order.
    pub fn biquads(&self) -> &[BiquadSection] {
        &self.biquads
    }

    /// Trailing single-pole section, present iff the order is odd.
    pub fn single_pole(&self) -> Option<&SinglePoleSection> {
        self.single.as_ref()
    }

    /// Sets the filter order.
    ///
    /// A no-op when the (sanitized) order equals the current one. Otherwise
    /// the pole array and sections are rebuilt, the prototype is notified and
    /// the current cutoff is re-applied. Delay state starts from zero.
    pub fn set_order(&mut self, order: u32) {
        let order = sanitize_order(order);
        if order != self.order {
            self.rebuild(order);
        }
    }

    /// Sets the normalized cutoff and recomputes all coefficients in place.
    ///
    /// The cutoff is clamped into `(0, 0.5)`; non-finite values are ignored.
    pub fn set_cutoff(&mut self, cutoff: f64) {
        if let Some(cutoff) = sanitize_cutoff(cutoff) {
            self.cutoff = cutoff;
            self.redesign();
        }
    }

    /// Processes one sample: every biquad in order, then the single-pole tail.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let mut out = input;
        for section in &mut self.biquads {
            out = section.process(out);
        }
        if let Some(single) = &mut self.single {
            out = single.process(out);
        }
        out
    }

    /// Zeroes every section's delay registers. Coefficients are kept.
    pub fn reset(&mut self) {
        for section in &mut self.biquads {
            section.reset();
        }
        if let Some(single) = &mut self.single {
            single.reset();
        }
    }

    /// Analog poles after warping for the current cutoff, before the bilinear
    /// map.
    pub fn analog_poles(&self) -> impl Iterator<Item = Complex64> + '_ {
        let v = prewarp(self.cutoff);
        self.poles
            .iter()
            .map(move |&base| self.prototype.warp_pole(base, v))
    }

    /// Realized z-plane poles: the upper-half-plane pole of each biquad, then
    /// the real pole of the single-pole section.
    pub fn digital_poles(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.biquads
            .iter()
            .map(|section| section.poles()[0])
            .chain(
                self.single
                    .iter()
                    .map(|single| Complex64::new(single.pole(), 0.0)),
            )
    }

    /// Mutable access to the prototype followed by a coefficient refresh.
    pub fn update_prototype(&mut self, update: impl FnOnce(&mut P)) {
        update(&mut self.prototype);
        self.redesign();
    }

    fn rebuild(&mut self, order: u32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            family = self.prototype.name(),
            from = self.order,
            to = order,
            "cascade_order: rebuilding sections"
        );

        self.order = order;
        self.poles = base_poles(order);
        self.biquads = (0..num_biquads(order)).map(|_| BiquadSection::new()).collect();
        self.single = if order & 1 == 1 {
            Some(SinglePoleSection::new())
        } else {
            None
        };
        self.prototype.on_order_change(order);
        self.redesign();
    }

    fn redesign(&mut self) {
        let v = prewarp(self.cutoff);

        for (section, &base) in self.biquads.iter_mut().zip(&self.poles) {
            let pole = self.prototype.warp_pole(base, v);
            apply_biquad_lowpass(section, bilinear(pole));
        }

        if let Some(single) = &mut self.single {
            let pole = self.prototype.warp_pole(self.poles[self.poles.len() - 1], v);
            apply_single_pole_lowpass(single, pole.re);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            family = self.prototype.name(),
            order = self.order,
            cutoff = self.cutoff,
            "cascade_design: coefficients updated"
        );
    }
}

impl<P: Prototype + Default> Default for FilterCascade<P> {
    fn default() -> Self {
        Self::new(P::default(), DEFAULT_ORDER, DEFAULT_CUTOFF)
    }
}

impl<P: Prototype> SampleProcessor for FilterCascade<P> {
    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        FilterCascade::process(self, input)
    }

    fn reset(&mut self) {
        FilterCascade::reset(self);
    }
}

impl FilterCascade<Butterworth> {
    /// Butterworth low-pass of `order` at normalized `cutoff`.
    pub fn butterworth(order: u32, cutoff: f64) -> Self {
        Self::new(Butterworth, order, cutoff)
    }
}

impl FilterCascade<Chebyshev> {
    /// Chebyshev low-pass of `order` at normalized `cutoff` with `ripple_db`
    /// of passband ripple.
    pub fn chebyshev(order: u32, cutoff: f64, ripple_db: f64) -> Self {
        Self::new(Chebyshev::new(ripple_db), order, cutoff)
    }

    /// Passband ripple in dB.
    pub fn ripple_db(&self) -> f64 {
        self.prototype.ripple_db()
    }

    /// Sets the passband ripple and recomputes coefficients. The base pole
    /// geometry is left alone.
    pub fn set_ripple(&mut self, ripple_db: f64) {
        self.update_prototype(|cheby| cheby.set_ripple(ripple_db));
    }

    /// Sets ripple and cutoff together with a single coefficient pass.
    pub fn set_ripple_and_cutoff(&mut self, cutoff: f64, ripple_db: f64) {
        self.prototype.set_ripple(ripple_db);
        if let Some(cutoff) = sanitize_cutoff(cutoff) {
            self.cutoff = cutoff;
        }
        self.redesign();
    }
}
