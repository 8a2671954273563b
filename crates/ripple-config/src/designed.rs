//! A designed cascade whose family is chosen at runtime.

use ripple_core::{
    BiquadSection, ButterworthLowpass, ChebyshevLowpass, Complex64, ResponsePoint,
    SampleProcessor, SinglePoleSection,
};

use crate::filter_config::{Family, FilterConfig};

/// Either cascade type, selected from a [`FilterConfig`].
///
/// Static dispatch over the two families; every accessor forwards to the
/// wrapped cascade.
#[derive(Debug, Clone)]
pub enum DesignedFilter {
    /// Maximally flat design.
    Butterworth(ButterworthLowpass),
    /// Equiripple design.
    Chebyshev(ChebyshevLowpass),
}

macro_rules! forward {
    ($self:ident, $f:ident => $body:expr) => {
        match $self {
            DesignedFilter::Butterworth($f) => $body,
            DesignedFilter::Chebyshev($f) => $body,
        }
    };
}

impl DesignedFilter {
    /// Prototype family.
    pub fn family(&self) -> Family {
        match self {
            DesignedFilter::Butterworth(_) => Family::Butterworth,
            DesignedFilter::Chebyshev(_) => Family::Chebyshev,
        }
    }

    /// The configuration this filter currently realizes, after clamping.
    pub fn config(&self) -> FilterConfig {
        let config = FilterConfig::new(self.family())
            .with_order(self.order())
            .with_cutoff(self.cutoff());
        match self.ripple_db() {
            Some(ripple_db) => config.with_ripple_db(ripple_db),
            None => config,
        }
    }

    /// Filter order.
    pub fn order(&self) -> u32 {
        forward!(self, f => f.order())
    }

    /// Normalized cutoff.
    pub fn cutoff(&self) -> f64 {
        forward!(self, f => f.cutoff())
    }

    /// Passband ripple in dB, for Chebyshev designs.
    pub fn ripple_db(&self) -> Option<f64> {
        match self {
            DesignedFilter::Butterworth(_) => None,
            DesignedFilter::Chebyshev(f) => Some(f.ripple_db()),
        }
    }

    /// Changes the order, keeping cutoff and ripple.
    pub fn set_order(&mut self, order: u32) {
        forward!(self, f => f.set_order(order));
    }

    /// Changes the normalized cutoff.
    pub fn set_cutoff(&mut self, cutoff: f64) {
        forward!(self, f => f.set_cutoff(cutoff));
    }

    /// Biquad sections in processing order.
    pub fn biquads(&self) -> &[BiquadSection] {
        forward!(self, f => f.biquads())
    }

    /// Trailing single-pole section, present for odd orders.
    pub fn single_pole(&self) -> Option<&SinglePoleSection> {
        forward!(self, f => f.single_pole())
    }

    /// Warped analog poles, one per conjugate pair.
    pub fn analog_poles(&self) -> Vec<Complex64> {
        forward!(self, f => f.analog_poles().collect())
    }

    /// Realized z-plane poles, one per conjugate pair.
    pub fn digital_poles(&self) -> Vec<Complex64> {
        forward!(self, f => f.digital_poles().collect())
    }

    /// Gain at 0 Hz.
    pub fn dc_gain(&self) -> f64 {
        forward!(self, f => f.dc_gain())
    }

    /// Magnitude in dB at a normalized frequency.
    pub fn magnitude_db_at(&self, frequency: f64) -> f64 {
        forward!(self, f => f.magnitude_db_at(frequency))
    }

    /// Magnitude response over `points` frequencies in `[0, 0.5)`.
    pub fn response(&self, points: usize) -> Vec<ResponsePoint> {
        forward!(self, f => f.response(points))
    }

    /// Highest passband magnitude in dB.
    pub fn passband_peak_db(&self, points: usize) -> f64 {
        forward!(self, f => f.passband_peak_db(points))
    }
}

impl SampleProcessor for DesignedFilter {
    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        forward!(self, f => f.process(input))
    }

    fn process_block(&mut self, input: &[f64], output: &mut [f64]) {
        forward!(self, f => f.process_block(input, output));
    }

    fn process_block_inplace(&mut self, buffer: &mut [f64]) {
        forward!(self, f => f.process_block_inplace(buffer));
    }

    fn reset(&mut self) {
        forward!(self, f => f.reset());
    }
}

impl From<ButterworthLowpass> for DesignedFilter {
    fn from(filter: ButterworthLowpass) -> Self {
        DesignedFilter::Butterworth(filter)
    }
}

impl From<ChebyshevLowpass> for DesignedFilter {
    fn from(filter: ChebyshevLowpass) -> Self {
        DesignedFilter::Chebyshev(filter)
    }
}
