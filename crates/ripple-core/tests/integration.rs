//! Integration tests for ripple-core filter cascades.
//!
//! Verifies designs with signal-level measurements: impulse and step
//! behaviour, sine-wave gain in the pass- and stopbands, DC convergence across
//! families and orders, and reconfiguration between blocks.

use ripple_core::{
    ButterworthLowpass, ChebyshevLowpass, ChebyshevWarp, SampleProcessor, SampleProcessorExt,
};

const TAU: f64 = core::f64::consts::TAU;

/// Generate a sine at normalized frequency `freq` (fraction of sample rate).
fn generate_sine(freq: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|n| (TAU * freq * n as f64).sin()).collect()
}

/// Measure RMS amplitude of a signal buffer.
fn rms(signal: &[f64]) -> f64 {
    let sum_sq: f64 = signal.iter().map(|&s| s * s).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Convert linear amplitude to dB.
fn to_db(linear: f64) -> f64 {
    20.0 * linear.max(1e-15).log10()
}

/// Feed a sine through `filter` and return the settled gain in dB.
fn measure_gain_db<F: SampleProcessor>(filter: &mut F, freq: f64) -> f64 {
    let num_samples = 16384;
    let settle = 8192;
    filter.reset();
    let input = generate_sine(freq, num_samples);
    let output: Vec<f64> = input.iter().map(|&s| filter.process(s)).collect();
    to_db(rms(&output[settle..]) / rms(&input[settle..]))
}

// ============================================================================
// 1. Worked examples
// ============================================================================

#[test]
fn first_order_quarter_rate_is_two_tap_average() {
    let mut lp = ButterworthLowpass::butterworth(1, 0.25);
    let input = [1.0, 0.0, 0.0, 0.0];
    let expected = [0.5, 0.5, 0.0, 0.0];
    for (&x, &want) in input.iter().zip(&expected) {
        let got = lp.process(x);
        assert!((got - want).abs() < 1e-12, "expected {want}, got {got}");
    }
}

#[test]
fn second_order_one_db_chebyshev_warp() {
    let warp = ChebyshevWarp::compute(2, 1.0);
    assert!((warp.epsilon - 0.5088).abs() < 1e-3, "eps = {}", warp.epsilon);
    assert!((warp.v0 - 0.7142).abs() < 1e-3, "v0 = {}", warp.v0);
    assert!((warp.a0 - 0.8913).abs() < 1e-3, "a0 = {}", warp.a0);
    assert!((warp.warp_r - 0.691).abs() < 1e-3, "warp_r = {}", warp.warp_r);
    assert!((warp.warp_i - 1.134).abs() < 1e-3, "warp_i = {}", warp.warp_i);

    let lp = ChebyshevLowpass::chebyshev(2, 0.25, 1.0);
    assert_eq!(*lp.prototype().warp(), warp);
}

// ============================================================================
// 2. DC convergence
// ============================================================================

#[test]
fn constant_input_converges_to_itself() {
    for order in 1..=8 {
        for &cutoff in &[0.05, 0.1, 0.2, 0.3, 0.45] {
            let mut butter = ButterworthLowpass::butterworth(order, cutoff);
            let mut out = 0.0;
            for _ in 0..20000 {
                out = butter.process(0.75);
            }
            assert!(
                (out - 0.75).abs() < 1e-6,
                "butterworth order {order} cutoff {cutoff}: settled at {out}"
            );

            for &ripple in &[0.5, 1.0, 3.0] {
                let mut cheby = ChebyshevLowpass::chebyshev(order, cutoff, ripple);
                let mut out = 0.0;
                for _ in 0..20000 {
                    out = cheby.process(-0.4);
                }
                assert!(
                    (out + 0.4).abs() < 1e-6,
                    "chebyshev order {order} cutoff {cutoff} ripple {ripple}: settled at {out}"
                );
            }
        }
    }
}

// ============================================================================
// 3. Frequency response
// ============================================================================

#[test]
fn butterworth_passes_low_and_rejects_high() {
    let mut lp = ButterworthLowpass::butterworth(4, 0.05);

    for &freq in &[0.002, 0.005, 0.01] {
        let gain_db = measure_gain_db(&mut lp, freq);
        assert!(gain_db.abs() < 0.1, "passband {freq}: {gain_db:.2} dB");
    }

    let at_cutoff = measure_gain_db(&mut lp, 0.05);
    assert!((at_cutoff + 3.01).abs() < 0.2, "cutoff: {at_cutoff:.2} dB");

    // Four poles: roughly 24 dB/octave beyond the cutoff
    for &freq in &[0.15, 0.25, 0.4] {
        let gain_db = measure_gain_db(&mut lp, freq);
        assert!(gain_db < -30.0, "stopband {freq}: {gain_db:.2} dB");
    }
}

#[test]
fn measured_gain_matches_analytic_response() {
    let mut lp = ChebyshevLowpass::chebyshev(5, 0.08, 0.5);
    for &freq in &[0.01, 0.04, 0.07, 0.1, 0.2] {
        let measured = measure_gain_db(&mut lp, freq);
        let analytic = lp.magnitude_db_at(freq);
        assert!(
            (measured - analytic).abs() < 0.1,
            "{freq}: measured {measured:.3} dB, analytic {analytic:.3} dB"
        );
    }
}

#[test]
fn chebyshev_rolls_off_faster_than_butterworth() {
    for order in [3, 4, 6] {
        let butter = ButterworthLowpass::butterworth(order, 0.1);
        let cheby = ChebyshevLowpass::chebyshev(order, 0.1, 1.0);
        let f = 0.2;
        assert!(
            cheby.magnitude_db_at(f) < butter.magnitude_db_at(f),
            "order {order}: chebyshev {:.1} dB vs butterworth {:.1} dB",
            cheby.magnitude_db_at(f),
            butter.magnitude_db_at(f)
        );
    }
}

#[test]
fn odd_chebyshev_passband_stays_within_ripple() {
    let lp = ChebyshevLowpass::chebyshev(7, 0.15, 2.0);
    for point in lp.response(2048).iter().filter(|p| p.frequency <= 0.15) {
        assert!(
            point.magnitude_db <= 1e-6 && point.magnitude_db >= -2.0 - 1e-3,
            "{}: {} dB",
            point.frequency,
            point.magnitude_db
        );
    }
}

// ============================================================================
// 4. Reconfiguration
// ============================================================================

#[test]
fn retune_between_blocks() {
    let mut lp = ButterworthLowpass::butterworth(2, 0.1);
    let mut block = vec![0.5; 512];
    lp.process_block_inplace(&mut block);

    lp.set_order(7);
    lp.set_cutoff(0.3);
    assert_eq!(lp.order(), 7);
    assert_eq!(lp.num_biquads(), 3);

    let mut block = vec![0.5; 4096];
    lp.process_block_inplace(&mut block);
    assert!((block[4095] - 0.5).abs() < 1e-9);
}

#[test]
fn chained_cascades_multiply_responses() {
    let a = ButterworthLowpass::butterworth(2, 0.1);
    let b = ChebyshevLowpass::chebyshev(3, 0.2, 1.0);
    let expected = a.magnitude_db_at(0.15) + b.magnitude_db_at(0.15);

    let mut chain = a.chain(b);
    let measured = measure_gain_db(&mut chain, 0.15);
    assert!((measured - expected).abs() < 0.1, "measured {measured}, expected {expected}");
}

#[test]
fn f32_buffers_are_filtered_in_f64() {
    let mut lp = ButterworthLowpass::butterworth(3, 0.2);
    let mut buffer = vec![1.0f32; 2048];
    lp.process_block_f32(&mut buffer);
    assert!((buffer[2047] - 1.0).abs() < 1e-6);
}
