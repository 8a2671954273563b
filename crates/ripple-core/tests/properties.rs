//! Property-based tests for ripple-core filter designs.
//!
//! Tests structure, stability, unity DC gain and reset behaviour across
//! randomized orders, cutoffs and ripples using proptest.

use proptest::prelude::*;
use ripple_core::{
    ButterworthLowpass, ChebyshevLowpass, FilterCascade, MAX_CUTOFF, MAX_ORDER, MAX_RIPPLE_DB,
    MIN_CUTOFF, MIN_ORDER, MIN_RIPPLE_DB, Prototype, SampleProcessor,
};

/// Runs `check` against a Butterworth and a Chebyshev design sharing the
/// same order and cutoff.
fn run_both<F>(order: u32, cutoff: f64, ripple_db: f64, mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&str, &mut dyn CascadeView) -> Result<(), TestCaseError>,
{
    let mut butter = ButterworthLowpass::butterworth(order, cutoff);
    check("butterworth", &mut butter)?;
    let mut cheby = ChebyshevLowpass::chebyshev(order, cutoff, ripple_db);
    check("chebyshev", &mut cheby)
}

/// Object-safe view over cascades of either family.
trait CascadeView: SampleProcessor {
    fn dc_gain(&self) -> f64;
    fn digital_pole_norms(&self) -> Vec<f64>;
    fn section_states(&self) -> Vec<f64>;
}

impl<P: Prototype> CascadeView for FilterCascade<P> {
    fn dc_gain(&self) -> f64 {
        FilterCascade::dc_gain(self)
    }

    fn digital_pole_norms(&self) -> Vec<f64> {
        self.digital_poles().map(|p| p.norm()).collect()
    }

    fn section_states(&self) -> Vec<f64> {
        let mut states: Vec<f64> = self.biquads().iter().flat_map(|s| s.state()).collect();
        if let Some(single) = self.single_pole() {
            states.extend(single.state());
        }
        states
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Section and pole counts follow the order for both families.
    #[test]
    fn structure_follows_order(
        order in 1u32..=16,
        cutoff in 0.001f64..0.499,
        ripple_db in 0.01f64..6.0,
    ) {
        let butter = ButterworthLowpass::butterworth(order, cutoff);
        let cheby = ChebyshevLowpass::chebyshev(order, cutoff, ripple_db);
        for (biquads, single, poles) in [
            (butter.num_biquads(), butter.single_pole().is_some(), butter.num_poles()),
            (cheby.num_biquads(), cheby.single_pole().is_some(), cheby.num_poles()),
        ] {
            prop_assert_eq!(biquads, (order / 2) as usize);
            prop_assert_eq!(single, order % 2 == 1);
            prop_assert_eq!(poles, ((order + 1) / 2) as usize);
        }
    }

    /// Every realized z-plane pole lies strictly inside the unit circle.
    #[test]
    fn digital_poles_are_stable(
        order in MIN_ORDER..=MAX_ORDER,
        cutoff in MIN_CUTOFF..=MAX_CUTOFF,
        ripple_db in MIN_RIPPLE_DB..=MAX_RIPPLE_DB,
    ) {
        run_both(order, cutoff, ripple_db, |family, cascade| {
            for norm in cascade.digital_pole_norms() {
                prop_assert!(
                    norm < 1.0,
                    "{} order {} cutoff {} ripple {}: pole magnitude {}",
                    family, order, cutoff, ripple_db, norm
                );
            }
            Ok(())
        })?;
    }

    /// H(1) is unity for every design.
    #[test]
    fn analytic_dc_gain_is_unity(
        order in MIN_ORDER..=MAX_ORDER,
        cutoff in MIN_CUTOFF..=MAX_CUTOFF,
        ripple_db in MIN_RIPPLE_DB..=MAX_RIPPLE_DB,
    ) {
        run_both(order, cutoff, ripple_db, |family, cascade| {
            let gain = cascade.dc_gain();
            prop_assert!(
                (gain - 1.0).abs() < 1e-6,
                "{} order {} cutoff {} ripple {}: DC gain {}",
                family, order, cutoff, ripple_db, gain
            );
            Ok(())
        })?;
    }

    /// Random finite input produces finite output.
    #[test]
    fn output_is_finite(
        order in 1u32..=16,
        cutoff in 0.001f64..0.499,
        ripple_db in 0.01f64..6.0,
        input in prop::collection::vec(-1.0f64..=1.0, 256),
    ) {
        run_both(order, cutoff, ripple_db, |family, cascade| {
            for &sample in &input {
                let out = cascade.process(sample);
                prop_assert!(out.is_finite(), "{} produced {} for {}", family, out, sample);
            }
            Ok(())
        })?;
    }

    /// After reset every register is zero and silence stays silent.
    #[test]
    fn reset_returns_to_silence(
        order in 1u32..=16,
        cutoff in 0.01f64..0.49,
        ripple_db in 0.1f64..3.0,
        input in prop::collection::vec(-1.0f64..=1.0, 64),
    ) {
        run_both(order, cutoff, ripple_db, |family, cascade| {
            for &sample in &input {
                cascade.process(sample);
            }
            cascade.reset();
            prop_assert!(cascade.section_states().iter().all(|&d| d == 0.0), "{} state not cleared", family);
            prop_assert_eq!(cascade.process(0.0), 0.0);
            Ok(())
        })?;
    }

    /// Re-applying the current order leaves coefficients and state untouched.
    #[test]
    fn set_order_is_idempotent(
        order in 1u32..=16,
        cutoff in 0.01f64..0.49,
        ripple_db in 0.1f64..3.0,
    ) {
        let mut cheby = ChebyshevLowpass::chebyshev(order, cutoff, ripple_db);
        cheby.process(1.0);
        let before = cheby.clone();
        cheby.set_order(order);
        prop_assert_eq!(cheby.biquads(), before.biquads());
        prop_assert_eq!(cheby.single_pole(), before.single_pole());
        prop_assert_eq!(cheby.poles(), before.poles());
    }
}

/// Orders, cutoffs and ripples at the edges of the accepted ranges, crossed
/// with each other.
fn edge_designs() -> impl Iterator<Item = (u32, f64, f64)> {
    (MIN_ORDER..=MAX_ORDER).flat_map(|order| {
        [MIN_CUTOFF, 0.1, MAX_CUTOFF].into_iter().flat_map(move |cutoff| {
            [MIN_RIPPLE_DB, MAX_RIPPLE_DB]
                .into_iter()
                .map(move |ripple_db| (order, cutoff, ripple_db))
        })
    })
}

#[test]
fn range_edges_are_stable_with_unity_dc_gain() {
    for (order, cutoff, ripple_db) in edge_designs() {
        let outcome = run_both(order, cutoff, ripple_db, |family, cascade| {
            for norm in cascade.digital_pole_norms() {
                prop_assert!(
                    norm < 1.0,
                    "{} order {} cutoff {} ripple {}: pole magnitude {}",
                    family, order, cutoff, ripple_db, norm
                );
            }
            let gain = cascade.dc_gain();
            prop_assert!(
                (gain - 1.0).abs() < 1e-9,
                "{} order {} cutoff {} ripple {}: DC gain {}",
                family, order, cutoff, ripple_db, gain
            );
            Ok(())
        });
        if let Err(failure) = outcome {
            panic!("{failure}");
        }
    }
}
