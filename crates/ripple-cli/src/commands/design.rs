//! Print the structure of a design: sections, coefficients and poles.

use clap::Args;
use ripple_config::DesignedFilter;
use ripple_core::Complex64;
use serde::Serialize;

use super::{FilterArgs, ResolvedFilter, format_complex};

/// Frequency-grid resolution used for the passband peak readout.
const PEAK_POINTS: usize = 2048;

#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Print machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct DesignReport {
    preset: Option<String>,
    family: String,
    order: u32,
    cutoff: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cutoff_hz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
    dc_gain: f64,
    passband_peak_db: f64,
    sections: Vec<SectionReport>,
    analog_poles: Vec<[f64; 2]>,
    digital_poles: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct SectionReport {
    kind: &'static str,
    /// `[ci0, ci1, co1]` or `[ci0, ci1, ci2, co1, co2]`.
    coefficients: Vec<f64>,
    pole: [f64; 2],
    pole_radius: f64,
}

fn pair(c: Complex64) -> [f64; 2] {
    [c.re, c.im]
}

fn build_report(resolved: &ResolvedFilter, filter: &DesignedFilter) -> DesignReport {
    let mut sections: Vec<SectionReport> = filter
        .biquads()
        .iter()
        .map(|section| {
            let pole = section.poles()[0];
            SectionReport {
                kind: "biquad",
                coefficients: section.coefficients().to_vec(),
                pole: pair(pole),
                pole_radius: pole.norm(),
            }
        })
        .collect();
    if let Some(single) = filter.single_pole() {
        sections.push(SectionReport {
            kind: "single_pole",
            coefficients: single.coefficients().to_vec(),
            pole: [single.pole(), 0.0],
            pole_radius: single.pole().abs(),
        });
    }

    DesignReport {
        preset: resolved.name.clone(),
        family: filter.family().to_string(),
        order: filter.order(),
        cutoff: filter.cutoff(),
        sample_rate: resolved.sample_rate,
        cutoff_hz: resolved
            .sample_rate
            .map(|rate| resolved.config.cutoff_hz(f64::from(rate))),
        ripple_db: filter.ripple_db(),
        dc_gain: filter.dc_gain(),
        passband_peak_db: filter.passband_peak_db(PEAK_POINTS),
        sections,
        analog_poles: filter.analog_poles().into_iter().map(pair).collect(),
        digital_poles: filter.digital_poles().into_iter().map(pair).collect(),
    }
}

pub fn run(args: DesignArgs) -> anyhow::Result<()> {
    let resolved = args.filter.resolve(None)?;
    let filter = resolved.config.build();
    tracing::debug!(summary = %resolved.summary(), "designing filter");

    if args.json {
        let report = build_report(&resolved, &filter);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(name) = &resolved.name {
        println!("Preset: {name}");
    }
    println!("Design: {}", resolved.summary());
    println!(
        "  {} biquad section(s){}",
        filter.biquads().len(),
        if filter.single_pole().is_some() {
            " + 1 single-pole section"
        } else {
            ""
        }
    );
    println!("  DC gain:        {:.9}", filter.dc_gain());
    println!(
        "  Passband peak:  {:+.4} dB",
        filter.passband_peak_db(PEAK_POINTS)
    );

    println!("\nSections:");
    for (i, section) in filter.biquads().iter().enumerate() {
        let pole = section.poles()[0];
        println!(
            "  [{i}] biquad       ci0={:.9} ci1={:.9} ci2={:.9} co1={:+.9} co2={:+.9}",
            section.ci0(),
            section.ci1(),
            section.ci2(),
            section.co1(),
            section.co2()
        );
        println!(
            "      pole {}  |z|={:.6}",
            format_complex(pole),
            pole.norm()
        );
    }
    if let Some(single) = filter.single_pole() {
        println!(
            "  [{}] single-pole  ci0={:.9} ci1={:.9} co1={:+.9}",
            filter.biquads().len(),
            single.ci0(),
            single.ci1(),
            single.co1()
        );
        println!("      pole {:.6}  |z|={:.6}", single.pole(), single.pole().abs());
    }

    println!("\nAnalog poles (upper half-plane):");
    for pole in filter.analog_poles() {
        println!("  {}", format_complex(pole));
    }

    Ok(())
}
