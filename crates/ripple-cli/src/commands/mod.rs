//! CLI command implementations.

pub mod design;
pub mod presets;
pub mod process;
pub mod response;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use ripple_config::{Family, FilterConfig, FilterPreset, find_preset};
use ripple_core::Complex64;

/// Filter selection shared by every command that designs a filter.
///
/// A preset supplies the starting point; individual flags override it.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Factory preset name or path to a preset TOML file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Filter family (butterworth or chebyshev)
    #[arg(short, long, value_parser = parse_family)]
    pub family: Option<Family>,

    /// Filter order (number of poles)
    #[arg(short, long)]
    pub order: Option<u32>,

    /// Normalized cutoff, a fraction of the sample rate in (0, 0.5)
    #[arg(short, long, conflicts_with = "cutoff_hz")]
    pub cutoff: Option<f64>,

    /// Cutoff in Hz (needs a sample rate)
    #[arg(long)]
    pub cutoff_hz: Option<f64>,

    /// Passband ripple in dB (Chebyshev only, at most 20)
    #[arg(short, long)]
    pub ripple: Option<f64>,

    /// Sample rate in Hz used for --cutoff-hz and Hz readouts
    #[arg(short, long)]
    pub sample_rate: Option<u32>,
}

/// A validated filter configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedFilter {
    /// Preset name, if one was used.
    pub name: Option<String>,
    /// The validated configuration.
    pub config: FilterConfig,
    /// Sample rate for Hz conversions, if known.
    pub sample_rate: Option<u32>,
}

fn parse_family(s: &str) -> Result<Family, String> {
    s.parse::<Family>().map_err(|e| e.to_string())
}

/// Load a preset by path, falling back to the factory table by name.
pub fn load_preset(name_or_path: &str) -> anyhow::Result<FilterPreset> {
    let path = Path::new(name_or_path);
    if path.exists() {
        tracing::info!(path = %path.display(), "loading preset file");
        return FilterPreset::load(path)
            .with_context(|| format!("failed to load preset {}", path.display()));
    }
    let preset = find_preset(name_or_path).with_context(|| {
        format!("Unknown preset '{name_or_path}'. Use `ripple presets list` to see factory presets")
    })?;
    tracing::info!(name = %preset.name, "using factory preset");
    Ok(preset)
}

impl FilterArgs {
    /// Combine preset and flags into a validated configuration.
    ///
    /// `audio_rate` is the rate of the material being filtered, if any. It
    /// takes precedence over the preset's rate so that a preset's cutoff in
    /// Hz is preserved when applied at a different rate.
    pub fn resolve(&self, audio_rate: Option<u32>) -> anyhow::Result<ResolvedFilter> {
        let (name, mut config, preset_rate) = match &self.preset {
            Some(preset) => {
                let preset = load_preset(preset)?;
                (Some(preset.name), preset.filter, Some(preset.sample_rate))
            }
            None => (None, FilterConfig::default(), None),
        };

        let sample_rate = self.sample_rate.or(audio_rate).or(preset_rate);
        if sample_rate == Some(0) {
            anyhow::bail!("Sample rate must be positive");
        }

        if let (Some(from), Some(to)) = (preset_rate, sample_rate)
            && from != to
        {
            let cutoff_hz = config.cutoff_hz(f64::from(from));
            config = config.with_cutoff_hz(cutoff_hz, f64::from(to));
            tracing::info!(from, to, cutoff_hz, "rescaled preset cutoff to sample rate");
        }

        if let Some(family) = self.family {
            config.family = family;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(ripple) = self.ripple {
            config.ripple_db = ripple;
        }
        if let Some(cutoff) = self.cutoff {
            config.cutoff = cutoff;
        } else if let Some(cutoff_hz) = self.cutoff_hz {
            let Some(rate) = sample_rate else {
                anyhow::bail!("--cutoff-hz needs a sample rate (use --sample-rate)");
            };
            config = config.with_cutoff_hz(cutoff_hz, f64::from(rate));
        }

        config.validate().context("invalid filter configuration")?;

        Ok(ResolvedFilter {
            name,
            config,
            sample_rate,
        })
    }
}

impl ResolvedFilter {
    /// One-line summary, e.g. `chebyshev order 6, cutoff 0.1 (4800.0 Hz), ripple 0.5 dB`.
    pub fn summary(&self) -> String {
        let config = &self.config;
        let mut line = format!(
            "{} order {}, cutoff {}",
            config.family, config.order, config.cutoff
        );
        if let Some(rate) = self.sample_rate {
            line.push_str(&format!(
                " ({:.1} Hz @ {} Hz)",
                config.cutoff_hz(f64::from(rate)),
                rate
            ));
        }
        if config.family.uses_ripple() {
            line.push_str(&format!(", ripple {} dB", config.ripple_db));
        }
        line
    }
}

/// Format a complex number as `re ± imj`.
pub fn format_complex(c: Complex64) -> String {
    if c.im < 0.0 {
        format!("{:.6} - {:.6}j", c.re, -c.im)
    } else {
        format!("{:.6} + {:.6}j", c.re, c.im)
    }
}
