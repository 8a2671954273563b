//! File-based filtering command.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ripple_core::SampleProcessor;
use std::path::PathBuf;

use super::FilterArgs;
use crate::wav::{WavSpec, read_wav, write_wav};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    filter: FilterArgs,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("--bit-depth must be 16, 24 or 32, got {}", args.bit_depth);
    }
    if args.filter.sample_rate.is_some() {
        anyhow::bail!("--sample-rate is taken from the input file for `process`");
    }

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav(&args.input)?;
    let frames = channels.first().map_or(0, Vec::len);
    println!(
        "  {} frames x {} channel(s), {} Hz, {:.2}s",
        frames,
        channels.len(),
        spec.sample_rate,
        frames as f64 / f64::from(spec.sample_rate)
    );

    let resolved = args.filter.resolve(Some(spec.sample_rate))?;
    if let Some(name) = &resolved.name {
        println!("Loading preset: {name}");
    }
    println!("Filter: {}", resolved.summary());
    let design = resolved.config.build();

    let input_stats: Vec<(f32, f32)> = channels.iter().map(|c| (rms(c), peak(c))).collect();

    let total = (frames * channels.len()) as u64;
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    // Each channel gets its own delay state
    let mut done = 0u64;
    for channel in &mut channels {
        let mut filter = design.clone();
        for block in channel.chunks_mut(args.block_size) {
            filter.process_block_f32(block);
            done += block.len() as u64;
            pb.set_position(done);
        }
    }
    pb.finish_with_message("done");
    tracing::debug!(samples = done, "filtered");

    println!("\nStats:");
    for (i, (channel, (in_rms, in_peak))) in channels.iter().zip(input_stats).enumerate() {
        println!(
            "  ch{i}: RMS {:.1} -> {:.1} dB, Peak {:.1} -> {:.1} dB",
            linear_to_db(in_rms),
            linear_to_db(rms(channel)),
            linear_to_db(in_peak),
            linear_to_db(peak(channel))
        );
    }

    let out_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
