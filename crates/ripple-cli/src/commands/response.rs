//! Print a magnitude-response table.

use clap::Args;
use serde::Serialize;

use super::FilterArgs;

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Number of frequencies, evenly spaced from DC up to Nyquist
    #[arg(short = 'n', long, default_value = "32")]
    points: usize,

    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ResponseRow {
    frequency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_hz: Option<f64>,
    magnitude: f64,
    magnitude_db: f64,
}

pub fn run(args: ResponseArgs) -> anyhow::Result<()> {
    if args.points == 0 {
        anyhow::bail!("--points must be at least 1");
    }

    let resolved = args.filter.resolve(None)?;
    let filter = resolved.config.build();
    let rate = resolved.sample_rate.map(f64::from);

    let rows: Vec<ResponseRow> = filter
        .response(args.points)
        .into_iter()
        .map(|point| ResponseRow {
            frequency: point.frequency,
            frequency_hz: rate.map(|rate| point.frequency * rate),
            magnitude: point.magnitude,
            magnitude_db: point.magnitude_db,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Response: {}", resolved.summary());
    println!(
        "  Gain at cutoff: {:.3} dB",
        filter.magnitude_db_at(resolved.config.cutoff)
    );
    println!();

    if rate.is_some() {
        println!("{:>10}  {:>10}  {:>12}", "freq", "Hz", "dB");
    } else {
        println!("{:>10}  {:>12}", "freq", "dB");
    }
    for row in &rows {
        let marker = if row.frequency <= resolved.config.cutoff {
            ""
        } else {
            "  (stop)"
        };
        match row.frequency_hz {
            Some(hz) => println!(
                "{:>10.5}  {:>10.1}  {:>12.3}{marker}",
                row.frequency, hz, row.magnitude_db
            ),
            None => println!(
                "{:>10.5}  {:>12.3}{marker}",
                row.frequency, row.magnitude_db
            ),
        }
    }

    Ok(())
}
