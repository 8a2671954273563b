//! Integration tests for ripple-cli.
//!
//! Tests run the built `ripple` binary end to end.

use std::process::Command;

use tempfile::TempDir;

/// Helper to get the path to the `ripple` binary built by cargo.
fn ripple_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ripple"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = ripple_bin().args(args).output().expect("failed to run ripple");
    assert!(
        output.status.success(),
        "ripple {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_sine(path: &std::path::Path, frequency: f32, sample_rate: u32, channels: u16) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..sample_rate {
        let s = (std::f32::consts::TAU * frequency * i as f32 / sample_rate as f32).sin() * 0.5;
        for _ in 0..channels {
            writer.write_sample(s).unwrap();
        }
    }
    writer.finalize().unwrap();
}

fn read_samples(path: &std::path::Path) -> (Vec<f32>, hound::WavSpec) {
    let reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader
        .into_samples::<f32>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    (samples, spec)
}

fn peak_after(samples: &[f32], skip: usize) -> f32 {
    samples[skip..].iter().map(|s| s.abs()).fold(0.0, f32::max)
}

// ---------------------------------------------------------------------------
// help / version
// ---------------------------------------------------------------------------

#[test]
fn cli_help_lists_commands() {
    let stdout = stdout_of(&["--help"]);
    for command in ["design", "response", "process", "presets"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn cli_version_works() {
    let stdout = stdout_of(&["--version"]);
    assert!(stdout.contains("ripple"));
}

// ---------------------------------------------------------------------------
// design
// ---------------------------------------------------------------------------

#[test]
fn cli_design_text_shows_sections() {
    let stdout = stdout_of(&[
        "design", "--family", "chebyshev", "--order", "5", "--cutoff", "0.1", "--ripple", "1",
    ]);
    assert!(stdout.contains("chebyshev order 5"), "got: {stdout}");
    assert!(stdout.contains("2 biquad section(s) + 1 single-pole section"));
    assert!(stdout.contains("single-pole"));
    assert!(stdout.contains("Analog poles"));
}

#[test]
fn cli_design_json_is_parseable() {
    let stdout = stdout_of(&[
        "design", "--order", "4", "--cutoff-hz", "1000", "--sample-rate", "48000", "--json",
    ]);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(report["family"], "butterworth");
    assert_eq!(report["order"], 4);
    assert_eq!(report["sections"].as_array().unwrap().len(), 2);
    assert!((report["cutoff_hz"].as_f64().unwrap() - 1000.0).abs() < 1e-6);
    assert!((report["dc_gain"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!(report.get("ripple_db").is_none());
    for section in report["sections"].as_array().unwrap() {
        assert!(section["pole_radius"].as_f64().unwrap() < 1.0);
    }
}

#[test]
fn cli_design_from_factory_preset() {
    let stdout = stdout_of(&["design", "--preset", "telephone"]);
    assert!(stdout.contains("Preset: Telephone"));
    assert!(stdout.contains("3400.0 Hz"), "got: {stdout}");
}

#[test]
fn cli_design_rejects_invalid_order() {
    let output = ripple_bin()
        .args(["design", "--order", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("order 0 out of range"), "got: {stderr}");
}

#[test]
fn cli_design_rejects_unknown_family() {
    let output = ripple_bin()
        .args(["design", "--family", "elliptic"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// response
// ---------------------------------------------------------------------------

#[test]
fn cli_response_json_grid() {
    let stdout = stdout_of(&[
        "response", "--order", "6", "--cutoff", "0.2", "--points", "64", "--json",
    ]);
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.len(), 64);
    assert_eq!(rows[0]["frequency"].as_f64().unwrap(), 0.0);
    assert!(rows[0]["magnitude_db"].as_f64().unwrap().abs() < 1e-9);
    // Well past the cutoff a 6th-order design is deep in the stopband
    assert!(rows[60]["magnitude_db"].as_f64().unwrap() < -40.0);
}

#[test]
fn cli_response_table_has_hz_column_with_rate() {
    let stdout = stdout_of(&["response", "--preset", "gentle", "--points", "8"]);
    assert!(stdout.contains("Hz"));
    assert!(stdout.contains("(stop)"));
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

#[test]
fn cli_process_attenuates_stopband() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("output.wav");
    write_sine(&input, 8000.0, 48000, 1);

    stdout_of(&[
        "process",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--family",
        "chebyshev",
        "--order",
        "8",
        "--cutoff-hz",
        "1000",
        "--ripple",
        "0.5",
    ]);

    let (samples, spec) = read_samples(&output);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(samples.len(), 48000);
    let peak = peak_after(&samples, 4800);
    assert!(peak < 0.5e-3, "8 kHz should be far below the 1 kHz cutoff, peak {peak}");
}

#[test]
fn cli_process_passes_passband_per_channel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stereo.wav");
    let output = dir.path().join("out.wav");
    write_sine(&input, 100.0, 44100, 2);

    stdout_of(&[
        "process",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--preset",
        "smooth",
    ]);

    let (samples, spec) = read_samples(&output);
    assert_eq!(spec.channels, 2);
    let left: Vec<f32> = samples.iter().step_by(2).copied().collect();
    let right: Vec<f32> = samples.iter().skip(1).step_by(2).copied().collect();
    assert_eq!(left, right, "identical channels should stay identical");
    let peak = peak_after(&left, 4410);
    assert!((peak - 0.5).abs() < 0.01, "100 Hz should pass, peak {peak}");
}

#[test]
fn cli_process_nonexistent_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = ripple_bin()
        .args([
            "process",
            "/nonexistent/input.wav",
            dir.path().join("out.wav").to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn cli_process_rejects_bit_depth_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output_path = dir.path().join("out.wav");
    write_sine(&input, 440.0, 48000, 1);

    let output = ripple_bin()
        .args([
            "process",
            input.to_str().unwrap(),
            output_path.to_str().unwrap(),
            "--bit-depth",
            "12",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--bit-depth"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Reading"));
    assert!(!output_path.exists());
}

// ---------------------------------------------------------------------------
// presets
// ---------------------------------------------------------------------------

#[test]
fn cli_presets_list() {
    let stdout = stdout_of(&["presets", "list"]);
    for name in ["Gentle", "Anti Alias", "Telephone", "Sub Bass"] {
        assert!(stdout.contains(name), "list should contain '{name}'");
    }
}

#[test]
fn cli_presets_save_then_design() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mine.toml");

    stdout_of(&[
        "presets",
        "save",
        path.to_str().unwrap(),
        "--name",
        "Mine",
        "--family",
        "chebyshev",
        "--order",
        "3",
        "--cutoff",
        "0.2",
    ]);
    assert!(path.exists());

    let shown = stdout_of(&["presets", "show", path.to_str().unwrap()]);
    assert!(shown.contains("name = \"Mine\""), "got: {shown}");
    assert!(shown.contains("family = \"chebyshev\""), "got: {shown}");

    let stdout = stdout_of(&["design", "--preset", path.to_str().unwrap(), "--json"]);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["preset"], "Mine");
    assert_eq!(report["order"], 3);

    // Refuses to overwrite without --force
    let output = ripple_bin()
        .args(["presets", "save", path.to_str().unwrap(), "--name", "Again"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
