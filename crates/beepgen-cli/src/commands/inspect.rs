//! Inspect command implementation
//!
//! Reads a WAV file back and reports its format, length, peak and PCM hash.

use anyhow::{bail, Context, Result};
use beepgen_audio::wav::compute_pcm_hash;
use colored::Colorize;
use std::io::Cursor;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 success, 1 if the file cannot be read or is not 16-bit PCM
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let result = inspect_file(path);

    if json_output {
        let (success, result, errors) = match result {
            Ok(result) => (true, Some(result), Vec::new()),
            Err(e) => (
                false,
                None,
                vec![JsonError::from_anyhow(&e, error_codes::INSPECT_ERROR)],
            ),
        };
        print_json(&InspectOutput {
            success,
            path: path.to_string(),
            result,
            errors,
        })?;
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let info = result?;
    println!("{} {}", "Inspecting:".cyan().bold(), path);
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {}", "Bits:".dimmed(), info.bits_per_sample);
    println!(
        "  {} {} ({:.3} s)",
        "Frames:".dimmed(),
        info.num_frames,
        info.duration_seconds
    );
    println!("  {} {}", "Peak:".dimmed(), info.peak);
    println!("  {} {}", "PCM hash:".dimmed(), info.pcm_hash);
    Ok(ExitCode::SUCCESS)
}

/// Reads a 16-bit integer PCM WAV file and summarizes it.
pub fn inspect_file(path: &str) -> Result<InspectResult> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path))?;
    inspect_bytes(&bytes).with_context(|| format!("Failed to inspect {}", path))
}

/// Summarizes an in-memory WAV file.
pub fn inspect_bytes(bytes: &[u8]) -> Result<InspectResult> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).context("Not a valid WAV file")?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "unsupported sample format: {} bit {:?} (expected 16 bit integer PCM)",
            spec.bits_per_sample,
            spec.sample_format
        );
    }

    let num_frames = reader.duration();
    let peak = reader
        .into_samples::<i16>()
        .try_fold(0u16, |peak, sample| {
            sample.map(|s| peak.max(s.unsigned_abs()))
        })
        .context("Failed to decode samples")?;
    let pcm_hash = compute_pcm_hash(bytes).context("WAV file has no data chunk")?;

    Ok(InspectResult {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_seconds: num_frames as f64 / spec.sample_rate as f64,
        peak,
        pcm_hash,
    })
}
