//! Tone command implementation
//!
//! Writes a single ad-hoc beep.

use anyhow::{Context, Result};
use beepgen_audio::{generate_tone, ToneSpec};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, GenerateOutput, GeneratedFile, JsonError};

/// Run the tone command
///
/// # Arguments
/// * `output` - Path of the WAV file to write
/// * `tone` - Tone parameters
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 write error
pub fn run(output: &str, tone: &ToneSpec, json_output: bool) -> Result<ExitCode> {
    let result = generate_tone(output, tone).with_context(|| format!("Failed to write {}", output));

    if json_output {
        let out_dir = Path::new(output)
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let (success, files, errors) = match &result {
            Ok(result) => (true, vec![GeneratedFile::new(None, tone, result)], Vec::new()),
            Err(e) => (
                false,
                Vec::new(),
                vec![JsonError::from_anyhow(e, error_codes::GENERATION_ERROR)],
            ),
        };
        print_json(&GenerateOutput {
            success,
            out_dir,
            files,
            errors,
        })?;
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let result = result?;
    println!(
        "{} {} ({} Hz, {:.3} s, {} frames @ {} Hz)",
        "Wrote".green().bold(),
        result.path.display(),
        tone.frequency,
        result.duration_seconds(),
        result.num_frames,
        result.sample_rate
    );
    println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash.dimmed());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_writes_requested_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ping.wav");
        let tone = ToneSpec::new(1200.0, 50.0).with_sample_rate(8000);

        let code = run(path.to_str().unwrap(), &tone, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 44 + 400 * 2);
    }

    #[test]
    fn tone_json_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("ping.wav");
        let tone = ToneSpec::new(1200.0, 50.0);

        let code = run(path.to_str().unwrap(), &tone, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn tone_human_propagates_validation_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ping.wav");
        let tone = ToneSpec::new(1200.0, 50.0).with_sample_rate(0);

        let err = run(path.to_str().unwrap(), &tone, false).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid sample rate"));
    }
}
