//! List command implementation
//!
//! Prints the cues of a manifest and their tones.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::print_json;
use crate::cues::CueManifest;

/// Run the list command
///
/// # Arguments
/// * `manifest_path` - Optional JSON manifest (default: built-in cues)
/// * `json_output` - Print the manifest as JSON instead of a table
pub fn run(manifest_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let manifest = CueManifest::load_or_builtin(manifest_path)?;

    if json_output {
        print_json(&manifest)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} cue(s), {} tone(s) @ {} Hz",
        "Cues:".cyan().bold(),
        manifest.cues.len(),
        manifest.tone_count(),
        manifest.sample_rate
    );
    for cue in &manifest.cues {
        println!("\n  {} {}", cue.id.bold(), format!("({})", cue.label).dimmed());
        for tone in &cue.tones {
            println!(
                "    {} {:<28} {:>7} Hz {:>6} ms",
                "->".green(),
                tone.file,
                tone.frequency,
                tone.duration_ms
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_builtin_succeeds() {
        assert_eq!(run(None, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(None, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn list_missing_manifest_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.json");
        let err = run(Some(path.to_str().unwrap()), false).unwrap_err();
        assert!(err.to_string().contains("Failed to read cue manifest"));
    }
}
