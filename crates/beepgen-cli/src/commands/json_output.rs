//! JSON output types for machine-readable CLI output.
//!
//! Printed instead of the colored human output when `--json` is passed.

use anyhow::Error;
use beepgen_audio::{AudioError, ToneResult, ToneSpec};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Backend errors pass their own `AUDIO_XXX` code through instead.
pub mod error_codes {
    /// Cue manifest could not be read or is invalid
    pub const INVALID_MANIFEST: &str = "CLI_001";
    /// Generation error not raised by the tone backend
    pub const GENERATION_ERROR: &str = "CLI_002";
    /// WAV file could not be inspected
    pub const INSPECT_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_004")
    pub code: String,
    /// Human-readable error message, including its causes
    pub message: String,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Converts an error chain, using the backend code when there is one.
    pub fn from_anyhow(err: &Error, fallback_code: &str) -> Self {
        let code = err
            .downcast_ref::<AudioError>()
            .map(AudioError::code)
            .unwrap_or(fallback_code);
        Self::new(code, format!("{:#}", err))
    }
}

/// One written WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedFile {
    /// Cue the tone belongs to (absent for ad-hoc tones)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue: Option<String>,
    /// Output path
    pub path: String,
    /// Tone frequency in Hz
    pub frequency: f64,
    /// Tone duration in milliseconds
    pub duration_ms: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Frames in the data chunk
    pub num_frames: usize,
    /// File size in bytes
    pub bytes: u64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

impl GeneratedFile {
    /// Builds a record from the tone parameters and the backend result.
    pub fn new(cue: Option<&str>, tone: &ToneSpec, result: &ToneResult) -> Self {
        Self {
            cue: cue.map(str::to_string),
            path: result.path.display().to_string(),
            frequency: tone.frequency,
            duration_ms: tone.duration_ms,
            sample_rate: result.sample_rate,
            num_frames: result.num_frames,
            bytes: result.bytes_written,
            pcm_hash: result.pcm_hash.clone(),
        }
    }
}

/// JSON output for the `generate` and `tone` commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether every file was written
    pub success: bool,
    /// Output directory
    pub out_dir: String,
    /// Files written, in order (partial on failure)
    pub files: Vec<GeneratedFile>,
    /// Errors encountered
    pub errors: Vec<JsonError>,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Whether the file could be read
    pub success: bool,
    /// Inspected file
    pub path: String,
    /// Details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
    /// Errors encountered
    pub errors: Vec<JsonError>,
}

/// Properties of an inspected WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Frames per channel
    pub num_frames: u32,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value
    pub peak: u16,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_json_error_uses_backend_code() {
        let err: Error = Err::<(), _>(AudioError::InvalidSampleRate { rate: 0 })
            .context("Failed to write beep.wav")
            .unwrap_err();
        let json = JsonError::from_anyhow(&err, error_codes::GENERATION_ERROR);
        assert_eq!(json.code, "AUDIO_001");
        assert!(json.message.starts_with("Failed to write beep.wav: "));
    }

    #[test]
    fn test_json_error_fallback_code() {
        let err = anyhow::anyhow!("manifest has no cues");
        let json = JsonError::from_anyhow(&err, error_codes::INVALID_MANIFEST);
        assert_eq!(json, JsonError::new("CLI_001", "manifest has no cues"));
    }

    #[test]
    fn test_invalid_manifest_tone_uses_manifest_code() {
        let err = crate::cues::CueManifest::from_json(
            r#"{
                "cues": [{
                    "id": "bad",
                    "label": "bad",
                    "tones": [{"file": "bad_1.wav", "frequency": 440.0, "duration_ms": -1.0}]
                }]
            }"#,
        )
        .unwrap_err();
        let json = JsonError::from_anyhow(&err, error_codes::INVALID_MANIFEST);
        assert_eq!(json.code, "CLI_001");
        assert!(json.message.contains("invalid duration"));
    }

    #[test]
    fn test_generated_file_skips_missing_cue() {
        let tone = ToneSpec::new(800.0, 200.0);
        let result = ToneResult {
            path: "out.wav".into(),
            sample_rate: 44100,
            num_frames: 8820,
            bytes_written: 17684,
            pcm_hash: "ab".repeat(32),
        };
        let file = GeneratedFile::new(None, &tone, &result);
        let value = serde_json::to_value(&file).unwrap();
        assert!(value.get("cue").is_none());
        assert_eq!(value["num_frames"], 8820);
        assert_eq!(value["path"], "out.wav");
    }
}
