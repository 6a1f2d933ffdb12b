//! Cue manifests.
//!
//! A cue is one UI sound event made of several beeps, each written to its
//! own file. The built-in manifest holds the order-confirmation and
//! payment-completion cues; a JSON manifest with the same shape can replace
//! it via `--manifest`.

use anyhow::{anyhow, bail, Context, Result};
use beepgen_audio::{ToneSpec, DEFAULT_SAMPLE_RATE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "assets/sounds";

/// A set of cues rendered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CueManifest {
    /// Sample rate shared by every tone, in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Cues in generation order.
    pub cues: Vec<Cue>,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// One sound event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cue {
    /// Stable identifier, used by `--cue`.
    pub id: String,
    /// Human-readable name used in progress output.
    pub label: String,
    /// Beeps in playback order.
    pub tones: Vec<CueTone>,
}

/// One beep of a cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CueTone {
    /// Output file name, relative to the output directory.
    pub file: String,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
}

impl CueTone {
    fn new(file: &str, frequency: f64, duration_ms: f64) -> Self {
        Self {
            file: file.to_string(),
            frequency,
            duration_ms,
        }
    }

    /// Tone parameters at the given sample rate.
    pub fn tone_spec(&self, sample_rate: u32) -> ToneSpec {
        ToneSpec::new(self.frequency, self.duration_ms).with_sample_rate(sample_rate)
    }
}

impl CueManifest {
    /// The two cues shipped with the application.
    pub fn builtin() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            cues: vec![
                Cue {
                    id: "order_confirm".to_string(),
                    label: "order confirmation".to_string(),
                    tones: vec![
                        CueTone::new("order_confirm_1.wav", 800.0, 200.0),
                        CueTone::new("order_confirm_2.wav", 1000.0, 200.0),
                    ],
                },
                Cue {
                    id: "payment_complete".to_string(),
                    label: "payment completion".to_string(),
                    tones: vec![
                        CueTone::new("payment_complete_1.wav", 600.0, 150.0),
                        CueTone::new("payment_complete_2.wav", 800.0, 150.0),
                        CueTone::new("payment_complete_3.wav", 1000.0, 300.0),
                    ],
                },
            ],
        }
    }

    /// Parses and validates a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json).context("Invalid cue manifest JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Loads the manifest at `path`, or the built-in one when `path` is `None`.
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(Path::new(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Reads and validates a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cue manifest: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to load cue manifest: {}", path.display()))
    }

    /// Checks the manifest before anything is written.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample_rate must be greater than zero");
        }
        if self.cues.is_empty() {
            bail!("manifest has no cues");
        }

        let mut ids = HashSet::new();
        let mut files = HashSet::new();
        for cue in &self.cues {
            if cue.id.trim().is_empty() {
                bail!("cue id must not be empty");
            }
            if !ids.insert(cue.id.as_str()) {
                bail!("duplicate cue id: {}", cue.id);
            }
            if cue.tones.is_empty() {
                bail!("cue '{}' has no tones", cue.id);
            }

            for tone in &cue.tones {
                validate_file_name(&cue.id, &tone.file)?;
                if !files.insert(tone.file.as_str()) {
                    bail!("duplicate output file: {}", tone.file);
                }
                // Plain message: manifest failures carry the manifest error code
                tone.tone_spec(self.sample_rate)
                    .validate()
                    .map_err(|e| anyhow!("cue '{}', file {}: {}", cue.id, tone.file, e))?;
            }
        }

        Ok(())
    }

    /// Looks up a cue by id.
    pub fn cue(&self, id: &str) -> Option<&Cue> {
        self.cues.iter().find(|cue| cue.id == id)
    }

    /// Cues to generate: all of them when `ids` is empty, otherwise the named
    /// ones in manifest order.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&Cue>> {
        if let Some(unknown) = ids.iter().find(|id| self.cue(id).is_none()) {
            let known: Vec<&str> = self.cues.iter().map(|cue| cue.id.as_str()).collect();
            bail!("unknown cue: {} (expected one of: {})", unknown, known.join(", "));
        }

        Ok(self
            .cues
            .iter()
            .filter(|cue| ids.is_empty() || ids.contains(&cue.id))
            .collect())
    }

    /// Total number of tones across all cues.
    pub fn tone_count(&self) -> usize {
        self.cues.iter().map(|cue| cue.tones.len()).sum()
    }
}

fn validate_file_name(cue_id: &str, file: &str) -> Result<()> {
    let path = Path::new(file);
    let plain = path.file_name().is_some_and(|name| name == path.as_os_str());
    if file.is_empty() || !plain || file.contains(['/', '\\']) {
        bail!(
            "cue '{}': output file must be a plain file name, got '{}'",
            cue_id,
            file
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_manifest() {
        let manifest = CueManifest::builtin();
        manifest.validate().unwrap();
        assert_eq!(manifest.sample_rate, 44100);
        assert_eq!(manifest.tone_count(), 5);

        let files: Vec<(&str, f64, f64)> = manifest
            .cues
            .iter()
            .flat_map(|cue| cue.tones.iter())
            .map(|t| (t.file.as_str(), t.frequency, t.duration_ms))
            .collect();
        assert_eq!(
            files,
            vec![
                ("order_confirm_1.wav", 800.0, 200.0),
                ("order_confirm_2.wav", 1000.0, 200.0),
                ("payment_complete_1.wav", 600.0, 150.0),
                ("payment_complete_2.wav", 800.0, 150.0),
                ("payment_complete_3.wav", 1000.0, 300.0),
            ]
        );
    }

    #[test]
    fn test_json_roundtrip_defaults_sample_rate() {
        let manifest = CueManifest::from_json(
            r#"{
                "cues": [{
                    "id": "error",
                    "label": "error",
                    "tones": [{"file": "error_1.wav", "frequency": 300.0, "duration_ms": 400.0}]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.sample_rate, 44100);
        assert_eq!(
            manifest.cues[0].tones[0].tone_spec(manifest.sample_rate),
            ToneSpec::new(300.0, 400.0)
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = CueManifest::from_json(r#"{"cues": [], "volume": 1.0}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown field"));
    }

    #[test]
    fn test_rejects_empty_manifest() {
        let err = CueManifest::from_json(r#"{"cues": []}"#).unwrap_err();
        assert!(err.to_string().contains("no cues"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut manifest = CueManifest::builtin();
        manifest.cues[1].id = "order_confirm".to_string();
        assert!(manifest.validate().unwrap_err().to_string().contains("duplicate cue id"));

        let mut manifest = CueManifest::builtin();
        manifest.cues[1].tones[0].file = "order_confirm_1.wav".to_string();
        assert!(manifest
            .validate()
            .unwrap_err()
            .to_string()
            .contains("duplicate output file"));
    }

    #[test]
    fn test_rejects_paths_in_file_names() {
        for bad in ["../escape.wav", "sub/beep.wav", "sub\\beep.wav", "", ".."] {
            let mut manifest = CueManifest::builtin();
            manifest.cues[0].tones[0].file = bad.to_string();
            assert!(manifest.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_invalid_tone() {
        let mut manifest = CueManifest::builtin();
        manifest.cues[0].tones[1].duration_ms = -200.0;
        let err = manifest.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("order_confirm_2.wav"));
        assert!(err.downcast_ref::<beepgen_audio::AudioError>().is_none());

        let mut manifest = CueManifest::builtin();
        manifest.sample_rate = 0;
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_select() {
        let manifest = CueManifest::builtin();
        assert_eq!(manifest.select(&[]).unwrap().len(), 2);

        let selected = manifest.select(&["payment_complete".to_string()]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "payment completion");

        let err = manifest.select(&["refund".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown cue: refund"));
        assert!(err.to_string().contains("order_confirm, payment_complete"));
    }
}
