//! Tone parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};
use crate::synthesis::ToneSamples;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Largest sample rate whose byte rate (`sample_rate * 2`) fits the 32-bit
/// header field.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Largest frame count whose data chunk still fits a 32-bit RIFF size field.
pub const MAX_FRAMES: usize = ((u32::MAX - 36) / 2) as usize;

/// Parameters for a single beep.
///
/// A `ToneSpec` is a plain value: build one per tone, hand it to
/// [`generate_tone`](crate::generate_tone) or [`synthesize`](crate::synthesize),
/// and drop it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneSpec {
    /// Tone frequency in Hz. Not validated; zero gives silence.
    pub frequency: f64,
    /// Tone length in milliseconds.
    pub duration_ms: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl ToneSpec {
    /// Creates a tone at the default sample rate.
    pub fn new(frequency: f64, duration_ms: f64) -> Self {
        Self {
            frequency,
            duration_ms,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(self, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..self
        }
    }

    /// Number of frames: `round(sample_rate * duration_ms / 1000)`.
    ///
    /// Negative or NaN durations yield zero frames.
    pub fn num_frames(&self) -> usize {
        let frames = (self.sample_rate as f64 * self.duration_ms / 1000.0).round();
        // `as` saturates: NaN and negatives become 0.
        frames as usize
    }

    /// Checks the parameters that would otherwise produce a malformed file.
    ///
    /// Frequency is not checked. A duration of zero is valid and produces a
    /// header-only file.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }

        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(AudioError::InvalidDuration {
                duration_ms: self.duration_ms,
            });
        }

        let frames = self.num_frames();
        if frames > MAX_FRAMES {
            return Err(AudioError::invalid_param(
                "duration_ms",
                format!(
                    "{} frames exceeds the WAV limit of {} frames",
                    frames, MAX_FRAMES
                ),
            ));
        }

        Ok(())
    }

    /// Lazily synthesizes the faded sine samples for this tone.
    pub fn samples(&self) -> ToneSamples {
        ToneSamples::new(self)
    }
}
