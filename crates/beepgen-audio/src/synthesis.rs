//! Faded sine synthesis.
//!
//! Per sample `i` of `n`:
//!
//! ```text
//! t      = i / sample_rate
//! raw    = 32767 * 0.3 * sin(2π · frequency · t)
//! fade   = 1.0 - (i / n) * 0.7
//! sample = clamp(trunc(raw * fade), i16::MIN, i16::MAX)
//! ```
//!
//! The phase is computed from the sample index, not accumulated.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use crate::envelope::FadeOut;
use crate::tone::ToneSpec;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Full-scale positive value of a signed 16-bit sample.
pub const FULL_SCALE: f64 = 32767.0;

/// Fraction of full scale used for every beep.
pub const AMPLITUDE: f64 = 0.3;

/// Largest magnitude any beep sample can reach: `trunc(32767 * 0.3)`.
pub const PEAK: i16 = 9830;

/// Converts a faded sample value to 16-bit PCM by truncation toward zero.
#[inline]
pub fn to_pcm16(value: f64) -> i16 {
    value
        .trunc()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Iterator over the PCM samples of one tone.
///
/// Yields exactly [`ToneSpec::num_frames`] samples.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    frequency: f64,
    sample_rate: f64,
    fade: FadeOut,
    index: usize,
    total: usize,
}

impl ToneSamples {
    /// Creates the sample iterator for a tone.
    pub fn new(tone: &ToneSpec) -> Self {
        Self {
            frequency: tone.frequency,
            sample_rate: tone.sample_rate as f64,
            fade: FadeOut::default(),
            index: 0,
            total: tone.num_frames(),
        }
    }

    fn sample_at(&self, i: usize) -> i16 {
        let t = i as f64 / self.sample_rate;
        let raw = FULL_SCALE * AMPLITUDE * (TWO_PI * self.frequency * t).sin();
        to_pcm16(raw * self.fade.gain(i, self.total))
    }
}

impl Iterator for ToneSamples {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.total {
            return None;
        }
        let sample = self.sample_at(self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

impl FusedIterator for ToneSamples {}

/// Synthesizes the whole sample buffer for a tone.
pub fn synthesize(tone: &ToneSpec) -> Vec<i16> {
    tone.samples().collect()
}
