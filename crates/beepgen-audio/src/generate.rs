//! Tone generation entry points.
//!
//! Takes a [`ToneSpec`] and writes a mono 16-bit WAV file deterministically.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AudioResult;
use crate::synthesis::synthesize;
use crate::tone::ToneSpec;
use crate::wav::{hash_pcm, samples_to_pcm16, write_wav, write_wav_to_vec, WavFormat};

/// Result of writing one tone to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneResult {
    /// Where the file was written.
    pub path: PathBuf,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames in the data chunk.
    pub num_frames: usize,
    /// Total file size in bytes, header included.
    pub bytes_written: u64,
    /// BLAKE3 hash of the PCM data (not the full WAV file).
    pub pcm_hash: String,
}

impl ToneResult {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.sample_rate as f64
    }
}

/// Synthesizes a tone and writes it to `output_path` as a WAV file.
///
/// The file is created or truncated. Its parent directory must already
/// exist. The handle is closed before this returns, on success or failure;
/// a failure part way through leaves a truncated file behind that the
/// caller should treat as invalid.
///
/// # Errors
/// [`AudioError::Io`](crate::AudioError::Io) if the file cannot be created
/// or written, or a validation error for a zero sample rate or a negative
/// duration.
pub fn generate_tone(output_path: impl AsRef<Path>, tone: &ToneSpec) -> AudioResult<ToneResult> {
    tone.validate()?;

    let path = output_path.as_ref();
    let format = WavFormat::mono(tone.sample_rate);
    let mut hasher = blake3::Hasher::new();

    let mut writer = BufWriter::new(File::create(path)?);
    let samples = tone.samples().inspect(|sample| {
        hasher.update(&sample.to_le_bytes());
    });
    let bytes_written = write_wav(&mut writer, &format, samples)?;
    // BufWriter drops flush errors silently
    writer.flush()?;
    drop(writer);

    Ok(ToneResult {
        path: path.to_path_buf(),
        sample_rate: tone.sample_rate,
        num_frames: tone.num_frames(),
        bytes_written,
        pcm_hash: hasher.finalize().to_hex().to_string(),
    })
}

/// Renders a tone to an in-memory WAV file.
pub fn render_tone(tone: &ToneSpec) -> AudioResult<Vec<u8>> {
    tone.validate()?;

    let wav = write_wav_to_vec(&WavFormat::mono(tone.sample_rate), &synthesize(tone))?;
    Ok(wav)
}

/// Returns the PCM hash a tone would have without writing anything.
pub fn tone_pcm_hash(tone: &ToneSpec) -> String {
    hash_pcm(&samples_to_pcm16(&synthesize(tone)))
}
