//! beepgen Tone Backend
//!
//! Synthesizes short sine-wave beeps and writes them as uncompressed mono
//! 16-bit PCM WAV files, for use as UI sound effects.
//!
//! # Overview
//!
//! Each beep is a fixed-frequency sine at 30% of full scale, shaped by a
//! linear fade from 1.0 towards 0.3, truncated to `i16` and stored
//! little-endian after a canonical 44-byte RIFF header.
//!
//! # Determinism
//!
//! Output is a pure function of the [`ToneSpec`]: no randomness, no
//! timestamps. Generating the same tone twice yields byte-identical files,
//! and the BLAKE3 hash of the PCM payload can be used to check that.
//!
//! # Example
//!
//! ```no_run
//! use beepgen_audio::{generate_tone, ToneSpec};
//!
//! let result = generate_tone("order_confirm_1.wav", &ToneSpec::new(800.0, 200.0))?;
//! assert_eq!(result.num_frames, 8820);
//! # Ok::<(), beepgen_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate_tone()`] - Write one tone to a file
//! - [`tone`] - Tone parameters and frame count
//! - [`envelope`] - Linear fade-out envelope
//! - [`synthesis`] - Faded sine sample generation
//! - [`wav`] - Deterministic WAV file writer

pub mod envelope;
pub mod error;
pub mod generate;
pub mod synthesis;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate_tone, render_tone, tone_pcm_hash, ToneResult};
pub use synthesis::{synthesize, ToneSamples};
pub use tone::{ToneSpec, DEFAULT_SAMPLE_RATE};
