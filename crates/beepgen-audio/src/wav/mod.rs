//! Deterministic WAV file writer.
//!
//! Writes canonical 44-byte-header, 16-bit PCM WAV files with no timestamps
//! or variable metadata, so identical tones always produce identical bytes.
//! The BLAKE3 hash of the PCM payload identifies a tone independently of
//! its header.

mod format;
mod pcm;
mod writer;


pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use writer::{samples_to_pcm16, write_header, write_wav, write_wav_to_vec};
