//! Header serialization and PCM streaming.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_LEN};

/// Writes the RIFF/WAVE header for `num_frames` frames.
///
/// The declared sizes are exact, so the caller must follow this with exactly
/// `num_frames` frames.
pub fn write_header<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    num_frames: usize,
) -> io::Result<()> {
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sample rate {} Hz overflows the WAV byte rate", format.sample_rate),
        )
    })?;
    let data_size = u32::try_from(format.data_size(num_frames))
        .ok()
        .filter(|size| *size <= u32::MAX - 36)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} frames do not fit in a WAV data chunk", num_frames),
            )
        })?;
    // Total file size minus the 8-byte RIFF preamble
    let riff_size = (HEADER_LEN as u32 - 8) + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}

/// Writes a complete mono WAV stream, header first, then every sample.
///
/// Samples are pulled from the iterator one at a time so a tone never has to
/// be held in memory. Returns the total number of bytes written.
pub fn write_wav<W, I>(writer: &mut W, format: &WavFormat, samples: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = i16>,
    I::IntoIter: ExactSizeIterator,
{
    let samples = samples.into_iter();
    let num_frames = samples.len();

    write_header(writer, format, num_frames)?;

    let mut written = 0usize;
    for sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
        written += 1;
    }

    if written != num_frames {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("declared {} frames but wrote {}", num_frames, written),
        ));
    }

    Ok((HEADER_LEN + format.data_size(num_frames)) as u64)
}

/// Writes a WAV file to a byte vector.
///
/// Fails only when the format or length cannot be expressed in the header.
pub fn write_wav_to_vec(format: &WavFormat, samples: &[i16]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + format.data_size(samples.len()));
    write_wav(&mut buffer, format, samples.iter().copied())?;
    Ok(buffer)
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
