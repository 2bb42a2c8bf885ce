//! WAV encoding: flat f32 samples → complete RIFF/WAVE file bytes.
//!
//! The encoder is pure and total: any finite sample slice, including an
//! empty one, produces a valid mono 16-bit PCM file. This byte layout is
//! the one bit-exact external contract of the crate.

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Generate the 44-byte RIFF header for mono 16-bit PCM.
///
/// Layout (all multi-byte integers little-endian):
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    36 + data_bytes
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  1 (mono)
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * 2
/// [32-33]  2 (block align)
/// [34-35]  16 (bits per sample)
/// [36-39]  "data"
/// [40-43]  data_bytes
/// ```
pub fn header(sample_rate: u32, data_bytes: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * 2;
    let chunk_size = 36 + data_bytes;

    let mut header = [0u8; WAV_HEADER_SIZE];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM format code
    header[22..24].copy_from_slice(&1u16.to_le_bytes()); // mono
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&2u16.to_le_bytes()); // block align
    header[34..36].copy_from_slice(&16u16.to_le_bytes()); // bits per sample

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_bytes.to_le_bytes());

    header
}

/// Encode samples into a complete WAV file.
///
/// Each sample is clamped to [-1.0, 1.0], then scaled asymmetrically:
/// negative values by 32768, non-negative by 32767, truncated to i16.
/// Output length is always `44 + 2 * samples.len()`.
pub fn encode(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let data_bytes = (samples.len() * 2) as u32;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + samples.len() * 2);
    out.extend_from_slice(&header(sample_rate, data_bytes));

    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let scaled = if clamped < 0.0 {
            clamped * 32768.0
        } else {
            clamped * 32767.0
        };
        out.extend_from_slice(&(scaled as i16).to_le_bytes());
    }

    out
}
