use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::processing::wav_encoder::WAV_HEADER_SIZE;

/// MIME type of every artifact this core produces.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// The finished recording: a complete, playable WAV file in memory.
///
/// Produced exactly once per take, at stop. Owned by the caller afterwards
/// (playback, download, upload); the session keeps a copy only so that a
/// repeated `stop()` can hand the same take out again.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedArtifact {
    /// The full file: 44-byte RIFF header followed by 16-bit LE PCM.
    pub bytes: Vec<u8>,
    pub sample_rate: u32,
    pub sample_count: usize,
    /// SHA-256 hex digest of `bytes`.
    pub checksum: String,
    pub metadata: ArtifactMetadata,
}

impl EncodedArtifact {
    /// Wrap encoded WAV bytes, deriving counts, checksum, and metadata.
    pub fn new(bytes: Vec<u8>, sample_rate: u32) -> Self {
        let sample_count = bytes.len().saturating_sub(WAV_HEADER_SIZE) / 2;
        let checksum = hex_encode(&Sha256::digest(&bytes));
        let duration_secs = sample_count as f64 / sample_rate as f64;

        let metadata = ArtifactMetadata {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            duration_secs,
            sample_rate,
            sample_count,
            checksum: checksum.clone(),
            mime_type: WAV_MIME_TYPE.to_string(),
        };

        Self {
            bytes,
            sample_rate,
            sample_count,
            checksum,
            metadata,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    /// Playback length in seconds (shorter than wall-clock time when the
    /// take included paused intervals).
    pub fn duration_secs(&self) -> f64 {
        self.sample_count as f64 / self.sample_rate as f64
    }
}

/// Metadata describing an artifact.
///
/// Serializable for JSON export to the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub created_at: String,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub sample_count: usize,
    pub checksum: String,
    pub mime_type: String,
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
