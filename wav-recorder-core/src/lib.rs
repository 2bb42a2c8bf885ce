//! # wav-recorder-core
//!
//! Microphone recording core library.
//!
//! Captures a live mono signal from a `CaptureSource`, accumulates it in
//! memory under operator control (start/pause/resume/stop with an enforced
//! maximum active duration), and encodes the take into a self-contained
//! 16-bit mono RIFF/WAVE file at stop. Platform backends (and test doubles)
//! implement the `CaptureSource` trait and plug into the generic
//! `RecorderSession`.
//!
//! ## Architecture
//!
//! ```text
//! wav-recorder-core (this crate)
//! ├── traits/       ← CaptureSource, RecorderDelegate
//! ├── models/       ← RecorderError, RecorderState, RecorderConfig, EncodedArtifact
//! ├── processing/   ← FrameAccumulator, WAV encoding
//! └── session/      ← RecorderSession (orchestrator), DurationTimer
//! ```
//!
//! Data flow:
//!
//! ```text
//! [CaptureSource] → sample frames → [RecorderSession gate]
//!                                         ↓ (recording only)
//!                                  [FrameAccumulator]
//!                                         ↓ (at stop, once)
//!                            merged f32 → [WAV encoder] → EncodedArtifact
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::artifact::{ArtifactMetadata, EncodedArtifact, WAV_MIME_TYPE};
pub use models::config::RecorderConfig;
pub use models::error::RecorderError;
pub use models::state::RecorderState;
pub use processing::accumulator::FrameAccumulator;
pub use processing::wav_encoder;
pub use session::recorder::RecorderSession;
pub use session::timer::DurationTimer;
pub use traits::capture_source::{CaptureSource, SampleFrameCallback};
pub use traits::recorder_delegate::RecorderDelegate;
