use std::sync::Arc;

use crate::models::error::RecorderError;

/// Callback invoked when the source delivers a frame of samples.
///
/// `frame` is one chunk of consecutive mono f32 samples at the source's
/// fixed sample rate. The callback fires on the source's own thread — keep
/// processing minimal.
pub type SampleFrameCallback = Arc<dyn Fn(&[f32]) + Send + Sync + 'static>;

/// Interface to the external capture collaborator (microphone backend).
///
/// Platform backends and test doubles implement this; the core never talks
/// to audio hardware directly. The delivered frame sequence is lazy,
/// unbounded, and non-restartable: after `release`, a source must not be
/// reused for another take without a fresh `acquire`.
pub trait CaptureSource: Send + Sync {
    /// Acquire the device (permission prompt, device open).
    ///
    /// Returns the fixed sample rate for the session. Fails with
    /// `RecorderError::SourceUnavailable` when permission is denied or no
    /// device is present.
    fn acquire(&mut self) -> Result<u32, RecorderError>;

    /// Begin delivering sample frames to `callback`.
    fn subscribe(&mut self, callback: SampleFrameCallback);

    /// Stop delivery and free the device. Idempotent: a second release is
    /// a no-op.
    fn release(&mut self);
}
