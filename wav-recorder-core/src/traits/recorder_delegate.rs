use crate::models::artifact::EncodedArtifact;
use crate::models::state::RecorderState;

/// Event observer for session notifications, for UI display.
///
/// Methods are called from session worker threads (timer, frame delivery),
/// not the UI thread. Implementations should marshal to the UI thread if
/// needed. All methods have empty default bodies so implementors override
/// only what they display.
pub trait RecorderDelegate: Send + Sync {
    /// Called when the session state changes.
    fn on_state_changed(&self, _state: &RecorderState) {}

    /// Called once per active second with updated counters.
    fn on_tick(&self, _elapsed_secs: u64, _remaining_secs: u64) {}

    /// Called when a take is finalized, manually or by the duration limit.
    fn on_finished(&self, _artifact: &EncodedArtifact) {}
}
