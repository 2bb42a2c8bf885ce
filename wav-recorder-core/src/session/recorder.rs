use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::artifact::EncodedArtifact;
use crate::models::config::RecorderConfig;
use crate::models::error::RecorderError;
use crate::models::state::RecorderState;
use crate::processing::accumulator::FrameAccumulator;
use crate::processing::wav_encoder;
use crate::session::timer::DurationTimer;
use crate::traits::capture_source::{CaptureSource, SampleFrameCallback};
use crate::traits::recorder_delegate::RecorderDelegate;

/// Internal mutable session state, protected by `parking_lot::Mutex`.
///
/// Everything the frame callback and the timer thread touch lives here, so
/// frame delivery, timer ticks, and user commands all serialize on one lock.
struct SharedState {
    state: RecorderState,
    /// Bumped on every `start`. Frames and expiries carrying a stale epoch
    /// are dropped, which makes late delivery after stop or re-record
    /// harmless regardless of thread timing.
    epoch: u64,
    sample_rate: Option<u32>,
    accumulator: FrameAccumulator,
    artifact: Option<EncodedArtifact>,
}

impl SharedState {
    fn new() -> Self {
        Self {
            state: RecorderState::Idle,
            epoch: 0,
            sample_rate: None,
            accumulator: FrameAccumulator::new(),
            artifact: None,
        }
    }
}

/// Merge, encode, and enter `Stopped` — exactly once per take.
///
/// Both manual stop and timer expiry funnel through here. The epoch and
/// state guard make the transition idempotent: whichever caller loses the
/// race sees `None` and must not release the source again.
fn finalize_take(shared: &Mutex<SharedState>, epoch: u64) -> Option<EncodedArtifact> {
    let mut s = shared.lock();
    if s.epoch != epoch || !s.state.is_active() {
        return None;
    }
    let Some(sample_rate) = s.sample_rate else {
        return None;
    };

    let samples = s.accumulator.merge_and_clear();
    let artifact = EncodedArtifact::new(wav_encoder::encode(&samples, sample_rate), sample_rate);
    log::debug!(
        "take finalized: {} samples at {} Hz ({} bytes)",
        artifact.sample_count,
        sample_rate,
        artifact.bytes.len()
    );

    s.artifact = Some(artifact.clone());
    s.state = RecorderState::Stopped;
    Some(artifact)
}

/// The recording session orchestrator.
///
/// Owns the capture source, the frame accumulator, and the duration
/// countdown, and drives the state machine:
///
/// - `start` acquires the source and begins routing frames;
/// - `pause`/`resume` gate frame routing and freeze the duration budget;
/// - `stop` (manual or automatic at the duration limit) merges the take,
///   encodes it to WAV exactly once, and releases the source;
/// - `re_record` discards the finished take and returns to idle.
///
/// Commands outside their applicable state are harmless no-ops.
pub struct RecorderSession<S: CaptureSource> {
    source: Arc<Mutex<S>>,
    shared: Arc<Mutex<SharedState>>,
    config: RecorderConfig,
    timer: DurationTimer,
    delegate: Option<Arc<dyn RecorderDelegate>>,
}

impl<S: CaptureSource> fmt::Debug for RecorderSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecorderSession")
            .field("state", &self.shared.lock().state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: CaptureSource + 'static> RecorderSession<S> {
    pub fn new(source: S, config: RecorderConfig) -> Result<Self, RecorderError> {
        config.validate().map_err(RecorderError::InvalidConfiguration)?;
        let timer = DurationTimer::new(config.timer_tick);
        Ok(Self {
            source: Arc::new(Mutex::new(source)),
            shared: Arc::new(Mutex::new(SharedState::new())),
            config,
            timer,
            delegate: None,
        })
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn RecorderDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn state(&self) -> RecorderState {
        self.shared.lock().state
    }

    /// Active recording time in whole seconds (paused intervals excluded).
    pub fn elapsed_secs(&self) -> u64 {
        self.shared.lock().state.elapsed_secs().unwrap_or(0)
    }

    /// Seconds of recording budget left before auto-stop.
    pub fn remaining_secs(&self) -> u64 {
        self.config
            .max_duration_secs
            .saturating_sub(self.elapsed_secs())
    }

    /// The session sample rate, fixed at the first successful `start`.
    pub fn sample_rate(&self) -> Option<u32> {
        self.shared.lock().sample_rate
    }

    /// The finished take, if one exists.
    pub fn artifact(&self) -> Option<EncodedArtifact> {
        self.shared.lock().artifact.clone()
    }

    /// Acquire the source and begin recording. Transitions: idle → recording.
    ///
    /// No-op from any other state. On `SourceUnavailable` the session stays
    /// idle and the error propagates to the caller.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        if !self.shared.lock().state.is_idle() {
            log::debug!("start ignored: session is not idle");
            return Ok(());
        }

        let sample_rate = match self.source.lock().acquire() {
            Ok(rate) => rate,
            Err(e) => {
                log::warn!("failed to acquire capture source: {}", e);
                return Err(e);
            }
        };

        let epoch = {
            let mut s = self.shared.lock();
            s.epoch += 1;
            s.sample_rate = Some(sample_rate);
            s.accumulator.clear();
            s.state = RecorderState::Recording { elapsed_secs: 0 };
            s.epoch
        };
        self.notify_state();

        // Frame routing gate: only frames from this take's epoch, arriving
        // while recording, reach the accumulator. Paused and late frames
        // are dropped here, before accumulation.
        let shared = Arc::clone(&self.shared);
        let callback: SampleFrameCallback = Arc::new(move |frame: &[f32]| {
            let mut s = shared.lock();
            if s.epoch == epoch && s.state.is_recording() {
                s.accumulator.append(frame);
            }
        });
        self.source.lock().subscribe(callback);

        let max = self.config.max_duration_secs;

        let shared = Arc::clone(&self.shared);
        let delegate = self.delegate.clone();
        let on_tick = move |remaining: u64| {
            let elapsed = max.saturating_sub(remaining);
            {
                let mut s = shared.lock();
                if s.epoch != epoch {
                    return;
                }
                match s.state {
                    RecorderState::Recording { .. } => {
                        s.state = RecorderState::Recording { elapsed_secs: elapsed };
                    }
                    RecorderState::Paused { .. } => {
                        s.state = RecorderState::Paused { elapsed_secs: elapsed };
                    }
                    _ => return,
                }
            }
            if let Some(ref d) = delegate {
                d.on_tick(elapsed, remaining);
            }
        };

        let shared = Arc::clone(&self.shared);
        let source = Arc::clone(&self.source);
        let delegate = self.delegate.clone();
        let on_expiry = move || {
            if let Some(artifact) = finalize_take(&shared, epoch) {
                log::info!("maximum duration reached, auto-stopping");
                source.lock().release();
                if let Some(ref d) = delegate {
                    d.on_state_changed(&RecorderState::Stopped);
                    d.on_finished(&artifact);
                }
            }
        };

        self.timer.arm(max, on_tick, on_expiry);
        Ok(())
    }

    /// Suspend frame routing and the duration budget.
    /// Transitions: recording → paused; no-op otherwise.
    pub fn pause(&mut self) {
        let changed = {
            let mut s = self.shared.lock();
            if let RecorderState::Recording { elapsed_secs } = s.state {
                self.timer.suspend();
                s.state = RecorderState::Paused { elapsed_secs };
                true
            } else {
                false
            }
        };
        if changed {
            self.notify_state();
        }
    }

    /// Resume frame routing and the countdown from its remaining budget.
    /// Transitions: paused → recording; no-op otherwise.
    pub fn resume(&mut self) {
        let changed = {
            let mut s = self.shared.lock();
            if let RecorderState::Paused { elapsed_secs } = s.state {
                s.state = RecorderState::Recording { elapsed_secs };
                self.timer.resume();
                true
            } else {
                false
            }
        };
        if changed {
            self.notify_state();
        }
    }

    /// Stop recording and return the encoded take.
    ///
    /// Transitions: recording/paused → stopped. From `Stopped` this returns
    /// the already-encoded take without re-encoding or touching the source;
    /// from `Idle` with no prior take it returns `None`.
    pub fn stop(&mut self) -> Option<EncodedArtifact> {
        let epoch = self.shared.lock().epoch;
        let finalized = finalize_take(&self.shared, epoch);
        self.timer.cancel();

        if let Some(ref artifact) = finalized {
            self.source.lock().release();
            self.notify_state();
            if let Some(ref d) = self.delegate {
                d.on_finished(artifact);
            }
            return finalized;
        }

        // Lost the race to the timer, or was already stopped: hand back the
        // cached take, if any.
        self.shared.lock().artifact.clone()
    }

    /// Discard the finished take and return to idle, ready for a new start.
    /// Transitions: stopped → idle; no-op otherwise.
    pub fn re_record(&mut self) {
        let changed = {
            let mut s = self.shared.lock();
            if s.state.is_stopped() {
                s.accumulator.clear();
                s.artifact = None;
                s.state = RecorderState::Idle;
                true
            } else {
                false
            }
        };
        if changed {
            self.notify_state();
        }
    }

    fn notify_state(&self) {
        if let Some(ref d) = self.delegate {
            let state = self.shared.lock().state;
            d.on_state_changed(&state);
        }
    }
}

impl<S: CaptureSource> Drop for RecorderSession<S> {
    fn drop(&mut self) {
        let active = self.shared.lock().state.is_active();
        if active {
            self.timer.cancel();
            self.source.lock().release();
        }
    }
}
