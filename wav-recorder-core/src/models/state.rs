/// Recorder session state machine.
///
/// State transitions:
/// ```text
/// idle → recording ↔ paused
///           ↓          ↓
///        stopped ← ────┘
///           ↓
///         idle (re-record)
/// ```
///
/// `Stopped` is terminal for a single take; `re_record` returns to `Idle`
/// and discards the buffered audio and the encoded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording { elapsed_secs: u64 },
    Paused { elapsed_secs: u64 },
    Stopped,
}

impl RecorderState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Whether a take is in progress (recording or paused).
    pub fn is_active(&self) -> bool {
        self.is_recording() || self.is_paused()
    }

    /// Returns the active-time counter if in a state that tracks it.
    pub fn elapsed_secs(&self) -> Option<u64> {
        match self {
            Self::Recording { elapsed_secs } | Self::Paused { elapsed_secs } => {
                Some(*elapsed_secs)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(RecorderState::Idle.is_idle());
        assert!(RecorderState::Recording { elapsed_secs: 3 }.is_recording());
        assert!(RecorderState::Paused { elapsed_secs: 3 }.is_paused());
        assert!(RecorderState::Stopped.is_stopped());

        assert!(RecorderState::Recording { elapsed_secs: 0 }.is_active());
        assert!(RecorderState::Paused { elapsed_secs: 0 }.is_active());
        assert!(!RecorderState::Idle.is_active());
        assert!(!RecorderState::Stopped.is_active());
    }

    #[test]
    fn elapsed_only_tracked_while_active() {
        assert_eq!(
            RecorderState::Recording { elapsed_secs: 7 }.elapsed_secs(),
            Some(7)
        );
        assert_eq!(
            RecorderState::Paused { elapsed_secs: 7 }.elapsed_secs(),
            Some(7)
        );
        assert_eq!(RecorderState::Idle.elapsed_secs(), None);
        assert_eq!(RecorderState::Stopped.elapsed_secs(), None);
    }
}
