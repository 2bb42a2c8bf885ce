/// Append-only store for captured sample frames.
///
/// Passive and unsynchronized: the session gates which frames reach it and
/// wraps it in `Arc<parking_lot::Mutex<_>>` for cross-thread access. Frames
/// are kept in arrival order and flattened exactly once at stop.
#[derive(Debug, Default)]
pub struct FrameAccumulator {
    frames: Vec<Vec<f32>>,
    sample_count: usize,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a frame onto the tail of the sequence. O(1) amortized — this
    /// runs on the real-time delivery path.
    pub fn append(&mut self, frame: &[f32]) {
        if frame.is_empty() {
            return;
        }
        self.sample_count += frame.len();
        self.frames.push(frame.to_vec());
    }

    /// Flatten all frames, in arrival order, into one contiguous array and
    /// clear internal storage. No reordering, no gap insertion: paused
    /// intervals contributed no frames, so the output is simply shorter
    /// than wall-clock time.
    pub fn merge_and_clear(&mut self) -> Vec<f32> {
        let mut merged = Vec::with_capacity(self.sample_count);
        for frame in self.frames.drain(..) {
            merged.extend_from_slice(&frame);
        }
        self.sample_count = 0;
        merged
    }

    /// Total samples held across all frames.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of frames held.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Discard all held frames.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.sample_count = 0;
    }
}
