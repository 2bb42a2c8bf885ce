use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Cancellable, suspendable countdown driving the recording duration limit.
///
/// Runs on a dedicated named thread. Each tick, while counting, decrements
/// the remaining budget and reports it via `on_tick`; when the budget hits
/// zero the `on_expiry` callback fires once and the thread exits. While
/// suspended the thread keeps ticking but the budget does not move, so a
/// paused session never burns recording time.
///
/// Expiry fires at most once per armed period: the thread consumes the
/// `FnOnce` and returns. A tick racing `cancel()` can still deliver a late
/// expiry, which is why the session's stop transition is idempotent.
pub struct DurationTimer {
    tick: Duration,
    inner: Arc<TimerInner>,
    handle: Option<thread::JoinHandle<()>>,
}

struct TimerInner {
    remaining: AtomicU64,
    counting: AtomicBool,
    cancelled: AtomicBool,
}

impl DurationTimer {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            inner: Arc::new(TimerInner {
                remaining: AtomicU64::new(0),
                counting: AtomicBool::new(false),
                cancelled: AtomicBool::new(true),
            }),
            handle: None,
        }
    }

    /// Start a countdown of `remaining_secs` ticks.
    ///
    /// Cancels any previous countdown first. `on_tick` is invoked with the
    /// budget left after each counted tick; `on_expiry` fires exactly once
    /// when the budget reaches zero.
    pub fn arm<T, E>(&mut self, remaining_secs: u64, on_tick: T, on_expiry: E)
    where
        T: Fn(u64) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        self.cancel();

        // Fresh control block per armed period so flags from the previous
        // thread cannot leak into this one.
        let inner = Arc::new(TimerInner {
            remaining: AtomicU64::new(remaining_secs),
            counting: AtomicBool::new(true),
            cancelled: AtomicBool::new(false),
        });
        self.inner = Arc::clone(&inner);

        let tick = self.tick;
        let handle = thread::Builder::new()
            .name("duration-timer".into())
            .spawn(move || {
                loop {
                    thread::sleep(tick);
                    if inner.cancelled.load(Ordering::SeqCst) {
                        return;
                    }
                    if !inner.counting.load(Ordering::SeqCst) {
                        continue;
                    }
                    let left = inner.remaining.load(Ordering::SeqCst).saturating_sub(1);
                    inner.remaining.store(left, Ordering::SeqCst);
                    on_tick(left);
                    if left == 0 {
                        on_expiry();
                        return;
                    }
                }
            })
            .expect("failed to spawn timer thread");

        self.handle = Some(handle);
    }

    /// Pause the countdown, preserving the remaining budget.
    pub fn suspend(&self) {
        self.inner.counting.store(false, Ordering::SeqCst);
    }

    /// Continue the countdown from the remaining budget (never reset).
    pub fn resume(&self) {
        self.inner.counting.store(true, Ordering::SeqCst);
    }

    /// Stop the countdown permanently and join the thread. Idempotent.
    pub fn cancel(&mut self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Seconds of budget left.
    pub fn remaining_secs(&self) -> u64 {
        self.inner.remaining.load(Ordering::SeqCst)
    }
}

impl Drop for DurationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    const TICK: Duration = Duration::from_millis(10);

    fn wait() {
        thread::sleep(Duration::from_millis(150));
    }

    #[test]
    fn expires_once_after_budget() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let mut timer = DurationTimer::new(TICK);
        timer.arm(
            3,
            |_| {},
            move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        wait();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn ticks_count_down() {
        let last_seen = Arc::new(AtomicU64::new(u64::MAX));
        let seen = Arc::clone(&last_seen);

        let mut timer = DurationTimer::new(TICK);
        timer.arm(
            4,
            move |left| {
                seen.store(left, Ordering::SeqCst);
            },
            || {},
        );

        wait();
        assert_eq!(last_seen.load(Ordering::SeqCst), 0);
        timer.cancel();
    }

    #[test]
    fn cancel_prevents_expiry() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let mut timer = DurationTimer::new(TICK);
        timer.arm(
            5,
            |_| {},
            move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            },
        );
        timer.cancel();

        wait();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn suspend_freezes_budget() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let mut timer = DurationTimer::new(TICK);
        timer.arm(
            100,
            |_| {},
            move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        thread::sleep(Duration::from_millis(35));
        timer.suspend();
        thread::sleep(Duration::from_millis(30));

        let frozen = timer.remaining_secs();
        thread::sleep(Duration::from_millis(60));
        assert_eq!(timer.remaining_secs(), frozen);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        timer.resume();
        thread::sleep(Duration::from_millis(30));
        assert!(timer.remaining_secs() < frozen);
        timer.cancel();
    }

    #[test]
    fn rearm_replaces_previous_countdown() {
        let fired = Arc::new(AtomicUsize::new(0));

        let mut timer = DurationTimer::new(TICK);
        let f = Arc::clone(&fired);
        timer.arm(1000, |_| {}, move || {
            f.fetch_add(1, Ordering::SeqCst);
        });

        let f = Arc::clone(&fired);
        timer.arm(2, |_| {}, move || {
            f.fetch_add(1, Ordering::SeqCst);
        });

        wait();
        // Only the second countdown ran to expiry.
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
