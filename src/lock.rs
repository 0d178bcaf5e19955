use std::time::Duration;

use crate::clock::Clock;
use crate::types::LockSnapshot;

/// Repeat submissions of the same word inside this window are denied.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);
/// A lock that is never released is forced open after this long.
pub const SAFETY_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockConfig {
    pub debounce_window: Duration,
    pub safety_timeout: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            debounce_window: DEBOUNCE_WINDOW,
            safety_timeout: SAFETY_TIMEOUT,
        }
    }
}

/// Cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafetyTimer {
    deadline: Option<Duration>,
}

impl SafetyTimer {
    pub fn arm(&mut self, now: Duration, timeout: Duration) {
        self.deadline = Some(now + timeout);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Held {
    word: String,
    at: Duration,
}

/// Lets exactly one candidate word through validation at a time.
///
/// States are UNLOCKED and LOCKED. The safety timer is checked lazily: once
/// it is due the lock counts as released, and the next `acquire` clears it.
pub struct SubmissionLock {
    config: LockConfig,
    clock: Box<dyn Clock>,
    held: Option<Held>,
    last_processed: Option<Held>,
    timer: SafetyTimer,
}

impl SubmissionLock {
    pub fn new(config: LockConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            held: None,
            last_processed: None,
            timer: SafetyTimer::default(),
        }
    }

    pub fn acquire(&mut self, word: &str) -> bool {
        let now = self.clock.now();
        self.expire_if_due(now);

        if let Some(held) = &self.held {
            log::debug!("lock denied for {word}: {} is in flight", held.word);
            return false;
        }

        if let Some(last) = &self.last_processed
            && last.word == word
            && now.saturating_sub(last.at) < self.config.debounce_window
        {
            log::debug!("lock denied for {word}: repeated within debounce window");
            return false;
        }

        let held = Held {
            word: word.to_string(),
            at: now,
        };
        self.last_processed = Some(held.clone());
        self.held = Some(held);
        self.timer.arm(now, self.config.safety_timeout);
        true
    }

    /// Unlocks and cancels the safety timer. No-op when already unlocked.
    pub fn release(&mut self) {
        self.timer.cancel();
        self.held = None;
    }

    pub fn is_locked(&self) -> bool {
        self.held.is_some() && !self.timer.is_due(self.clock.now())
    }

    pub fn snapshot(&self) -> LockSnapshot {
        if !self.is_locked() {
            return LockSnapshot {
                is_locked: false,
                locked_word: None,
                locked_at_ms: None,
            };
        }
        LockSnapshot {
            is_locked: true,
            locked_word: self.held.as_ref().map(|held| held.word.clone()),
            locked_at_ms: self.held.as_ref().map(|held| held.at.as_millis() as u64),
        }
    }

    fn expire_if_due(&mut self, now: Duration) {
        if self.timer.is_due(now) {
            if let Some(held) = &self.held {
                log::warn!("lock on {} was never released, forcing release", held.word);
            }
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn lock_with_clock() -> (SubmissionLock, ManualClock) {
        let clock = ManualClock::default();
        let lock = SubmissionLock::new(LockConfig::default(), Box::new(clock.clone()));
        (lock, clock)
    }

    #[test]
    fn second_acquire_before_release_is_denied() {
        let (mut lock, _clock) = lock_with_clock();

        assert!(lock.acquire("GATO"));
        assert!(!lock.acquire("PERRO"));
        assert!(!lock.acquire("GATO"));
        assert!(lock.is_locked());
    }

    #[test]
    fn release_allows_a_different_word_immediately() {
        let (mut lock, _clock) = lock_with_clock();

        assert!(lock.acquire("GATO"));
        lock.release();

        assert!(!lock.is_locked());
        assert!(lock.acquire("PERRO"));
    }

    #[test]
    fn same_word_is_debounced_for_500ms() {
        let (mut lock, clock) = lock_with_clock();

        assert!(lock.acquire("GATO"));
        lock.release();
        clock.advance_ms(499);
        assert!(!lock.acquire("GATO"));

        clock.advance_ms(1);
        assert!(lock.acquire("GATO"));
    }

    #[test]
    fn safety_timer_force_releases_after_2000ms() {
        let (mut lock, clock) = lock_with_clock();

        assert!(lock.acquire("GATO"));
        clock.advance_ms(1999);
        assert!(!lock.acquire("PERRO"));
        assert!(lock.is_locked());

        clock.advance_ms(1);
        assert!(!lock.is_locked());
        assert!(lock.acquire("PERRO"));
    }

    #[test]
    fn release_when_unlocked_is_a_no_op() {
        let (mut lock, _clock) = lock_with_clock();

        lock.release();
        lock.release();

        assert!(!lock.is_locked());
        assert!(lock.acquire("GATO"));
    }

    #[test]
    fn release_cancels_safety_timer() {
        let mut timer = SafetyTimer::default();
        timer.arm(Duration::ZERO, SAFETY_TIMEOUT);
        assert!(timer.is_armed());

        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.is_due(Duration::from_secs(10)));
    }

    #[test]
    fn snapshot_reports_held_word() {
        let (mut lock, clock) = lock_with_clock();
        clock.advance_ms(42);
        lock.acquire("GATO");

        let snapshot = lock.snapshot();
        assert!(snapshot.is_locked);
        assert_eq!(snapshot.locked_word.as_deref(), Some("GATO"));
        assert_eq!(snapshot.locked_at_ms, Some(42));

        lock.release();
        assert_eq!(
            lock.snapshot(),
            LockSnapshot {
                is_locked: false,
                locked_word: None,
                locked_at_ms: None,
            }
        );
    }
}
