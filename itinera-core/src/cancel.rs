//! Caller-owned cancellation for long-running optimizer calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Signal telling an optimizer to stop and return its best result so far.
///
/// A signal may combine a shared flag, which the caller can raise from
/// another thread, with a deadline. Cloning shares the flag.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use itinera_core::StopSignal;
///
/// let signal = StopSignal::never();
/// assert!(!signal.is_stopped());
///
/// let flag = StopSignal::flag();
/// flag.cancel();
/// assert!(flag.is_stopped());
///
/// let expired = StopSignal::after(Duration::ZERO);
/// assert!(expired.is_stopped());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl StopSignal {
    /// A signal that never fires.
    #[must_use]
    pub const fn never() -> Self {
        Self {
            flag: None,
            deadline: None,
        }
    }

    /// A signal fired by calling [`StopSignal::cancel`].
    #[must_use]
    pub fn flag() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
            deadline: None,
        }
    }

    /// A signal that fires once `budget` has elapsed from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self::never().with_deadline(Instant::now() + budget)
    }

    /// Add or replace the deadline while returning `self` for chaining.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Raise the shared flag. Has no effect on signals without one.
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Release);
        }
    }

    /// Report whether the flag is raised or the deadline has passed.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        let cancelled = self
            .flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire));
        cancelled || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn clones_share_the_flag() {
        let signal = StopSignal::flag();
        let observer = signal.clone();
        signal.cancel();
        assert!(observer.is_stopped());
    }

    #[rstest]
    fn distant_deadline_does_not_fire() {
        let signal = StopSignal::after(Duration::from_secs(3600));
        assert!(!signal.is_stopped());
    }

    #[rstest]
    fn cancelling_a_flagless_signal_is_a_no_op() {
        let signal = StopSignal::never();
        signal.cancel();
        assert!(!signal.is_stopped());
    }
}
