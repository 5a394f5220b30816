//! One-shot timers on a virtual clock.
//!
//! The only scheduled work on the page is the success notice lifecycle.
//! Timers cannot be cancelled; a page that goes away simply never
//! advances the clock again.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Work to run when a timer fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerTask {
    /// Start fading a success notice out
    FadeNotice { notice: Uuid },
    /// Take a faded notice off the page
    RemoveNotice { notice: Uuid },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Pending {
    id: TimerId,
    due: Duration,
    task: TimerTask,
}

/// Virtual clock plus the timers waiting on it.
///
/// ```rust
/// use pagewire::timer::{Scheduler, TimerTask};
/// use std::time::Duration;
/// use uuid::Uuid;
///
/// let mut scheduler = Scheduler::new();
/// let notice = Uuid::new_v4();
/// scheduler.schedule(Duration::from_millis(4000), TimerTask::FadeNotice { notice });
///
/// let deadline = Duration::from_millis(3999);
/// assert!(scheduler.pop_due(deadline).is_none());
///
/// let deadline = Duration::from_millis(4000);
/// assert_eq!(scheduler.pop_due(deadline), Some(TimerTask::FadeNotice { notice }));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock since the page started.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run `task` once, `delay` from now. Due times saturate at
    /// `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Take the earliest timer due at or before `deadline`, moving the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerTask> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.due);
        Some(fired.task)
    }

    /// Move the clock forward to `deadline` once nothing else is due.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> TimerTask {
        TimerTask::FadeNotice {
            notice: Uuid::new_v4(),
        }
    }

    #[test]
    fn timers_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        let late = fade();
        let early = fade();
        scheduler.schedule(Duration::from_millis(500), late.clone());
        scheduler.schedule(Duration::from_millis(100), early.clone());

        let deadline = Duration::from_secs(1);
        assert_eq!(scheduler.pop_due(deadline), Some(early));
        assert_eq!(scheduler.now(), Duration::from_millis(100));
        assert_eq!(scheduler.pop_due(deadline), Some(late));
        assert_eq!(scheduler.pop_due(deadline), None);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        let first = fade();
        let second = fade();
        scheduler.schedule(Duration::from_millis(10), first.clone());
        scheduler.schedule(Duration::from_millis(10), second.clone());

        let deadline = Duration::from_millis(10);
        assert_eq!(scheduler.pop_due(deadline), Some(first));
        assert_eq!(scheduler.pop_due(deadline), Some(second));
    }

    #[test]
    fn delays_are_relative_to_current_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.settle(Duration::from_millis(4000));
        let task = fade();
        scheduler.schedule(Duration::from_millis(300), task.clone());

        assert!(scheduler.pop_due(Duration::from_millis(4299)).is_none());
        assert_eq!(scheduler.pop_due(Duration::from_millis(4300)), Some(task));
    }

    #[test]
    fn delay_past_end_of_clock_is_due_at_the_end() {
        let mut scheduler = Scheduler::new();
        scheduler.settle(Duration::MAX);
        let task = fade();
        scheduler.schedule(Duration::from_millis(300), task.clone());

        assert_eq!(scheduler.pop_due(Duration::MAX), Some(task));
        assert_eq!(scheduler.now(), Duration::MAX);
    }

    #[test]
    fn settle_never_moves_clock_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.settle(Duration::from_millis(50));
        scheduler.settle(Duration::from_millis(10));
        assert_eq!(scheduler.now(), Duration::from_millis(50));
        assert_eq!(scheduler.pending(), 0);
    }
}
