use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use super::timeline::{TimelineInner, TimerKey};

/// Handle to one scheduled task.
///
/// The task runs at most once: when its deadline passes, when flushed, or
/// never if cancelled first. Every method is a no-op once the task is gone,
/// including after the owning [`Timeline`](super::Timeline) is dropped.
#[derive(Debug, Clone)]
pub struct Flushable {
    key: TimerKey,
    timeline: Weak<RefCell<TimelineInner>>,
}

impl Flushable {
    pub(super) fn new(key: TimerKey, timeline: Weak<RefCell<TimelineInner>>) -> Self {
        Self { key, timeline }
    }

    /// Whether the task is still waiting to run
    pub fn is_pending(&self) -> bool {
        self.timeline
            .upgrade()
            .is_some_and(|inner| inner.borrow().tasks.contains_key(&self.key))
    }

    pub fn fire_at(&self) -> Duration {
        self.key.fire_at
    }

    /// Drop the task without running it. Returns `true` if it was pending.
    pub fn cancel(&self) -> bool {
        let Some(inner) = self.timeline.upgrade() else {
            return false;
        };
        let removed = inner.borrow_mut().tasks.remove(&self.key);
        removed.is_some()
    }

    /// Run the task now and clear it. Returns `true` if it was pending.
    pub fn flush(&self) -> bool {
        let Some(inner) = self.timeline.upgrade() else {
            return false;
        };
        let task = inner.borrow_mut().tasks.remove(&self.key);
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}
