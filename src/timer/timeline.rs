use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use super::flushable::Flushable;

pub(super) type Task = Box<dyn FnOnce()>;

/// Ordering key for scheduled tasks. Ties on `fire_at` run in schedule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct TimerKey {
    pub fire_at: Duration,
    pub seq: u64,
}

pub(super) struct TimelineInner {
    pub now: Duration,
    next_seq: u64,
    pub tasks: BTreeMap<TimerKey, Task>,
}

/// Virtual clock plus a queue of fire-once tasks.
///
/// Cloning shares the same queue. Time only moves when the owner calls
/// [`Timeline::advance_to`] or [`Timeline::advance_by`].
#[derive(Clone)]
pub struct Timeline {
    inner: Rc<RefCell<TimelineInner>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(TimelineInner {
                now: Duration::ZERO,
                next_seq: 0,
                tasks: BTreeMap::new(),
            })),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Schedule `task` to run once `delay` has elapsed from now.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> Flushable {
        let mut inner = self.inner.borrow_mut();
        let key = TimerKey {
            fire_at: inner.now + delay,
            seq: inner.next_seq,
        };
        inner.next_seq += 1;
        inner.tasks.insert(key, Box::new(task));
        Flushable::new(key, Rc::downgrade(&self.inner))
    }

    /// Run every task due at or before `target`, in deadline order, then move
    /// the clock to `target`. Returns the number of tasks run.
    ///
    /// A target in the past leaves the clock where it is.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            // Release the borrow before running so tasks can reschedule.
            let task = {
                let mut inner = self.inner.borrow_mut();
                let Some(entry) = inner.tasks.first_entry() else {
                    break;
                };
                if entry.key().fire_at > target {
                    break;
                }
                let fire_at = entry.key().fire_at;
                let task = entry.remove();
                if fire_at > inner.now {
                    inner.now = fire_at;
                }
                task
            };
            task();
            fired += 1;
        }

        let mut inner = self.inner.borrow_mut();
        if target > inner.now {
            inner.now = target;
        }
        fired
    }

    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        self.advance_to(target)
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner
            .borrow()
            .tasks
            .first_key_value()
            .map(|(key, _)| key.fire_at)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.borrow().tasks.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
