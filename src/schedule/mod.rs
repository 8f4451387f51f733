//! Deferred work on a logical clock.
//!
//! Anything that should happen "later" (the opponent's thinking delay, the
//! pause between dealt cards, the zoom pulse after a draw) is a `Task`
//! queued here with a due time. The clock only moves when the frame loop
//! advances it, so a run is fully reproducible from its seed.
//!
//! ## Ordering
//!
//! Tasks run in due-time order; tasks due at the same instant run in the
//! order they were scheduled. Tasks are never cancelled.
//!
//! ```
//! use uno_duel::schedule::{Scheduler, Task};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule_in(100, Task::OpponentTurn);
//!
//! scheduler.advance(50);
//! assert!(scheduler.pop_due().is_none());
//!
//! scheduler.advance(50);
//! assert_eq!(scheduler.pop_due().map(|t| t.task), Some(Task::OpponentTurn));
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Side};

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A deferred continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// The opponent's thinking delay has passed; it takes its turn.
    OpponentTurn,

    /// Draw the next card of a paced draw request.
    Draw { side: Side, remaining: usize },

    /// Start the zoom pulse of a freshly drawn card.
    Zoom(CardId),
}

/// A task that has come due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due_ms: u64,
    pub task: Task,
}

#[derive(Clone, Debug)]
struct Entry(ScheduledTask);

impl Entry {
    fn key(&self) -> (u64, u64) {
        (self.0.due_ms, self.0.id.raw())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Task queue plus the logical clock it runs against.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    queue: BinaryHeap<Reverse<Entry>>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `task` to run `delay_ms` from now.
    pub fn schedule_in(&mut self, delay_ms: u64, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.queue.push(Reverse(Entry(ScheduledTask { id, due_ms, task })));
        id
    }

    /// Move the clock forward.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Remove and return the earliest task that is due, if any.
    pub fn pop_due(&mut self) -> Option<ScheduledTask> {
        let due = self.queue.peek().is_some_and(|Reverse(entry)| entry.0.due_ms <= self.now_ms);
        if !due {
            return None;
        }
        self.queue.pop().map(|Reverse(entry)| entry.0)
    }

    /// Due time of the earliest queued task.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(entry)| entry.0.due_ms)
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// True if a task equal to `task` is queued.
    #[must_use]
    pub fn is_scheduled(&self, task: &Task) -> bool {
        self.queue.iter().any(|Reverse(entry)| &entry.0.task == task)
    }

    /// Drop every queued task and restart the clock.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.now_ms = 0;
    }
}
