//! Virtual-time task scheduler
//!
//! Delayed transitions are queued here instead of being chained through
//! timers. Every task carries the generation it was scheduled in; bumping
//! the generation (`cancel_all`) invalidates everything still pending, and
//! stale entries are dropped the next time tasks are popped.

use std::time::Duration;

/// Deferred engine transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Advance playback by one signal (or finish it)
    PlaybackStep,
    /// Light the signal under the playback cursor
    ShowSignal,
    /// "Go!" cue elapsed, open input
    FinishPlayback,
    /// Un-highlight a tapped pad
    ClearTap,
    /// Success cue elapsed, start the next round
    NextRound,
    /// Game over cue elapsed, back to the home view
    ReturnHome,
}

/// Identifies one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    id: u64,
    generation: u64,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    handle: TaskHandle,
    task: Task,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    generation: u64,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    fn live(&self) -> impl Iterator<Item = &Scheduled> {
        let generation = self.generation;
        self.pending
            .iter()
            .filter(move |s| s.handle.generation == generation)
    }

    /// Number of live tasks
    pub fn len(&self) -> usize {
        self.live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.live().next().is_none()
    }

    /// Queue `task` to fire `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle {
            id: self.next_id,
            generation: self.generation,
        };
        self.next_id += 1;
        self.pending.push(Scheduled {
            due: self.now + delay,
            handle,
            task,
        });
        handle
    }

    /// Drop one task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if handle.generation != self.generation {
            return false;
        }
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Invalidate every pending task
    pub fn cancel_all(&mut self) {
        self.generation += 1;
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let generation = self.generation;
        self.pending.retain(|s| s.handle.generation == generation);

        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.handle.id))
            .map(|(i, _)| i)?;

        let scheduled = self.pending.remove(idx);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.task)
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Time until the next pending task, if any
    pub fn next_due_in(&self) -> Option<Duration> {
        self.live()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }
}
