//! Event store: the pending queue and the history stack.
//!
//! [`EventStore`] holds forward events not yet applied, ascending by time,
//! and the undo records of applied events, in application order (most
//! recent last). The dispatcher moves events between the two; nothing else
//! reorders them.
//!
//! # Ordering
//!
//! The dispatcher stops at the first not-yet-due entry, so both sequences
//! must stay sorted. [`enqueue`](EventStore::enqueue) enforces that on the
//! way in: unsorted batches are stably sorted, and batches that start
//! before the pending tail are stably merged. Events sharing a timestamp
//! keep their submission order.

use std::collections::VecDeque;

use netviz_core::{SceneEvent, SimTime, UndoEvent};

/// What [`EventStore::enqueue`] had to do to keep the queue sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnqueueOutcome {
    /// Events appended.
    pub appended: usize,
    /// The batch arrived out of time order and was sorted.
    pub resorted: bool,
    /// The batch started before the pending tail and was merged in.
    pub merged: bool,
}

/// Pending forward events plus applied-event history.
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    pending: VecDeque<SceneEvent>,
    history: VecDeque<UndoEvent>,
}

impl EventStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events waiting to be applied.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of applied events that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The next event to apply going forward.
    pub fn peek_pending(&self) -> Option<&SceneEvent> {
        self.pending.front()
    }

    /// The next record to undo going backward.
    pub fn peek_history(&self) -> Option<&UndoEvent> {
        self.history.back()
    }

    /// Pending events, earliest first.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &SceneEvent> {
        self.pending.iter()
    }

    /// History records, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &UndoEvent> {
        self.history.iter()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.history.clear();
    }

    /// Append a batch to the pending queue, sorting or merging as needed.
    pub fn enqueue(&mut self, mut batch: Vec<SceneEvent>) -> EnqueueOutcome {
        let mut outcome = EnqueueOutcome {
            appended: batch.len(),
            ..EnqueueOutcome::default()
        };
        if batch.is_empty() {
            return outcome;
        }

        if !batch.windows(2).all(|w| w[0].time() <= w[1].time()) {
            // sort_by_key is stable: equal timestamps keep batch order.
            batch.sort_by_key(SceneEvent::time);
            outcome.resorted = true;
        }

        let tail = self.pending.back().map(SceneEvent::time);
        let needs_merge = matches!(tail, Some(t) if t > batch[0].time());
        self.pending.extend(batch);

        if needs_merge {
            self.pending
                .make_contiguous()
                .sort_by_key(SceneEvent::time);
            outcome.merged = true;
        }
        outcome
    }

    /// Pop the front event if it is due at `now` (`time <= now`).
    pub(crate) fn pop_due(&mut self, now: SimTime) -> Option<SceneEvent> {
        match self.pending.front() {
            Some(e) if e.time() <= now => self.pending.pop_front(),
            _ => None,
        }
    }

    /// Pop the newest record if `now` has rewound before its event
    /// (`time > now`).
    pub(crate) fn pop_undoable(&mut self, now: SimTime) -> Option<UndoEvent> {
        match self.history.back() {
            Some(u) if u.time() > now => self.history.pop_back(),
            _ => None,
        }
    }

    /// Record an applied event's undo.
    pub(crate) fn record(&mut self, undo: UndoEvent) {
        self.history.push_back(undo);
    }

    /// Return an undone event to the front of the pending queue.
    pub(crate) fn requeue(&mut self, event: SceneEvent) {
        self.pending.push_front(event);
    }
}
