//! Generic thread-safe FIFO queue with condvar-backed waiting.
//!
//! This one structure underlies both shared collections in the simulation:
//! the wait line (`FifoQueue<CarId>`) and the pump pool (`FifoQueue<Pump>`).
//! Instead of having callers busy-poll `front`/`is_empty`, the queue carries a
//! `Condvar` that is notified on every mutation, plus two cancellable waits
//! tailored to the forecourt protocol: "wait until I am the head" and "wait
//! until I can pop".

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::core::cancel::CancelToken;

/// A thread-safe FIFO queue.
///
/// All operations take `&self` and are atomic with respect to each other: a
/// `pop` racing a `push` can never lose or duplicate an item. Items are stored
/// by value, so for non-`Clone` element types (the pump pool) the queue is an
/// ownership hand-off point — exactly one holder at any time, enforced by the
/// type system rather than by convention.
#[derive(Debug, Default)]
pub struct FifoQueue<T> {
    items: Mutex<VecDeque<T>>,
    /// Notified on every push and pop. Pops matter too: when the head car
    /// removes itself, the next car in line becomes the head and must wake.
    changed: Condvar,
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            changed: Condvar::new(),
        }
    }

    /// Append an item to the tail and wake all waiters.
    pub fn push(&self, item: T) {
        let mut items = self.items.lock();
        items.push_back(item);
        drop(items);
        self.changed.notify_all();
    }

    /// Remove and return the head, or `None` if the queue is empty.
    pub fn try_pop(&self) -> Option<T> {
        let mut items = self.items.lock();
        let popped = items.pop_front();
        drop(items);
        if popped.is_some() {
            self.changed.notify_all();
        }
        popped
    }

    /// Current number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the queue is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Block until the head equals `target`, or the token is cancelled.
    ///
    /// Returns `true` once `target` is at the head, `false` on cancellation.
    /// An empty queue keeps waiting. The `tick` bounds how long a missed
    /// notification or a cancellation can go unobserved.
    pub fn wait_for_front(&self, target: &T, cancel: &CancelToken, tick: Duration) -> bool
    where
        T: PartialEq,
    {
        let mut items = self.items.lock();
        loop {
            if cancel.is_cancelled() {
                return false;
            }
            if items.front() == Some(target) {
                return true;
            }
            let _ = self.changed.wait_for(&mut items, tick);
        }
    }

    /// Block until an item can be popped, or the token is cancelled.
    ///
    /// Returns `None` only on cancellation; once cancelled, nothing is popped
    /// even if items are available, so a stopping caller never takes ownership
    /// of an item it would then strand.
    pub fn pop_wait(&self, cancel: &CancelToken, tick: Duration) -> Option<T> {
        let mut items = self.items.lock();
        loop {
            if cancel.is_cancelled() {
                return None;
            }
            if let Some(item) = items.pop_front() {
                drop(items);
                self.changed.notify_all();
                return Some(item);
            }
            let _ = self.changed.wait_for(&mut items, tick);
        }
    }
}

impl<T: Clone> FifoQueue<T> {
    /// Return a clone of the head without removing it.
    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.items.lock().front().cloned()
    }
}
