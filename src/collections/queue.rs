//! FIFO request queue

use std::collections::VecDeque;

/// First-in-first-out queue of pending requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestQueue<T> {
    items: VecDeque<T>,
}

impl<T> RequestQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the earliest-inserted item
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Rebuild the queue keeping only the items matching `keep`.
    ///
    /// Drains through dequeue/enqueue so the survivors keep their arrival order.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut rebuilt = Self::new();
        let mut dropped = 0;
        while let Some(item) = self.dequeue() {
            if keep(&item) {
                rebuilt.enqueue(item);
            } else {
                dropped += 1;
            }
        }
        *self = rebuilt;
        dropped
    }
}

impl<T> Default for RequestQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RequestQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}
