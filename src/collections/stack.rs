//! LIFO action history

/// Last-in-first-out stack; the most recent entry sits on top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionHistory<T> {
    items: Vec<T>,
}

impl<T> ActionHistory<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, entry: T) {
        self.items.push(entry);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Up to `n` entries, most recent first. Does not mutate the stack.
    pub fn last(&self, n: usize) -> Vec<&T> {
        self.items.iter().rev().take(n).collect()
    }

    /// Iterate in push order (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for ActionHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ActionHistory<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.push(entry);
        }
        history
    }
}
