//! Bounded deque for the recent-transactions ledger
//!
//! Fixed-capacity deque that evicts the oldest entry once full.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a new bounded deque. With capacity 0, pushes are no-ops.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a new value, evicting the oldest if at capacity
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.push(value);
        }
    }

    /// Iterate newest to oldest
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut deque = BoundedDeque::new(3);
        deque.extend([1, 2, 3]);
        assert_eq!(deque.iter_newest_first().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_eviction() {
        let mut deque = BoundedDeque::new(3);
        deque.extend([1, 2, 3, 4]);
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.iter_newest_first().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
    }
}
