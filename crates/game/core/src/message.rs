//! Bounded message log shared by the controller and combat sessions.
use std::collections::VecDeque;

/// Circular buffer of messages displayed to the player.
///
/// Once full, each push evicts the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Most recent first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(limit).map(String::as_str)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.push(format!("m{i}"));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["m2", "m3", "m4"]);
        assert_eq!(log.recent(2).collect::<Vec<_>>(), vec!["m4", "m3"]);
        assert_eq!(log.last(), Some("m4"));
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut log = MessageLog::new(0);
        log.push("a");
        log.push("b");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["b"]);
    }
}
