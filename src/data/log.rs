//! Bounded buffer of round outcomes shown in the game log panel.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// One logged round outcome.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub time: DateTime<Local>,
    pub text: String,
}

/// Game log with a fixed capacity; the oldest entry falls off the front.
#[derive(Clone, Debug)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl GameLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            time: Local::now(),
            text: text.into(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_drops_oldest() {
        let mut log = GameLog::new(3);
        for i in 0..5 {
            log.push(format!("round {}", i));
        }
        assert_eq!(log.len(), 3);
        let texts: Vec<&str> = log.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["round 2", "round 3", "round 4"]);
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut log = GameLog::new(0);
        log.push("a");
        log.push("b");
        assert_eq!(log.len(), 1);
    }
}
