use std::collections::VecDeque;

use chrono::NaiveDateTime;
use log::trace;

use crate::{CrossResult, CrossType, Genotype};

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A previously computed cross.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub parent1   : Genotype,
    pub parent2   : Genotype,
    pub cross_type: CrossType,
    pub result    : CrossResult,
    pub timestamp : NaiveDateTime,
}

/// Bounded list of the most recent crosses, newest first. Once `capacity` is reached, pushing
/// a new entry evicts the oldest one.
#[derive(Debug, Clone)]
pub struct CrossHistory {
    capacity: usize,
    entries : VecDeque<HistoryEntry>,
}

impl Default for CrossHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CrossHistory {
    pub fn new(capacity: usize) -> Self {
        Self{capacity, entries: VecDeque::with_capacity(capacity)}
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                trace!("Evicting {} x {} from cross history", evicted.parent1, evicted.parent2);
            }
        }
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Iterate over entries, from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
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
    use crate::{calculate_cross, DisplayMode};
    use chrono::NaiveDate;

    fn entry(parent1: &str, parent2: &str) -> HistoryEntry {
        HistoryEntry {
            parent1   : parent1.into(),
            parent2   : parent2.into(),
            cross_type: CrossType::Mono,
            result    : calculate_cross(parent1, parent2, &[], DisplayMode::Simple),
            timestamp : NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn newest_first() {
        let mut history = CrossHistory::default();
        history.push(entry("Aa", "Aa"));
        history.push(entry("Aa", "aa"));
        assert_eq!(history.len(), 2);
        assert_eq!(&*history.latest().unwrap().parent2, "aa");
        let parents: Vec<&str> = history.iter().map(|e| &*e.parent2).collect();
        assert_eq!(parents, vec!["aa", "Aa"]);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut history = CrossHistory::new(3);
        for parent2 in ["AA", "Aa", "aa", "aA"] {
            history.push(entry("Aa", parent2));
        }
        assert_eq!(history.len(), 3);
        let parents: Vec<&str> = history.iter().map(|e| &*e.parent2).collect();
        assert_eq!(parents, vec!["aA", "aa", "Aa"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = CrossHistory::new(0);
        history.push(entry("Aa", "Aa"));
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn clear() {
        let mut history = CrossHistory::new(2);
        history.push(entry("Aa", "Aa"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 2);
    }
}
