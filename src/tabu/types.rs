//! Tabu memory of recently visited starting elevens.

use std::collections::{HashSet, VecDeque};

use crate::catalog::{Player, PlayerId};

/// Order-independent identity of a starting eleven: its sorted player IDs.
///
/// Two elevens share a key exactly when they have the same members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineupKey(Vec<PlayerId>);

impl LineupKey {
    pub fn of(lineup: &[&Player]) -> Self {
        let mut ids: Vec<PlayerId> = lineup.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        Self(ids)
    }
}

/// Fixed-capacity FIFO of visited elevens.
///
/// Recording beyond capacity forgets the oldest entry.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<LineupKey>,
    set: HashSet<LineupKey>,
}

impl TabuMemory {
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "tabu memory needs a positive capacity");
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        }
    }

    /// Whether an eleven with exactly these members is remembered.
    pub fn is_tabu(&self, lineup: &[&Player]) -> bool {
        self.set.contains(&LineupKey::of(lineup))
    }

    /// Remembers `lineup`, evicting the oldest entry when full.
    pub fn record(&mut self, lineup: &[&Player]) {
        let key = LineupKey::of(lineup);
        if self.set.contains(&key) {
            return;
        }
        if self.queue.len() >= self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.set.remove(&oldest);
            }
        }
        self.set.insert(key.clone());
        self.queue.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
