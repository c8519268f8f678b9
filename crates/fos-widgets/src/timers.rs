//! Timer APIs
//!
//! setTimeout / clearTimeout over the page's virtual millisecond clock.

use std::collections::BTreeMap;

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u32);

#[derive(Debug, Clone)]
struct Timer<T> {
    deadline_ms: u64,
    task: T,
}

/// One-shot timer queue
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    next_id: u32,
    timers: BTreeMap<TimerId, Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { next_id: 1, timers: BTreeMap::new() }
    }

    /// Schedule `task` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.insert(id, Timer { deadline_ms: now_ms.saturating_add(delay_ms), task });
        id
    }

    /// Clear a timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Remove and return every timer due at `now_ms`, earliest deadline
    /// first (ties in scheduling order)
    pub fn advance(&mut self, now_ms: u64) -> Vec<(TimerId, T)> {
        let due: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= now_ms)
            .map(|(id, _)| *id)
            .collect();

        let mut ready: Vec<(u64, TimerId, T)> = due
            .into_iter()
            .filter_map(|id| self.timers.remove(&id).map(|t| (t.deadline_ms, id, t.task)))
            .collect();
        ready.sort_by_key(|(deadline, id, _)| (*deadline, *id));
        ready.into_iter().map(|(_, id, task)| (id, task)).collect()
    }

    /// Check if there are pending timers
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Time until the next timer fires
    pub fn time_until_next(&self, now_ms: u64) -> Option<u64> {
        self.timers
            .values()
            .map(|t| t.deadline_ms.saturating_sub(now_ms))
            .min()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
