use std::collections::VecDeque;

use crate::app::view_model::Outcome;
use crate::models::Flow;

const MAX_ACTIVITY: usize = 50;

/// One settled request
#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub flow: Flow,
    pub outcome: Outcome,
    pub detail: String,
    pub time_ms: u64,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

/// Bounded log of settled requests, newest first
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        ActivityLog {
            entries: VecDeque::with_capacity(MAX_ACTIVITY),
        }
    }

    pub fn record(&mut self, flow: Flow, outcome: Outcome, detail: impl Into<String>, time_ms: u64) {
        if self.entries.len() >= MAX_ACTIVITY {
            self.entries.pop_back();
        }
        self.entries.push_front(ActivityEntry {
            flow,
            outcome,
            detail: detail.into(),
            time_ms,
            timestamp: chrono::Local::now(),
        });
    }

    /// Entry by index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&ActivityEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }
}
