#![allow(dead_code)]

use near_miss::searcher::{Candidate, SearchObserver};

/// Keeps every new-best notification in order.
#[derive(Default)]
pub struct RecordingObserver {
    pub reports: Vec<Candidate>,
}

impl SearchObserver for RecordingObserver {
    fn on_new_best(&mut self, candidate: &Candidate) {
        self.reports.push(*candidate);
    }
}

/// Stops the scan after a fixed number of pairs.
pub struct StopAfter {
    pub remaining: u64,
    pub reports: Vec<Candidate>,
}

impl StopAfter {
    pub fn new(pairs: u64) -> Self {
        Self {
            remaining: pairs,
            reports: Vec::new(),
        }
    }
}

impl SearchObserver for StopAfter {
    fn on_new_best(&mut self, candidate: &Candidate) {
        self.reports.push(*candidate);
    }

    fn keep_going(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}
