pub mod bracket;
pub mod types;

pub use self::bracket::{bracket, evaluate_pair, integer_root, Bracket};
pub use self::types::{Candidate, SearchOutcome, SearchParameters, DOMAIN_START};

use crate::error::{NearMissError, NmResult};
use tracing::{debug, info};

/// Receives updates during a scan.
pub trait SearchObserver {
    /// Called each time a strictly better candidate replaces the running best.
    fn on_new_best(&mut self, candidate: &Candidate);

    /// Polled after every pair. Returning false stops the scan early.
    fn keep_going(&mut self) -> bool {
        true
    }
}

/// Observer that ignores every update.
pub struct Silent;

impl SearchObserver for Silent {
    fn on_new_best(&mut self, _candidate: &Candidate) {}
}

impl<F: FnMut(&Candidate)> SearchObserver for F {
    fn on_new_best(&mut self, candidate: &Candidate) {
        self(candidate)
    }
}

pub struct NearMissSearcher {
    params: SearchParameters,
}

impl NearMissSearcher {
    pub fn new(params: SearchParameters) -> Self {
        Self { params }
    }

    /// Scans every pair in `[10, k] x [10, k]`, x ascending then y ascending.
    ///
    /// Only a strictly smaller relative miss replaces the best, so among equal
    /// candidates the first one in scan order is kept. The observer is not
    /// asked to continue after the last pair.
    pub fn search<O: SearchObserver>(&self, observer: &mut O) -> NmResult<SearchOutcome> {
        let SearchParameters { n, k } = self.params;
        let pairs_total = self.params.pair_count();

        if pairs_total == 0 {
            return Err(NearMissError::EmptyDomain { k });
        }
        self.params.check_capacity()?;

        info!(n, k, pairs_total = %pairs_total, "Starting near-miss scan");

        let mut best: Option<Candidate> = None;
        let mut pairs_scanned = 0u128;
        let mut complete = true;

        'scan: for x in DOMAIN_START..=k {
            for y in DOMAIN_START..=k {
                let candidate = evaluate_pair(x, y, n);
                pairs_scanned += 1;

                let improved = match &best {
                    Some(b) => candidate.relative_miss < b.relative_miss,
                    None => true,
                };
                if improved {
                    best = Some(candidate);
                    observer.on_new_best(&candidate);
                }

                if pairs_scanned < pairs_total && !observer.keep_going() {
                    complete = false;
                    break 'scan;
                }
            }

            if let Some(b) = &best {
                debug!(x, best_relative_miss = b.relative_miss, "Row done");
            }
        }

        // At least one pair was evaluated above.
        let best = best.ok_or(NearMissError::EmptyDomain { k })?;

        info!(
            pairs_scanned = %pairs_scanned,
            complete,
            x = best.x,
            y = best.y,
            z = %best.z,
            relative_miss = best.relative_miss,
            "Scan finished"
        );

        Ok(SearchOutcome {
            best,
            pairs_scanned,
            pairs_total,
            complete,
        })
    }
}

/// Convenience wrapper: builds a searcher and runs it.
pub fn search<O: SearchObserver>(
    params: SearchParameters,
    observer: &mut O,
) -> NmResult<SearchOutcome> {
    NearMissSearcher::new(params).search(observer)
}
