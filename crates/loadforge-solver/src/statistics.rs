//! Search statistics.
//!
//! Counters are atomic so parallel branches can share one set.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Live counters shared by every branch of one search.
///
/// # Example
///
/// ```
/// use loadforge_solver::SearchCounters;
///
/// let counters = SearchCounters::new();
/// counters.record_node();
/// counters.record_node();
/// counters.record_evaluation();
/// counters.record_prune();
///
/// let stats = counters.snapshot();
/// assert_eq!(stats.nodes_expanded, 2);
/// assert_eq!(stats.builds_evaluated, 1);
/// assert_eq!(stats.branches_pruned, 1);
/// ```
#[derive(Debug)]
pub struct SearchCounters {
    start_time: Instant,
    nodes_expanded: AtomicU64,
    builds_evaluated: AtomicU64,
    builds_accepted: AtomicU64,
    branches_pruned: AtomicU64,
    exotic_rejections: AtomicU64,
    terminated: AtomicBool,
}

impl Default for SearchCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchCounters {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_expanded: AtomicU64::new(0),
            builds_evaluated: AtomicU64::new(0),
            builds_accepted: AtomicU64::new(0),
            branches_pruned: AtomicU64::new(0),
            exotic_rejections: AtomicU64::new(0),
            terminated: AtomicBool::new(false),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn record_node(&self) {
        self.nodes_expanded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evaluation(&self) {
        self.builds_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_accepted(&self) {
        self.builds_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_prune(&self) {
        self.branches_pruned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_exotic_rejection(&self) {
        self.exotic_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded.load(Ordering::Relaxed)
    }

    /// Marks the search as stopped early. Other branches see this and stop.
    pub fn mark_terminated(&self) {
        self.terminated.store(true, Ordering::Relaxed);
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Relaxed)
    }

    /// Takes a point-in-time copy of the counters.
    pub fn snapshot(&self) -> SearchStatistics {
        SearchStatistics {
            elapsed: self.elapsed(),
            nodes_expanded: self.nodes_expanded.load(Ordering::Relaxed),
            builds_evaluated: self.builds_evaluated.load(Ordering::Relaxed),
            builds_accepted: self.builds_accepted.load(Ordering::Relaxed),
            branches_pruned: self.branches_pruned.load(Ordering::Relaxed),
            exotic_rejections: self.exotic_rejections.load(Ordering::Relaxed),
        }
    }
}

/// Figures reported once a search is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub elapsed: Duration,
    /// Nodes visited, the root and every complete build included.
    pub nodes_expanded: u64,
    /// Complete builds that were scored.
    pub builds_evaluated: u64,
    /// Builds the keeper took at the time they were offered.
    pub builds_accepted: u64,
    /// Children cut by the stat ceiling bound.
    pub branches_pruned: u64,
    /// Children cut by the exotic cap.
    pub exotic_rejections: u64,
}

impl SearchStatistics {
    /// Nodes per second over the whole run.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }
}
