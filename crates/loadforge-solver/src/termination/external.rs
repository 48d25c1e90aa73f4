//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Termination;
use crate::statistics::SearchCounters;

/// Terminates when an external flag is set.
///
/// Allows a caller on another thread to cancel a running search.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use loadforge_solver::termination::{ExternalTermination, Termination};
/// use loadforge_solver::SearchCounters;
///
/// let flag = AtomicBool::new(false);
/// let term = ExternalTermination::new(&flag);
/// let counters = SearchCounters::new();
///
/// assert!(!term.is_terminated(&counters));
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_terminated(&counters));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _counters: &SearchCounters) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
