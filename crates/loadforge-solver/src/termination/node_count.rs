//! Node-count termination.

use super::Termination;
use crate::statistics::SearchCounters;

/// Terminates once a number of nodes has been expanded.
///
/// # Example
///
/// ```
/// use loadforge_solver::termination::NodeCountTermination;
///
/// let term = NodeCountTermination::new(1_000_000);
/// assert_eq!(term.limit(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, counters: &SearchCounters) -> bool {
        counters.nodes_expanded() >= self.limit
    }
}
