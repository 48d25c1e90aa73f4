//! Termination conditions for the search.
//!
//! Conditions read the shared [`SearchCounters`], so one instance serves
//! every parallel branch.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::statistics::SearchCounters;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
///
/// Checked before each node is expanded. Once it returns true the search
/// unwinds and reports whatever results it has.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, counters: &SearchCounters) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTermination;

impl Termination for NeverTermination {
    fn is_terminated(&self, _counters: &SearchCounters) -> bool {
        false
    }
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, counters: &SearchCounters) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(counters))
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, counters: &SearchCounters) -> bool {
        (**self).is_terminated(counters)
    }
}
