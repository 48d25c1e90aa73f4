//! Composite termination.
//!
//! Uses macro-generated tuple implementations, no boxing.

use super::Termination;
use crate::statistics::SearchCounters;

/// Combines multiple terminations with OR logic.
///
/// Wraps a tuple of terminations. Terminates when ANY child terminates.
///
/// # Examples
///
/// ```
/// use loadforge_solver::termination::{
///     NodeCountTermination, OrTermination, Termination, TimeTermination,
/// };
/// use loadforge_solver::SearchCounters;
///
/// // Terminate after 30 seconds OR 2 nodes
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(2),
/// ));
///
/// let counters = SearchCounters::new();
/// counters.record_node();
/// assert!(!termination.is_terminated(&counters));
/// counters.record_node();
/// assert!(termination.is_terminated(&counters));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, counters: &SearchCounters) -> bool {
                $((self.0).$idx.is_terminated(counters))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
