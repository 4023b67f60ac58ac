use std::fmt;

use crate::costmap::CostMap;

/// The requested goal has no finalized record, or its predecessor chain
/// has a gap.
///
/// This is an ordinary outcome of a disconnected or partially explored
/// space. `start` is the cheapest state in `costs`, a best guess at the
/// search origin for diagnostics only.
#[derive(Debug)]
pub struct NotReachable<'a, K, C> {
    pub costs: &'a CostMap<K, C>,
    pub start: Option<K>,
    pub goal: K,
}

impl<K, C> NotReachable<'_, K, C> {
    /// True when `costs` was empty and no start could be guessed.
    pub fn starting_unknown(&self) -> bool {
        self.start.is_none()
    }
}

impl<K: fmt::Debug, C> fmt::Display for NotReachable<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            None => write!(
                f,
                "goal is not reachable from the start state: {:?}",
                self.goal
            ),
            Some(start) => write!(
                f,
                "goal is not reachable from the start state: {start:?} -> {:?}",
                self.goal
            ),
        }
    }
}

impl<K: fmt::Debug, C: fmt::Debug> std::error::Error for NotReachable<'_, K, C> {}
