use std::hash::Hash;

use crate::costmap::CostMap;
use crate::dijkstra::compute_costs;
use crate::error::NotReachable;
use crate::traits::CostModel;

/// Walk predecessor links back from `goal` and return the path from the
/// search start to `goal`, both inclusive.
///
/// Fails with [`NotReachable`] if `goal` was never finalized, or if a
/// predecessor link points at a state missing from `costs`. `model` is
/// only used to order costs when guessing the start for the error.
pub fn resolve_path<'a, K, M>(
    model: &M,
    costs: &'a CostMap<K, M::Cost>,
    goal: &K,
) -> Result<Vec<K>, NotReachable<'a, K, M::Cost>>
where
    K: Eq + Hash + Clone,
    M: CostModel<K> + ?Sized,
{
    let Some(mut record) = costs.get(goal) else {
        return Err(not_reachable(model, costs, goal));
    };

    let mut path = vec![goal.clone()];
    while let Some(prev) = &record.predecessor {
        // A chain longer than the map means the links loop.
        if path.len() >= costs.len() {
            return Err(not_reachable(model, costs, goal));
        }
        let Some(next) = costs.get(prev) else {
            return Err(not_reachable(model, costs, goal));
        };
        path.push(prev.clone());
        record = next;
    }
    path.reverse();
    Ok(path)
}

fn not_reachable<'a, K, M>(
    model: &M,
    costs: &'a CostMap<K, M::Cost>,
    goal: &K,
) -> NotReachable<'a, K, M::Cost>
where
    K: Eq + Hash + Clone,
    M: CostModel<K> + ?Sized,
{
    let start = costs.nearest_start(|a, b| model.less(a, b)).cloned();
    log::debug!(
        "path: goal not reachable ({} states finalized, start {})",
        costs.len(),
        if start.is_some() { "guessed" } else { "unknown" }
    );
    NotReachable {
        costs,
        start,
        goal: goal.clone(),
    }
}

/// One search, many path queries.
///
/// Runs [`compute_costs`] once on construction and answers
/// [`find`](Self::find) from the stored cost map.
pub struct PathFinder<K, M: CostModel<K>> {
    model: M,
    costs: CostMap<K, M::Cost>,
}

impl<K, M> PathFinder<K, M>
where
    K: Eq + Hash + Clone,
    M: CostModel<K>,
{
    /// Search from `start` at `initial` and keep the result.
    pub fn new(model: M, start: K, initial: M::Cost) -> Self {
        let costs = compute_costs(&model, start, initial);
        Self { model, costs }
    }

    /// Shortest path from the search start to `goal`.
    pub fn find(&self, goal: &K) -> Result<Vec<K>, NotReachable<'_, K, M::Cost>> {
        resolve_path(&self.model, &self.costs, goal)
    }

    pub fn costs(&self) -> &CostMap<K, M::Cost> {
        &self.costs
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Give back the cost map, dropping the model.
    pub fn into_costs(self) -> CostMap<K, M::Cost> {
        self.costs
    }
}
