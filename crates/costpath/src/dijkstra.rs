use std::hash::Hash;

use crate::costmap::CostMap;
use crate::frontier::Frontier;
use crate::traits::CostModel;

/// Compute the minimal cost of every state reachable from `start`.
///
/// The start is queued at `initial` without consulting
/// [`CostModel::accumulate`]. The search runs until the frontier is
/// empty, or until [`CostModel::max_visits`] states are finalized, in
/// which case the returned map reports `is_complete() == false`.
///
/// Stale frontier entries are skipped when popped rather than updated
/// in place. If `model.edges` keeps producing new admissible states the
/// search does not terminate unless a visit cap is set.
pub fn compute_costs<K, M>(model: &M, start: K, initial: M::Cost) -> CostMap<K, M::Cost>
where
    K: Eq + Hash + Clone,
    M: CostModel<K> + ?Sized,
{
    let mut costs = CostMap::new();
    let limit = model.max_visits();

    let mut open = Frontier::new(|a: &M::Cost, b: &M::Cost| model.less(a, b));
    open.push(start, None, initial);

    let mut nbuf: Vec<K> = Vec::new();
    let mut pushed: usize = 1;
    let mut stale: usize = 0;

    log::debug!("dijkstra: search started");

    while let Some(current) = open.pop() {
        if costs.contains(&current.state) {
            stale += 1;
            continue;
        }
        if limit.is_some_and(|max| costs.len() >= max) {
            log::warn!(
                "dijkstra: visit cap reached with {} entries pending",
                open.len() + 1
            );
            costs.complete = false;
            break;
        }
        let state = current.state;
        let cost = current.cost;
        costs.finalize(state.clone(), cost.clone(), current.predecessor);
        log::trace!("dijkstra: finalized state #{}", costs.len());

        nbuf.clear();
        model.edges(&state, &mut nbuf);

        for next in nbuf.drain(..) {
            let Some(next_cost) = model.accumulate(&cost, &state, &next) else {
                continue;
            };
            open.push(next, Some(state.clone()), next_cost);
            pushed += 1;
        }
    }

    log::debug!(
        "dijkstra: finalized {} states ({pushed} pushed, {stale} stale)",
        costs.len()
    );
    costs
}
