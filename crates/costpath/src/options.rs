use std::hash::Hash;

use crate::costmap::CostMap;
use crate::dijkstra::compute_costs;
use crate::error::NotReachable;
use crate::path::{PathFinder, resolve_path};
use crate::traits::{Adjacent, CostModel, Edges};

type AccumulateFn<'a, K, C> = Box<dyn Fn(&C, &K, &K) -> Option<C> + 'a>;
type LessFn<'a, C> = Box<dyn Fn(&C, &C) -> bool + 'a>;
type EdgesFn<'a, K> = Box<dyn Fn(&K, &mut Vec<K>) + 'a>;

/// Search configuration built from closures.
///
/// An alternative to implementing [`CostModel`] by hand: the three
/// callbacks are stored as trait objects and may borrow caller data for
/// `'a`.
///
/// ```
/// use costpath::Options;
///
/// // States are integers 0..=9, each step costs 1.
/// let options = Options::<i32, u32>::new(
///     |agg, _from, to| (0..10).contains(to).then_some(agg + 1),
///     |a, b| a < b,
///     |p, buf| buf.extend([p - 1, p + 1]),
/// );
/// let costs = options.compute_costs(0, 0);
/// assert_eq!(costs.cost(&9), Some(&9));
/// assert_eq!(options.resolve_path(&costs, &3).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub struct Options<'a, K, C> {
    accumulator: AccumulateFn<'a, K, C>,
    less: LessFn<'a, C>,
    edges: EdgesFn<'a, K>,
    max_visits: Option<usize>,
}

impl<'a, K, C> Options<'a, K, C> {
    /// Configure a search with explicit neighbour enumeration.
    ///
    /// `accumulator` returns the cost of stepping `from -> to` given the
    /// cost of `from`, or `None` if the step is not allowed. `less` is a
    /// strict ordering on costs. `edges` appends candidate neighbours to
    /// the buffer it is given.
    pub fn new(
        accumulator: impl Fn(&C, &K, &K) -> Option<C> + 'a,
        less: impl Fn(&C, &C) -> bool + 'a,
        edges: impl Fn(&K, &mut Vec<K>) + 'a,
    ) -> Self {
        Self {
            accumulator: Box::new(accumulator),
            less: Box::new(less),
            edges: Box::new(edges),
            max_visits: None,
        }
    }

    /// Stop each search after `max` states have been finalized.
    pub fn with_max_visits(mut self, max: usize) -> Self {
        self.max_visits = Some(max);
        self
    }

    /// Replace the neighbour enumeration.
    pub fn with_edges(mut self, edges: impl Fn(&K, &mut Vec<K>) + 'a) -> Self {
        self.edges = Box::new(edges);
        self
    }
}

impl<'a, K: Adjacent + 'a, C> Options<'a, K, C> {
    /// Configure a search whose neighbours come from the state type's
    /// own [`Adjacent`] impl.
    pub fn adjacent(
        accumulator: impl Fn(&C, &K, &K) -> Option<C> + 'a,
        less: impl Fn(&C, &C) -> bool + 'a,
    ) -> Self {
        Self::new(accumulator, less, |k: &K, buf: &mut Vec<K>| k.adjacent(buf))
    }
}

impl<K, C: Clone> Edges<K> for Options<'_, K, C> {
    fn edges(&self, from: &K, buf: &mut Vec<K>) {
        (self.edges)(from, buf);
    }
}

impl<K, C: Clone> CostModel<K> for Options<'_, K, C> {
    type Cost = C;

    fn accumulate(&self, agg: &C, from: &K, to: &K) -> Option<C> {
        (self.accumulator)(agg, from, to)
    }

    fn less(&self, a: &C, b: &C) -> bool {
        (self.less)(a, b)
    }

    fn max_visits(&self) -> Option<usize> {
        self.max_visits
    }
}

impl<'a, K, C> Options<'a, K, C>
where
    K: Eq + Hash + Clone,
    C: Clone,
{
    /// See [`compute_costs`].
    pub fn compute_costs(&self, start: K, initial: C) -> CostMap<K, C> {
        compute_costs(self, start, initial)
    }

    /// See [`resolve_path`].
    pub fn resolve_path<'m>(
        &self,
        costs: &'m CostMap<K, C>,
        goal: &K,
    ) -> Result<Vec<K>, NotReachable<'m, K, C>> {
        resolve_path(self, costs, goal)
    }

    /// Same as [`resolve_path`](Self::resolve_path).
    pub fn shortest_path<'m>(
        &self,
        costs: &'m CostMap<K, C>,
        goal: &K,
    ) -> Result<Vec<K>, NotReachable<'m, K, C>> {
        self.resolve_path(costs, goal)
    }

    /// Search once from `start` and answer path queries from the result.
    pub fn path_finder(self, start: K, initial: C) -> PathFinder<K, Self> {
        PathFinder::new(self, start, initial)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Cell(i32, i32);

    impl Adjacent for Cell {
        fn adjacent(&self, buf: &mut Vec<Self>) {
            let Cell(x, y) = *self;
            buf.extend([Cell(x + 1, y), Cell(x - 1, y), Cell(x, y + 1), Cell(x, y - 1)]);
        }
    }

    #[test]
    fn closures_borrow_caller_data() {
        let open: HashSet<i32> = [0, 1, 2, 4].into_iter().collect();
        let options = Options::<i32, u32>::new(
            |agg, _from, to| open.contains(to).then_some(agg + 1),
            |a, b| a < b,
            |p, buf| buf.extend([p - 1, p + 1]),
        );
        let costs = options.compute_costs(0, 0);
        assert_eq!(costs.len(), 3);
        assert!(options.shortest_path(&costs, &4).is_err());
        assert_eq!(options.shortest_path(&costs, &2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn adjacency_fallback() {
        // The accumulator bounds an otherwise unbounded grid to 3x3.
        let options = Options::<Cell, u32>::adjacent(
            |agg, _from, to| ((0..3).contains(&to.0) && (0..3).contains(&to.1)).then_some(agg + 1),
            |a, b| a < b,
        );
        let costs = options.compute_costs(Cell(0, 0), 0);
        assert_eq!(costs.len(), 9);
        assert_eq!(costs.cost(&Cell(2, 2)), Some(&4));
    }

    #[test]
    fn max_visits_bounds_unbounded_space() {
        let options = Options::<Cell, u32>::adjacent(|agg, _from, _to| Some(agg + 1), |a, b| a < b)
            .with_max_visits(50);
        let costs = options.compute_costs(Cell(0, 0), 0);
        assert_eq!(costs.len(), 50);
        assert!(!costs.is_complete());
    }

    #[test]
    fn with_edges_replaces_neighbours() {
        let options = Options::<Cell, u32>::adjacent(
            |agg, _from, to| (to.0.abs() <= 2 && to.1 == 0).then_some(agg + 1),
            |a, b| a < b,
        )
        .with_edges(|c, buf| buf.push(Cell(c.0 + 1, c.1)));
        let costs = options.compute_costs(Cell(0, 0), 0);
        assert_eq!(costs.len(), 3);
        assert!(!costs.contains(&Cell(-1, 0)));
    }

    #[test]
    fn path_finder_from_options() {
        let finder = Options::<i32, u32>::new(
            |agg, _from, to| (0..=4).contains(to).then_some(agg + 2),
            |a, b| a < b,
            |p, buf| buf.extend([p - 1, p + 1]),
        )
        .path_finder(4, 0);
        assert_eq!(finder.find(&0).unwrap(), vec![4, 3, 2, 1, 0]);
        assert_eq!(finder.costs().cost(&0), Some(&8));
        assert!(finder.find(&5).is_err());
    }
}
