/// Neighbour enumeration for a search space.
pub trait Edges<K> {
    /// Append the candidate neighbours of `from` into `buf`. The engine
    /// clears `buf` before calling.
    fn edges(&self, from: &K, buf: &mut Vec<K>);
}

/// Cost rules layered on top of [`Edges`].
///
/// `less` must be a strict total order under which `accumulate` never
/// produces a cost smaller than its input. Violating this (negative
/// edges, a non-total `less`) is not detected and yields an incorrect
/// cost map.
pub trait CostModel<K>: Edges<K> {
    /// Accumulated cost type. Opaque to the engine beyond `less`.
    type Cost: Clone;

    /// Cost of reaching `to` through `from` when `from` costs `agg`.
    /// `None` means the transition is not admissible.
    fn accumulate(&self, agg: &Self::Cost, from: &K, to: &K) -> Option<Self::Cost>;

    /// Whether `a` orders strictly before `b`.
    fn less(&self, a: &Self::Cost, b: &Self::Cost) -> bool;

    /// Upper bound on the number of states a single search finalizes.
    fn max_visits(&self) -> Option<usize> {
        None
    }
}

/// State types that know their own neighbours.
///
/// Used by [`Options::adjacent`](crate::Options::adjacent) when no
/// explicit edges callback is configured.
pub trait Adjacent: Sized {
    /// Append the neighbours of `self` into `buf`.
    fn adjacent(&self, buf: &mut Vec<Self>);
}

impl<K, T: Edges<K> + ?Sized> Edges<K> for &T {
    fn edges(&self, from: &K, buf: &mut Vec<K>) {
        (**self).edges(from, buf);
    }
}

impl<K, T: CostModel<K> + ?Sized> CostModel<K> for &T {
    type Cost = T::Cost;

    fn accumulate(&self, agg: &Self::Cost, from: &K, to: &K) -> Option<Self::Cost> {
        (**self).accumulate(agg, from, to)
    }

    fn less(&self, a: &Self::Cost, b: &Self::Cost) -> bool {
        (**self).less(a, b)
    }

    fn max_visits(&self) -> Option<usize> {
        (**self).max_visits()
    }
}
