//! Priority frontier: a binary min-heap ordered by a caller-supplied
//! comparison over costs.
//!
//! [`std::collections::BinaryHeap`] needs `Ord` on its items, which an
//! opaque cost with a runtime `less` cannot provide, so the heap is kept
//! inline in a `Vec` and sifted by hand.
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `is_empty` | O(1)       |
//!
//! Entries of equal cost come out in no particular order.

/// A queued candidate awaiting expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, C> {
    pub state: K,
    pub predecessor: Option<K>,
    pub cost: C,
}

/// Min-heap of [`Entry`] values ordered by `less` on their cost.
///
/// No deduplication: the same state may be queued several times with
/// different costs.
pub struct Frontier<K, C, L> {
    data: Vec<Entry<K, C>>,
    less: L,
}

impl<K, C, L> Frontier<K, C, L>
where
    L: Fn(&C, &C) -> bool,
{
    /// Create an empty frontier ordered by `less`.
    pub fn new(less: L) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Queue `state`, reached from `predecessor`, at `cost`.
    pub fn push(&mut self, state: K, predecessor: Option<K>, cost: C) {
        self.data.push(Entry {
            state,
            predecessor,
            cost,
        });
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the cheapest entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<Entry<K, C>> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    #[inline]
    fn before(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.data[i].cost, &self.data[j].cost)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.before(idx, parent) {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.before(right, left) {
                smallest = right;
            }
            if !self.before(smallest, idx) {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<K, C, L: Fn(&C, &C) -> bool>(f: &mut Frontier<K, C, L>) -> Vec<C> {
        let mut out = Vec::new();
        while let Some(e) = f.pop() {
            out.push(e.cost);
        }
        out
    }

    #[test]
    fn pops_in_cost_order() {
        let mut f = Frontier::new(|a: &u32, b: &u32| a < b);
        for (i, c) in [5u32, 1, 9, 3, 7, 2, 8].into_iter().enumerate() {
            f.push(i, None, c);
        }
        assert_eq!(f.len(), 7);
        assert_eq!(drain(&mut f), vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(f.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut f: Frontier<char, u32, _> = Frontier::new(|a: &u32, b: &u32| a < b);
        assert!(f.is_empty());
        assert!(f.pop().is_none());
    }

    #[test]
    fn keeps_duplicate_states() {
        let mut f = Frontier::new(|a: &u32, b: &u32| a < b);
        f.push('a', None, 4);
        f.push('a', Some('b'), 2);
        f.push('a', Some('c'), 3);
        assert_eq!(f.len(), 3);
        let first = f.pop().unwrap();
        assert_eq!(first.state, 'a');
        assert_eq!(first.predecessor, Some('b'));
        assert_eq!(first.cost, 2);
        assert_eq!(drain(&mut f), vec![3, 4]);
    }

    #[test]
    fn honours_custom_ordering() {
        // Reverse order: the "cheapest" cost is the largest number.
        let mut f = Frontier::new(|a: &i64, b: &i64| a > b);
        for c in [3, -1, 10, 4] {
            f.push((), None, c);
        }
        assert_eq!(drain(&mut f), vec![10, 4, 3, -1]);
    }

    #[test]
    fn non_numeric_costs() {
        // Lexicographic (len, name) costs.
        let mut f = Frontier::new(|a: &(usize, String), b: &(usize, String)| a < b);
        f.push(1, None, (2, "b".to_string()));
        f.push(2, None, (1, "z".to_string()));
        f.push(3, None, (2, "a".to_string()));
        let order: Vec<_> = std::iter::from_fn(|| f.pop().map(|e| e.state)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut f = Frontier::new(|a: &u32, b: &u32| a < b);
        f.push(0, None, 10);
        f.push(1, None, 5);
        assert_eq!(f.pop().map(|e| e.cost), Some(5));
        f.push(2, None, 1);
        f.push(3, None, 20);
        assert_eq!(drain(&mut f), vec![1, 10, 20]);
    }
}
