use std::collections::HashMap;
use std::collections::hash_map::Values;
use std::hash::Hash;

/// A finalized state: its minimal cost and the state it was reached from.
///
/// `predecessor` is `None` only for the start of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<K, C> {
    pub state: K,
    pub cost: C,
    pub predecessor: Option<K>,
}

/// The finalized records produced by one search, keyed by state.
///
/// Predecessor links form a tree rooted at the start state. A map is
/// only ever grown by the engine that built it; callers get it read-only.
#[derive(Debug, Clone)]
pub struct CostMap<K, C> {
    pub(crate) records: HashMap<K, Record<K, C>>,
    pub(crate) complete: bool,
}

impl<K, C> Default for CostMap<K, C> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            complete: true,
        }
    }
}

impl<K: Eq + Hash + Clone, C> CostMap<K, C> {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state` as finalized. Returns `false`, leaving the map
    /// untouched, if `state` was already finalized.
    pub(crate) fn finalize(&mut self, state: K, cost: C, predecessor: Option<K>) -> bool {
        if self.records.contains_key(&state) {
            return false;
        }
        self.records.insert(
            state.clone(),
            Record {
                state,
                cost,
                predecessor,
            },
        );
        true
    }

    pub fn get(&self, state: &K) -> Option<&Record<K, C>> {
        self.records.get(state)
    }

    /// Minimal cost of `state`, if it was reached.
    pub fn cost(&self, state: &K) -> Option<&C> {
        self.records.get(state).map(|r| &r.cost)
    }

    /// The state `state` was reached from. `None` both for unreached
    /// states and for the start; use [`contains`](Self::contains) to tell
    /// them apart.
    pub fn predecessor(&self, state: &K) -> Option<&K> {
        self.records.get(state).and_then(|r| r.predecessor.as_ref())
    }

    pub fn contains(&self, state: &K) -> bool {
        self.records.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the search ran until its frontier emptied. `false` when a
    /// visit cap stopped it early.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Iterate over all records in arbitrary order.
    pub fn iter(&self) -> Values<'_, K, Record<K, C>> {
        self.records.values()
    }

    /// Iterate over all reached states in arbitrary order.
    pub fn states(&self) -> impl Iterator<Item = &K> {
        self.records.keys()
    }

    /// The cheapest finalized state under `less`.
    ///
    /// For a map built by a single search this is the start, but nothing
    /// guarantees it: it is a diagnostic guess.
    pub fn nearest_start(&self, less: impl Fn(&C, &C) -> bool) -> Option<&K> {
        let mut best: Option<&Record<K, C>> = None;
        for r in self.records.values() {
            match best {
                Some(b) if !less(&r.cost, &b.cost) => {}
                _ => best = Some(r),
            }
        }
        best.map(|r| &r.state)
    }
}

impl<K: Eq + Hash + Clone, C> FromIterator<Record<K, C>> for CostMap<K, C> {
    fn from_iter<I: IntoIterator<Item = Record<K, C>>>(iter: I) -> Self {
        let records = iter
            .into_iter()
            .map(|r| (r.state.clone(), r))
            .collect();
        Self {
            records,
            complete: true,
        }
    }
}

impl<'a, K, C> IntoIterator for &'a CostMap<K, C> {
    type Item = &'a Record<K, C>;
    type IntoIter = Values<'a, K, Record<K, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

// Serialized as a flat sequence of records; the index is rebuilt on load.
#[cfg(feature = "serde")]
impl<K: serde::Serialize, C: serde::Serialize> serde::Serialize for CostMap<K, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.values())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::Deserialize<'de> for CostMap<K, C>
where
    K: serde::Deserialize<'de> + Eq + Hash + Clone,
    C: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<Record<K, C>>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_map_round_trip() {
        let mut m: CostMap<(i32, i32), u32> = CostMap::new();
        m.finalize((0, 0), 0, None);
        m.finalize((0, 1), 2, Some((0, 0)));
        let json = serde_json::to_string(&m).unwrap();
        let back: CostMap<(i32, i32), u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get(&(0, 1)), m.get(&(0, 1)));
        assert_eq!(back.predecessor(&(0, 0)), None);
    }
}
