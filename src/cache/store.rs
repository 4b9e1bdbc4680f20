//! Cache Store Module
//!
//! Main cache engine: a HashMap index over an arena-backed usage order,
//! with a weight budget driving LRU eviction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::{CacheEntry, CacheStats, FnWeigher, UnitWeigher, UsageOrder, Weigher};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Capacity-bounded LRU cache.
///
/// The store is single-threaded; wrap it in a lock to share it.
pub struct CacheStore<K, V> {
    /// Key -> handle into `order`
    index: HashMap<K, usize>,
    /// Live entries, most recently used first
    order: UsageOrder<CacheEntry<K, V>>,
    /// Computes each entry's weight on write. Only the weigher must be
    /// `'static`; keys and values may borrow.
    weigher: Box<dyn Weigher<K, V>>,
    /// Maximum summed weight
    capacity: u64,
    /// Summed weight of live entries
    current_weight: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl<K, V> fmt::Debug for CacheStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("capacity", &self.capacity)
            .field("current_weight", &self.current_weight)
            .field("len", &self.index.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructors ==
    /// Creates a count-bounded store holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self::with_weigher(max_entries as u64, UnitWeigher)
    }

    /// Creates a weight-bounded store using the given weigher.
    ///
    /// # Arguments
    /// * `capacity` - Maximum summed weight of all entries
    /// * `weigher` - Computes the weight of each written entry
    pub fn with_weigher(capacity: u64, weigher: impl Weigher<K, V> + 'static) -> Self {
        Self {
            index: HashMap::new(),
            order: UsageOrder::new(),
            weigher: Box::new(weigher),
            capacity,
            current_weight: 0,
            stats: CacheStats::new(),
        }
    }

    /// Creates a weight-bounded store from a weight closure.
    pub fn with_weight_fn<F>(capacity: u64, f: F) -> Self
    where
        F: Fn(&K, &V) -> u64 + Send + Sync + 'static,
    {
        Self::with_weigher(capacity, FnWeigher::new(f))
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Set ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// Writing a live key replaces its value, promotes it and re-weighs it.
    /// Least recently used entries are evicted until the new weight fits;
    /// the entry being written is never one of them.
    ///
    /// Fails with `OversizedEntry` if the entry alone outweighs the capacity.
    /// The cache is left untouched in that case.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        let weight = self.weigher.weigh(&key, &value);
        if weight > self.capacity {
            debug!(
                "Rejected entry of weight {} (capacity {})",
                weight, self.capacity
            );
            return Err(CacheError::OversizedEntry {
                weight,
                capacity: self.capacity,
            });
        }

        if let Some(&handle) = self.index.get(&key) {
            let old_weight = match self.order.get_mut(handle) {
                Some(entry) => entry.replace(value, weight),
                None => 0,
            };
            self.current_weight -= old_weight;
            self.order.move_to_front(handle);
            self.evict_to_fit(weight);
            self.current_weight += weight;
            self.stats.record_update();
            trace!("Updated entry, weight {} -> {}", old_weight, weight);
        } else {
            self.evict_to_fit(weight);
            let handle = self.order.push_front(CacheEntry::new(key.clone(), value, weight));
            self.index.insert(key, handle);
            self.current_weight += weight;
            self.stats.record_insertion();
            trace!("Inserted entry of weight {}", weight);
        }

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// A miss returns None and is counted in the stats.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&handle) => {
                self.stats.record_hit();
                self.order.move_to_front(handle);
                self.order.get(handle).map(|entry| &entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value by key without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&handle| self.order.get(handle))
            .map(|entry| &entry.value)
    }

    // == Has ==
    /// Returns true if the key has a live entry. Recency is unchanged.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry by key and returns its value.
    ///
    /// Fails with `NotFound` if the key has no live entry.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key).ok_or(CacheError::NotFound)?;
        let entry = self.order.remove(handle).ok_or(CacheError::NotFound)?;
        self.current_weight -= entry.weight;
        self.stats.record_removal();
        Ok(entry.value)
    }

    // == Reset ==
    /// Drops every entry. Statistics counters are kept.
    pub fn reset(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.order.clear();
        self.current_weight = 0;
        info!("Cache reset, dropped {} entries", dropped);
    }

    // == Peek LRU ==
    /// Returns the next eviction candidate without touching it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.back().map(|entry| (&entry.key, &entry.value))
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.index.len(), self.current_weight);
        stats
    }

    // == Reset Stats ==
    /// Zeroes the hit, miss and write counters.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum summed weight, fixed at construction.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    // == Weight ==
    /// Returns the summed weight of all live entries.
    pub fn weight(&self) -> u64 {
        self.current_weight
    }

    // == Evict To Fit ==
    /// Evicts from the back of the usage order until `incoming` more weight fits.
    ///
    /// Callers guarantee `incoming <= capacity`, so the loop ends at the latest
    /// once the accounted weight reaches zero.
    fn evict_to_fit(&mut self, incoming: u64) {
        while incoming > self.capacity - self.current_weight {
            let Some(entry) = self.order.pop_back() else {
                break;
            };
            self.index.remove(&entry.key);
            self.current_weight -= entry.weight;
            self.stats.record_eviction();
            debug!(
                "Evicted least recently used entry of weight {}, {} of {} in use",
                entry.weight, self.current_weight, self.capacity
            );
        }
    }

    /// Panics if the index, usage order and weight accounting disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.order.len(), "index/order size mismatch");
        let mut summed = 0;
        for entry in self.order.iter() {
            let handle = self.index.get(&entry.key).expect("ordered key missing from index");
            let indexed = self.order.get(*handle).expect("index handle is stale");
            assert!(indexed.key == entry.key, "index handle points at another key");
            summed += entry.weight;
        }
        assert_eq!(summed, self.current_weight, "weight accounting drifted");
        assert!(self.current_weight <= self.capacity, "capacity exceeded");
    }
}
