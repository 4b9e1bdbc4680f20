//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with their weight.

// == Cache Entry ==
/// Represents a single cache entry with its key, value and capacity cost.
///
/// The key is kept alongside the value so that evicting from the back of the
/// usage order can also drop the matching index slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The key this entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Capacity consumed by this entry, fixed when the value is written
    pub weight: u64,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `weight` - Capacity cost computed by the cache's weigher
    pub fn new(key: K, value: V, weight: u64) -> Self {
        Self { key, value, weight }
    }

    // == Replace ==
    /// Swaps in a new value and weight, returning the previous weight.
    pub fn replace(&mut self, value: V, weight: u64) -> u64 {
        self.value = value;
        std::mem::replace(&mut self.weight, weight)
    }
}
