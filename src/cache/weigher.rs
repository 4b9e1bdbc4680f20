//! Weigher Module
//!
//! Assigns a capacity cost to each entry. The cache keeps the sum of all
//! entry weights at or below its capacity.
//!
//! # Policies
//! - [`UnitWeigher`] - every entry costs 1, capacity is an entry count
//! - [`TypeSizeWeigher`] - shallow size of the value type
//! - [`FnWeigher`] - caller supplied closure

use std::fmt;
use std::mem;

// == Weigher Trait ==
/// Computes the capacity cost of a cache entry.
///
/// A weight of zero is allowed; such entries never trigger eviction.
pub trait Weigher<K, V>: Send + Sync {
    fn weigh(&self, key: &K, value: &V) -> u64;
}

// == Unit Weigher ==
/// Every entry costs exactly 1 unit. This gives the count-based policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeigher;

impl<K, V> Weigher<K, V> for UnitWeigher {
    #[inline]
    fn weigh(&self, _key: &K, _value: &V) -> u64 {
        1
    }
}

// == Type Size Weigher ==
/// Weighs an entry by `size_of::<V>()`.
///
/// Only the fixed-size part of the value counts: every `String` weighs the
/// same no matter how long it is. Prefer [`FnWeigher`] to bound real memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeSizeWeigher;

impl<K, V> Weigher<K, V> for TypeSizeWeigher {
    #[inline]
    fn weigh(&self, _key: &K, _value: &V) -> u64 {
        mem::size_of::<V>() as u64
    }
}

// == Fn Weigher ==
/// A weigher backed by a closure.
///
/// Not tied to the key and value types, so the closure alone decides whether
/// the weigher is `'static`.
pub struct FnWeigher<F> {
    f: F,
}

impl<F> FnWeigher<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<K, V, F> Weigher<K, V> for FnWeigher<F>
where
    F: Fn(&K, &V) -> u64 + Send + Sync,
{
    #[inline]
    fn weigh(&self, key: &K, value: &V) -> u64 {
        (self.f)(key, value)
    }
}

impl<F> fmt::Debug for FnWeigher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnWeigher")
    }
}
