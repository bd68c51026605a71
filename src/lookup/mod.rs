//! Description Lookup
//!
//! Resolves enumeration values to human-readable labels and back.
//!
//! ## Resolution
//!
//! ```text
//! description(UserColour::SkyBlue)
//!         │
//!         ├─► cache hit  ──────────────► "하늘색"
//!         │
//!         └─► cache miss
//!                 ├─► declared label?  ─► "하늘색"
//!                 └─► else symbolic name ─► "SkyBlue"
//!                         (stored, then returned)
//! ```
//!
//! The free functions below share one process-wide [`DescriptionCache`].
//! The cache is purely an optimization: clearing it never changes a result.

pub mod cache;

use std::sync::LazyLock;

use tokio::task::JoinHandle;

use crate::describe::Describe;
use crate::error::Result;

pub use cache::{CacheStats, DescriptionCache};

static GLOBAL_CACHE: LazyLock<DescriptionCache> = LazyLock::new(DescriptionCache::new);

/// The process-wide cache used by the free functions.
pub fn global() -> &'static DescriptionCache {
    &GLOBAL_CACHE
}

pub fn description<T: Describe>(value: T) -> &'static str {
    GLOBAL_CACHE.description(value)
}

pub fn description_of<T: Describe>(value: Option<T>) -> Result<&'static str> {
    GLOBAL_CACHE.description_of(value)
}

pub fn all_with_descriptions<T: Describe>() -> Vec<(T, &'static str)> {
    GLOBAL_CACHE.all_with_descriptions()
}

pub fn all_descriptions<T: Describe>() -> Vec<&'static str> {
    GLOBAL_CACHE.all_descriptions::<T>()
}

pub fn enum_from_description<T: Describe>(label: &str) -> Result<T> {
    GLOBAL_CACHE.enum_from_description(label)
}

pub fn try_enum_from_description<T: Describe>(label: &str, default: T) -> T {
    GLOBAL_CACHE.try_enum_from_description(label, default)
}

pub fn clear_cache() {
    GLOBAL_CACHE.clear();
}

pub fn warmup_cache<T: Describe>() -> usize {
    GLOBAL_CACHE.warmup::<T>()
}

/// Warm the global cache on the blocking pool. Must be called from inside a
/// tokio runtime; lookups never wait for it.
pub fn spawn_warmup<T: Describe>() -> JoinHandle<usize> {
    tokio::task::spawn_blocking(warmup_cache::<T>)
}

pub fn cache_stats() -> CacheStats {
    GLOBAL_CACHE.stats()
}
