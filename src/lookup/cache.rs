//! Concurrent description caches
//!
//! Both maps use `DashMap::entry().or_insert_with()` as the get-or-compute
//! primitive. Resolution is pure, so a lookup racing a `clear` may resolve
//! the same label twice and store the identical value.

use std::any::TypeId;

use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::describe::Describe;
use crate::error::{EnumSelectError, Result};

/// Entry counts of both caches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub descriptions: usize,
    pub reverse: usize,
}

/// Forward `(type, value) -> label` and reverse `(type, label) -> value`
/// caches for every `Describe` type.
#[derive(Debug, Default)]
pub struct DescriptionCache {
    descriptions: DashMap<(TypeId, i32), &'static str>,
    // Declaration index of the first value matching the label.
    reverse: DashMap<(TypeId, String), usize>,
}

impl DescriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of `value`: declared label, else symbolic name.
    pub fn description<T: Describe>(&self, value: T) -> &'static str {
        let key = (TypeId::of::<T>(), value.value());
        if let Some(label) = self.descriptions.get(&key) {
            return *label;
        }

        *self.descriptions.entry(key).or_insert_with(|| {
            debug!(
                enum_name = T::ENUM_NAME,
                value = value.value(),
                "resolving description"
            );
            value.resolve_label()
        })
    }

    /// Absent values are a caller bug and fail with `MissingValue`.
    pub fn description_of<T: Describe>(&self, value: Option<T>) -> Result<&'static str> {
        value
            .map(|v| self.description(v))
            .ok_or(EnumSelectError::MissingValue {
                enum_name: T::ENUM_NAME,
            })
    }

    pub fn all_with_descriptions<T: Describe>(&self) -> Vec<(T, &'static str)> {
        T::iter().map(|v| (v, self.description(v))).collect()
    }

    pub fn all_descriptions<T: Describe>(&self) -> Vec<&'static str> {
        T::iter().map(|v| self.description(v)).collect()
    }

    /// First value in declaration order whose label or symbolic name equals
    /// `label`. Misses are not cached.
    pub fn enum_from_description<T: Describe>(&self, label: &str) -> Result<T> {
        if label.is_empty() {
            return Err(EnumSelectError::EmptyLabel {
                enum_name: T::ENUM_NAME,
            });
        }

        let key = (TypeId::of::<T>(), label.to_owned());
        let cached = self.reverse.get(&key).map(|index| *index);
        if let Some(value) = cached.and_then(|index| T::iter().nth(index)) {
            return Ok(value);
        }

        let (index, value) = T::iter()
            .enumerate()
            .find(|(_, v)| self.description(*v) == label || v.name() == label)
            .ok_or_else(|| EnumSelectError::NotFound {
                enum_name: T::ENUM_NAME,
                label: label.to_owned(),
            })?;

        self.reverse.entry(key).or_insert(index);
        Ok(value)
    }

    pub fn try_enum_from_description<T: Describe>(&self, label: &str, default: T) -> T {
        self.enum_from_description(label).unwrap_or(default)
    }

    pub fn clear(&self) {
        self.descriptions.clear();
        self.reverse.clear();
    }

    /// Resolve every label of `T` up front. Returns the number of values.
    pub fn warmup<T: Describe>(&self) -> usize {
        let count = T::iter().map(|v| self.description(v)).count();
        debug!(enum_name = T::ENUM_NAME, count, "description cache warmed");
        count
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            descriptions: self.descriptions.len(),
            reverse: self.reverse.len(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::describe::fixtures::{Drink, Shade};
    use proptest::prelude::*;

    fn arb_drink() -> impl Strategy<Value = Drink> {
        prop_oneof![Just(Drink::Coffee), Just(Drink::Tea), Just(Drink::Water)]
    }

    fn arb_shade() -> impl Strategy<Value = Shade> {
        prop_oneof![Just(Shade::Ash), Just(Shade::Slate), Just(Shade::Smoke)]
    }

    proptest! {
        #[test]
        fn description_matches_uncached_resolution(drink in arb_drink(), clear_first in any::<bool>()) {
            let cache = DescriptionCache::new();
            if clear_first {
                cache.warmup::<Drink>();
                cache.clear();
            }
            prop_assert_eq!(cache.description(drink), drink.resolve_label());
        }

        /// Reverse lookup lands on the first declared value whose label or
        /// name equals the requested label.
        #[test]
        fn reverse_lookup_finds_first_match(shade in arb_shade()) {
            let cache = DescriptionCache::new();
            let label = cache.description(shade);
            let found = cache.enum_from_description::<Shade>(label);
            prop_assert!(found.is_ok());
            let found = found.unwrap();
            prop_assert!(cache.description(found) == label || found.name() == label);

            let matches = |v: Shade| cache.description(v) == label || v.name() == label;
            let earlier: Vec<Shade> = Shade::variants()
                .into_iter()
                .take_while(|v| *v != found)
                .collect();
            prop_assert!(earlier.into_iter().all(|v| !matches(v)));
        }

        #[test]
        fn reverse_lookup_round_trips_unique_labels(drink in arb_drink()) {
            let cache = DescriptionCache::new();
            let label = cache.description(drink);
            prop_assert_eq!(cache.enum_from_description::<Drink>(label), Ok(drink));
        }
    }
}
