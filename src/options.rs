//! Option List Builder
//!
//! Turns a `Describe` enumeration into ordered `(value, text, selected)`
//! entries for dropdowns and checkbox lists. Markup is left to the caller.
//!
//! A selection matches an entry when it equals either the stringified
//! integer value (`"2"`) or the symbolic name (`"SkyBlue"`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::describe::Describe;
use crate::lookup::{self, DescriptionCache};

/// Placeholder text used when the caller does not supply one.
pub const DEFAULT_EMPTY_TEXT: &str = "-- 선택하세요 --";

/// One entry of a select or checkbox list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

impl SelectOption {
    /// The leading "nothing chosen" entry.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            text: text.into(),
            selected: false,
        }
    }
}

/// Stringified integer value, the form posted back by option lists.
pub fn selection_key<T: Describe>(value: T) -> String {
    value.value().to_string()
}

fn matches_selection<T: Describe>(value: T, key: &str, selection: &str) -> bool {
    selection == key || selection == value.name()
}

fn build<T: Describe>(
    cache: &DescriptionCache,
    is_selected: impl Fn(T, &str) -> bool,
) -> Vec<SelectOption> {
    T::iter()
        .map(|v| {
            let key = selection_key(v);
            let selected = is_selected(v, &key);
            SelectOption {
                text: cache.description(v).to_string(),
                value: key,
                selected,
            }
        })
        .collect()
}

impl DescriptionCache {
    pub fn to_select_list<T: Describe>(&self, selected: Option<&str>) -> Vec<SelectOption> {
        build::<T>(self, |v, key| {
            selected.is_some_and(|s| matches_selection(v, key, s))
        })
    }

    pub fn to_select_list_with_empty<T: Describe>(
        &self,
        empty_text: &str,
        selected: Option<&str>,
    ) -> Vec<SelectOption> {
        let mut items = vec![SelectOption::placeholder(empty_text)];
        items.extend(self.to_select_list::<T>(selected));
        items
    }

    pub fn to_multi_select_list<T, S>(
        &self,
        selected: impl IntoIterator<Item = S>,
    ) -> Vec<SelectOption>
    where
        T: Describe,
        S: AsRef<str>,
    {
        let selected: HashSet<String> = selected
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        build::<T>(self, |v, key| {
            selected.contains(key) || selected.contains(v.name())
        })
    }
}

pub fn to_select_list<T: Describe>(selected: Option<&str>) -> Vec<SelectOption> {
    lookup::global().to_select_list::<T>(selected)
}

pub fn to_select_list_with_empty<T: Describe>(
    empty_text: &str,
    selected: Option<&str>,
) -> Vec<SelectOption> {
    lookup::global().to_select_list_with_empty::<T>(empty_text, selected)
}

pub fn to_multi_select_list<T, S>(selected: impl IntoIterator<Item = S>) -> Vec<SelectOption>
where
    T: Describe,
    S: AsRef<str>,
{
    lookup::global().to_multi_select_list::<T, S>(selected)
}
