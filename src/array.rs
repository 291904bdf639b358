//! Slice helpers
//!
//! Filtering, containment and de-duplication for plain value lists.

use std::collections::HashSet;
use std::hash::Hash;

/// Drop every absent entry, keeping the order of the rest
pub fn remove_void_values<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    items.into_iter().flatten().collect()
}

/// Returns true if `superset` contains every element of `subset`.
///
/// An empty subset is always contained.
pub fn array_contains_array<T: PartialEq>(superset: &[T], subset: &[T]) -> bool {
    subset.iter().all(|value| superset.contains(value))
}

/// Check if a slice has duplicate values
///
/// Comparison is plain equality, so strings are case sensitive.
pub fn array_has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item))
}

/// Remove duplicate values, keeping the first occurrence of each
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
