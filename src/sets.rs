//! Set operations over borrowed items.
//!
//! Items are compared by identity (the address they are borrowed from), never by value: two
//! distinct items with equal content are two different results.
//!
//! Values of a zero-sized type all share the same address, so they count as a single item.

use itertools::Itertools;
use std::collections::HashSet;

#[inline]
fn address<T>(item: &T) -> *const T {
    item
}

/// Remove the repeated items, keeping the first occurrence of each.
#[inline]
pub fn dedup<'a, T>(items: Vec<&'a T>) -> Vec<&'a T> {
    items.into_iter().unique_by(|item| address(*item)).collect()
}

/// The items present in both `left` and `right`, each exactly once.
pub fn intersection<'a, T>(left: Vec<&'a T>, right: Vec<&'a T>) -> Vec<&'a T> {
    let right: HashSet<*const T> = right.into_iter().map(address).collect();
    left.into_iter()
        .filter(|item| right.contains(&address(*item)))
        .unique_by(|item| address(*item))
        .collect()
}

/// The items present in `left` or `right`, each exactly once.
pub fn union<'a, T>(left: Vec<&'a T>, right: Vec<&'a T>) -> Vec<&'a T> {
    dedup(left.into_iter().chain(right).collect())
}
