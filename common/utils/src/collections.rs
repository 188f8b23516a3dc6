//! Collection utilities for extkit
//!
//! This module provides generic, non-mutating transformations over slices:
//! deduplication, grouping, intersection, zipping, partitioning and
//! min/max selection. Every function leaves its input untouched and returns a
//! fresh `Vec`, a reference into the input, or `None`.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use extkit_common::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::selector::{Selector, property_key};
use crate::traits::Truthy;

/// Remove repeated elements, keeping the first occurrence of each.
pub fn without_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    without_duplicates_by(items, |item| item.clone())
}

/// Remove elements whose key was already produced by an earlier element.
///
/// Order of the surviving elements is their order in `items`.
pub fn without_duplicates_by<T, K, F>(items: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key_fn(*item)))
        .cloned()
        .collect()
}

/// Like [`without_duplicates`] for types that only have `PartialEq`, such as
/// floats.
///
/// Membership is a linear scan, so this is O(n²). `NaN` never equals itself
/// and every `NaN` is kept.
pub fn without_duplicates_eq<T>(items: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    without_duplicates_by_eq(items, |item| item.clone())
}

/// Like [`without_duplicates_by`] for keys that only have `PartialEq`.
pub fn without_duplicates_by_eq<T, K, F>(items: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut seen: Vec<K> = Vec::new();
    let mut unique = Vec::new();
    for item in items {
        let key = key_fn(item);
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(item.clone());
        }
    }
    unique
}

/// Elements grouped under a string key, in key first-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Groups<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<T>)>,
}

impl<T> Groups<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, key: String, item: T) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => self.entries[*slot.get()].1.push(item),
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), vec![item]));
                slot.insert(self.entries.len() - 1);
            }
        }
    }

    /// Elements filed under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.entries
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the ordering and return a plain map.
    pub fn into_hash_map(self) -> HashMap<String, Vec<T>> {
        self.entries.into_iter().collect()
    }
}

impl<T> IntoIterator for Groups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for Groups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, items) in &self.entries {
            map.serialize_entry(key, items)?;
        }
        map.end()
    }
}

/// Group elements by a property name or a key function.
///
/// Only property selectors serialize elements and can fail. Use
/// [`group_by_key`] when `T` is not `Serialize`.
///
/// ```
/// use extkit_utils::{Selector, group_by};
///
/// let words = ["apple", "avocado", "banana"];
/// let groups = group_by(&words, Selector::function(|w: &&str| w[..1].to_string())).unwrap();
/// assert_eq!(groups.get("a"), Some(&["apple", "avocado"][..]));
/// ```
pub fn group_by<'a, T, S>(items: &[T], selector: S) -> Result<Groups<T>>
where
    T: Clone + Serialize,
    S: Into<Selector<'a, T>>,
{
    let selector: Selector<'a, T> = selector.into();
    match selector {
        Selector::ByFunction(key_fn) => Ok(group_by_key(items, key_fn)),
        Selector::ByProperty(name) => {
            let mut groups = Groups::new();
            for item in items {
                groups.push(property_key(item, &name)?, item.clone());
            }
            trace!(elements = items.len(), groups = groups.len(), "grouped elements");
            Ok(groups)
        }
    }
}

/// Group elements under the string returned by `key_fn`.
pub fn group_by_key<T, F>(items: &[T], key_fn: F) -> Groups<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut groups = Groups::new();
    for item in items {
        groups.push(key_fn(item), item.clone());
    }
    trace!(elements = items.len(), groups = groups.len(), "grouped elements");
    groups
}

/// Map every element and keep only the `Some` results.
pub fn compact_map<T, U, F>(items: &[T], mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> Option<U>,
{
    items.iter().filter_map(mapper).collect()
}

/// First `Some` produced by `mapper`. Stops at the first hit.
pub fn find_map<T, U, F>(items: &[T], mapper: F) -> Option<U>
where
    F: FnMut(&T) -> Option<U>,
{
    items.iter().find_map(mapper)
}

/// Elements of `left` that also appear in `right`.
///
/// Keeps `left`'s order and its duplicates.
pub fn intersection<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let members: HashSet<&T> = right.iter().collect();
    left.iter()
        .filter(|item| members.contains(item))
        .cloned()
        .collect()
}

/// Like [`intersection`] for types that only have `PartialEq`.
pub fn intersection_eq<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    left.iter()
        .filter(|item| right.contains(item))
        .cloned()
        .collect()
}

/// Pair up elements with their index, stopping at the shorter slice.
pub fn zip<A, B>(left: &[A], right: &[B]) -> Vec<(A, B, usize)>
where
    A: Clone,
    B: Clone,
{
    left.iter()
        .zip(right)
        .enumerate()
        .map(|(index, (a, b))| (a.clone(), b.clone(), index))
        .collect()
}

/// Split into `(matching, rest)`, transforming every element on the way.
pub fn partition<T, M, P, F>(items: &[T], predicate: P, transformer: F) -> (Vec<M>, Vec<M>)
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> M,
{
    let mut trues = Vec::new();
    let mut falses = Vec::new();

    for item in items {
        if predicate(item) {
            trues.push(transformer(item));
        } else {
            falses.push(transformer(item));
        }
    }

    (trues, falses)
}

/// Element with the strictly greatest score; ties keep the earliest.
///
/// The scoring function receives the element and its index. Every element is
/// scored. See [`max_by_truthy`] for the variant that skips falsy elements.
pub fn max_by<T, S, F>(items: &[T], score: F) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T, usize) -> S,
{
    max_by_filtered(items, |_| true, score)
}

/// Like [`max_by`] but falsy elements (`0`, `""`, `false`, `None`, ...) are
/// skipped before scoring.
pub fn max_by_truthy<T, S, F>(items: &[T], score: F) -> Option<&T>
where
    T: Truthy,
    S: PartialOrd,
    F: FnMut(&T, usize) -> S,
{
    max_by_filtered(items, Truthy::is_truthy, score)
}

fn max_by_filtered<T, S, K, F>(items: &[T], keep: K, mut score: F) -> Option<&T>
where
    S: PartialOrd,
    K: Fn(&T) -> bool,
    F: FnMut(&T, usize) -> S,
{
    let mut best: Option<(&T, S)> = None;

    for (index, item) in items.iter().enumerate() {
        if !keep(item) {
            continue;
        }
        let current = score(item, index);
        let replace = match &best {
            Some((_, top)) => current > *top,
            None => true,
        };
        if replace {
            best = Some((item, current));
        }
    }

    best.map(|(item, _)| item)
}

/// Element with the least key; ties keep the earliest.
pub fn min_by<T, K, F>(items: &[T], mut iteratee: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut iter = items.iter();
    let first = iter.next()?;
    let mut best = (first, iteratee(first));

    for item in iter {
        let key = iteratee(item);
        if key < best.1 {
            best = (item, key);
        }
    }

    Some(best.0)
}

/// Method-style access to the collection utilities.
pub trait SliceExt<T> {
    fn without_duplicates(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone;

    fn without_duplicates_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: Fn(&T) -> K;

    fn without_duplicates_eq(&self) -> Vec<T>
    where
        T: PartialEq + Clone;

    fn group_by<'a, S>(&self, selector: S) -> Result<Groups<T>>
    where
        T: Clone + Serialize,
        S: Into<Selector<'a, T>>;

    fn group_by_key<F>(&self, key_fn: F) -> Groups<T>
    where
        T: Clone,
        F: Fn(&T) -> String;

    fn compact_map<U, F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>;

    fn find_map<U, F>(&self, mapper: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>;

    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Hash + Eq + Clone;

    fn intersection_eq(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone;

    fn zip<B: Clone>(&self, other: &[B]) -> Vec<(T, B, usize)>
    where
        T: Clone;

    fn partition<M, P, F>(&self, predicate: P, transformer: F) -> (Vec<M>, Vec<M>)
    where
        P: Fn(&T) -> bool,
        F: Fn(&T) -> M;

    fn max_by<S, F>(&self, score: F) -> Option<&T>
    where
        S: PartialOrd,
        F: FnMut(&T, usize) -> S;

    fn min_by<K, F>(&self, iteratee: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K;
}

impl<T> SliceExt<T> for [T] {
    fn without_duplicates(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone,
    {
        without_duplicates(self)
    }

    fn without_duplicates_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: Fn(&T) -> K,
    {
        without_duplicates_by(self, key_fn)
    }

    fn without_duplicates_eq(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        without_duplicates_eq(self)
    }

    fn group_by<'a, S>(&self, selector: S) -> Result<Groups<T>>
    where
        T: Clone + Serialize,
        S: Into<Selector<'a, T>>,
    {
        group_by(self, selector)
    }

    fn group_by_key<F>(&self, key_fn: F) -> Groups<T>
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        group_by_key(self, key_fn)
    }

    fn compact_map<U, F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        compact_map(self, mapper)
    }

    fn find_map<U, F>(&self, mapper: F) -> Option<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        find_map(self, mapper)
    }

    fn intersection(&self, other: &[T]) -> Vec<T>
    where
        T: Hash + Eq + Clone,
    {
        intersection(self, other)
    }

    fn intersection_eq(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        intersection_eq(self, other)
    }

    fn zip<B: Clone>(&self, other: &[B]) -> Vec<(T, B, usize)>
    where
        T: Clone,
    {
        zip(self, other)
    }

    fn partition<M, P, F>(&self, predicate: P, transformer: F) -> (Vec<M>, Vec<M>)
    where
        P: Fn(&T) -> bool,
        F: Fn(&T) -> M,
    {
        partition(self, predicate, transformer)
    }

    fn max_by<S, F>(&self, score: F) -> Option<&T>
    where
        S: PartialOrd,
        F: FnMut(&T, usize) -> S,
    {
        max_by(self, score)
    }

    fn min_by<K, F>(&self, iteratee: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        min_by(self, iteratee)
    }
}
