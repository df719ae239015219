//! Memoization of decoding results by contextual address

use crate::memory::Pointer;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// A memo table of per-instruction decoding results.
///
/// Results are keyed by contextual pointer, so the same address decoded under
/// two different contexts occupies two entries. Contexts compare by value, so
/// a lookup hits regardless of the sequence of edits that produced its
/// context.
#[derive(Clone, Debug)]
pub struct DecodeCache<P, V>
where
    P: Eq + Hash,
{
    results: HashMap<Pointer<P>, V>,
}

impl<P, V> Default for DecodeCache<P, V>
where
    P: Eq + Hash,
{
    fn default() -> Self {
        DecodeCache {
            results: HashMap::new(),
        }
    }
}

impl<P, V> DecodeCache<P, V>
where
    P: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, at: &Pointer<P>) -> Option<&V> {
        self.results.get(at)
    }

    /// Store a decoding result, returning whatever was cached there before.
    pub fn insert(&mut self, at: Pointer<P>, result: V) -> Option<V> {
        self.results.insert(at, result)
    }

    /// Remove a cached result, e.g. after the underlying bytes changed.
    pub fn invalidate(&mut self, at: &Pointer<P>) -> Option<V> {
        self.results.remove(at)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pointer<P>, &V)> {
        self.results.iter()
    }
}

impl<P, V> DecodeCache<P, V>
where
    P: Eq + Hash + Clone + fmt::Debug,
{
    /// Get the cached result at a location, decoding and caching it first if
    /// there is none.
    pub fn get_or_insert_with<F>(&mut self, at: &Pointer<P>, decode: F) -> &V
    where
        F: FnOnce(&Pointer<P>) -> V,
    {
        if !self.results.contains_key(at) {
            trace!(?at, "decode cache miss");
            let result = decode(at);
            self.results.insert(at.clone(), result);
        } else {
            trace!(?at, "decode cache hit");
        }

        &self.results[at]
    }

    /// Get the cached result at a location, attempting to decode it first if
    /// there is none.
    ///
    /// Failed decodes are handed back to the caller and are not cached.
    pub fn get_or_try_insert_with<F, E>(&mut self, at: &Pointer<P>, decode: F) -> Result<&V, E>
    where
        F: FnOnce(&Pointer<P>) -> Result<V, E>,
    {
        if !self.results.contains_key(at) {
            trace!(?at, "decode cache miss");
            let result = decode(at)?;
            self.results.insert(at.clone(), result);
        } else {
            trace!(?at, "decode cache hit");
        }

        Ok(&self.results[at])
    }
}
