//! Memo table for fetch-and-derive results.
//!
//! One entry per distinct (symbol, start, end) for the life of the process.
//! Entries are only ever added: no TTL, no size bound, no eviction. A stored
//! `None` records that the provider had no data for the key, so it is not
//! asked again either.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::series::TrendSeries;

/// Memo key: the exact arguments of a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchKey {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }
}

/// Stored outcome: the derived series, or `None` for "no data".
pub type MemoValue = Option<Arc<TrendSeries>>;

/// Append-only map from [`FetchKey`] to [`MemoValue`].
///
/// Owned by the composition root and shared with the service through an
/// `Arc`. Concurrent misses on the same key may both compute; the first
/// insert wins and every caller gets the stored value back.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: RwLock<HashMap<FetchKey, MemoValue>>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key. The outer `Option` is hit/miss.
    pub fn get(&self, key: &FetchKey) -> Option<MemoValue> {
        // Entries are never mutated in place, so a poisoned lock still holds
        // consistent data.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Store `value` unless the key is already present; return what is stored.
    pub fn insert(&self, key: FetchKey, value: MemoValue) -> MemoValue {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.entry(key).or_insert(value).clone()
    }

    pub fn contains(&self, key: &FetchKey) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
