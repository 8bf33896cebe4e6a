//! Per-entry state for the back stack.
//!
//! Provides `EntryId` for telling stack entries apart and `SavedState` for
//! the small primitive values a screen keeps across navigation.

use crate::error::{DecodeSnafu, EncodeSnafu};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use snafu::ResultExt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique entry IDs.
static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a back stack entry.
///
/// Pushing the same route twice yields two entries with different IDs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(NonZeroU64);

impl EntryId {
    /// Generate a new process-unique EntryId.
    pub(crate) fn next() -> Self {
        let id = NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1; zero only comes back after wrapping.
        Self(NonZeroU64::new(id).unwrap_or_else(|| {
            panic!("EntryId overflow: created more than 2^64-1 entries")
        }))
    }

    /// Get the raw u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Debug for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values a screen saved into its back stack entry.
///
/// Keys are screen-defined; values are stored as JSON so that only plain
/// data (strings, numbers, flags) survives a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState(Map<String, Value>);

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> crate::Result<()> {
        let value = serde_json::to_value(value).context(EncodeSnafu)?;
        self.0.insert(key.to_string(), value);
        Ok(())
    }

    /// Read the value stored under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.0.get(key) {
            Some(value) => T::deserialize(value).map(Some).context(DecodeSnafu),
            None => Ok(None),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
