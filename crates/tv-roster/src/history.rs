//! Bounded most-recent-first logs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One successful game result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Label of the game that produced the result.
    pub game: String,
    /// The rendered result text.
    pub result: String,
    /// When the result was produced.
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    /// Create a history entry.
    pub fn new(game: impl Into<String>, result: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            game: game.into(),
            result: result.into(),
            timestamp,
        }
    }
}

/// A log that keeps only the newest `CAP` items, newest first.
///
/// Serialized as a plain list. Deserializing drops anything past `CAP`,
/// so a hand-edited file cannot grow the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundedLog<T, const CAP: usize> {
    items: Vec<T>,
}

impl<T, const CAP: usize> BoundedLog<T, CAP> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Maximum number of items kept.
    pub fn cap(&self) -> usize {
        CAP
    }

    /// Insert at the front, evicting the oldest item on overflow.
    pub fn push(&mut self, item: T) {
        self.items.insert(0, item);
        self.items.truncate(CAP);
    }

    /// Items, newest first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, const CAP: usize> Default for BoundedLog<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T: Deserialize<'de>, const CAP: usize> Deserialize<'de> for BoundedLog<T, CAP> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut items = Vec::<T>::deserialize(deserializer)?;
        items.truncate(CAP);
        Ok(Self { items })
    }
}
