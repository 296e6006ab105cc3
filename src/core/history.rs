//! Bounded log of completed calculations.
//!
//! History is immutable: [`CalculationHistory::record`] returns a new log
//! with the entry appended and the oldest entries evicted past capacity.

use serde::{Deserialize, Serialize};

/// Number of completed calculations kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Ordered log of completed calculation traces, most recent last.
///
/// # Example
///
/// ```rust
/// use calcore::core::CalculationHistory;
///
/// let history = CalculationHistory::with_capacity(2)
///     .record("1 + 1 = 2")
///     .record("2 × 3 = 6")
///     .record("9 − 4 = 5");
///
/// assert_eq!(history.entries(), ["2 × 3 = 6", "9 − 4 = 5"]);
/// assert_eq!(history.latest(), Some("9 − 4 = 5"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationHistory {
    capacity: usize,
    entries: Vec<String>,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Create an empty history holding [`DEFAULT_HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The original is left unchanged. When the log is full the oldest
    /// entries are evicted.
    pub fn record(&self, entry: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry.into());
        let overflow = entries.len().saturating_sub(self.capacity);
        entries.drain(..overflow);
        Self {
            capacity: self.capacity,
            entries,
        }
    }

    /// Empty history with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
