//! Batch history for undo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use npcgen_core::LevelId;

/// Career levels added together by one user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    levels: Vec<LevelId>,
    added_at: DateTime<Utc>,
}

impl Batch {
    /// Create a batch from the ids of the levels it added.
    pub fn new(levels: Vec<LevelId>) -> Self {
        Self {
            levels,
            added_at: Utc::now(),
        }
    }

    /// Ids of the levels in this batch, in insertion order.
    pub fn levels(&self) -> &[LevelId] {
        &self.levels
    }

    /// Whether this batch added the given level.
    pub fn contains(&self, id: LevelId) -> bool {
        self.levels.contains(&id)
    }

    /// Number of levels in the batch.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// When the batch was added.
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

/// Ordered list of batches, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    batches: Vec<Batch>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new batch.
    pub fn push(&mut self, batch: Batch) {
        self.batches.push(batch);
    }

    /// Remove and return the most recent batch.
    pub fn pop(&mut self) -> Option<Batch> {
        self.batches.pop()
    }

    /// Remove and return the batch at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Batch> {
        (index < self.batches.len()).then(|| self.batches.remove(index))
    }

    /// Batch at `index`.
    pub fn get(&self, index: usize) -> Option<&Batch> {
        self.batches.get(index)
    }

    /// All batches, oldest first.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Number of batches.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Forget every batch.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[u64]) -> Batch {
        Batch::new(ids.iter().copied().map(LevelId).collect())
    }

    #[test]
    fn push_and_pop() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push(batch(&[1, 2]));
        history.push(batch(&[3]));
        assert_eq!(history.len(), 2);

        let last = history.pop().unwrap();
        assert_eq!(last.levels(), [LevelId(3)]);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn remove_in_middle() {
        let mut history = History::new();
        history.push(batch(&[1]));
        history.push(batch(&[2, 3]));
        history.push(batch(&[4]));

        let removed = history.remove(1).unwrap();
        assert!(removed.contains(LevelId(2)));
        assert_eq!(removed.len(), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).unwrap().levels(), [LevelId(4)]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut history = History::new();
        history.push(batch(&[1]));
        assert!(history.remove(1).is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn pop_empty() {
        assert!(History::new().pop().is_none());
    }

    #[test]
    fn clear() {
        let mut history = History::new();
        history.push(batch(&[1]));
        history.clear();
        assert!(history.is_empty());
    }
}
