//! Undo log for branch-scoped domain changes.

use crate::graph::{ConstraintGraph, VarId};

/// Stack of domain contents replaced during search.
///
/// Pruning never edits a domain in place: the pruned vector is installed
/// and the previous one is pushed here. Undoing to a checkpoint swaps the
/// saved vectors back in reverse order, which restores every domain to
/// exactly its content (and order) at the time of the checkpoint.
#[derive(Debug, Clone)]
pub struct Trail<V> {
    entries: Vec<(VarId, Vec<V>)>,
}

impl<V> Default for Trail<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trail<V> {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Marks the current position; pass it to [`undo_to`](Self::undo_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Records that `var` held `previous` before the latest change.
    pub(crate) fn record(&mut self, var: VarId, previous: Vec<V>) {
        self.entries.push((var, previous));
    }

    /// Restores every domain changed since `mark`. Returns how many domain
    /// changes were undone.
    pub fn undo_to(&mut self, graph: &mut ConstraintGraph<V>, mark: usize) -> usize {
        let mut undone = 0;
        while self.entries.len() > mark {
            let Some((var, previous)) = self.entries.pop() else {
                break;
            };
            let _ = graph.domain_mut(var).replace(previous);
            undone += 1;
        }
        undone
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
