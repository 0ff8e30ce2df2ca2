//! Search outcome types.

use std::fmt;

use thiserror::Error;

use crate::error::ConfigError;
use crate::graph::VarId;

/// A partial mapping from variables to chosen values.
///
/// Built incrementally during search and rolled back on backtrack. The
/// solver only ever hands out complete assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment<V> {
    values: Vec<Option<V>>,
    assigned: usize,
}

impl<V> Assignment<V> {
    /// Creates an empty assignment for a graph of `variable_count` variables.
    pub fn new(variable_count: usize) -> Self {
        let mut values = Vec::with_capacity(variable_count);
        values.resize_with(variable_count, || None);
        Self {
            values,
            assigned: 0,
        }
    }

    /// Sets `var` to `value`, returning the previous value if it had one.
    pub fn assign(&mut self, var: VarId, value: V) -> Option<V> {
        let previous = self.values[var.index()].replace(value);
        if previous.is_none() {
            self.assigned += 1;
        }
        previous
    }

    /// Removes the value of `var`.
    pub fn unassign(&mut self, var: VarId) -> Option<V> {
        let previous = self.values[var.index()].take();
        if previous.is_some() {
            self.assigned -= 1;
        }
        previous
    }

    /// The value of `var`, if assigned.
    pub fn get(&self, var: VarId) -> Option<&V> {
        self.values.get(var.index()).and_then(Option::as_ref)
    }

    /// Whether `var` has a value.
    pub fn is_assigned(&self, var: VarId) -> bool {
        self.get(var).is_some()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Whether nothing is assigned yet.
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Number of variables in the underlying graph.
    pub fn variable_count(&self) -> usize {
        self.values.len()
    }

    /// Whether every variable has a value.
    pub fn is_complete(&self) -> bool {
        self.assigned == self.values.len()
    }

    /// Assigned `(variable, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &V)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VarId(i), v)))
    }
}

/// Why a search stopped before reaching a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbortReason {
    /// The external cancellation flag was raised.
    Cancelled,
    /// The node budget was spent.
    NodeLimit(usize),
    /// The wall-clock budget (milliseconds) was spent.
    TimeLimit(i64),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Cancelled => f.write_str("cancelled"),
            AbortReason::NodeLimit(n) => write!(f, "node limit of {n} reached"),
            AbortReason::TimeLimit(ms) => write!(f, "time limit of {ms} ms reached"),
        }
    }
}

/// Why no assignment was returned.
///
/// The first two variants are logical verdicts: no timetable exists under
/// the given constraints. `Aborted` means the question was left open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveFailure {
    /// Preprocessing emptied a domain before search began.
    #[error("domain of `{name}` became empty during preprocessing")]
    PreprocessingUnsatisfiable {
        /// The variable left without candidates.
        variable: VarId,
        /// Its name.
        name: String,
    },

    /// Every branch was explored without completing an assignment.
    #[error("search space exhausted without a complete assignment")]
    SearchExhausted,

    /// A budget or the cancellation flag stopped the search.
    #[error("search aborted: {0}")]
    Aborted(AbortReason),

    /// The solver configuration was rejected.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl SolveFailure {
    /// Whether this failure proves the problem has no solution.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            SolveFailure::PreprocessingUnsatisfiable { .. } | SolveFailure::SearchExhausted
        )
    }
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Arcs revised by AC-3.
    pub ac3_revisions: usize,
    /// Values removed by AC-3.
    pub ac3_pruned: usize,
    /// Tentative assignments tried.
    pub nodes: usize,
    /// Tentative assignments undone.
    pub backtracks: usize,
    /// Values removed by forward checking (including later-restored ones).
    pub fc_pruned: usize,
    /// Deepest level reached.
    pub max_depth: usize,
    /// Wall-clock time in milliseconds.
    pub solve_time_ms: i64,
}

/// Result of a [`CspRunner`](super::CspRunner) run.
#[derive(Debug, Clone)]
pub struct SolveResult<V> {
    /// The complete assignment, or why there is none.
    pub outcome: Result<Assignment<V>, SolveFailure>,
    /// Search counters.
    pub stats: SearchStats,
}

impl<V> SolveResult<V> {
    /// Whether a complete assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The complete assignment, if found.
    pub fn assignment(&self) -> Option<&Assignment<V>> {
        self.outcome.as_ref().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_tracks_size() {
        let mut a = Assignment::new(3);
        assert!(a.is_empty());
        assert_eq!(a.assign(VarId(1), 'x'), None);
        assert_eq!(a.assign(VarId(1), 'y'), Some('x'));
        assert_eq!(a.len(), 1);
        a.assign(VarId(0), 'z');
        a.assign(VarId(2), 'w');
        assert!(a.is_complete());
        assert_eq!(a.unassign(VarId(0)), Some('z'));
        assert_eq!(a.unassign(VarId(0)), None);
        assert_eq!(a.len(), 2);
        assert!(!a.is_complete());
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            vec![(VarId(1), &'y'), (VarId(2), &'w')]
        );
    }

    #[test]
    fn test_failure_kinds() {
        assert!(SolveFailure::SearchExhausted.is_unsatisfiable());
        assert!(!SolveFailure::Aborted(AbortReason::Cancelled).is_unsatisfiable());
        assert_eq!(
            SolveFailure::Aborted(AbortReason::NodeLimit(10)).to_string(),
            "search aborted: node limit of 10 reached"
        );
        let f = SolveFailure::PreprocessingUnsatisfiable {
            variable: VarId(0),
            name: "A".into(),
        };
        assert_eq!(f.to_string(), "domain of `A` became empty during preprocessing");
    }
}
