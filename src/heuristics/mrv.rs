//! Minimum Remaining Values.

use std::cmp::Reverse;

use super::TieBreak;
use crate::graph::{ConstraintGraph, VarId};
use crate::search::Assignment;

/// Picks the unassigned variable with the smallest live domain.
///
/// Returns `None` once every variable is assigned.
///
/// # Examples
///
/// ```
/// use u_csp::graph::{ConstraintGraph, Variable};
/// use u_csp::heuristics::{select_unassigned_variable, TieBreak};
/// use u_csp::search::Assignment;
///
/// let mut graph = ConstraintGraph::new();
/// let _a = graph.add_variable(Variable::named("A"), [1, 2, 3]).unwrap();
/// let b = graph.add_variable(Variable::named("B"), [1, 2]).unwrap();
///
/// let assignment = Assignment::new(graph.len());
/// let picked = select_unassigned_variable(&graph, &assignment, TieBreak::RegistrationOrder);
/// assert_eq!(picked, Some(b));
/// ```
pub fn select_unassigned_variable<V>(
    graph: &ConstraintGraph<V>,
    assignment: &Assignment<V>,
    tie_break: TieBreak,
) -> Option<VarId> {
    let unassigned = graph.var_ids().filter(|&v| !assignment.is_assigned(v));
    match tie_break {
        TieBreak::RegistrationOrder => unassigned.min_by_key(|&v| graph.domain(v).len()),
        TieBreak::Degree => unassigned.min_by_key(|&v| {
            (
                graph.domain(v).len(),
                Reverse(unassigned_degree(graph, assignment, v)),
            )
        }),
    }
}

/// Number of neighbors of `var` that are still unassigned.
pub fn unassigned_degree<V>(
    graph: &ConstraintGraph<V>,
    assignment: &Assignment<V>,
    var: VarId,
) -> usize {
    graph
        .neighbors(var)
        .filter(|&n| !assignment.is_assigned(n))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NotEqual, Variable};

    fn chain() -> (ConstraintGraph<i32>, [VarId; 3]) {
        let mut graph = ConstraintGraph::new();
        let a = graph.add_variable(Variable::named("A"), [1, 2]).unwrap();
        let b = graph.add_variable(Variable::named("B"), [1, 2]).unwrap();
        let c = graph.add_variable(Variable::named("C"), [1, 2]).unwrap();
        graph.add_constraint(a, b, NotEqual).unwrap();
        graph.add_constraint(b, c, NotEqual).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_ties_go_to_registration_order() {
        let (graph, [a, _, _]) = chain();
        let assignment = Assignment::new(graph.len());
        assert_eq!(
            select_unassigned_variable(&graph, &assignment, TieBreak::RegistrationOrder),
            Some(a)
        );
    }

    #[test]
    fn test_degree_tie_break_prefers_hub() {
        let (graph, [_, b, _]) = chain();
        let assignment = Assignment::new(graph.len());
        assert_eq!(
            select_unassigned_variable(&graph, &assignment, TieBreak::Degree),
            Some(b)
        );
    }

    #[test]
    fn test_degree_counts_only_unassigned_neighbors() {
        let (graph, [a, b, c]) = chain();
        let mut assignment = Assignment::new(graph.len());
        assignment.assign(a, 1);
        assert_eq!(unassigned_degree(&graph, &assignment, b), 1);
        assert_eq!(unassigned_degree(&graph, &assignment, c), 1);
        // B and C now tie on both keys; registration order decides.
        assert_eq!(
            select_unassigned_variable(&graph, &assignment, TieBreak::Degree),
            Some(b)
        );
    }

    #[test]
    fn test_none_when_complete() {
        let (graph, [a, b, c]) = chain();
        let mut assignment = Assignment::new(graph.len());
        for v in [a, b, c] {
            assignment.assign(v, 1);
        }
        assert_eq!(
            select_unassigned_variable(&graph, &assignment, TieBreak::RegistrationOrder),
            None
        );
    }
}
