//! Least Constraining Value.

use crate::graph::{ConstraintGraph, VarId};
use crate::search::Assignment;

/// Returns the live domain of `var`, ordered by how many candidates each
/// value would remove from unassigned neighbors (fewest first).
///
/// The sort is stable: values with equal counts keep their domain order.
pub fn order_domain_values<V: Clone>(
    graph: &ConstraintGraph<V>,
    var: VarId,
    assignment: &Assignment<V>,
) -> Vec<V> {
    let mut scored: Vec<(usize, &V)> = graph
        .domain(var)
        .iter()
        .map(|v| (count_conflicts(graph, var, v, assignment), v))
        .collect();
    scored.sort_by_key(|&(conflicts, _)| conflicts);
    scored.into_iter().map(|(_, v)| v.clone()).collect()
}

/// Number of values `var = value` would eliminate from the domains of its
/// unassigned neighbors, summed over neighbors.
///
/// A neighbor value counts once even when several constraints on the edge
/// reject it. Assigned neighbors are skipped.
pub fn count_conflicts<V>(
    graph: &ConstraintGraph<V>,
    var: VarId,
    value: &V,
    assignment: &Assignment<V>,
) -> usize {
    graph
        .edges(var)
        .iter()
        .filter(|edge| !assignment.is_assigned(edge.var))
        .map(|edge| {
            graph
                .domain(edge.var)
                .iter()
                .filter(|w| !edge.allows(value, w))
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{FnConstraint, NotEqual, Variable};

    #[test]
    fn test_least_constraining_first() {
        // X in {1, 2, 3}; neighbours Y in {1} and Z in {1, 3}, all not-equal.
        // X=1 removes 2, X=3 removes 1, X=2 removes 0.
        let mut graph = ConstraintGraph::new();
        let x = graph.add_variable(Variable::named("X"), [1, 2, 3]).unwrap();
        let y = graph.add_variable(Variable::named("Y"), [1]).unwrap();
        let z = graph.add_variable(Variable::named("Z"), [1, 3]).unwrap();
        graph.add_constraint(x, y, NotEqual).unwrap();
        graph.add_constraint(x, z, NotEqual).unwrap();

        let assignment = Assignment::new(graph.len());
        assert_eq!(count_conflicts(&graph, x, &1, &assignment), 2);
        assert_eq!(order_domain_values(&graph, x, &assignment), vec![2, 3, 1]);
    }

    #[test]
    fn test_assigned_neighbors_are_ignored() {
        let mut graph = ConstraintGraph::new();
        let x = graph.add_variable(Variable::named("X"), [1, 2]).unwrap();
        let y = graph.add_variable(Variable::named("Y"), [1]).unwrap();
        graph.add_constraint(x, y, NotEqual).unwrap();

        let mut assignment = Assignment::new(graph.len());
        assignment.assign(y, 1);
        assert_eq!(count_conflicts(&graph, x, &1, &assignment), 0);
        assert_eq!(order_domain_values(&graph, x, &assignment), vec![1, 2]);
    }

    #[test]
    fn test_neighbor_value_counted_once_per_edge() {
        let mut graph = ConstraintGraph::new();
        let x = graph.add_variable(Variable::named("X"), [1]).unwrap();
        let y = graph.add_variable(Variable::named("Y"), [1, 2]).unwrap();
        graph.add_constraint(x, y, NotEqual).unwrap();
        graph
            .add_constraint(x, y, FnConstraint::new("gt", |a: &i32, b: &i32| a > b))
            .unwrap();

        let assignment = Assignment::new(graph.len());
        assert_eq!(count_conflicts(&graph, x, &1, &assignment), 2);
    }

    #[test]
    fn test_ties_keep_domain_order() {
        let mut graph = ConstraintGraph::new();
        let x = graph.add_variable(Variable::named("X"), [2, 1]).unwrap();
        let y = graph.add_variable(Variable::named("Y"), [1, 2]).unwrap();
        graph.add_constraint(x, y, NotEqual).unwrap();

        let assignment = Assignment::new(graph.len());
        assert_eq!(order_domain_values(&graph, x, &assignment), vec![2, 1]);
    }
}
