//! Property tests over small random binary CSPs, checked against brute force.

use proptest::prelude::*;
use u_csp::graph::{ConstraintGraph, FnConstraint, NotEqual, VarId, Variable};
use u_csp::propagation::{ac3, forward_check, Trail};
use u_csp::search::{Assignment, CspRunner, SolveFailure, SolverConfig};

#[derive(Debug, Clone)]
struct Instance {
    domains: Vec<Vec<i32>>,
    edges: Vec<(usize, usize, u8)>,
}

fn instance() -> impl Strategy<Value = Instance> {
    (2usize..7).prop_flat_map(|n| {
        let domains = prop::collection::vec(
            prop::collection::vec(0i32..5, 0..5).prop_map(|mut d| {
                d.sort_unstable();
                d.dedup();
                d
            }),
            n,
        );
        let edges = prop::collection::vec((0..n, 0..n, 0u8..4), 0..(n * 2));
        (domains, edges).prop_map(|(domains, edges)| Instance {
            domains,
            edges: edges.into_iter().filter(|(a, b, _)| a != b).collect(),
        })
    })
}

fn build(instance: &Instance) -> ConstraintGraph<i32> {
    let mut graph = ConstraintGraph::new();
    for (i, d) in instance.domains.iter().enumerate() {
        graph
            .add_variable(Variable::named(format!("x{i}")), d.clone())
            .unwrap();
    }
    let ids: Vec<VarId> = graph.var_ids().collect();
    for &(a, b, kind) in &instance.edges {
        let (a, b) = (ids[a], ids[b]);
        match kind {
            0 => graph.add_constraint(a, b, NotEqual),
            1 => graph.add_constraint(a, b, FnConstraint::new("lt", |x: &i32, y: &i32| x < y)),
            2 => graph.add_constraint(
                a,
                b,
                FnConstraint::new("apart", |x: &i32, y: &i32| (x - y).abs() > 1),
            ),
            _ => graph.add_constraint(
                a,
                b,
                FnConstraint::new("odd-sum", |x: &i32, y: &i32| (x + y) % 2 == 1),
            ),
        }
        .unwrap();
    }
    graph
}

/// Every complete consistent assignment, by exhaustive enumeration.
fn all_solutions(graph: &ConstraintGraph<i32>) -> Vec<Assignment<i32>> {
    fn extend(
        graph: &ConstraintGraph<i32>,
        ids: &[VarId],
        current: &mut Assignment<i32>,
        out: &mut Vec<Assignment<i32>>,
    ) {
        let Some((&var, rest)) = ids.split_first() else {
            out.push(current.clone());
            return;
        };
        for &value in graph.domain(var).values() {
            current.assign(var, value);
            if graph.is_consistent(current) {
                extend(graph, rest, current, out);
            }
            current.unassign(var);
        }
    }

    let ids: Vec<VarId> = graph.var_ids().collect();
    let mut out = Vec::new();
    extend(graph, &ids, &mut Assignment::new(graph.len()), &mut out);
    out
}

proptest! {
    #[test]
    fn solutions_are_sound(instance in instance()) {
        let mut graph = build(&instance);
        if let Ok(assignment) = CspRunner::run(&mut graph, &SolverConfig::default()).outcome {
            prop_assert!(assignment.is_complete());
            prop_assert!(graph.is_consistent(&assignment));
            for (var, value) in assignment.iter() {
                prop_assert!(instance.domains[var.index()].contains(value));
            }
        }
    }

    #[test]
    fn solver_agrees_with_brute_force(instance in instance()) {
        let expected = !all_solutions(&build(&instance)).is_empty();
        for use_ac3 in [true, false] {
            for use_lcv in [true, false] {
                let config = SolverConfig::default().with_ac3(use_ac3).with_lcv(use_lcv);
                let result = CspRunner::run(&mut build(&instance), &config);
                match result.outcome {
                    Ok(_) => prop_assert!(expected),
                    Err(failure) => {
                        prop_assert!(failure.is_unsatisfiable());
                        prop_assert!(!expected);
                    }
                }
            }
        }
    }

    #[test]
    fn ac3_never_prunes_a_solution_value(instance in instance()) {
        let solutions = all_solutions(&build(&instance));
        let mut graph = build(&instance);
        match ac3(&mut graph) {
            Ok(_) => {
                for solution in &solutions {
                    for (var, value) in solution.iter() {
                        prop_assert!(graph.domain(var).contains(value));
                    }
                }
            }
            Err(_) => prop_assert!(solutions.is_empty()),
        }
    }

    #[test]
    fn forward_checking_is_undone_exactly(instance in instance(), pick in any::<prop::sample::Index>()) {
        let mut graph = build(&instance);
        let var = graph.var_ids().nth(pick.index(graph.len())).unwrap();
        let Some(&value) = graph.domain(var).values().first() else {
            return Ok(());
        };

        let before = graph.snapshot_domains();
        let mut trail = Trail::new();
        let mut assignment = Assignment::new(graph.len());
        let mark = trail.checkpoint();
        assignment.assign(var, value);
        let _ = forward_check(&mut graph, &mut trail, var, &value, &assignment);
        trail.undo_to(&mut graph, mark);

        prop_assert_eq!(graph.snapshot_domains(), before);
    }

    #[test]
    fn search_leaves_preprocessed_domains(instance in instance()) {
        let mut reference = build(&instance);
        let preprocessed = ac3(&mut reference).is_ok();

        let mut graph = build(&instance);
        let result = CspRunner::run(&mut graph, &SolverConfig::default());
        if preprocessed && !matches!(result.outcome, Err(SolveFailure::PreprocessingUnsatisfiable { .. })) {
            prop_assert_eq!(graph.snapshot_domains(), reference.snapshot_domains());
        }
    }

    #[test]
    fn repeated_solves_are_identical(instance in instance()) {
        let first = CspRunner::run(&mut build(&instance), &SolverConfig::default());
        let second = CspRunner::run(&mut build(&instance), &SolverConfig::default());
        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.stats.nodes, second.stats.nodes);
    }
}
