//! AC-3 arc-consistency preprocessing.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO worklist with every directed arc `(Xi, Xj)`, visiting
//!    variables and their neighbors in registration order
//! 2. Pop an arc and revise `Xi` against `Xj`: drop every value of `Xi` with
//!    no supporting value in `Xj` under all constraints on the edge
//! 3. If the revision removed something:
//!    a. an empty `Xi` proves the problem unsatisfiable, stop
//!    b. otherwise enqueue `(Xk, Xi)` for every other neighbor `Xk` of `Xi`
//! 4. Stop when the worklist is empty
//!
//! Revision only removes values without support, so no value taking part
//! in a complete consistent assignment is ever pruned.
//!
//! # Reference
//!
//! Mackworth, A. K. (1977). "Consistency in Networks of Relations",
//! *Artificial Intelligence* 8(1), 99-118.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::graph::{ConstraintGraph, VarId};

/// A domain became empty during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wipeout {
    /// The variable left without candidates.
    pub variable: VarId,
}

/// Counters from one AC-3 pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ac3Report {
    /// Arcs popped from the worklist.
    pub revisions: usize,
    /// Values removed across all domains.
    pub pruned: usize,
}

/// Makes every domain of `graph` arc-consistent.
///
/// Fails with the first variable whose domain is emptied. On failure the
/// graph keeps whatever pruning happened so far; it has no solution anyway.
///
/// # Examples
///
/// ```
/// use u_csp::graph::{ConstraintGraph, FnConstraint, Variable};
/// use u_csp::propagation::ac3;
///
/// let mut graph = ConstraintGraph::new();
/// let a = graph.add_variable(Variable::named("A"), [1, 2, 3]).unwrap();
/// let b = graph.add_variable(Variable::named("B"), [1, 2, 3]).unwrap();
/// graph.add_constraint(a, b, FnConstraint::new("lt", |x: &i32, y: &i32| x < y)).unwrap();
///
/// let report = ac3(&mut graph).unwrap();
/// assert_eq!(graph.domain(a).values(), &[1, 2]);
/// assert_eq!(graph.domain(b).values(), &[2, 3]);
/// assert_eq!(report.pruned, 2);
/// ```
pub fn ac3<V>(graph: &mut ConstraintGraph<V>) -> Result<Ac3Report, Wipeout> {
    let mut queue = VecDeque::new();
    for xi in graph.var_ids() {
        for xj in graph.neighbors(xi) {
            queue.push_back((xi, xj));
        }
    }

    let mut report = Ac3Report::default();
    while let Some((xi, xj)) = queue.pop_front() {
        report.revisions += 1;
        let removed = revise(graph, xi, xj);
        if removed == 0 {
            continue;
        }
        report.pruned += removed;
        trace!(
            "ac3: revised {} against {}, removed {removed}",
            graph.variable(xi),
            graph.variable(xj)
        );

        if graph.domain(xi).is_empty() {
            debug!(
                "ac3: domain of {} wiped out after {} revisions",
                graph.variable(xi),
                report.revisions
            );
            return Err(Wipeout { variable: xi });
        }

        for xk in graph.neighbors(xi) {
            if xk != xj {
                queue.push_back((xk, xi));
            }
        }
    }

    debug!(
        "ac3: consistent after {} revisions, {} values pruned",
        report.revisions, report.pruned
    );
    Ok(report)
}

/// Removes the values of `xi` that have no support in `xj`. Returns how
/// many were removed. Never touches `xj`.
pub fn revise<V>(graph: &mut ConstraintGraph<V>, xi: VarId, xj: VarId) -> usize {
    let Some(edge) = graph.edge(xi, xj) else {
        return 0;
    };
    let support = graph.domain(xj);
    let keep: Vec<bool> = graph
        .domain(xi)
        .iter()
        .map(|v| support.iter().any(|w| edge.allows(v, w)))
        .collect();

    let mut keep = keep.into_iter();
    graph
        .domain_mut(xi)
        .retain(|_| keep.next().unwrap_or(true))
}
