//! Backtracking search driver.
//!
//! # Algorithm
//!
//! 1. Reject empty initial domains, then run AC-3 (if enabled)
//! 2. Recursive search over the assignment:
//!    a. Complete assignment: success
//!    b. Otherwise pick a variable with MRV and order its values with LCV
//!    c. For each value: checkpoint the trail, assign, forward check, recurse
//!    d. On failure undo to the checkpoint, unassign, try the next value
//!    e. No value left: fail to the caller
//! 3. Before every tentative assignment check the node budget, the time
//!    budget and the cancellation flag; any of them aborts the whole search
//!
//! The first complete assignment found is returned unchanged.
//!
//! # Reference
//!
//! Haralick, R. M. & Elliott, G. L. (1980). "Increasing Tree Search Efficiency
//! for Constraint Satisfaction Problems", *Artificial Intelligence* 14(3), 263-313.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};

use super::config::SolverConfig;
use super::types::{AbortReason, Assignment, SearchStats, SolveFailure, SolveResult};
use crate::graph::ConstraintGraph;
use crate::heuristics::{order_domain_values, select_unassigned_variable};
use crate::propagation::{ac3, forward_check, Trail, Wipeout};

/// Solves `graph` with the default configuration.
///
/// This is the core's single operation: a complete assignment, or the reason
/// there is none. Afterwards the graph's domains are left in their
/// post-preprocessing state.
///
/// # Examples
///
/// ```
/// use u_csp::graph::{ConstraintGraph, NotEqual, Variable};
/// use u_csp::search::{solve, SolveFailure};
///
/// let mut graph = ConstraintGraph::new();
/// let a = graph.add_variable(Variable::named("A"), [1, 2]).unwrap();
/// let b = graph.add_variable(Variable::named("B"), [1, 2]).unwrap();
/// graph.add_constraint(a, b, NotEqual).unwrap();
///
/// let assignment = solve(&mut graph).unwrap();
/// assert_ne!(assignment.get(a), assignment.get(b));
///
/// let mut stuck = ConstraintGraph::new();
/// let a = stuck.add_variable(Variable::named("A"), [1]).unwrap();
/// let b = stuck.add_variable(Variable::named("B"), [1]).unwrap();
/// stuck.add_constraint(a, b, NotEqual).unwrap();
/// assert!(matches!(
///     solve(&mut stuck),
///     Err(SolveFailure::PreprocessingUnsatisfiable { .. })
/// ));
/// ```
pub fn solve<V: Clone>(graph: &mut ConstraintGraph<V>) -> Result<Assignment<V>, SolveFailure> {
    CspRunner::run(graph, &SolverConfig::default()).outcome
}

/// Runs the preprocessing + backtracking pipeline.
pub struct CspRunner;

impl CspRunner {
    /// Solves `graph` under `config`.
    pub fn run<V: Clone>(graph: &mut ConstraintGraph<V>, config: &SolverConfig) -> SolveResult<V> {
        Self::run_with_cancel(graph, config, None)
    }

    /// Solves `graph` with an optional cancellation flag.
    ///
    /// Raising the flag from another thread makes the search return
    /// [`SolveFailure::Aborted`] at the next node.
    pub fn run_with_cancel<V: Clone>(
        graph: &mut ConstraintGraph<V>,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<V> {
        let started = Instant::now();
        let mut stats = SearchStats::default();

        let outcome = match config.validate() {
            Ok(()) => Self::solve_validated(graph, config, cancel, started, &mut stats),
            Err(e) => Err(e.into()),
        };
        stats.solve_time_ms = started.elapsed().as_millis() as i64;

        match &outcome {
            Ok(_) => debug!(
                "solve: complete assignment after {} nodes, {} backtracks ({} ms)",
                stats.nodes, stats.backtracks, stats.solve_time_ms
            ),
            Err(SolveFailure::Aborted(reason)) => warn!(
                "solve: aborted ({reason}) after {} nodes, {} backtracks",
                stats.nodes, stats.backtracks
            ),
            Err(failure) => debug!("solve: {failure}"),
        }

        SolveResult { outcome, stats }
    }

    fn solve_validated<V: Clone>(
        graph: &mut ConstraintGraph<V>,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
        started: Instant,
        stats: &mut SearchStats,
    ) -> Result<Assignment<V>, SolveFailure> {
        debug!(
            "solve: {} variables, {} constraints",
            graph.len(),
            graph.constraint_count()
        );
        if graph.is_empty() {
            warn!("solve: the constraint graph has no variables");
        }

        if let Some(variable) = graph.first_empty_domain() {
            return Err(preprocessing_failure(graph, Wipeout { variable }));
        }
        if config.use_ac3 {
            let report = ac3(graph).map_err(|w| preprocessing_failure(graph, w))?;
            stats.ac3_revisions = report.revisions;
            stats.ac3_pruned = report.pruned;
        }

        let mut search = Search {
            assignment: Assignment::new(graph.len()),
            graph,
            config,
            trail: Trail::new(),
            cancel,
            started,
            stats,
        };
        let result = search.backtrack(0);
        let Search {
            graph,
            mut trail,
            assignment,
            ..
        } = search;
        // Leave the graph as preprocessing left it.
        trail.undo_to(graph, 0);

        match result {
            Ok(true) => {
                debug_assert!(assignment.is_complete());
                debug_assert!(graph.is_consistent(&assignment));
                Ok(assignment)
            }
            Ok(false) => Err(SolveFailure::SearchExhausted),
            Err(reason) => Err(SolveFailure::Aborted(reason)),
        }
    }
}

fn preprocessing_failure<V>(graph: &ConstraintGraph<V>, wipeout: Wipeout) -> SolveFailure {
    SolveFailure::PreprocessingUnsatisfiable {
        variable: wipeout.variable,
        name: graph.variable(wipeout.variable).name.clone(),
    }
}

/// Mutable state of one search.
struct Search<'a, V> {
    graph: &'a mut ConstraintGraph<V>,
    config: &'a SolverConfig,
    trail: Trail<V>,
    assignment: Assignment<V>,
    cancel: Option<Arc<AtomicBool>>,
    started: Instant,
    stats: &'a mut SearchStats,
}

impl<V: Clone> Search<'_, V> {
    /// `Ok(true)`: the assignment is complete. `Ok(false)`: no extension of
    /// the current assignment exists.
    fn backtrack(&mut self, depth: usize) -> Result<bool, AbortReason> {
        if self.assignment.is_complete() {
            return Ok(true);
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let Some(var) =
            select_unassigned_variable(self.graph, &self.assignment, self.config.tie_break)
        else {
            return Ok(true);
        };
        let values = if self.config.use_lcv {
            order_domain_values(self.graph, var, &self.assignment)
        } else {
            self.graph.domain(var).values().to_vec()
        };

        for value in values {
            self.check_budget()?;
            self.stats.nodes += 1;
            let mark = self.trail.checkpoint();
            self.assignment.assign(var, value.clone());

            match forward_check(self.graph, &mut self.trail, var, &value, &self.assignment) {
                Ok(pruned) => {
                    self.stats.fc_pruned += pruned;
                    if self.backtrack(depth + 1)? {
                        return Ok(true);
                    }
                }
                Err(wipeout) => trace!(
                    "depth {depth}: {} wipes out {}",
                    self.graph.variable(var),
                    self.graph.variable(wipeout.variable)
                ),
            }

            self.stats.backtracks += 1;
            self.trail.undo_to(self.graph, mark);
            self.assignment.unassign(var);
        }

        trace!("depth {depth}: {} exhausted", self.graph.variable(var));
        Ok(false)
    }

    fn check_budget(&self) -> Result<(), AbortReason> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(AbortReason::Cancelled);
            }
        }
        if self.config.max_nodes > 0 && self.stats.nodes >= self.config.max_nodes {
            return Err(AbortReason::NodeLimit(self.config.max_nodes));
        }
        if self.config.time_limit_ms > 0
            && self.started.elapsed().as_millis() as i64 >= self.config.time_limit_ms
        {
            return Err(AbortReason::TimeLimit(self.config.time_limit_ms));
        }
        Ok(())
    }
}
