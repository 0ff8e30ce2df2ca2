//! Domain-agnostic constraint satisfaction engine.
//!
//! Assigns every variable of a binary CSP a value from its finite domain so
//! that all pairwise constraints hold:
//!
//! - **Graph**: Variables, ordered domains and binary constraints, with
//!   insertion-ordered adjacency for reproducible search.
//! - **AC-3**: Arc-consistency preprocessing that shrinks domains and
//!   detects unsolvable instances before search.
//! - **Heuristics**: Minimum Remaining Values variable selection and Least
//!   Constraining Value ordering.
//! - **Forward checking**: Branch-scoped pruning of neighbor domains, undone
//!   exactly through a trail on backtrack.
//! - **Search**: Depth-first backtracking returning the first complete
//!   assignment, or a failure kind that separates "unsatisfiable" from
//!   "aborted by a budget".
//! - **Timetable**: Rooms, instructors and timeslots expressed as a CSP,
//!   with room, instructor and level clash constraints.
//!
//! # Example
//!
//! ```
//! use u_csp::graph::{ConstraintGraph, NotEqual, Variable};
//! use u_csp::search::solve;
//!
//! let mut graph = ConstraintGraph::new();
//! let a = graph.add_variable(Variable::named("A"), [1, 2]).unwrap();
//! let b = graph.add_variable(Variable::named("B"), [1, 2]).unwrap();
//! let c = graph.add_variable(Variable::named("C"), [1, 2]).unwrap();
//! graph.add_constraint(a, b, NotEqual).unwrap();
//! graph.add_constraint(b, c, NotEqual).unwrap();
//!
//! let assignment = solve(&mut graph).unwrap();
//! assert_eq!(assignment.get(a), assignment.get(c));
//! assert_ne!(assignment.get(a), assignment.get(b));
//! ```
//!
//! # Architecture
//!
//! The engine is single-threaded and synchronous; one solve owns its graph
//! exclusively. Logging goes through the `log` facade and no logger is
//! installed by the crate.

pub mod error;
pub mod graph;
pub mod heuristics;
pub mod propagation;
pub mod search;
pub mod timetable;

pub use error::{ConfigError, GraphError};
pub use search::{solve, Assignment, SolveFailure};
