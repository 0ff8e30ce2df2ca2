//! Backtracking search.
//!
//! Ties the pieces together: AC-3 once before search, then depth-first
//! search with MRV variable selection, LCV value ordering and forward
//! checking, undoing branch-scoped pruning through a trail.
//!
//! # Key Components
//!
//! - [`solve`]: the one-call entry point
//! - [`CspRunner`]: configurable runs with statistics and cancellation
//! - [`SolverConfig`]: heuristics toggles and budgets
//! - [`Assignment`] / [`SolveFailure`]: the two possible outcomes
//!
//! # Failure kinds
//!
//! [`SolveFailure::PreprocessingUnsatisfiable`] and
//! [`SolveFailure::SearchExhausted`] both mean "no timetable exists under these
//! constraints". [`SolveFailure::Aborted`] means a budget ran out first.

mod config;
mod runner;
mod types;

pub use config::SolverConfig;
pub use runner::{solve, CspRunner};
pub use types::{AbortReason, Assignment, SearchStats, SolveFailure, SolveResult};
