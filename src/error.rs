//! Error types shared across modules.
//!
//! Logical unsatisfiability is *not* an error in this sense; it is reported
//! through [`SolveFailure`](crate::search::SolveFailure). The types here cover
//! malformed input: graphs that break their own invariants and solver
//! configurations that cannot be run.

use thiserror::Error;

/// A constraint graph was built inconsistently by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two variables were registered under the same name.
    #[error("variable `{0}` is already registered")]
    DuplicateVariable(String),

    /// A constraint referenced a variable name that is not in the graph.
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    /// A constraint referenced a variable id outside the graph.
    #[error("variable id {0} is out of range for a graph of {1} variables")]
    UnknownVariableId(usize, usize),

    /// A binary constraint was registered between a variable and itself.
    #[error("constraint `{constraint}` links variable `{variable}` to itself")]
    SelfConstraint {
        /// The offending variable.
        variable: String,
        /// Name of the constraint that was rejected.
        constraint: String,
    },
}

/// A [`SolverConfig`](crate::search::SolverConfig) holds values the runner cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Time limits are durations; `0` already means unlimited.
    #[error("time_limit_ms must be non-negative (0 = unlimited), got {0}")]
    NegativeTimeLimit(i64),
}
