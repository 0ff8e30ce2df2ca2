//! Constraint graph: the data model of a CSP instance.
//!
//! # Key Components
//!
//! - **Variables**: [`Variable`], one schedulable unit, addressed by [`VarId`]
//! - **Domains**: [`Domain`], ordered candidate values, pruned during solving
//! - **Constraints**: [`BinaryConstraint`], pure pairwise predicates
//!   ([`NotEqual`], [`FnConstraint`], [`AllOf`])
//! - **Graph**: [`ConstraintGraph`], owns all of the above plus the
//!   insertion-ordered adjacency used by every search heuristic
//!
//! The graph has no behavior beyond storage and neighbor lookup; pruning
//! lives in [`propagation`](crate::propagation) and search in
//! [`search`](crate::search).

mod constraint;
mod domain;
mod model;
mod variable;

pub use constraint::{AllOf, BinaryConstraint, FnConstraint, NotEqual};
pub use domain::Domain;
pub use model::ConstraintGraph;
pub use variable::{VarId, Variable};
