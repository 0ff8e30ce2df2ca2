//! Variable and value ordering heuristics.
//!
//! Both heuristics only change the order in which the search tree is
//! explored, never which assignments are valid.
//!
//! - **MRV** ([`select_unassigned_variable`]): branch on the unassigned
//!   variable with the fewest remaining values, so failures surface early.
//! - **LCV** ([`order_domain_values`]): try first the values that remove the
//!   fewest candidates from unassigned neighbors.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! 4th ed., §6.3.1.

mod lcv;
mod mrv;

pub use lcv::{count_conflicts, order_domain_values};
pub use mrv::{select_unassigned_variable, unassigned_degree};

/// Rule for choosing among variables that tie on domain size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// The earliest registered variable wins.
    #[default]
    RegistrationOrder,

    /// The variable with the most unassigned neighbors wins; remaining ties
    /// go to the earliest registered.
    Degree,
}
