//! Domain pruning: AC-3 preprocessing and forward checking.
//!
//! # Key Components
//!
//! - [`ac3`]: one-shot arc consistency over the whole graph, run before search
//! - [`forward_check`]: pruning of a freshly assigned variable's neighbors
//! - [`Trail`]: undo log that scopes forward-checking changes to a branch
//!
//! Both pruning steps report an emptied domain as a [`Wipeout`].

mod ac3;
mod forward;
mod trail;

pub use ac3::{ac3, revise, Ac3Report, Wipeout};
pub use forward::forward_check;
pub use trail::Trail;
