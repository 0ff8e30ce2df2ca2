//! Forward checking.

use super::ac3::Wipeout;
use super::trail::Trail;
use crate::graph::{ConstraintGraph, VarId};
use crate::search::Assignment;

/// Prunes the domains of `var`'s unassigned neighbors to the values
/// compatible with `var = value`.
///
/// Every domain that shrinks is recorded on `trail`, so undoing to a
/// checkpoint taken before the call restores all of them. Returns the number
/// of values removed.
///
/// If some neighbor would be left empty, its domain is *not* modified and the
/// wipeout is returned; changes already applied to earlier neighbors stay on
/// the trail for the caller to undo.
pub fn forward_check<V: Clone>(
    graph: &mut ConstraintGraph<V>,
    trail: &mut Trail<V>,
    var: VarId,
    value: &V,
    assignment: &Assignment<V>,
) -> Result<usize, Wipeout> {
    let mut pruned = 0;
    for i in 0..graph.degree(var) {
        let edge = &graph.edges(var)[i];
        let neighbor = edge.var;
        if assignment.is_assigned(neighbor) {
            continue;
        }

        let current = graph.domain(neighbor);
        if current.iter().all(|w| edge.allows(value, w)) {
            continue;
        }
        let filtered: Vec<V> = current
            .iter()
            .filter(|w| edge.allows(value, w))
            .cloned()
            .collect();
        if filtered.is_empty() {
            return Err(Wipeout { variable: neighbor });
        }
        pruned += current.len() - filtered.len();

        let previous = graph.domain_mut(neighbor).replace(filtered);
        trail.record(neighbor, previous);
    }
    Ok(pruned)
}
