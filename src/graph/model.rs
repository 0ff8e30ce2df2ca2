//! Constraint graph definition.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::constraint::{BinaryConstraint, DirectedConstraint};
use super::domain::Domain;
use super::variable::{VarId, Variable};
use crate::error::GraphError;
use crate::search::Assignment;

/// One entry of a variable's adjacency list: a neighbor and every
/// constraint registered between the two, as seen from the owner's side.
pub(crate) struct Neighbor<V> {
    pub(crate) var: VarId,
    pub(crate) constraints: Vec<DirectedConstraint<V>>,
}

impl<V> Neighbor<V> {
    /// Whether `own` (owner's value) and `other` (neighbor's value) satisfy
    /// every constraint on this edge.
    pub(crate) fn allows(&self, own: &V, other: &V) -> bool {
        self.constraints.iter().all(|c| c.check(own, other))
    }
}

/// A CSP instance: variables, their live domains and binary constraints.
///
/// Every ordering the solver depends on (variable ids, neighbor lists,
/// domain values) follows registration order, so repeated solves of an
/// identically built graph explore the same tree and return the same
/// assignment.
///
/// # Examples
///
/// ```
/// use u_csp::graph::{ConstraintGraph, NotEqual, Variable};
///
/// let mut graph = ConstraintGraph::new();
/// let a = graph.add_variable(Variable::named("A"), [1, 2]).unwrap();
/// let b = graph.add_variable(Variable::named("B"), [1, 2]).unwrap();
/// let c = graph.add_variable(Variable::named("C"), [1, 2]).unwrap();
/// graph.add_constraint(a, b, NotEqual).unwrap();
/// graph.add_constraint(b, c, NotEqual).unwrap();
///
/// assert_eq!(graph.neighbors(b).collect::<Vec<_>>(), vec![a, c]);
/// assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![b]);
/// assert_eq!(graph.degree(b), 2);
/// ```
pub struct ConstraintGraph<V> {
    variables: Vec<Variable>,
    index: HashMap<String, VarId>,
    domains: Vec<Domain<V>>,
    adjacency: Vec<Vec<Neighbor<V>>>,
    constraint_count: usize,
}

impl<V> Default for ConstraintGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ConstraintGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            index: HashMap::new(),
            domains: Vec::new(),
            adjacency: Vec::new(),
            constraint_count: 0,
        }
    }

    /// Registers a variable with its initial domain.
    ///
    /// An empty domain is accepted here; the solver reports it as
    /// unsatisfiable before searching.
    pub fn add_variable(
        &mut self,
        variable: Variable,
        domain: impl IntoIterator<Item = V>,
    ) -> Result<VarId, GraphError> {
        if self.index.contains_key(&variable.name) {
            return Err(GraphError::DuplicateVariable(variable.name));
        }
        let id = VarId(self.variables.len());
        self.index.insert(variable.name.clone(), id);
        self.variables.push(variable);
        self.domains.push(Domain::new(domain));
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Registers `constraint` between `a` and `b`.
    ///
    /// The constraint is evaluated as `evaluate(value_of_a, value_of_b)`
    /// from both sides of the edge. Several constraints may be registered on
    /// the same pair; all of them must hold.
    pub fn add_constraint<C>(&mut self, a: VarId, b: VarId, constraint: C) -> Result<(), GraphError>
    where
        C: BinaryConstraint<V> + 'static,
    {
        self.add_shared_constraint(a, b, Arc::new(constraint))
    }

    /// Like [`add_constraint`](Self::add_constraint), for a constraint
    /// instance shared between many edges.
    pub fn add_shared_constraint(
        &mut self,
        a: VarId,
        b: VarId,
        constraint: Arc<dyn BinaryConstraint<V>>,
    ) -> Result<(), GraphError> {
        self.check_id(a)?;
        self.check_id(b)?;
        if a == b {
            return Err(GraphError::SelfConstraint {
                variable: self.variables[a.0].name.clone(),
                constraint: constraint.name().to_owned(),
            });
        }

        self.neighbor_entry(a, b)
            .constraints
            .push(DirectedConstraint::forward(Arc::clone(&constraint)));
        self.neighbor_entry(b, a)
            .constraints
            .push(DirectedConstraint::backward(constraint));
        self.constraint_count += 1;
        Ok(())
    }

    /// Registers a constraint between two variables looked up by name.
    pub fn add_constraint_by_name<C>(
        &mut self,
        a: &str,
        b: &str,
        constraint: C,
    ) -> Result<(), GraphError>
    where
        C: BinaryConstraint<V> + 'static,
    {
        let a = self
            .var_id(a)
            .ok_or_else(|| GraphError::UnknownVariable(a.to_owned()))?;
        let b = self
            .var_id(b)
            .ok_or_else(|| GraphError::UnknownVariable(b.to_owned()))?;
        self.add_constraint(a, b, constraint)
    }

    fn check_id(&self, id: VarId) -> Result<(), GraphError> {
        if id.0 < self.variables.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVariableId(id.0, self.variables.len()))
        }
    }

    fn neighbor_entry(&mut self, owner: VarId, neighbor: VarId) -> &mut Neighbor<V> {
        let list = &mut self.adjacency[owner.0];
        let pos = match list.iter().position(|n| n.var == neighbor) {
            Some(pos) => pos,
            None => {
                list.push(Neighbor {
                    var: neighbor,
                    constraints: Vec::new(),
                });
                list.len() - 1
            }
        };
        &mut list[pos]
    }

    /// Every variable directly constrained with `var`, in the order the
    /// first constraint with each was registered. Empty for an isolated
    /// variable.
    pub fn neighbors(&self, var: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.adjacency[var.0].iter().map(|n| n.var)
    }

    /// Number of distinct neighbors of `var`.
    pub fn degree(&self, var: VarId) -> usize {
        self.adjacency[var.0].len()
    }

    /// Names of the constraints registered between `a` and `b`, in
    /// registration order.
    pub fn constraints_between(&self, a: VarId, b: VarId) -> Vec<&str> {
        self.edge(a, b)
            .map(|n| n.constraints.iter().map(|c| c.name()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn edges(&self, var: VarId) -> &[Neighbor<V>] {
        &self.adjacency[var.0]
    }

    pub(crate) fn edge(&self, a: VarId, b: VarId) -> Option<&Neighbor<V>> {
        self.adjacency[a.0].iter().find(|n| n.var == b)
    }

    /// Whether `a = value_a` and `b = value_b` satisfy every constraint
    /// between the two. Unconstrained pairs are always compatible.
    pub fn compatible(&self, a: VarId, value_a: &V, b: VarId, value_b: &V) -> bool {
        self.edge(a, b)
            .is_none_or(|n| n.allows(value_a, value_b))
    }

    /// Whether every constraint between two assigned variables holds.
    pub fn is_consistent(&self, assignment: &Assignment<V>) -> bool {
        self.var_ids().all(|var| {
            let Some(value) = assignment.get(var) else {
                return true;
            };
            self.edges(var).iter().all(|n| {
                assignment
                    .get(n.var)
                    .is_none_or(|other| n.allows(value, other))
            })
        })
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the graph has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of registered constraints (each counted once, not per direction).
    pub fn constraint_count(&self) -> usize {
        self.constraint_count
    }

    /// Variable ids in registration order.
    pub fn var_ids(&self) -> impl Iterator<Item = VarId> + '_ {
        (0..self.variables.len()).map(VarId)
    }

    /// All variables in registration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The variable with the given id.
    pub fn variable(&self, var: VarId) -> &Variable {
        &self.variables[var.0]
    }

    /// Looks a variable up by name.
    pub fn var_id(&self, name: &str) -> Option<VarId> {
        self.index.get(name).copied()
    }

    /// Live domain of `var`.
    pub fn domain(&self, var: VarId) -> &Domain<V> {
        &self.domains[var.0]
    }

    pub(crate) fn domain_mut(&mut self, var: VarId) -> &mut Domain<V> {
        &mut self.domains[var.0]
    }

    /// The first variable whose domain is empty, if any.
    pub fn first_empty_domain(&self) -> Option<VarId> {
        self.var_ids().find(|&v| self.domains[v.0].is_empty())
    }
}

impl<V: Clone> ConstraintGraph<V> {
    /// Copies every live domain, in variable order.
    ///
    /// Useful for checking that a search left the graph as it found it.
    pub fn snapshot_domains(&self) -> Vec<Domain<V>> {
        self.domains.clone()
    }
}

impl<V: fmt::Debug> fmt::Debug for ConstraintGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintGraph")
            .field("variables", &self.variables.len())
            .field("constraints", &self.constraint_count)
            .field("domains", &self.domains)
            .finish()
    }
}
