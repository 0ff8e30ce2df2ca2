//! Binary constraints.

use std::fmt;
use std::sync::Arc;

/// A pure predicate over the values of two variables.
///
/// Implementations must be stateless: the engine evaluates them any number
/// of times, in any order, during AC-3, forward checking and value ordering.
///
/// A constraint registered between `a` and `b` is always called as
/// `evaluate(value_of_a, value_of_b)`; the graph swaps the arguments when it
/// looks at the arc from `b`'s side, so asymmetric predicates keep their
/// meaning.
///
/// # Examples
///
/// ```
/// use u_csp::graph::BinaryConstraint;
///
/// struct LessThan;
///
/// impl BinaryConstraint<i32> for LessThan {
///     fn name(&self) -> &str {
///         "less-than"
///     }
///
///     fn evaluate(&self, a: &i32, b: &i32) -> bool {
///         a < b
///     }
/// }
///
/// assert!(LessThan.evaluate(&1, &2));
/// ```
pub trait BinaryConstraint<V>: Send + Sync {
    /// Short human-readable identifier, used in logs and errors.
    fn name(&self) -> &str;

    /// Whether the two values are jointly consistent.
    fn evaluate(&self, a: &V, b: &V) -> bool;
}

/// The two variables must take different values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEqual;

impl<V: PartialEq> BinaryConstraint<V> for NotEqual {
    fn name(&self) -> &str {
        "not-equal"
    }

    fn evaluate(&self, a: &V, b: &V) -> bool {
        a != b
    }
}

/// Wraps a closure as a named constraint.
///
/// # Examples
///
/// ```
/// use u_csp::graph::{BinaryConstraint, FnConstraint};
///
/// let differ_by_two = FnConstraint::new("differ-by-two", |a: &i32, b: &i32| (a - b).abs() == 2);
/// assert!(differ_by_two.evaluate(&1, &3));
/// assert!(!differ_by_two.evaluate(&1, &2));
/// ```
pub struct FnConstraint<F> {
    name: String,
    predicate: F,
}

impl<F> FnConstraint<F> {
    /// Creates a named closure constraint.
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> fmt::Debug for FnConstraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConstraint")
            .field("name", &self.name)
            .finish()
    }
}

impl<V, F> BinaryConstraint<V> for FnConstraint<F>
where
    F: Fn(&V, &V) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, a: &V, b: &V) -> bool {
        (self.predicate)(a, b)
    }
}

/// Conjunction of several constraints over the same pair of variables.
///
/// Registering the parts one by one on the same edge has the same effect;
/// `AllOf` is for callers that want to hand a single composed rule around.
pub struct AllOf<V> {
    name: String,
    parts: Vec<Arc<dyn BinaryConstraint<V>>>,
}

impl<V> AllOf<V> {
    /// Creates an empty conjunction (always satisfied until parts are added).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
        }
    }

    /// Adds a part.
    pub fn with<C: BinaryConstraint<V> + 'static>(mut self, constraint: C) -> Self {
        self.parts.push(Arc::new(constraint));
        self
    }

    /// Number of composed parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts were added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<V> fmt::Debug for AllOf<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("name", &self.name)
            .field("parts", &self.parts.iter().map(|p| p.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl<V> BinaryConstraint<V> for AllOf<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, a: &V, b: &V) -> bool {
        self.parts.iter().all(|c| c.evaluate(a, b))
    }
}

/// A constraint as seen from one endpoint of its edge.
pub(crate) struct DirectedConstraint<V> {
    constraint: Arc<dyn BinaryConstraint<V>>,
    reversed: bool,
}

impl<V> DirectedConstraint<V> {
    pub(crate) fn forward(constraint: Arc<dyn BinaryConstraint<V>>) -> Self {
        Self {
            constraint,
            reversed: false,
        }
    }

    pub(crate) fn backward(constraint: Arc<dyn BinaryConstraint<V>>) -> Self {
        Self {
            constraint,
            reversed: true,
        }
    }

    /// Evaluates with `own` as this endpoint's value and `other` as the neighbor's.
    pub(crate) fn check(&self, own: &V, other: &V) -> bool {
        if self.reversed {
            self.constraint.evaluate(other, own)
        } else {
            self.constraint.evaluate(own, other)
        }
    }

    pub(crate) fn name(&self) -> &str {
        self.constraint.name()
    }
}
