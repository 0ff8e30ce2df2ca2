//! CSP variable types.

use std::fmt;

/// Dense index of a [`Variable`] inside one [`ConstraintGraph`](super::ConstraintGraph).
///
/// Ids are handed out in registration order starting at zero, so they double
/// as the deterministic tie-break order used by the search heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of this variable in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One schedulable unit: a single session of a course for a level.
///
/// Immutable once created. Repeated sessions of the same course and level
/// (e.g. several tutorial groups) differ only in `session_index`.
///
/// # Examples
///
/// ```
/// use u_csp::graph::Variable;
///
/// let v = Variable::new("CS101-L1-0", "CS101", "L1", 0);
/// assert_eq!(v.course_id, "CS101");
///
/// let bare = Variable::named("x");
/// assert_eq!(bare.name, "x");
/// assert!(bare.course_id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Unique name within a graph.
    pub name: String,
    /// Owning course identifier.
    pub course_id: String,
    /// Owning level identifier.
    pub level_id: String,
    /// Distinguishes repeated sessions of the same course/level.
    pub session_index: u32,
}

impl Variable {
    /// Creates a session variable.
    pub fn new(
        name: impl Into<String>,
        course_id: impl Into<String>,
        level_id: impl Into<String>,
        session_index: u32,
    ) -> Self {
        Self {
            name: name.into(),
            course_id: course_id.into(),
            level_id: level_id.into(),
            session_index,
        }
    }

    /// Creates a variable that carries only a name.
    ///
    /// Handy for problems that are not timetables (graph colouring, puzzles).
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", "", 0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
