//! Builds a constraint graph from course offerings and reads solutions back.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};

use super::constraints::{InstructorClash, RoomClash, TimeslotClash};
use super::types::{Booking, CourseOffering, Room, Timeslot};
use crate::error::GraphError;
use crate::graph::{BinaryConstraint, ConstraintGraph, Variable};
use crate::search::Assignment;

/// Turns rooms, timeslots and course offerings into a [`ConstraintGraph`].
///
/// Each offering contributes one variable per weekly session, named
/// `"{course}-{level}-{index}"`. A session's domain enumerates timeslots,
/// then rooms of the required kind, then candidate instructors, skipping
/// slots an instructor is unavailable in. Every pair of sessions is linked
/// by [`RoomClash`] and [`InstructorClash`]; sessions of the same level are
/// linked by [`TimeslotClash`] instead, which implies both.
///
/// # Examples
///
/// ```
/// use u_csp::search::solve;
/// use u_csp::timetable::{CourseOffering, Room, RoomKind, Timetable, TimetableBuilder};
///
/// let builder = TimetableBuilder::new()
///     .with_room(Room::new("A101", RoomKind::Lecture))
///     .with_timeslots(0..2)
///     .with_offering(
///         CourseOffering::new("CS101", "L1", RoomKind::Lecture)
///             .with_sessions(2)
///             .with_instructor("alice"),
///     );
///
/// let mut graph = builder.build().unwrap();
/// let assignment = solve(&mut graph).unwrap();
/// let timetable = Timetable::from_assignment(&graph, &assignment);
/// assert_eq!(timetable.len(), 2);
/// assert_ne!(
///     timetable.entries()[0].booking.timeslot,
///     timetable.entries()[1].booking.timeslot
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableBuilder {
    rooms: Vec<Room>,
    timeslots: Vec<Timeslot>,
    unavailable: HashSet<(String, Timeslot)>,
    offerings: Vec<CourseOffering>,
}

impl TimetableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds timeslots, in the order they should be tried.
    pub fn with_timeslots(mut self, slots: impl IntoIterator<Item = u32>) -> Self {
        self.timeslots.extend(slots.into_iter().map(Timeslot));
        self
    }

    /// Marks `instructor` as unable to teach in `slot`.
    pub fn with_unavailability(mut self, instructor: impl Into<String>, slot: u32) -> Self {
        self.unavailable.insert((instructor.into(), Timeslot(slot)));
        self
    }

    /// Adds a course offering.
    pub fn with_offering(mut self, offering: CourseOffering) -> Self {
        self.offerings.push(offering);
        self
    }

    /// Candidate bookings for one session of `offering`.
    pub fn domain_for(&self, offering: &CourseOffering) -> Vec<Booking> {
        let mut domain = Vec::new();
        for &slot in &self.timeslots {
            for room in self.rooms.iter().filter(|r| r.kind == offering.kind) {
                for instructor in &offering.instructors {
                    if self.unavailable.contains(&(instructor.clone(), slot)) {
                        continue;
                    }
                    domain.push(Booking::new(room.id.as_str(), instructor.as_str(), slot));
                }
            }
        }
        domain
    }

    /// Builds the graph.
    ///
    /// Fails if two offerings share a course and level (their sessions would
    /// get the same variable names).
    pub fn build(&self) -> Result<ConstraintGraph<Booking>, GraphError> {
        let mut graph = ConstraintGraph::new();

        for offering in &self.offerings {
            let domain = self.domain_for(offering);
            if domain.is_empty() {
                warn!(
                    "timetable: {} for {} has no candidate bookings",
                    offering.course_id, offering.level_id
                );
            }
            for index in 0..offering.sessions {
                let name = format!("{}-{}-{}", offering.course_id, offering.level_id, index);
                let variable = Variable::new(
                    name,
                    offering.course_id.as_str(),
                    offering.level_id.as_str(),
                    index,
                );
                graph.add_variable(variable, domain.iter().cloned())?;
            }
        }

        let room_clash: Arc<dyn BinaryConstraint<Booking>> = Arc::new(RoomClash);
        let instructor_clash: Arc<dyn BinaryConstraint<Booking>> = Arc::new(InstructorClash);
        let timeslot_clash: Arc<dyn BinaryConstraint<Booking>> = Arc::new(TimeslotClash);

        let ids: Vec<_> = graph.var_ids().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                if graph.variable(a).level_id == graph.variable(b).level_id {
                    graph.add_shared_constraint(a, b, Arc::clone(&timeslot_clash))?;
                } else {
                    graph.add_shared_constraint(a, b, Arc::clone(&room_clash))?;
                    graph.add_shared_constraint(a, b, Arc::clone(&instructor_clash))?;
                }
            }
        }

        debug!(
            "timetable: {} sessions, {} constraints from {} offerings",
            graph.len(),
            graph.constraint_count(),
            self.offerings.len()
        );
        Ok(graph)
    }
}

/// One session with its booking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledSession {
    /// The session.
    pub variable: Variable,
    /// Where, by whom and when it takes place.
    pub booking: Booking,
}

/// A solved timetable, in session registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    entries: Vec<ScheduledSession>,
}

impl Timetable {
    /// Pairs every assigned session of `graph` with its booking.
    pub fn from_assignment(
        graph: &ConstraintGraph<Booking>,
        assignment: &Assignment<Booking>,
    ) -> Self {
        let entries = assignment
            .iter()
            .map(|(var, booking)| ScheduledSession {
                variable: graph.variable(var).clone(),
                booking: booking.clone(),
            })
            .collect();
        Self { entries }
    }

    /// All sessions.
    pub fn entries(&self) -> &[ScheduledSession] {
        &self.entries
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sessions attended by `level_id`.
    pub fn for_level<'a>(
        &'a self,
        level_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledSession> + 'a {
        self.entries
            .iter()
            .filter(move |s| s.variable.level_id == level_id)
    }

    /// Sessions taught by `instructor`.
    pub fn for_instructor<'a>(
        &'a self,
        instructor: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledSession> + 'a {
        self.entries
            .iter()
            .filter(move |s| s.booking.instructor == instructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{solve, CspRunner, SolverConfig};
    use crate::timetable::RoomKind;

    fn faculty() -> TimetableBuilder {
        TimetableBuilder::new()
            .with_room(Room::new("A101", RoomKind::Lecture))
            .with_room(Room::new("A102", RoomKind::Lecture))
            .with_room(Room::new("LAB1", RoomKind::Lab))
            .with_timeslots(0..3)
            .with_offering(
                CourseOffering::new("CS101", "L1", RoomKind::Lecture)
                    .with_sessions(2)
                    .with_instructor("alice")
                    .with_instructor("bob"),
            )
            .with_offering(
                CourseOffering::new("CS102", "L1", RoomKind::Lab).with_instructor("carol"),
            )
            .with_offering(
                CourseOffering::new("MA201", "L2", RoomKind::Lecture)
                    .with_sessions(2)
                    .with_instructor("alice"),
            )
    }

    #[test]
    fn test_domain_enumeration_order() {
        let builder = faculty().with_unavailability("bob", 0);
        let offering = CourseOffering::new("CS101", "L1", RoomKind::Lecture)
            .with_instructor("alice")
            .with_instructor("bob");

        let domain = builder.domain_for(&offering);
        assert_eq!(domain.len(), 2 * 3 * 2 - 2);
        assert_eq!(domain[0], Booking::new("A101", "alice", Timeslot(0)));
        assert_eq!(domain[1], Booking::new("A102", "alice", Timeslot(0)));
        assert_eq!(domain[2], Booking::new("A101", "alice", Timeslot(1)));
        assert!(domain
            .iter()
            .all(|b| !(b.instructor == "bob" && b.timeslot == Timeslot(0))));
    }

    #[test]
    fn test_build_links_sessions() {
        let graph = faculty().build().unwrap();
        assert_eq!(graph.len(), 5);

        let l1_a = graph.var_id("CS101-L1-0").unwrap();
        let l1_b = graph.var_id("CS102-L1-0").unwrap();
        let l2 = graph.var_id("MA201-L2-1").unwrap();
        assert_eq!(graph.constraints_between(l1_a, l1_b), vec!["timeslot-clash"]);
        assert_eq!(
            graph.constraints_between(l1_a, l2),
            vec!["room-clash", "instructor-clash"]
        );
        assert_eq!(graph.variable(l2).session_index, 1);
        assert_eq!(graph.degree(l2), 4);
    }

    #[test]
    fn test_solved_timetable_has_no_clashes() {
        let mut graph = faculty().build().unwrap();
        let assignment = solve(&mut graph).unwrap();
        let timetable = Timetable::from_assignment(&graph, &assignment);
        assert_eq!(timetable.len(), 5);

        let entries = timetable.entries();
        for (i, x) in entries.iter().enumerate() {
            for y in &entries[i + 1..] {
                let (bx, by) = (&x.booking, &y.booking);
                if bx.timeslot == by.timeslot {
                    assert_ne!(bx.room, by.room);
                    assert_ne!(bx.instructor, by.instructor);
                    assert_ne!(x.variable.level_id, y.variable.level_id);
                }
            }
        }
        assert_eq!(timetable.for_level("L1").count(), 3);
        assert_eq!(timetable.for_instructor("carol").count(), 1);
    }

    #[test]
    fn test_unavailability_is_respected() {
        let builder = faculty()
            .with_unavailability("alice", 0)
            .with_unavailability("alice", 1);
        // Alice now has a single free slot but MA201 needs two sessions from her.
        let mut graph = builder.build().unwrap();
        let failure = solve(&mut graph).unwrap_err();
        assert!(failure.is_unsatisfiable());
    }

    #[test]
    fn test_too_few_slots_for_a_level() {
        let builder = TimetableBuilder::new()
            .with_room(Room::new("A101", RoomKind::Lecture))
            .with_timeslots(0..2)
            .with_offering(
                CourseOffering::new("CS101", "L1", RoomKind::Lecture)
                    .with_sessions(3)
                    .with_instructor("alice"),
            );
        let mut graph = builder.build().unwrap();
        let result = CspRunner::run(&mut graph, &SolverConfig::default());
        assert!(result.outcome.unwrap_err().is_unsatisfiable());
    }

    #[test]
    fn test_duplicate_offering_rejected() {
        let builder = TimetableBuilder::new()
            .with_offering(CourseOffering::new("CS101", "L1", RoomKind::Lecture))
            .with_offering(CourseOffering::new("CS101", "L1", RoomKind::Lecture));
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::DuplicateVariable("CS101-L1-0".into())
        );
    }
}
