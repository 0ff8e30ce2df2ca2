//! Clash constraints between two sessions.

use super::types::Booking;
use crate::graph::BinaryConstraint;

/// One room cannot host two sessions in the same timeslot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomClash;

impl BinaryConstraint<Booking> for RoomClash {
    fn name(&self) -> &str {
        "room-clash"
    }

    fn evaluate(&self, a: &Booking, b: &Booking) -> bool {
        !(a.timeslot == b.timeslot && a.room == b.room)
    }
}

/// One instructor cannot teach two sessions in the same timeslot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructorClash;

impl BinaryConstraint<Booking> for InstructorClash {
    fn name(&self) -> &str {
        "instructor-clash"
    }

    fn evaluate(&self, a: &Booking, b: &Booking) -> bool {
        !(a.timeslot == b.timeslot && a.instructor == b.instructor)
    }
}

/// Two sessions may not share a timeslot at all.
///
/// Used between sessions attended by the same students.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeslotClash;

impl BinaryConstraint<Booking> for TimeslotClash {
    fn name(&self) -> &str {
        "timeslot-clash"
    }

    fn evaluate(&self, a: &Booking, b: &Booking) -> bool {
        a.timeslot != b.timeslot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::Timeslot;

    #[test]
    fn test_clash_kinds() {
        let base = Booking::new("R1", "alice", Timeslot(0));
        let same_room = Booking::new("R1", "bob", Timeslot(0));
        let same_instructor = Booking::new("R2", "alice", Timeslot(0));
        let later = Booking::new("R1", "alice", Timeslot(1));

        assert!(!RoomClash.evaluate(&base, &same_room));
        assert!(RoomClash.evaluate(&base, &same_instructor));
        assert!(RoomClash.evaluate(&base, &later));

        assert!(!InstructorClash.evaluate(&base, &same_instructor));
        assert!(InstructorClash.evaluate(&base, &same_room));
        assert!(InstructorClash.evaluate(&base, &later));

        assert!(!TimeslotClash.evaluate(&same_room, &same_instructor));
        assert!(TimeslotClash.evaluate(&base, &later));
    }
}
