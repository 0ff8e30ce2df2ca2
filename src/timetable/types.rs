//! Timetable resource types.

use std::fmt;

/// Kind of teaching a room is equipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKind {
    /// Lecture hall.
    Lecture,
    /// Laboratory.
    Lab,
    /// Tutorial room.
    Tutorial,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Room identifier.
    pub id: String,
    /// What the room can host.
    pub kind: RoomKind,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// A teaching period, numbered across the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeslot(pub u32);

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// The value assigned to a session: where, by whom and when.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    /// Room identifier.
    pub room: String,
    /// Instructor identifier.
    pub instructor: String,
    /// Teaching period.
    pub timeslot: Timeslot,
}

impl Booking {
    /// Creates a booking.
    pub fn new(room: impl Into<String>, instructor: impl Into<String>, timeslot: Timeslot) -> Self {
        Self {
            room: room.into(),
            instructor: instructor.into(),
            timeslot,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} by {}", self.timeslot, self.room, self.instructor)
    }
}

/// A course taught to one level, with the instructors allowed to teach it.
///
/// `instructors` is the candidate set decided upstream (load balancing);
/// its order is the order candidates appear in each session's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseOffering {
    /// Course identifier.
    pub course_id: String,
    /// Level (student cohort) identifier.
    pub level_id: String,
    /// Room kind the sessions need.
    pub kind: RoomKind,
    /// Number of sessions per week.
    pub sessions: u32,
    /// Candidate instructors.
    pub instructors: Vec<String>,
}

impl CourseOffering {
    /// Creates an offering with a single weekly session and no instructors.
    pub fn new(course_id: impl Into<String>, level_id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            course_id: course_id.into(),
            level_id: level_id.into(),
            kind,
            sessions: 1,
            instructors: Vec::new(),
        }
    }

    /// Sets the number of weekly sessions.
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    /// Adds a candidate instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructors.push(instructor.into());
        self
    }
}
