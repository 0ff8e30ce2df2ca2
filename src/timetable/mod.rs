//! University timetabling on top of the generic engine.
//!
//! A session's value is a [`Booking`] (room, instructor, timeslot). Clashes
//! are expressed with three constraint kinds, composed per edge:
//!
//! - [`RoomClash`]: a room hosts one session per timeslot
//! - [`InstructorClash`]: an instructor teaches one session per timeslot
//! - [`TimeslotClash`]: sessions of the same level never overlap
//!
//! [`TimetableBuilder`] turns course offerings into a
//! [`ConstraintGraph`](crate::graph::ConstraintGraph); [`Timetable`] turns a
//! solved assignment back into bookings. Loading the offerings and deciding
//! which instructors may teach a course happen upstream.

mod builder;
mod constraints;
mod types;

pub use builder::{ScheduledSession, Timetable, TimetableBuilder};
pub use constraints::{InstructorClash, RoomClash, TimeslotClash};
pub use types::{Booking, CourseOffering, Room, RoomKind, Timeslot};
