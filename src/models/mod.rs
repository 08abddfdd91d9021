//! Rostering domain models.
//!
//! Provides the core data types for representing rostering problems and
//! solutions. A roster is one point in a chronological sequence of duty
//! schedules; patterns describe the staffing each roster must satisfy.
//!
//! # Domain Mappings
//!
//! | rostergen | Healthcare | On-call | Volunteering |
//! |-----------|------------|---------|--------------|
//! | Person | Nurse/Doctor | Engineer | Volunteer |
//! | Pattern | Ward staffing plan | Rotation template | Shift template |
//! | Roster | Shift schedule | On-call week | Duty list |
//! | Absence | Leave | PTO | Unavailability |

mod absence;
mod pattern;
mod person;
mod roster;

pub use absence::Absence;
pub use pattern::Pattern;
pub use person::Person;
pub use roster::{Roster, RosterAssignment};
