//! Absence model.

use serde::{Deserialize, Serialize};

/// A recorded unavailability of a person for one specific roster.
///
/// Absences only narrow the candidate pool during generation; they are
/// not part of the roster itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// Identifier of the absent person.
    pub person_id: String,
    /// Sequence number of the roster the person is unavailable for.
    pub roster_sequence_no: i64,
}

impl Absence {
    /// Creates a new absence.
    pub fn new(person_id: impl Into<String>, roster_sequence_no: i64) -> Self {
        Self {
            person_id: person_id.into(),
            roster_sequence_no,
        }
    }
}
