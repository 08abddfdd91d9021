//! Roster (solution) model.
//!
//! A roster records which person fills which role at one point in a
//! chronological sequence. Sequence numbers define precedence: lower
//! numbers are earlier rosters.

use serde::{Deserialize, Serialize};

/// One person → role assignment inside a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAssignment {
    /// Identifier of the assigned person.
    pub person_id: String,
    /// Role the person fills in this roster.
    pub role: String,
}

/// A scheduled set of person → role assignments.
///
/// A person appears at most once per roster; assigning an already-present
/// person replaces their role. Persons are referenced by identifier only —
/// the canonical records live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Position in the chronological roster sequence.
    pub sequence_no: i64,
    /// Assignments in the order they were made.
    assignments: Vec<RosterAssignment>,
}

impl Roster {
    /// Creates an empty roster with the given sequence number.
    pub fn new(sequence_no: i64) -> Self {
        Self {
            sequence_no,
            assignments: Vec::new(),
        }
    }

    /// Assigns a person to a role, replacing any existing assignment of
    /// the same person.
    pub fn assign(&mut self, person_id: impl Into<String>, role: impl Into<String>) {
        let person_id = person_id.into();
        let role = role.into();
        match self
            .assignments
            .iter_mut()
            .find(|a| a.person_id == person_id)
        {
            Some(a) => a.role = role,
            None => self.assignments.push(RosterAssignment { person_id, role }),
        }
    }

    /// Role assigned to a person, if any.
    pub fn role_of(&self, person_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.person_id == person_id)
            .map(|a| a.role.as_str())
    }

    /// Whether a person is assigned in this roster, in any role.
    pub fn is_assigned(&self, person_id: &str) -> bool {
        self.role_of(person_id).is_some()
    }

    /// Whether a person is assigned to a specific role in this roster.
    pub fn is_assigned_to(&self, person_id: &str, role: &str) -> bool {
        self.role_of(person_id) == Some(role)
    }

    /// All assignments in assignment order.
    pub fn assignments(&self) -> &[RosterAssignment] {
        &self.assignments
    }

    /// Identifiers of all assigned persons.
    pub fn person_ids(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.person_id.as_str())
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_query() {
        let mut roster = Roster::new(7);
        roster.assign("p1", "nurse");
        roster.assign("p2", "doctor");

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.role_of("p1"), Some("nurse"));
        assert!(roster.is_assigned("p2"));
        assert!(roster.is_assigned_to("p2", "doctor"));
        assert!(!roster.is_assigned_to("p2", "nurse"));
        assert!(!roster.is_assigned("p3"));
    }

    #[test]
    fn test_reassign_replaces_role() {
        let mut roster = Roster::new(1);
        roster.assign("p1", "nurse");
        roster.assign("p1", "doctor");

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.role_of("p1"), Some("doctor"));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new(1);
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.role_of("p1"), None);
    }
}
