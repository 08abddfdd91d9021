//! Data access port.
//!
//! The generation core is storage-agnostic: it reads persons, patterns,
//! absences, and past rosters through the [`RosterStore`] trait and
//! writes generated rosters back through it. [`MemoryStore`] is the
//! in-memory reference implementation.
//!
//! Reads must return a consistent snapshot for the duration of one
//! generation call; concurrent writes during a call are unsupported.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{Pattern, Person, Roster};

/// Errors raised by store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An entity with the same key already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// No entity matches the given key.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Criteria for person queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    /// Match a single person by identifier.
    pub identifier: Option<String>,
    /// Only persons qualified for this role.
    pub role: Option<String>,
}

impl PersonFilter {
    /// Matches every person.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches a single person by identifier.
    pub fn by_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..Self::default()
        }
    }

    /// Matches persons qualified for a role.
    pub fn by_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// Whether a person satisfies this filter.
    pub fn matches(&self, person: &Person) -> bool {
        if let Some(id) = &self.identifier {
            if person.identifier != *id {
                return false;
            }
        }
        if let Some(role) = &self.role {
            if !person.has_role(role) {
                return false;
            }
        }
        true
    }
}

/// Criteria for roster queries. `before` and `after` are strict
/// sequence-number bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    /// Match a single roster by sequence number.
    pub sequence_no: Option<i64>,
    /// Only rosters with a strictly smaller sequence number.
    pub before: Option<i64>,
    /// Only rosters with a strictly greater sequence number.
    pub after: Option<i64>,
}

impl RosterFilter {
    /// Matches every roster.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches a single roster by sequence number.
    pub fn by_sequence_no(sequence_no: i64) -> Self {
        Self {
            sequence_no: Some(sequence_no),
            ..Self::default()
        }
    }

    /// Matches rosters strictly earlier than the given sequence number.
    ///
    /// This is the history query used by evaluators.
    pub fn strictly_before(sequence_no: i64) -> Self {
        Self {
            before: Some(sequence_no),
            ..Self::default()
        }
    }

    /// Matches rosters strictly later than the given sequence number.
    pub fn strictly_after(sequence_no: i64) -> Self {
        Self {
            after: Some(sequence_no),
            ..Self::default()
        }
    }

    /// Whether a roster satisfies this filter.
    pub fn matches(&self, roster: &Roster) -> bool {
        if let Some(seq) = self.sequence_no {
            if roster.sequence_no != seq {
                return false;
            }
        }
        if let Some(before) = self.before {
            if roster.sequence_no >= before {
                return false;
            }
        }
        if let Some(after) = self.after {
            if roster.sequence_no <= after {
                return false;
            }
        }
        true
    }
}

/// Read/write interface the generation core requires from storage.
pub trait RosterStore {
    /// Returns persons matching the filter.
    fn get_persons(&self, filter: &PersonFilter) -> StoreResult<Vec<Person>>;

    /// Returns persons not recorded absent for the given roster,
    /// optionally restricted to one role qualification.
    fn get_available_persons(
        &self,
        roster_sequence_no: i64,
        role: Option<&str>,
    ) -> StoreResult<Vec<Person>>;

    /// Returns all known patterns.
    fn get_patterns(&self) -> StoreResult<Vec<Pattern>>;

    /// Returns rosters matching the filter.
    fn get_rosters(&self, filter: &RosterFilter) -> StoreResult<Vec<Roster>>;

    /// Persists a roster.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if a roster with the same
    /// sequence number already exists.
    fn add_roster(&mut self, roster: Roster) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_filter() {
        let person = Person::new("p1").with_role("nurse");

        assert!(PersonFilter::all().matches(&person));
        assert!(PersonFilter::by_identifier("p1").matches(&person));
        assert!(!PersonFilter::by_identifier("p2").matches(&person));
        assert!(PersonFilter::by_role("nurse").matches(&person));
        assert!(!PersonFilter::by_role("doctor").matches(&person));
    }

    #[test]
    fn test_roster_filter_bounds_are_strict() {
        let roster = Roster::new(5);

        assert!(RosterFilter::strictly_before(6).matches(&roster));
        assert!(!RosterFilter::strictly_before(5).matches(&roster));
        assert!(RosterFilter::strictly_after(4).matches(&roster));
        assert!(!RosterFilter::strictly_after(5).matches(&roster));
        assert!(RosterFilter::by_sequence_no(5).matches(&roster));
        assert!(!RosterFilter::by_sequence_no(4).matches(&roster));
    }
}
