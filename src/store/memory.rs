//! In-memory store.
//!
//! Reference implementation of [`RosterStore`] backed by plain vectors.
//! Intended for tests, examples, and small single-process deployments.

use super::{PersonFilter, RosterFilter, RosterStore, StoreError, StoreResult};
use crate::models::{Absence, Pattern, Person, Roster};

/// An in-memory [`RosterStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    persons: Vec<Person>,
    patterns: Vec<Pattern>,
    rosters: Vec<Roster>,
    absences: Vec<Absence>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the identifier exists.
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        if self.persons.iter().any(|p| p.identifier == person.identifier) {
            return Err(StoreError::DuplicateKey(format!(
                "person '{}'",
                person.identifier
            )));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Adds a pattern.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the identifier exists.
    pub fn add_pattern(&mut self, pattern: Pattern) -> StoreResult<()> {
        if self
            .patterns
            .iter()
            .any(|p| p.identifier == pattern.identifier)
        {
            return Err(StoreError::DuplicateKey(format!(
                "pattern '{}'",
                pattern.identifier
            )));
        }
        self.patterns.push(pattern);
        Ok(())
    }

    /// Records an absence. Recording the same absence twice is harmless.
    pub fn add_absence(&mut self, absence: Absence) {
        if !self.absences.contains(&absence) {
            self.absences.push(absence);
        }
    }

    /// All recorded absences.
    pub fn absences(&self) -> &[Absence] {
        &self.absences
    }

    fn is_absent(&self, person_id: &str, roster_sequence_no: i64) -> bool {
        self.absences
            .iter()
            .any(|a| a.person_id == person_id && a.roster_sequence_no == roster_sequence_no)
    }
}

impl RosterStore for MemoryStore {
    fn get_persons(&self, filter: &PersonFilter) -> StoreResult<Vec<Person>> {
        Ok(self
            .persons
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    fn get_available_persons(
        &self,
        roster_sequence_no: i64,
        role: Option<&str>,
    ) -> StoreResult<Vec<Person>> {
        Ok(self
            .persons
            .iter()
            .filter(|p| !self.is_absent(&p.identifier, roster_sequence_no))
            .filter(|p| role.map_or(true, |r| p.has_role(r)))
            .cloned()
            .collect())
    }

    fn get_patterns(&self) -> StoreResult<Vec<Pattern>> {
        Ok(self.patterns.clone())
    }

    fn get_rosters(&self, filter: &RosterFilter) -> StoreResult<Vec<Roster>> {
        Ok(self
            .rosters
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    fn add_roster(&mut self, roster: Roster) -> StoreResult<()> {
        if self
            .rosters
            .iter()
            .any(|r| r.sequence_no == roster.sequence_no)
        {
            return Err(StoreError::DuplicateKey(format!(
                "roster {}",
                roster.sequence_no
            )));
        }
        self.rosters.push(roster);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .add_person(Person::new("p1").with_role("nurse").with_role("doctor"))
            .unwrap();
        store.add_person(Person::new("p2").with_role("nurse")).unwrap();
        store
            .add_pattern(Pattern::new("ward").with_requirement("nurse", 1))
            .unwrap();
        store
    }

    #[test]
    fn test_get_persons_filtered() {
        let store = sample_store();

        assert_eq!(store.get_persons(&PersonFilter::all()).unwrap().len(), 2);
        assert_eq!(
            store
                .get_persons(&PersonFilter::by_role("doctor"))
                .unwrap()
                .len(),
            1
        );
        let by_id = store
            .get_persons(&PersonFilter::by_identifier("p2"))
            .unwrap();
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].identifier, "p2");
    }

    #[test]
    fn test_duplicate_person_rejected() {
        let mut store = sample_store();
        let err = store.add_person(Person::new("p1")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }

    #[test]
    fn test_available_persons_excludes_absent() {
        let mut store = sample_store();
        store.add_absence(Absence::new("p1", 10));

        let available = store.get_available_persons(10, None).unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].identifier, "p2");

        // Absence only applies to roster 10
        assert_eq!(store.get_available_persons(11, None).unwrap().len(), 2);
    }

    #[test]
    fn test_available_persons_role_filter() {
        let store = sample_store();
        let doctors = store.get_available_persons(1, Some("doctor")).unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].identifier, "p1");
    }

    #[test]
    fn test_absence_recorded_once() {
        let mut store = MemoryStore::new();
        store.add_absence(Absence::new("p1", 10));
        store.add_absence(Absence::new("p1", 10));
        assert_eq!(store.absences().len(), 1);
    }

    #[test]
    fn test_roster_history_query() {
        let mut store = MemoryStore::new();
        store.add_roster(Roster::new(1)).unwrap();
        store.add_roster(Roster::new(2)).unwrap();
        store.add_roster(Roster::new(3)).unwrap();

        let before = store
            .get_rosters(&RosterFilter::strictly_before(3))
            .unwrap();
        assert_eq!(before.len(), 2);
        assert!(before.iter().all(|r| r.sequence_no < 3));
    }

    #[test]
    fn test_duplicate_roster_rejected() {
        let mut store = MemoryStore::new();
        store.add_roster(Roster::new(1)).unwrap();
        let err = store.add_roster(Roster::new(1)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }
}
