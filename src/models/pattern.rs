//! Pattern (staffing template) model.
//!
//! A pattern defines the roles a roster must fill and the headcount
//! required for each of them.

use serde::{Deserialize, Serialize};

/// A staffing template: role name → required headcount.
///
/// Requirements keep insertion order so that role iteration — and with it
/// the behavior of order-sensitive algorithms like the greedy one — is
/// reproducible. Setting a requirement for an existing role replaces its
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique pattern identifier.
    pub identifier: String,
    /// (role, required headcount) pairs, insertion-ordered, roles unique.
    requirements: Vec<(String, u32)>,
}

impl Pattern {
    /// Creates an empty pattern with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            requirements: Vec::new(),
        }
    }

    /// Sets a role requirement (builder form).
    pub fn with_requirement(mut self, role: impl Into<String>, count: u32) -> Self {
        self.set_requirement(role, count);
        self
    }

    /// Sets the required headcount for a role, replacing any previous value.
    pub fn set_requirement(&mut self, role: impl Into<String>, count: u32) {
        let role = role.into();
        match self.requirements.iter_mut().find(|(r, _)| *r == role) {
            Some((_, c)) => *c = count,
            None => self.requirements.push((role, count)),
        }
    }

    /// Required headcount for a role, if the role is part of this pattern.
    pub fn requirement(&self, role: &str) -> Option<u32> {
        self.requirements
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, c)| *c)
    }

    /// All (role, headcount) pairs in insertion order.
    pub fn requirements(&self) -> &[(String, u32)] {
        &self.requirements
    }

    /// Roles of this pattern, in insertion order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(|(r, _)| r.as_str())
    }

    /// Total number of role slots to fill.
    pub fn total_slots(&self) -> u32 {
        self.requirements.iter().map(|(_, c)| c).sum()
    }

    /// Whether this pattern requires no staffing at all.
    pub fn is_empty(&self) -> bool {
        self.total_slots() == 0
    }
}
