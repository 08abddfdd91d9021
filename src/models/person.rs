//! Person model.
//!
//! A person is a candidate for roster assignments, qualified for a set
//! of named roles.

use serde::{Deserialize, Serialize};

/// A person that can be assigned to roster roles.
///
/// The identifier is the unique, immutable key; rosters reference persons
/// by identifier only. Roles have set semantics: duplicates collapse and
/// membership is what matters, but insertion order is preserved for
/// reproducible iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub identifier: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Roles this person is qualified for (no duplicates).
    roles: Vec<String>,
}

impl Person {
    /// Creates a new person with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            first_name: String::new(),
            last_name: String::new(),
            roles: Vec::new(),
        }
    }

    /// Sets the first and last name.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Adds a role qualification (builder form).
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.add_role(role);
        self
    }

    /// Full name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this person is qualified for a role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Adds a role qualification.
    ///
    /// Returns `false` if the person already had the role.
    pub fn add_role(&mut self, role: impl Into<String>) -> bool {
        let role = role.into();
        if self.has_role(&role) {
            return false;
        }
        self.roles.push(role);
        true
    }

    /// Removes a role qualification.
    ///
    /// Returns `false` if the person did not have the role.
    pub fn remove_role(&mut self, role: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r != role);
        self.roles.len() != before
    }

    /// Roles this person is qualified for.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}
