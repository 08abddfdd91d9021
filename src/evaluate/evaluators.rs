//! Built-in evaluators.
//!
//! Both built-ins scan the roster history from most recent to oldest and
//! score `1 - 1/(k+1)`, where `k` is the 0-based rank of the nearest
//! roster containing the match. A match in the most recent roster scores
//! `0.0`; one two rosters back scores `0.5`; no match at all scores
//! `1.0`. They differ only in what counts as a match.

use super::{Evaluator, ScoreContext};
use crate::models::Person;

/// Rank-based recency penalty: `1 - 1/(rank + 1)`.
fn recency_score(rank: usize) -> f64 {
    1.0 - 1.0 / (rank as f64 + 1.0)
}

/// Rotates people across roles.
///
/// Penalizes assigning a person to a role they held recently; a match
/// requires the exact (person, role) pair.
#[derive(Debug, Clone, Copy)]
pub struct AlternateRoles;

impl Evaluator for AlternateRoles {
    fn name(&self) -> &'static str {
        "alternate_roles"
    }

    fn score(&self, person: &Person, role: &str, ctx: &ScoreContext) -> f64 {
        for (rank, roster) in ctx.history().iter().enumerate() {
            if roster.is_assigned_to(&person.identifier, role) {
                return recency_score(rank);
            }
        }
        1.0
    }
}

/// Maximizes rest time between assignments.
///
/// Penalizes assigning a person who appeared in *any* role recently; the
/// requested role is irrelevant.
#[derive(Debug, Clone, Copy)]
pub struct MaximizeRest;

impl Evaluator for MaximizeRest {
    fn name(&self) -> &'static str {
        "maximize_rest_time"
    }

    fn score(&self, person: &Person, _role: &str, ctx: &ScoreContext) -> f64 {
        for (rank, roster) in ctx.history().iter().enumerate() {
            if roster.is_assigned(&person.identifier) {
                return recency_score(rank);
            }
        }
        1.0
    }
}
