//! Greedy generation algorithm.
//!
//! # Algorithm
//!
//! For each pattern, fill role slots one at a time, always picking the
//! highest-scoring candidate for the current slot. The best-scoring
//! pattern roster wins overall.
//!
//! A locally optimal pick can make a later slot infeasible even when a
//! different pick would have completed the roster; that trade-off is
//! deliberate. Complexity is O(roles × slots × candidates) with no
//! branching.

use tracing::trace;

use super::{Algorithm, GenerateContext, GenerateError};
use crate::evaluate::ScoreContext;
use crate::models::{Pattern, Person, Roster};

/// One-shot, no-backtracking greedy strategy.
///
/// Roles are filled in pattern insertion order. When several candidates
/// share the maximum assignment score, the first one in the store's
/// person order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAlgorithm;

impl Algorithm for SimpleAlgorithm {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn generate(
        &self,
        ctx: &GenerateContext<'_>,
        sequence_no: i64,
    ) -> Result<Roster, GenerateError> {
        let persons = ctx.store.get_available_persons(sequence_no, None)?;
        let score_ctx = ScoreContext::load(ctx.store, sequence_no)?;

        let mut best: Option<(f64, Roster)> = None;
        for pattern in ctx.store.get_patterns()? {
            let roster = match self.fill_pattern(ctx, &score_ctx, &persons, &pattern, sequence_no)
            {
                Some(roster) => roster,
                None => {
                    trace!(pattern = %pattern.identifier, "pattern infeasible, skipping");
                    continue;
                }
            };

            let score = ctx
                .engine
                .roster_score(ctx.config, &roster, &persons, &score_ctx);
            if best.as_ref().map_or(true, |(s, _)| score > *s) {
                best = Some((score, roster));
            }
        }

        match best {
            Some((_, roster)) => Ok(roster),
            None => Err(GenerateError::NotEnoughResources(sequence_no)),
        }
    }
}

impl SimpleAlgorithm {
    /// Builds a roster for one pattern, or `None` if some slot has no
    /// remaining candidate.
    fn fill_pattern(
        &self,
        ctx: &GenerateContext<'_>,
        score_ctx: &ScoreContext,
        persons: &[Person],
        pattern: &Pattern,
        sequence_no: i64,
    ) -> Option<Roster> {
        let mut roster = Roster::new(sequence_no);

        for (role, count) in pattern.requirements() {
            for _ in 0..*count {
                let person = self.pick_best(ctx, score_ctx, persons, &roster, role)?;
                roster.assign(person.identifier.clone(), role.clone());
            }
        }

        Some(roster)
    }

    /// Highest-scoring candidate that is qualified for the role and not
    /// yet assigned. Ties keep the first candidate encountered.
    fn pick_best<'p>(
        &self,
        ctx: &GenerateContext<'_>,
        score_ctx: &ScoreContext,
        persons: &'p [Person],
        roster: &Roster,
        role: &str,
    ) -> Option<&'p Person> {
        let mut best: Option<(f64, &Person)> = None;

        for person in persons {
            if !person.has_role(role) || roster.is_assigned(&person.identifier) {
                continue;
            }
            let score = ctx
                .engine
                .assignment_score(ctx.config, person, role, score_ctx);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, person));
            }
        }

        best.map(|(_, person)| person)
    }
}
