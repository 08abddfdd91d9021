//! Assignment evaluators and the weighted score combiner.
//!
//! An [`Evaluator`] rates how desirable one candidate (person, role)
//! assignment is for a roster, based on the history of earlier rosters.
//! The [`ScoreEngine`] combines all registered evaluators into a single
//! weighted-mean score that the generation algorithms rank candidates by.
//!
//! # Score Convention
//! All evaluators return values in `[0.0, 1.0]`. **Higher score = better
//! assignment.** `1.0` means strongly recommended, near `0.0` means
//! discouraged.

pub mod evaluators;

use std::fmt::Debug;
use std::sync::Arc;

use crate::config::Config;
use crate::models::{Person, Roster};
use crate::store::{RosterFilter, RosterStore, StoreResult};

/// An evaluator that rates a candidate (person, role) assignment.
///
/// # Score Convention
/// **Higher score = better assignment**, always within `[0.0, 1.0]`.
/// With no history to hold against a candidate, evaluators return `1.0`.
pub trait Evaluator: Send + Sync + Debug {
    /// Evaluator name. Its configured weight is `weight_<name>`.
    fn name(&self) -> &'static str;

    /// Rates assigning `person` to `role` in the roster the context was
    /// loaded for.
    fn score(&self, person: &Person, role: &str, ctx: &ScoreContext) -> f64;
}

/// History snapshot evaluators score against.
///
/// Holds the target sequence number and every strictly earlier roster,
/// ordered most-recent-first. Loaded once per generation call so all
/// evaluations within the call see the same history.
#[derive(Debug, Clone)]
pub struct ScoreContext {
    sequence_no: i64,
    history: Vec<Roster>,
}

impl ScoreContext {
    /// Builds a context from an explicit history.
    ///
    /// Rosters at or after `sequence_no` are discarded; the rest are
    /// ordered most-recent-first.
    pub fn new(sequence_no: i64, mut history: Vec<Roster>) -> Self {
        history.retain(|r| r.sequence_no < sequence_no);
        history.sort_by(|a, b| b.sequence_no.cmp(&a.sequence_no));
        Self {
            sequence_no,
            history,
        }
    }

    /// Loads the history for `sequence_no` from the store.
    pub fn load(store: &dyn RosterStore, sequence_no: i64) -> StoreResult<Self> {
        let history = store.get_rosters(&RosterFilter::strictly_before(sequence_no))?;
        Ok(Self::new(sequence_no, history))
    }

    /// Sequence number of the roster under construction.
    pub fn sequence_no(&self) -> i64 {
        self.sequence_no
    }

    /// Earlier rosters, most recent first.
    pub fn history(&self) -> &[Roster] {
        &self.history
    }
}

/// Weighted-mean combiner over registered evaluators.
///
/// The overall assignment score is
/// `sum(weight_i * score_i) / sum(weight_i)`, where each weight is the
/// integer config value `weight_<evaluator_name>` (default 1). Weights
/// are read per call, so reconfiguring takes effect immediately.
#[derive(Clone, Default)]
pub struct ScoreEngine {
    evaluators: Vec<Arc<dyn Evaluator>>,
}

impl ScoreEngine {
    /// Creates an engine with no evaluators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the built-in evaluators registered.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_evaluator(evaluators::AlternateRoles)
            .with_evaluator(evaluators::MaximizeRest)
    }

    /// Registers an evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluators.push(Arc::new(evaluator));
        self
    }

    /// Names of the registered evaluators.
    pub fn evaluator_names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    /// Weighted-mean score for assigning `person` to `role`.
    ///
    /// Returns `0.0` when no evaluator carries weight (no evaluators
    /// registered, or every weight configured to zero).
    pub fn assignment_score(
        &self,
        config: &Config,
        person: &Person,
        role: &str,
        ctx: &ScoreContext,
    ) -> f64 {
        let mut total_weight = 0u64;
        let mut score = 0.0;

        for evaluator in &self.evaluators {
            let weight = config.weight(evaluator.name());
            score += evaluator.score(person, role, ctx) * weight as f64;
            total_weight += weight;
        }

        if total_weight == 0 {
            return 0.0;
        }
        score / total_weight as f64
    }

    /// Mean assignment score over every assignment in a roster.
    ///
    /// An empty roster scores exactly `0.0`, so "assign nobody" never
    /// outranks a staffed candidate. Assignments whose person is not in
    /// `persons` contribute nothing.
    pub fn roster_score(
        &self,
        config: &Config,
        roster: &Roster,
        persons: &[Person],
        ctx: &ScoreContext,
    ) -> f64 {
        if roster.is_empty() {
            return 0.0;
        }

        let mut score = 0.0;
        for assignment in roster.assignments() {
            if let Some(person) = persons.iter().find(|p| p.identifier == assignment.person_id) {
                score += self.assignment_score(config, person, &assignment.role, ctx);
            }
        }

        score / roster.len() as f64
    }
}

impl Debug for ScoreEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreEngine")
            .field("evaluators", &self.evaluator_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Constant {
        name: &'static str,
        value: f64,
    }

    impl Evaluator for Constant {
        fn name(&self) -> &'static str {
            self.name
        }

        fn score(&self, _person: &Person, _role: &str, _ctx: &ScoreContext) -> f64 {
            self.value
        }
    }

    fn empty_ctx() -> ScoreContext {
        ScoreContext::new(10, Vec::new())
    }

    #[test]
    fn test_context_orders_history_most_recent_first() {
        let ctx = ScoreContext::new(10, vec![Roster::new(3), Roster::new(7), Roster::new(5)]);
        let sequence: Vec<i64> = ctx.history().iter().map(|r| r.sequence_no).collect();
        assert_eq!(sequence, vec![7, 5, 3]);
    }

    #[test]
    fn test_context_drops_non_history_rosters() {
        let ctx = ScoreContext::new(5, vec![Roster::new(4), Roster::new(5), Roster::new(6)]);
        assert_eq!(ctx.history().len(), 1);
        assert_eq!(ctx.history()[0].sequence_no, 4);
    }

    #[test]
    fn test_default_weights_are_one() {
        let engine = ScoreEngine::new()
            .with_evaluator(Constant {
                name: "a",
                value: 1.0,
            })
            .with_evaluator(Constant {
                name: "b",
                value: 0.0,
            });
        let config = Config::new();
        let person = Person::new("p1");

        let score = engine.assignment_score(&config, &person, "nurse", &empty_ctx());
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_configured_weights() {
        let engine = ScoreEngine::new()
            .with_evaluator(Constant {
                name: "a",
                value: 1.0,
            })
            .with_evaluator(Constant {
                name: "b",
                value: 0.0,
            });
        let mut config = Config::new();
        config.set("weight_a", 3);
        config.set("weight_b", 1);
        let person = Person::new("p1");

        let score = engine.assignment_score(&config, &person, "nurse", &empty_ctx());
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_all_weights_zero_scores_zero() {
        let engine = ScoreEngine::new().with_evaluator(Constant {
            name: "a",
            value: 1.0,
        });
        let mut config = Config::new();
        config.set("weight_a", 0);
        let person = Person::new("p1");

        let score = engine.assignment_score(&config, &person, "nurse", &empty_ctx());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_roster_scores_zero() {
        let engine = ScoreEngine::with_defaults();
        let config = Config::new();
        let roster = Roster::new(10);

        assert_eq!(engine.roster_score(&config, &roster, &[], &empty_ctx()), 0.0);
    }

    #[test]
    fn test_roster_score_is_mean_of_assignments() {
        let engine = ScoreEngine::new().with_evaluator(Constant {
            name: "a",
            value: 0.8,
        });
        let config = Config::new();
        let persons = vec![Person::new("p1"), Person::new("p2")];
        let mut roster = Roster::new(10);
        roster.assign("p1", "nurse");
        roster.assign("p2", "doctor");

        let score = engine.roster_score(&config, &roster, &persons, &empty_ctx());
        assert!((score - 0.8).abs() < 1e-12);
    }
}
