//! Roster generation algorithms and the orchestrating [`Generator`].
//!
//! Two strategies are provided:
//!
//! - [`SimpleAlgorithm`]: one-shot greedy, fast, not globally optimal
//! - [`TreeAlgorithm`]: breadth-first search over complete assignments,
//!   with [`Quality`] modes trading optimality for speed
//!
//! The `Generator` wires configuration to algorithm and evaluator
//! instances; it interprets no scores itself.

mod simple;
mod tree;

pub use simple::SimpleAlgorithm;
pub use tree::{Quality, TreeAlgorithm};

use std::collections::HashMap;
use std::fmt::Debug;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::evaluate::{Evaluator, ScoreEngine};
use crate::models::Roster;
use crate::store::{RosterStore, StoreError};

/// Errors raised during roster generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No pattern yields a feasible complete roster for this sequence
    /// number. Recoverable: relax patterns, resolve absences, or add
    /// qualified people.
    #[error("not enough resources to generate roster {0}")]
    NotEnoughResources(i64),

    /// The configured algorithm is not registered.
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// An algorithm was constructed with an invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A storage operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Shared read-only state handed to algorithms.
pub struct GenerateContext<'a> {
    /// The data access port.
    pub store: &'a dyn RosterStore,
    /// The assignment score combiner.
    pub engine: &'a ScoreEngine,
    /// Runtime configuration (evaluator weights).
    pub config: &'a Config,
}

/// A roster generation strategy.
pub trait Algorithm: Send + Sync + Debug {
    /// Name this algorithm is registered under by default.
    fn name(&self) -> &'static str;

    /// Generates the best feasible roster for the given sequence number.
    fn generate(&self, ctx: &GenerateContext<'_>, sequence_no: i64)
        -> Result<Roster, GenerateError>;
}

/// Orchestrates roster generation.
///
/// Holds the registries of named algorithms and evaluators. Out of the
/// box it registers `simple`, `tree_fast` (low quality), `tree_medium`,
/// and `tree_slow` (exhaustive), plus the `alternate_roles` and
/// `maximize_rest_time` evaluators.
///
/// # Example
/// ```
/// use rostergen::config::Config;
/// use rostergen::generate::Generator;
/// use rostergen::models::{Pattern, Person};
/// use rostergen::store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.add_person(Person::new("p1").with_role("nurse")).unwrap();
/// store.add_pattern(Pattern::new("ward").with_requirement("nurse", 1)).unwrap();
///
/// let generator = Generator::new();
/// let roster = generator.generate_roster(&store, &Config::new(), 1).unwrap();
/// assert!(roster.is_assigned_to("p1", "nurse"));
/// ```
pub struct Generator {
    engine: ScoreEngine,
    algorithms: HashMap<String, Box<dyn Algorithm>>,
}

impl Generator {
    /// Creates a generator with the default algorithms and evaluators.
    pub fn new() -> Self {
        let mut generator = Self {
            engine: ScoreEngine::with_defaults(),
            algorithms: HashMap::new(),
        };
        generator.register(Box::new(SimpleAlgorithm));
        generator.register(Box::new(TreeAlgorithm::new(Quality::Low)));
        generator.register(Box::new(TreeAlgorithm::new(Quality::Medium)));
        generator.register(Box::new(TreeAlgorithm::new(Quality::High)));
        generator
    }

    /// Registers an algorithm under its default name.
    fn register(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithms.insert(algorithm.name().to_string(), algorithm);
    }

    /// Replaces the score engine (and with it the evaluator set).
    pub fn with_engine(mut self, engine: ScoreEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Registers an additional evaluator on the current engine.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.engine = self.engine.with_evaluator(evaluator);
        self
    }

    /// Registers an algorithm under a custom name.
    pub fn with_algorithm(mut self, name: impl Into<String>, algorithm: Box<dyn Algorithm>) -> Self {
        self.algorithms.insert(name.into(), algorithm);
        self
    }

    /// Registered algorithm names, sorted.
    pub fn algorithm_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Generates a roster for the given sequence number.
    ///
    /// The algorithm is selected by the `algorithm` config key (default
    /// [`crate::config::DEFAULT_ALGORITHM`]); an unregistered name fails
    /// with [`GenerateError::UnknownAlgorithm`] before any data access.
    pub fn generate_roster(
        &self,
        store: &dyn RosterStore,
        config: &Config,
        sequence_no: i64,
    ) -> Result<Roster, GenerateError> {
        let name = config.algorithm();
        let algorithm = self
            .algorithms
            .get(name)
            .ok_or_else(|| GenerateError::UnknownAlgorithm(name.to_string()))?;

        debug!(algorithm = name, sequence_no, "generating roster");
        let ctx = GenerateContext {
            store,
            engine: &self.engine,
            config,
        };
        let roster = algorithm.generate(&ctx, sequence_no)?;
        debug!(sequence_no, assignments = roster.len(), "roster generated");
        Ok(roster)
    }

    /// Generates a roster and persists it through the store.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if a roster with the same
    /// sequence number was already saved.
    pub fn generate_and_save(
        &self,
        store: &mut dyn RosterStore,
        config: &Config,
        sequence_no: i64,
    ) -> Result<Roster, GenerateError> {
        let roster = self.generate_roster(&*store, config, sequence_no)?;
        store.add_roster(roster.clone())?;
        Ok(roster)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("algorithms", &self.algorithm_names())
            .field("engine", &self.engine)
            .finish()
    }
}
