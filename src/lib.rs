//! Roster generation framework.
//!
//! Assigns people to roles for a sequence of periodic rosters, subject to
//! per-role headcount requirements (patterns), individual qualification,
//! and recorded absences. Candidate assignments are ranked by pluggable
//! fairness evaluators (rotate roles, maximize rest) combined into a
//! weighted score.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `Pattern`, `Roster`, `Absence`
//! - **`store`**: The data access port (`RosterStore`) and an in-memory
//!   reference implementation
//! - **`evaluate`**: Evaluator trait, built-in evaluators, and the
//!   weighted score combiner
//! - **`generate`**: Generation algorithms (greedy, tree search) and the
//!   `Generator` orchestrator
//! - **`config`**: String-keyed runtime configuration
//!
//! # Architecture
//!
//! The core is storage-agnostic: algorithms read persons, patterns,
//! absences, and past rosters through `RosterStore` and operate purely on
//! in-memory snapshots. Generation is single-threaded and synchronous.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff Scheduling and Rostering: A Review of
//!   Applications, Methods and Models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod evaluate;
pub mod generate;
pub mod models;
pub mod store;
