//! Tree-search generation algorithm.
//!
//! # Algorithm
//!
//! The space of complete assignments for one pattern is explored as a
//! tree: the root holds the full candidate pool and the full multiset of
//! role slots; each edge assigns one (person, role slot) pair, removing
//! both from the child's remaining sets. Traversal is breadth-first with
//! an explicit queue, one tree per pattern. A node with no remaining
//! slots is a complete roster; a remaining slot with no qualified
//! candidate makes the whole branch set infeasible and ends that
//! pattern's search (complete rosters already collected are kept).
//!
//! Nodes live in an arena and carry parent indices; a completed roster
//! is rebuilt by walking parent links back to the root.
//!
//! Exhaustive search is exponential in the number of role slots; the
//! [`Quality`] mode prunes the frontier to trade optimality for speed.

use std::collections::VecDeque;
use std::str::FromStr;

use tracing::trace;

use super::{Algorithm, GenerateContext, GenerateError};
use crate::evaluate::ScoreContext;
use crate::models::{Pattern, Person, Roster};

/// Pruning aggressiveness of the tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// No pruning. Exhaustive and globally optimal, worst-case
    /// exponential cost.
    High,
    /// Keep only the maximum-scoring children, all ties included. Still
    /// optimal, usually much faster.
    Medium,
    /// Keep a single maximum-scoring child (first encountered). Fastest;
    /// may miss the global optimum.
    Low,
}

impl FromStr for Quality {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(GenerateError::InvalidParameter(format!(
                "unknown quality mode '{other}'"
            ))),
        }
    }
}

/// Breadth-first assignment tree search.
///
/// Explores one tree per pattern, prunes the frontier according to the
/// configured [`Quality`], and returns the highest-scoring complete
/// roster across all trees.
#[derive(Debug, Clone, Copy)]
pub struct TreeAlgorithm {
    quality: Quality,
}

impl TreeAlgorithm {
    /// Creates a tree algorithm with the given quality mode.
    pub fn new(quality: Quality) -> Self {
        Self { quality }
    }

    /// The configured quality mode.
    pub fn quality(&self) -> Quality {
        self.quality
    }
}

impl Algorithm for TreeAlgorithm {
    fn name(&self) -> &'static str {
        match self.quality {
            Quality::Low => "tree_fast",
            Quality::Medium => "tree_medium",
            Quality::High => "tree_slow",
        }
    }

    fn generate(
        &self,
        ctx: &GenerateContext<'_>,
        sequence_no: i64,
    ) -> Result<Roster, GenerateError> {
        let persons = ctx.store.get_available_persons(sequence_no, None)?;
        let score_ctx = ScoreContext::load(ctx.store, sequence_no)?;

        let mut rosters = Vec::new();
        for pattern in ctx.store.get_patterns()? {
            if self
                .search_pattern(ctx, &score_ctx, &persons, &pattern, sequence_no, &mut rosters)
                .is_err()
            {
                trace!(pattern = %pattern.identifier, "pattern infeasible, skipping");
            }
        }

        let mut best: Option<(f64, Roster)> = None;
        for roster in rosters {
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

impl TreeAlgorithm {
    /// Runs the breadth-first search for one pattern, appending every
    /// complete roster found to `rosters`.
    fn search_pattern(
        &self,
        ctx: &GenerateContext<'_>,
        score_ctx: &ScoreContext,
        persons: &[Person],
        pattern: &Pattern,
        sequence_no: i64,
        rosters: &mut Vec<Roster>,
    ) -> Result<(), Infeasible> {
        let mut tree = SearchTree::new(persons, pattern);

        let mut queue = VecDeque::new();
        queue.push_back(SearchTree::ROOT);

        while let Some(node) = queue.pop_front() {
            if tree.is_complete(node) {
                rosters.push(tree.build_roster(node, pattern, sequence_no));
                continue;
            }

            let children = tree.expand(node)?;
            queue.extend(self.select_best(ctx, score_ctx, &tree, children));
        }

        Ok(())
    }

    /// Filters freshly expanded children according to the quality mode.
    fn select_best(
        &self,
        ctx: &GenerateContext<'_>,
        score_ctx: &ScoreContext,
        tree: &SearchTree<'_>,
        children: Vec<usize>,
    ) -> Vec<usize> {
        if self.quality == Quality::High {
            return children;
        }

        let mut max_score = f64::NEG_INFINITY;
        let mut best = Vec::new();

        for child in children {
            let Some((person, role)) = tree.edge(child) else {
                continue; // the root is never among expanded children
            };
            let score = ctx
                .engine
                .assignment_score(ctx.config, person, role, score_ctx);
            if score > max_score {
                max_score = score;
                best.clear();
            }
            if score == max_score {
                best.push(child);
            }
        }

        if self.quality == Quality::Low {
            best.truncate(1);
        }
        best
    }
}

/// Pattern-local infeasibility marker. Never escapes the algorithm.
struct Infeasible;

/// One node of the assignment tree.
struct Node {
    parent: Option<usize>,
    /// (person index, slot index) edge from the parent; `None` at the root.
    assignment: Option<(usize, usize)>,
    /// Indices into the shared person slice still assignable below here.
    remaining_persons: Vec<usize>,
    /// Indices into the slot list still unfilled below here.
    remaining_slots: Vec<usize>,
}

/// Arena-backed assignment tree for one pattern.
struct SearchTree<'a> {
    persons: &'a [Person],
    /// Role of each slot; a role required n times contributes n slots.
    slots: Vec<String>,
    nodes: Vec<Node>,
}

impl<'a> SearchTree<'a> {
    const ROOT: usize = 0;

    fn new(persons: &'a [Person], pattern: &Pattern) -> Self {
        let mut slots = Vec::new();
        for (role, count) in pattern.requirements() {
            for _ in 0..*count {
                slots.push(role.clone());
            }
        }

        let root = Node {
            parent: None,
            assignment: None,
            remaining_persons: (0..persons.len()).collect(),
            remaining_slots: (0..slots.len()).collect(),
        };

        Self {
            persons,
            slots,
            nodes: vec![root],
        }
    }

    /// Whether every slot is filled at this node.
    fn is_complete(&self, node: usize) -> bool {
        self.nodes[node].remaining_slots.is_empty()
    }

    /// The (person, role) pair the edge into this node assigns, or
    /// `None` at the root.
    fn edge(&self, node: usize) -> Option<(&Person, &str)> {
        let (person, slot) = self.nodes[node].assignment?;
        Some((&self.persons[person], self.slots[slot].as_str()))
    }

    /// Creates one child per (remaining slot, qualified remaining person)
    /// combination.
    ///
    /// Fails with [`Infeasible`] if any remaining slot has no qualified
    /// candidate left: no descendant of this node can complete.
    fn expand(&mut self, node: usize) -> Result<Vec<usize>, Infeasible> {
        let remaining_persons = self.nodes[node].remaining_persons.clone();
        let remaining_slots = self.nodes[node].remaining_slots.clone();

        let mut children = Vec::new();
        for &slot in &remaining_slots {
            let role = &self.slots[slot];
            let qualified: Vec<usize> = remaining_persons
                .iter()
                .copied()
                .filter(|&p| self.persons[p].has_role(role))
                .collect();
            if qualified.is_empty() {
                return Err(Infeasible);
            }

            for person in qualified {
                let child = Node {
                    parent: Some(node),
                    assignment: Some((person, slot)),
                    remaining_persons: remaining_persons
                        .iter()
                        .copied()
                        .filter(|&p| p != person)
                        .collect(),
                    remaining_slots: remaining_slots
                        .iter()
                        .copied()
                        .filter(|&s| s != slot)
                        .collect(),
                };
                self.nodes.push(child);
                children.push(self.nodes.len() - 1);
            }
        }

        Ok(children)
    }

    /// Rebuilds the complete roster ending at `leaf` by walking parent
    /// links to the root. Assignments are emitted in pattern role order.
    fn build_roster(&self, leaf: usize, pattern: &Pattern, sequence_no: i64) -> Roster {
        let mut chain = Vec::new();
        let mut current = Some(leaf);
        while let Some(node) = current {
            if let Some(assignment) = self.nodes[node].assignment {
                chain.push(assignment);
            }
            current = self.nodes[node].parent;
        }
        chain.reverse();

        let mut roster = Roster::new(sequence_no);
        for role in pattern.roles() {
            for &(person, slot) in &chain {
                if self.slots[slot] == role {
                    roster.assign(self.persons[person].identifier.clone(), role);
                }
            }
        }
        roster
    }
}
