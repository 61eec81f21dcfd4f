//! The process definition type: a graph plus the marketplace semantics
//! attached to it (billing unit types, review/privilege/refund transition
//! classes, provider-attention states).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph::ProcessGraph;
use crate::transaction::Transaction;

/// Billing unit kinds a process can charge by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitType {
    Item,
    Day,
    Night,
    Hour,
    Fixed,
    Inquiry,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Item => "item",
            UnitType::Day => "day",
            UnitType::Night => "night",
            UnitType::Hour => "hour",
            UnitType::Fixed => "fixed",
            UnitType::Inquiry => "inquiry",
        }
    }

    /// True for unit types that span a full day on the calendar.
    pub fn is_full_day(&self) -> bool {
        matches!(self, UnitType::Day | UnitType::Night)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process metadata without the graph or query functions, as listed by
/// [`get_supported_processes_info`](super::get_supported_processes_info).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessInfo {
    pub name: &'static str,
    pub alias: &'static str,
    pub unit_types: &'static [UnitType],
}

/// A registered transaction process: immutable definition created once at
/// registry initialization, shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Process {
    pub(crate) name: &'static str,
    pub(crate) alias: &'static str,
    pub(crate) unit_types: &'static [UnitType],
    pub(crate) transitions: &'static [&'static str],
    pub(crate) states: &'static [&'static str],
    pub(crate) graph: ProcessGraph,
    pub(crate) relevant_past_transitions: &'static [&'static str],
    pub(crate) customer_review_transitions: &'static [&'static str],
    pub(crate) provider_review_transitions: &'static [&'static str],
    pub(crate) privileged_transitions: &'static [&'static str],
    pub(crate) completed_transitions: &'static [&'static str],
    pub(crate) refunded_transitions: &'static [&'static str],
    pub(crate) states_needing_provider_attention: &'static [&'static str],
}

impl Process {
    /// Canonical process name, e.g. `default-booking`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Versioned alias, e.g. `default-booking/release-1`.
    pub fn alias(&self) -> &'static str {
        self.alias
    }

    pub fn unit_types(&self) -> &'static [UnitType] {
        self.unit_types
    }

    /// All declared transition names, in declaration order.
    pub fn transitions(&self) -> &'static [&'static str] {
        self.transitions
    }

    /// All declared state names, in declaration order.
    pub fn states(&self) -> &'static [&'static str] {
        self.states
    }

    pub fn graph(&self) -> &ProcessGraph {
        &self.graph
    }

    /// Metadata view without graph or behavior.
    pub fn info(&self) -> ProcessInfo {
        ProcessInfo {
            name: self.name,
            alias: self.alias,
            unit_types: self.unit_types,
        }
    }

    // Graph queries, bound to this process's graph.

    /// See [`ProcessGraph::state_after_transition`].
    pub fn state_after_transition(&self, transition: &str) -> Option<&'static str> {
        self.graph.state_after_transition(transition)
    }

    /// See [`ProcessGraph::current_state`].
    pub fn current_state(&self, tx: &Transaction) -> Option<&'static str> {
        self.graph.current_state(tx)
    }

    /// See [`ProcessGraph::transitions_to_state`].
    pub fn transitions_to_state(&self, target_state: &str) -> Vec<&'static str> {
        self.graph.transitions_to_state(target_state)
    }

    /// See [`ProcessGraph::transitions_to_states`].
    pub fn transitions_to_states(&self, target_states: &[&str]) -> Vec<&'static str> {
        self.graph.transitions_to_states(target_states)
    }

    /// See [`ProcessGraph::has_passed_state`].
    pub fn has_passed_state(&self, state_name: &str, tx: &Transaction) -> bool {
        self.graph.has_passed_state(state_name, tx)
    }

    // Marketplace transition classes.

    /// Transitions worth showing in the activity feed.
    pub fn is_relevant_past_transition(&self, transition: &str) -> bool {
        self.relevant_past_transitions.contains(&transition)
    }

    /// Transitions through which the customer leaves a review.
    pub fn is_customer_review(&self, transition: &str) -> bool {
        self.customer_review_transitions.contains(&transition)
    }

    /// Transitions through which the provider leaves a review.
    pub fn is_provider_review(&self, transition: &str) -> bool {
        self.provider_review_transitions.contains(&transition)
    }

    /// Transitions that must run privileged, i.e. server-side.
    pub fn is_privileged(&self, transition: &str) -> bool {
        self.privileged_transitions.contains(&transition)
    }

    /// Transitions that move the transaction into its completed phase.
    pub fn is_completed(&self, transition: &str) -> bool {
        self.completed_transitions.contains(&transition)
    }

    /// Transitions that imply the customer was refunded.
    pub fn is_refunded(&self, transition: &str) -> bool {
        self.refunded_transitions.contains(&transition)
    }

    /// States in which the provider is expected to act next.
    pub fn states_needing_provider_attention(&self) -> &'static [&'static str] {
        self.states_needing_provider_attention
    }
}
