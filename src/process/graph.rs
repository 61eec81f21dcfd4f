//! Typed process state graphs and the pure queries over them.
//!
//! A [`ProcessGraph`] is a directed labeled graph: named states, and named
//! transitions as edges between them. Each process declares its graph once
//! through [`ProcessGraph::builder`], which validates the structure up
//! front; every query below assumes a valid graph and is total.

use serde::Serialize;
use thiserror::Error;

use crate::transaction::Transaction;

/// Structural violations caught when building a graph.
///
/// These are construction-time contract errors. The built-in process graphs
/// are statically known valid, so none of these can surface at query time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph '{graph}': state name cannot be empty")]
    EmptyStateName { graph: &'static str },

    #[error("graph '{graph}': state '{state}' has an empty transition label")]
    EmptyTransitionLabel {
        graph: &'static str,
        state: &'static str,
    },

    #[error("graph '{graph}': duplicate state '{state}'")]
    DuplicateState {
        graph: &'static str,
        state: &'static str,
    },

    #[error("graph '{graph}': state '{state}' declares transition '{transition}' twice")]
    DuplicateTransition {
        graph: &'static str,
        state: &'static str,
        transition: &'static str,
    },

    #[error("graph '{graph}': initial state '{initial}' is not declared")]
    UnknownInitialState {
        graph: &'static str,
        initial: &'static str,
    },

    #[error("graph '{graph}': transition '{transition}' from '{state}' targets undeclared state '{to}'")]
    DanglingEdgeTarget {
        graph: &'static str,
        state: &'static str,
        transition: &'static str,
        to: &'static str,
    },
}

/// Marks whether a state may have outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StateKind {
    Normal,
    /// Terminal state; declared without outgoing edges.
    Final,
}

/// A named outgoing edge: applying `transition` moves the transaction to
/// the `to` state.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub transition: &'static str,
    pub to: &'static str,
}

/// A node of the graph, with outgoing edges in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct StateNode {
    pub name: &'static str,
    pub kind: StateKind,
    pub on: Vec<Edge>,
}

/// A process's state machine, as declared by its process module.
///
/// State order and edge order are declaration order, and both are
/// observable through query results.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessGraph {
    id: &'static str,
    initial: &'static str,
    states: Vec<StateNode>,
}

impl ProcessGraph {
    /// Starts declaring a graph with the given id (the process alias) and
    /// initial state name.
    pub fn builder(id: &'static str, initial: &'static str) -> ProcessGraphBuilder {
        ProcessGraphBuilder {
            id,
            initial,
            states: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn initial(&self) -> &'static str {
        self.initial
    }

    pub fn states(&self) -> &[StateNode] {
        &self.states
    }

    /// Looks up a state node by name.
    pub fn state(&self, name: &str) -> Option<&StateNode> {
        self.states.iter().find(|node| node.name == name)
    }

    /// True if `name` is a declared final state.
    pub fn is_final_state(&self, name: &str) -> bool {
        self.state(name)
            .is_some_and(|node| node.kind == StateKind::Final)
    }

    /// The state a transaction is in right after `transition` was applied.
    ///
    /// Scans states in declaration order for the one whose outgoing edges
    /// carry `transition` and returns the edge target. `None` when no state
    /// has that outgoing edge, either a transition from another process or
    /// no transition at all. Both are normal at the boundaries, not errors.
    pub fn state_after_transition(&self, transition: &str) -> Option<&'static str> {
        self.states
            .iter()
            .flat_map(|node| node.on.iter())
            .find(|edge| edge.transition == transition)
            .map(|edge| edge.to)
    }

    /// The state `tx` currently stands in, resolved from its last applied
    /// transition. `None` for a brand-new transaction.
    pub fn current_state(&self, tx: &Transaction) -> Option<&'static str> {
        tx.last_transition()
            .and_then(|transition| self.state_after_transition(transition))
    }

    /// Every transition name whose edge targets `target_state`.
    ///
    /// States are visited in declaration order, edges within a state in
    /// declaration order. A transition name legitimately reused by several
    /// source states shows up once per occurrence.
    pub fn transitions_to_state(&self, target_state: &str) -> Vec<&'static str> {
        self.states
            .iter()
            .flat_map(|node| node.on.iter())
            .filter(|edge| edge.to == target_state)
            .map(|edge| edge.transition)
            .collect()
    }

    /// Concatenated [`transitions_to_state`](Self::transitions_to_state)
    /// results for each target in the given order, without deduplication.
    pub fn transitions_to_states(&self, target_states: &[&str]) -> Vec<&'static str> {
        target_states
            .iter()
            .flat_map(|state| self.transitions_to_state(state))
            .collect()
    }

    /// True iff `tx`'s transition history contains at least one transition
    /// leading into `state_name`.
    ///
    /// A set-intersection test, not an ordering test: a transaction that
    /// passed through the state transiently and moved on still counts.
    pub fn has_passed_state(&self, state_name: &str, tx: &Transaction) -> bool {
        self.transitions_to_state(state_name)
            .iter()
            .any(|transition| tx.has_passed_transition(transition))
    }
}

/// Accumulates state declarations and validates the result.
pub struct ProcessGraphBuilder {
    id: &'static str,
    initial: &'static str,
    states: Vec<StateNode>,
}

impl ProcessGraphBuilder {
    /// Declares a state with its outgoing `(transition, target)` edges.
    pub fn state(
        mut self,
        name: &'static str,
        on: &[(&'static str, &'static str)],
    ) -> Self {
        self.states.push(StateNode {
            name,
            kind: StateKind::Normal,
            on: on
                .iter()
                .map(|&(transition, to)| Edge { transition, to })
                .collect(),
        });
        self
    }

    /// Declares a terminal state. Final states carry no outgoing edges.
    pub fn final_state(mut self, name: &'static str) -> Self {
        self.states.push(StateNode {
            name,
            kind: StateKind::Final,
            on: Vec::new(),
        });
        self
    }

    /// Validates the declared structure and produces the graph.
    pub fn build(self) -> Result<ProcessGraph, GraphError> {
        let graph = self.id;

        for (i, node) in self.states.iter().enumerate() {
            if node.name.is_empty() {
                return Err(GraphError::EmptyStateName { graph });
            }
            if self.states[..i].iter().any(|prev| prev.name == node.name) {
                return Err(GraphError::DuplicateState {
                    graph,
                    state: node.name,
                });
            }
            for (j, edge) in node.on.iter().enumerate() {
                if edge.transition.is_empty() {
                    return Err(GraphError::EmptyTransitionLabel {
                        graph,
                        state: node.name,
                    });
                }
                if node.on[..j].iter().any(|prev| prev.transition == edge.transition) {
                    return Err(GraphError::DuplicateTransition {
                        graph,
                        state: node.name,
                        transition: edge.transition,
                    });
                }
            }
        }

        if !self.states.iter().any(|node| node.name == self.initial) {
            return Err(GraphError::UnknownInitialState {
                graph,
                initial: self.initial,
            });
        }

        for node in &self.states {
            for edge in &node.on {
                if !self.states.iter().any(|target| target.name == edge.to) {
                    return Err(GraphError::DanglingEdgeTarget {
                        graph,
                        state: node.name,
                        transition: edge.transition,
                        to: edge.to,
                    });
                }
            }
        }

        Ok(ProcessGraph {
            id: self.id,
            initial: self.initial,
            states: self.states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{TransactionAttributes, TransitionRecord};
    use chrono::Utc;

    fn sample_graph() -> ProcessGraph {
        ProcessGraph::builder("sample/release-1", "initial")
            .state(
                "initial",
                &[
                    ("transition/request", "requested"),
                    ("transition/skip", "done"),
                ],
            )
            .state(
                "requested",
                &[
                    ("transition/approve", "done"),
                    ("transition/reject", "rejected"),
                ],
            )
            .state("rejected", &[("transition/retry", "requested")])
            .final_state("done")
            .build()
            .unwrap()
    }

    fn tx_with_history(transitions: &[&str]) -> Transaction {
        Transaction {
            attributes: TransactionAttributes {
                last_transition: transitions.last().map(|t| t.to_string()),
                transitions: transitions
                    .iter()
                    .map(|t| TransitionRecord {
                        transition: t.to_string(),
                        at: Utc::now(),
                    })
                    .collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    // --- query tests ---

    #[test]
    fn state_after_transition_follows_the_edge() {
        let graph = sample_graph();
        assert_eq!(
            graph.state_after_transition("transition/request"),
            Some("requested")
        );
        assert_eq!(graph.state_after_transition("transition/approve"), Some("done"));
    }

    #[test]
    fn state_after_unknown_transition_is_absent() {
        let graph = sample_graph();
        assert_eq!(graph.state_after_transition("transition/elsewhere"), None);
        assert_eq!(graph.state_after_transition(""), None);
    }

    #[test]
    fn current_state_reads_the_last_transition() {
        let graph = sample_graph();
        let tx = tx_with_history(&["transition/request", "transition/reject"]);
        assert_eq!(graph.current_state(&tx), Some("rejected"));
    }

    #[test]
    fn current_state_of_new_transaction_is_absent() {
        let graph = sample_graph();
        assert_eq!(graph.current_state(&Transaction::default()), None);
    }

    #[test]
    fn transitions_to_state_collects_in_declaration_order() {
        let graph = sample_graph();
        assert_eq!(
            graph.transitions_to_state("done"),
            vec!["transition/skip", "transition/approve"]
        );
        assert_eq!(
            graph.transitions_to_state("requested"),
            vec!["transition/request", "transition/retry"]
        );
    }

    #[test]
    fn transitions_to_unknown_state_is_empty() {
        let graph = sample_graph();
        assert!(graph.transitions_to_state("nowhere").is_empty());
    }

    #[test]
    fn transitions_to_states_concatenates_without_dedup() {
        let graph = sample_graph();
        assert_eq!(
            graph.transitions_to_states(&["requested", "done"]),
            vec![
                "transition/request",
                "transition/retry",
                "transition/skip",
                "transition/approve"
            ]
        );
    }

    #[test]
    fn repeated_labels_across_states_are_all_collected() {
        // Two states may legitimately share an outgoing label; only a
        // repeat within one state is rejected.
        let graph = ProcessGraph::builder("shared/release-1", "a")
            .state("a", &[("transition/finish", "end")])
            .state("b", &[("transition/finish", "end")])
            .final_state("end")
            .build()
            .unwrap();
        assert_eq!(
            graph.transitions_to_state("end"),
            vec!["transition/finish", "transition/finish"]
        );
    }

    #[test]
    fn has_passed_state_matches_any_inbound_transition() {
        let graph = sample_graph();
        // Passed through "requested" transiently, then got rejected.
        let tx = tx_with_history(&["transition/request", "transition/reject"]);
        assert!(graph.has_passed_state("requested", &tx));
        assert!(graph.has_passed_state("rejected", &tx));
        assert!(!graph.has_passed_state("done", &tx));
    }

    #[test]
    fn has_passed_state_is_false_for_empty_history() {
        let graph = sample_graph();
        assert!(!graph.has_passed_state("requested", &Transaction::default()));
    }

    #[test]
    fn final_state_lookup() {
        let graph = sample_graph();
        assert!(graph.is_final_state("done"));
        assert!(!graph.is_final_state("requested"));
        assert!(!graph.is_final_state("missing"));
        assert!(graph.state("done").unwrap().on.is_empty());
    }

    // --- builder validation tests ---

    #[test]
    fn duplicate_state_is_rejected() {
        let err = ProcessGraph::builder("bad/release-1", "a")
            .state("a", &[])
            .state("a", &[])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateState {
                graph: "bad/release-1",
                state: "a"
            }
        );
    }

    #[test]
    fn duplicate_outgoing_label_is_rejected() {
        let err = ProcessGraph::builder("bad/release-1", "a")
            .state("a", &[("transition/go", "b"), ("transition/go", "a")])
            .state("b", &[])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateTransition {
                graph: "bad/release-1",
                state: "a",
                transition: "transition/go"
            }
        );
    }

    #[test]
    fn undeclared_initial_state_is_rejected() {
        let err = ProcessGraph::builder("bad/release-1", "missing")
            .state("a", &[])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownInitialState {
                graph: "bad/release-1",
                initial: "missing"
            }
        );
    }

    #[test]
    fn dangling_edge_target_is_rejected() {
        let err = ProcessGraph::builder("bad/release-1", "a")
            .state("a", &[("transition/go", "nowhere")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingEdgeTarget {
                graph: "bad/release-1",
                state: "a",
                transition: "transition/go",
                to: "nowhere"
            }
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = ProcessGraph::builder("bad/release-1", "")
            .state("", &[])
            .build()
            .unwrap_err();
        assert_eq!(err, GraphError::EmptyStateName { graph: "bad/release-1" });

        let err = ProcessGraph::builder("bad/release-1", "a")
            .state("a", &[("", "a")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::EmptyTransitionLabel {
                graph: "bad/release-1",
                state: "a"
            }
        );
    }
}
