//! The default inquiry process (`default-inquiry/release-1`): a free
//! message thread with no payments, one transition deep.

use super::definition::{Process, UnitType};
use super::graph::ProcessGraph;

pub const NAME: &str = "default-inquiry";
pub const ALIAS: &str = "default-inquiry/release-1";

/// Transition names of the inquiry process.
pub mod transitions {
    pub const INQUIRE_WITHOUT_PAYMENT: &str = "transition/inquire-without-payment";
}

/// State names of the inquiry process.
pub mod states {
    pub const INITIAL: &str = "initial";
    pub const FREE_INQUIRY: &str = "free-inquiry";
}

const TRANSITIONS: &[&str] = &[transitions::INQUIRE_WITHOUT_PAYMENT];

const STATES: &[&str] = &[states::INITIAL, states::FREE_INQUIRY];

const RELEVANT_PAST_TRANSITIONS: &[&str] = &[transitions::INQUIRE_WITHOUT_PAYMENT];

pub(crate) fn process() -> Process {
    Process {
        name: NAME,
        alias: ALIAS,
        unit_types: &[UnitType::Inquiry],
        transitions: TRANSITIONS,
        states: STATES,
        graph: graph(),
        relevant_past_transitions: RELEVANT_PAST_TRANSITIONS,
        customer_review_transitions: &[],
        provider_review_transitions: &[],
        privileged_transitions: &[],
        completed_transitions: &[],
        refunded_transitions: &[],
        states_needing_provider_attention: &[],
    }
}

fn graph() -> ProcessGraph {
    ProcessGraph::builder(ALIAS, states::INITIAL)
        .state(
            states::INITIAL,
            &[(transitions::INQUIRE_WITHOUT_PAYMENT, states::FREE_INQUIRY)],
        )
        .final_state(states::FREE_INQUIRY)
        .build()
        .expect("default-inquiry graph is statically valid")
}
