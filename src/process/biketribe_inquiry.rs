//! The Biketribe inquiry process (`biketribe-default-inquiry/release-1`):
//! a free inquiry extended with a pet-details step, so the provider gets
//! the pet's profile before agreeing to board it.

use super::definition::{Process, UnitType};
use super::graph::ProcessGraph;

pub const NAME: &str = "biketribe-default-inquiry";
pub const ALIAS: &str = "biketribe-default-inquiry/release-1";

/// Transition names of the Biketribe inquiry process.
pub mod transitions {
    pub const INQUIRE_WITHOUT_PAYMENT: &str = "transition/inquire-without-payment";
    pub const PROVIDE_PET_DETAILS: &str = "transition/provide-pet-details";
}

/// State names of the Biketribe inquiry process.
pub mod states {
    pub const INITIAL: &str = "initial";
    pub const FREE_INQUIRY: &str = "free-inquiry";
    pub const PET_DETAILS_PROVIDED: &str = "pet-details-provided";
}

const TRANSITIONS: &[&str] = &[
    transitions::INQUIRE_WITHOUT_PAYMENT,
    transitions::PROVIDE_PET_DETAILS,
];

const STATES: &[&str] = &[
    states::INITIAL,
    states::FREE_INQUIRY,
    states::PET_DETAILS_PROVIDED,
];

const RELEVANT_PAST_TRANSITIONS: &[&str] = &[
    transitions::INQUIRE_WITHOUT_PAYMENT,
    transitions::PROVIDE_PET_DETAILS,
];

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
        .state(
            states::FREE_INQUIRY,
            &[(transitions::PROVIDE_PET_DETAILS, states::PET_DETAILS_PROVIDED)],
        )
        .final_state(states::PET_DETAILS_PROVIDED)
        .build()
        .expect("biketribe-default-inquiry graph is statically valid")
}
