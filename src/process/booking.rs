//! The default booking process (`default-booking/release-1`): calendar
//! bookings preauthorized at checkout, accepted or declined by the
//! provider, with a double-blind review period after delivery.

use super::definition::{Process, UnitType};
use super::graph::ProcessGraph;

pub const NAME: &str = "default-booking";
pub const ALIAS: &str = "default-booking/release-1";

/// Transition names of the booking process.
pub mod transitions {
    pub const INQUIRE: &str = "transition/inquire";
    pub const REQUEST_PAYMENT: &str = "transition/request-payment";
    pub const REQUEST_PAYMENT_AFTER_INQUIRY: &str = "transition/request-payment-after-inquiry";
    pub const CONFIRM_PAYMENT: &str = "transition/confirm-payment";
    pub const EXPIRE_PAYMENT: &str = "transition/expire-payment";
    pub const ACCEPT: &str = "transition/accept";
    pub const OPERATOR_ACCEPT: &str = "transition/operator-accept";
    pub const DECLINE: &str = "transition/decline";
    pub const OPERATOR_DECLINE: &str = "transition/operator-decline";
    pub const EXPIRE: &str = "transition/expire";
    pub const CANCEL: &str = "transition/cancel";
    pub const COMPLETE: &str = "transition/complete";
    pub const OPERATOR_COMPLETE: &str = "transition/operator-complete";
    pub const REVIEW_1_BY_CUSTOMER: &str = "transition/review-1-by-customer";
    pub const REVIEW_2_BY_CUSTOMER: &str = "transition/review-2-by-customer";
    pub const REVIEW_1_BY_PROVIDER: &str = "transition/review-1-by-provider";
    pub const REVIEW_2_BY_PROVIDER: &str = "transition/review-2-by-provider";
    pub const EXPIRE_REVIEW_PERIOD: &str = "transition/expire-review-period";
    pub const EXPIRE_CUSTOMER_REVIEW_PERIOD: &str = "transition/expire-customer-review-period";
    pub const EXPIRE_PROVIDER_REVIEW_PERIOD: &str = "transition/expire-provider-review-period";
}

/// State names of the booking process.
pub mod states {
    pub const INITIAL: &str = "initial";
    pub const INQUIRY: &str = "inquiry";
    pub const PENDING_PAYMENT: &str = "pending-payment";
    pub const PAYMENT_EXPIRED: &str = "payment-expired";
    pub const PREAUTHORIZED: &str = "preauthorized";
    pub const DECLINED: &str = "declined";
    pub const EXPIRED: &str = "expired";
    pub const ACCEPTED: &str = "accepted";
    pub const CANCELED: &str = "canceled";
    pub const DELIVERED: &str = "delivered";
    pub const REVIEWED_BY_CUSTOMER: &str = "reviewed-by-customer";
    pub const REVIEWED_BY_PROVIDER: &str = "reviewed-by-provider";
    pub const REVIEWED: &str = "reviewed";
}

const TRANSITIONS: &[&str] = &[
    transitions::INQUIRE,
    transitions::REQUEST_PAYMENT,
    transitions::REQUEST_PAYMENT_AFTER_INQUIRY,
    transitions::CONFIRM_PAYMENT,
    transitions::EXPIRE_PAYMENT,
    transitions::ACCEPT,
    transitions::OPERATOR_ACCEPT,
    transitions::DECLINE,
    transitions::OPERATOR_DECLINE,
    transitions::EXPIRE,
    transitions::CANCEL,
    transitions::COMPLETE,
    transitions::OPERATOR_COMPLETE,
    transitions::REVIEW_1_BY_CUSTOMER,
    transitions::REVIEW_2_BY_CUSTOMER,
    transitions::REVIEW_1_BY_PROVIDER,
    transitions::REVIEW_2_BY_PROVIDER,
    transitions::EXPIRE_REVIEW_PERIOD,
    transitions::EXPIRE_CUSTOMER_REVIEW_PERIOD,
    transitions::EXPIRE_PROVIDER_REVIEW_PERIOD,
];

const STATES: &[&str] = &[
    states::INITIAL,
    states::INQUIRY,
    states::PENDING_PAYMENT,
    states::PAYMENT_EXPIRED,
    states::PREAUTHORIZED,
    states::DECLINED,
    states::EXPIRED,
    states::ACCEPTED,
    states::CANCELED,
    states::DELIVERED,
    states::REVIEWED_BY_CUSTOMER,
    states::REVIEWED_BY_PROVIDER,
    states::REVIEWED,
];

const RELEVANT_PAST_TRANSITIONS: &[&str] = &[
    transitions::CONFIRM_PAYMENT,
    transitions::ACCEPT,
    transitions::OPERATOR_ACCEPT,
    transitions::DECLINE,
    transitions::OPERATOR_DECLINE,
    transitions::EXPIRE,
    transitions::CANCEL,
    transitions::COMPLETE,
    transitions::OPERATOR_COMPLETE,
    transitions::REVIEW_1_BY_CUSTOMER,
    transitions::REVIEW_1_BY_PROVIDER,
    transitions::REVIEW_2_BY_CUSTOMER,
    transitions::REVIEW_2_BY_PROVIDER,
];

const CUSTOMER_REVIEW_TRANSITIONS: &[&str] = &[
    transitions::REVIEW_1_BY_CUSTOMER,
    transitions::REVIEW_2_BY_CUSTOMER,
];

const PROVIDER_REVIEW_TRANSITIONS: &[&str] = &[
    transitions::REVIEW_1_BY_PROVIDER,
    transitions::REVIEW_2_BY_PROVIDER,
];

// Payment requests create pending-state line items and must run through
// the privileged transition endpoint.
const PRIVILEGED_TRANSITIONS: &[&str] = &[
    transitions::REQUEST_PAYMENT,
    transitions::REQUEST_PAYMENT_AFTER_INQUIRY,
];

const COMPLETED_TRANSITIONS: &[&str] = &[
    transitions::COMPLETE,
    transitions::OPERATOR_COMPLETE,
    transitions::REVIEW_1_BY_CUSTOMER,
    transitions::REVIEW_1_BY_PROVIDER,
    transitions::REVIEW_2_BY_CUSTOMER,
    transitions::REVIEW_2_BY_PROVIDER,
    transitions::EXPIRE_REVIEW_PERIOD,
    transitions::EXPIRE_CUSTOMER_REVIEW_PERIOD,
    transitions::EXPIRE_PROVIDER_REVIEW_PERIOD,
];

const REFUNDED_TRANSITIONS: &[&str] = &[
    transitions::EXPIRE_PAYMENT,
    transitions::DECLINE,
    transitions::OPERATOR_DECLINE,
    transitions::EXPIRE,
    transitions::CANCEL,
];

const STATES_NEEDING_PROVIDER_ATTENTION: &[&str] = &[states::PREAUTHORIZED];

pub(crate) fn process() -> Process {
    Process {
        name: NAME,
        alias: ALIAS,
        unit_types: &[UnitType::Day, UnitType::Night, UnitType::Hour, UnitType::Fixed],
        transitions: TRANSITIONS,
        states: STATES,
        graph: graph(),
        relevant_past_transitions: RELEVANT_PAST_TRANSITIONS,
        customer_review_transitions: CUSTOMER_REVIEW_TRANSITIONS,
        provider_review_transitions: PROVIDER_REVIEW_TRANSITIONS,
        privileged_transitions: PRIVILEGED_TRANSITIONS,
        completed_transitions: COMPLETED_TRANSITIONS,
        refunded_transitions: REFUNDED_TRANSITIONS,
        states_needing_provider_attention: STATES_NEEDING_PROVIDER_ATTENTION,
    }
}

fn graph() -> ProcessGraph {
    ProcessGraph::builder(ALIAS, states::INITIAL)
        .state(
            states::INITIAL,
            &[
                (transitions::INQUIRE, states::INQUIRY),
                (transitions::REQUEST_PAYMENT, states::PENDING_PAYMENT),
            ],
        )
        .state(
            states::INQUIRY,
            &[(
                transitions::REQUEST_PAYMENT_AFTER_INQUIRY,
                states::PENDING_PAYMENT,
            )],
        )
        .state(
            states::PENDING_PAYMENT,
            &[
                (transitions::EXPIRE_PAYMENT, states::PAYMENT_EXPIRED),
                (transitions::CONFIRM_PAYMENT, states::PREAUTHORIZED),
            ],
        )
        .state(states::PAYMENT_EXPIRED, &[])
        .state(
            states::PREAUTHORIZED,
            &[
                (transitions::DECLINE, states::DECLINED),
                (transitions::OPERATOR_DECLINE, states::DECLINED),
                (transitions::EXPIRE, states::EXPIRED),
                (transitions::ACCEPT, states::ACCEPTED),
                (transitions::OPERATOR_ACCEPT, states::ACCEPTED),
            ],
        )
        .state(states::DECLINED, &[])
        .state(states::EXPIRED, &[])
        .state(
            states::ACCEPTED,
            &[
                (transitions::CANCEL, states::CANCELED),
                (transitions::COMPLETE, states::DELIVERED),
                (transitions::OPERATOR_COMPLETE, states::DELIVERED),
            ],
        )
        .state(states::CANCELED, &[])
        .state(
            states::DELIVERED,
            &[
                (transitions::EXPIRE_REVIEW_PERIOD, states::REVIEWED),
                (transitions::REVIEW_1_BY_CUSTOMER, states::REVIEWED_BY_CUSTOMER),
                (transitions::REVIEW_1_BY_PROVIDER, states::REVIEWED_BY_PROVIDER),
            ],
        )
        .state(
            states::REVIEWED_BY_CUSTOMER,
            &[
                (transitions::REVIEW_2_BY_PROVIDER, states::REVIEWED),
                (transitions::EXPIRE_PROVIDER_REVIEW_PERIOD, states::REVIEWED),
            ],
        )
        .state(
            states::REVIEWED_BY_PROVIDER,
            &[
                (transitions::REVIEW_2_BY_CUSTOMER, states::REVIEWED),
                (transitions::EXPIRE_CUSTOMER_REVIEW_PERIOD, states::REVIEWED),
            ],
        )
        .final_state(states::REVIEWED)
        .build()
        .expect("default-booking graph is statically valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Transaction, TransactionAttributes, TransitionRecord};
    use chrono::Utc;

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

    #[test]
    fn graph_builds_with_every_declared_transition() {
        let process = process();
        for transition in TRANSITIONS {
            assert!(
                process.state_after_transition(transition).is_some(),
                "{transition} has no edge in the booking graph"
            );
        }
    }

    #[test]
    fn preauthorized_branches() {
        let process = process();
        assert_eq!(
            process.state_after_transition(transitions::CONFIRM_PAYMENT),
            Some(states::PREAUTHORIZED)
        );
        assert_eq!(
            process.state_after_transition(transitions::ACCEPT),
            Some(states::ACCEPTED)
        );
        assert_eq!(
            process.state_after_transition(transitions::DECLINE),
            Some(states::DECLINED)
        );
        assert_eq!(
            process.state_after_transition(transitions::EXPIRE),
            Some(states::EXPIRED)
        );
    }

    #[test]
    fn accepted_booking_has_passed_preauthorized() {
        let process = process();
        let tx = tx_with_history(&[
            transitions::REQUEST_PAYMENT,
            transitions::CONFIRM_PAYMENT,
            transitions::ACCEPT,
        ]);
        assert_eq!(process.current_state(&tx), Some(states::ACCEPTED));
        assert!(process.has_passed_state(states::PREAUTHORIZED, &tx));
        assert!(!process.has_passed_state(states::DELIVERED, &tx));
    }

    #[test]
    fn provider_attention_in_preauthorized() {
        let process = process();
        assert_eq!(
            process.states_needing_provider_attention(),
            &[states::PREAUTHORIZED]
        );
        assert_eq!(
            process.transitions_to_state(states::PREAUTHORIZED),
            vec![transitions::CONFIRM_PAYMENT]
        );
    }

    #[test]
    fn acceptance_family_targets_accepted() {
        let process = process();
        assert_eq!(
            process.transitions_to_state(states::ACCEPTED),
            vec![transitions::ACCEPT, transitions::OPERATOR_ACCEPT]
        );
    }

    #[test]
    fn completion_and_review_classes() {
        let process = process();
        assert!(process.is_completed(transitions::COMPLETE));
        assert!(process.is_completed(transitions::EXPIRE_REVIEW_PERIOD));
        assert!(!process.is_completed(transitions::ACCEPT));
        assert!(process.is_customer_review(transitions::REVIEW_2_BY_CUSTOMER));
        assert!(process.is_provider_review(transitions::REVIEW_1_BY_PROVIDER));
    }

    #[test]
    fn declines_and_cancellations_are_refunded() {
        let process = process();
        for transition in [
            transitions::EXPIRE_PAYMENT,
            transitions::DECLINE,
            transitions::OPERATOR_DECLINE,
            transitions::EXPIRE,
            transitions::CANCEL,
        ] {
            assert!(process.is_refunded(transition), "{transition} should refund");
        }
        assert!(!process.is_refunded(transitions::COMPLETE));
    }
}
