//! The default purchase process (`default-purchase/release-1`): item
//! orders paid up front, with delivery, dispute handling, and a
//! double-blind review period.

use super::definition::{Process, UnitType};
use super::graph::ProcessGraph;

pub const NAME: &str = "default-purchase";
pub const ALIAS: &str = "default-purchase/release-1";

/// Transition names of the purchase process.
pub mod transitions {
    pub const INQUIRE: &str = "transition/inquire";
    pub const REQUEST_PAYMENT: &str = "transition/request-payment";
    pub const REQUEST_PAYMENT_AFTER_INQUIRY: &str = "transition/request-payment-after-inquiry";
    pub const CONFIRM_PAYMENT: &str = "transition/confirm-payment";
    pub const EXPIRE_PAYMENT: &str = "transition/expire-payment";
    pub const MARK_DELIVERED: &str = "transition/mark-delivered";
    pub const OPERATOR_MARK_DELIVERED: &str = "transition/operator-mark-delivered";
    pub const MARK_RECEIVED_FROM_PURCHASED: &str = "transition/mark-received-from-purchased";
    pub const AUTO_CANCEL: &str = "transition/auto-cancel";
    pub const CANCEL: &str = "transition/cancel";
    pub const MARK_RECEIVED: &str = "transition/mark-received";
    pub const AUTO_MARK_RECEIVED: &str = "transition/auto-mark-received";
    pub const DISPUTE: &str = "transition/dispute";
    pub const OPERATOR_DISPUTE: &str = "transition/operator-dispute";
    pub const MARK_RECEIVED_FROM_DISPUTED: &str = "transition/mark-received-from-disputed";
    pub const CANCEL_FROM_DISPUTED: &str = "transition/cancel-from-disputed";
    pub const AUTO_COMPLETE: &str = "transition/auto-complete";
    pub const REVIEW_1_BY_CUSTOMER: &str = "transition/review-1-by-customer";
    pub const REVIEW_2_BY_CUSTOMER: &str = "transition/review-2-by-customer";
    pub const REVIEW_1_BY_PROVIDER: &str = "transition/review-1-by-provider";
    pub const REVIEW_2_BY_PROVIDER: &str = "transition/review-2-by-provider";
    pub const EXPIRE_REVIEW_PERIOD: &str = "transition/expire-review-period";
    pub const EXPIRE_CUSTOMER_REVIEW_PERIOD: &str = "transition/expire-customer-review-period";
    pub const EXPIRE_PROVIDER_REVIEW_PERIOD: &str = "transition/expire-provider-review-period";
}

/// State names of the purchase process.
pub mod states {
    pub const INITIAL: &str = "initial";
    pub const INQUIRY: &str = "inquiry";
    pub const PENDING_PAYMENT: &str = "pending-payment";
    pub const PAYMENT_EXPIRED: &str = "payment-expired";
    pub const PURCHASED: &str = "purchased";
    pub const DELIVERED: &str = "delivered";
    pub const RECEIVED: &str = "received";
    pub const DISPUTED: &str = "disputed";
    pub const CANCELED: &str = "canceled";
    pub const COMPLETED: &str = "completed";
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
    transitions::MARK_DELIVERED,
    transitions::OPERATOR_MARK_DELIVERED,
    transitions::MARK_RECEIVED_FROM_PURCHASED,
    transitions::AUTO_CANCEL,
    transitions::CANCEL,
    transitions::MARK_RECEIVED,
    transitions::AUTO_MARK_RECEIVED,
    transitions::DISPUTE,
    transitions::OPERATOR_DISPUTE,
    transitions::MARK_RECEIVED_FROM_DISPUTED,
    transitions::CANCEL_FROM_DISPUTED,
    transitions::AUTO_COMPLETE,
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
    states::PURCHASED,
    states::DELIVERED,
    states::RECEIVED,
    states::DISPUTED,
    states::CANCELED,
    states::COMPLETED,
    states::REVIEWED_BY_CUSTOMER,
    states::REVIEWED_BY_PROVIDER,
    states::REVIEWED,
];

const RELEVANT_PAST_TRANSITIONS: &[&str] = &[
    transitions::CONFIRM_PAYMENT,
    transitions::AUTO_CANCEL,
    transitions::CANCEL,
    transitions::MARK_DELIVERED,
    transitions::OPERATOR_MARK_DELIVERED,
    transitions::DISPUTE,
    transitions::OPERATOR_DISPUTE,
    transitions::MARK_RECEIVED_FROM_PURCHASED,
    transitions::MARK_RECEIVED,
    transitions::AUTO_MARK_RECEIVED,
    transitions::MARK_RECEIVED_FROM_DISPUTED,
    transitions::CANCEL_FROM_DISPUTED,
    transitions::AUTO_COMPLETE,
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
    transitions::AUTO_COMPLETE,
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
    transitions::CANCEL,
    transitions::AUTO_CANCEL,
    transitions::CANCEL_FROM_DISPUTED,
];

const STATES_NEEDING_PROVIDER_ATTENTION: &[&str] = &[states::PURCHASED];

pub(crate) fn process() -> Process {
    Process {
        name: NAME,
        alias: ALIAS,
        unit_types: &[UnitType::Item],
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
                (transitions::CONFIRM_PAYMENT, states::PURCHASED),
            ],
        )
        .state(states::PAYMENT_EXPIRED, &[])
        .state(
            states::PURCHASED,
            &[
                (transitions::MARK_DELIVERED, states::DELIVERED),
                (transitions::OPERATOR_MARK_DELIVERED, states::DELIVERED),
                (transitions::MARK_RECEIVED_FROM_PURCHASED, states::RECEIVED),
                (transitions::AUTO_CANCEL, states::CANCELED),
                (transitions::CANCEL, states::CANCELED),
            ],
        )
        .state(states::CANCELED, &[])
        .state(
            states::DELIVERED,
            &[
                (transitions::MARK_RECEIVED, states::RECEIVED),
                (transitions::AUTO_MARK_RECEIVED, states::RECEIVED),
                (transitions::DISPUTE, states::DISPUTED),
                (transitions::OPERATOR_DISPUTE, states::DISPUTED),
            ],
        )
        .state(
            states::DISPUTED,
            &[
                (transitions::MARK_RECEIVED_FROM_DISPUTED, states::RECEIVED),
                (transitions::CANCEL_FROM_DISPUTED, states::CANCELED),
            ],
        )
        .state(
            states::RECEIVED,
            &[(transitions::AUTO_COMPLETE, states::COMPLETED)],
        )
        .state(
            states::COMPLETED,
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
        .expect("default-purchase graph is statically valid")
}
