//! Read-only data shapes for transactions fetched from the transaction
//! platform.
//!
//! The platform service owns the authoritative transaction state and
//! enforces transition legality server-side. This module only mirrors the
//! JSON shapes its client hands us (`camelCase` keys, `{ "uuid": ... }` id
//! wrappers) and derives the acting party's role; it never constructs or
//! mutates a transaction.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TransactionError;

/// The relationship of an actor to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxRole {
    Customer,
    Provider,
    System,
    Operator,
}

impl fmt::Display for TxRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxRole::Customer => write!(f, "customer"),
            TxRole::Provider => write!(f, "provider"),
            TxRole::System => write!(f, "system"),
            TxRole::Operator => write!(f, "operator"),
        }
    }
}

/// Every role that can trigger a transition, in wire order.
pub const TX_TRANSITION_ACTORS: [TxRole; 4] = [
    TxRole::Customer,
    TxRole::Provider,
    TxRole::System,
    TxRole::Operator,
];

/// Resource id as the platform SDK wraps it: `{ "uuid": "..." }`.
///
/// Used for transaction ids, user ids, and the current-user id alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkId {
    pub uuid: Uuid,
}

impl SdkId {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }
}

/// A party (customer or provider) related to a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxParty {
    #[serde(default)]
    pub id: Option<SdkId>,
}

/// One entry of a transaction's transition history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the applied transition, e.g. `transition/confirm-payment`.
    pub transition: String,
    /// When the platform applied it.
    pub at: DateTime<Utc>,
}

/// Transaction attributes as returned by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionAttributes {
    /// Canonical (or legacy) name of the process this transaction runs on.
    pub process_name: Option<String>,
    /// Name of the most recently applied transition. Absent on a brand-new
    /// transaction that has not transitioned yet.
    pub last_transition: Option<String>,
    /// Append-only chronological transition history.
    pub transitions: Vec<TransitionRecord>,
}

/// A transaction fetched from the platform, consumed read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: Option<SdkId>,
    pub customer: Option<TxParty>,
    pub provider: Option<TxParty>,
    pub attributes: TransactionAttributes,
}

impl Transaction {
    /// Name of the most recently applied transition, if any.
    pub fn last_transition(&self) -> Option<&str> {
        self.attributes.last_transition.as_deref()
    }

    /// True if the transition history contains `transition`.
    pub fn has_passed_transition(&self, transition: &str) -> bool {
        self.attributes
            .transitions
            .iter()
            .any(|record| record.transition == transition)
    }
}

/// Derives the current user's role in a transaction: [`TxRole::Customer`]
/// when the user id matches the transaction's customer id, otherwise
/// [`TxRole::Provider`].
///
/// Requires the current user id, the transaction id, and the customer id to
/// all be present. A missing piece is a caller contract violation (the call
/// site passed unloaded data) and yields
/// [`TransactionError::InvalidRoleQuery`] naming both inputs.
pub fn user_tx_role(
    current_user_id: Option<&SdkId>,
    transaction: &Transaction,
) -> Result<TxRole, TransactionError> {
    let customer_id = transaction.customer.as_ref().and_then(|c| c.id);
    match (current_user_id, transaction.id, customer_id) {
        (Some(user_id), Some(_), Some(customer_id)) => {
            if user_id.uuid == customer_id.uuid {
                Ok(TxRole::Customer)
            } else {
                Ok(TxRole::Provider)
            }
        }
        _ => Err(TransactionError::InvalidRoleQuery {
            current_user: format!("{current_user_id:?}"),
            transaction: format!(
                "id: {:?}, customer id: {customer_id:?}",
                transaction.id
            ),
        }),
    }
}
