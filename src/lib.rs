//! Transaction process model for the Biketribe pet boarding marketplace.
//!
//! The marketplace runs on a hosted transaction platform that owns the
//! authoritative transaction state and enforces transition legality
//! server-side. This crate is the read side of that arrangement: a fixed
//! registry of transaction processes (purchase, booking, inquiry, and the
//! Biketribe pet inquiry), each a declarative state graph, plus the pure
//! queries the web front-end asks of them: which state a transaction is
//! in, which transitions lead into a state, whether it has passed through
//! one, and who is acting in it.
//!
//! ```
//! use biketribe_transactions::process::{self, biketribe_inquiry};
//!
//! let inquiry = process::get_process("biketribe-default-inquiry")?;
//! assert_eq!(
//!     inquiry.state_after_transition(biketribe_inquiry::transitions::INQUIRE_WITHOUT_PAYMENT),
//!     Some(biketribe_inquiry::states::FREE_INQUIRY),
//! );
//! # Ok::<(), biketribe_transactions::TransactionError>(())
//! ```
//!
//! Nothing here executes transitions, renders, or talks to the network;
//! transactions arrive fully resolved from the platform client and are
//! consumed read-only.

pub mod error;
pub mod process;
pub mod resolver;
pub mod transaction;

pub use error::TransactionError;
pub use process::{Process, ProcessGraph, ProcessInfo, UnitType, get_process};
pub use resolver::{Cond, ConditionalResolver};
pub use transaction::{
    SdkId, TX_TRANSITION_ACTORS, Transaction, TransactionAttributes, TransitionRecord, TxParty,
    TxRole, user_tx_role,
};
