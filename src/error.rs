use thiserror::Error;

/// Errors surfaced by the transaction process layer.
///
/// Both variants indicate a caller bug or stale data rather than a
/// recoverable runtime condition. Callers surface them; nothing here is
/// retried or silently defaulted.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A process name or alias that resolves to no registered process.
    #[error("unknown transaction process name: {0}")]
    UnknownProcess(String),

    /// Role attribution attempted with incomplete identity data.
    #[error("invalid role query: currentUserId: {current_user}, transaction: {transaction}")]
    InvalidRoleQuery {
        current_user: String,
        transaction: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_process_message_carries_name() {
        let err = TransactionError::UnknownProcess("nightly-booking".into());
        assert_eq!(
            err.to_string(),
            "unknown transaction process name: nightly-booking"
        );
    }

    #[test]
    fn invalid_role_query_message_carries_both_inputs() {
        let err = TransactionError::InvalidRoleQuery {
            current_user: "None".into(),
            transaction: "id: None, customer id: None".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("currentUserId: None"));
        assert!(msg.contains("transaction: id: None"));
    }
}
