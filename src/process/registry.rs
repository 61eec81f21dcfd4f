//! The fixed registry of marketplace transaction processes.
//!
//! Built once behind a [`LazyLock`] and shared read-only: concurrent
//! callers query it without coordination. Process names arriving from
//! listings or transactions may be historical; [`resolve_latest_process_name`]
//! maps legacy identifiers forward before lookup.

use std::sync::LazyLock;

use tracing::error;

use super::definition::{Process, ProcessInfo};
use super::{biketribe_inquiry, booking, inquiry, purchase};
use crate::error::TransactionError;

/// Canonical process names.
pub const PURCHASE_PROCESS_NAME: &str = purchase::NAME;
pub const BOOKING_PROCESS_NAME: &str = booking::NAME;
pub const INQUIRY_PROCESS_NAME: &str = inquiry::NAME;
pub const BIKETRIBE_INQUIRY_PROCESS_NAME: &str = biketribe_inquiry::NAME;

static PROCESSES: LazyLock<Vec<Process>> = LazyLock::new(|| {
    vec![
        purchase::process(),
        booking::process(),
        inquiry::process(),
        biketribe_inquiry::process(),
    ]
});

/// Maps historical process identifiers forward to their current canonical
/// name. Unknown names pass through unchanged: call sites use this for
/// feature detection and must tolerate names from newer releases.
pub fn resolve_latest_process_name(process_name: &str) -> &str {
    match process_name {
        "flex-product-default-process" | "default-buying-products" => PURCHASE_PROCESS_NAME,
        "flex-default-process" | "flex-hourly-default-process" | "flex-booking-default-process" => {
            BOOKING_PROCESS_NAME
        }
        other => other,
    }
}

/// Looks up a process by name or any of its historical aliases.
///
/// A miss is a caller bug or stale marketplace data, never a normal
/// outcome: it is logged and surfaced as
/// [`TransactionError::UnknownProcess`] carrying the original name.
pub fn get_process(process_name: &str) -> Result<&'static Process, TransactionError> {
    let latest_name = resolve_latest_process_name(process_name);
    match PROCESSES.iter().find(|p| p.name() == latest_name) {
        Some(process) => Ok(process),
        None => {
            error!(%process_name, "unknown transaction process");
            Err(TransactionError::UnknownProcess(process_name.to_string()))
        }
    }
}

/// Metadata of every registered process, without graphs or behavior.
pub fn get_supported_processes_info() -> Vec<ProcessInfo> {
    PROCESSES.iter().map(Process::info).collect()
}

/// Every registered process's declared transitions flattened into one
/// list. Duplicates across processes are retained.
pub fn get_all_transitions_for_every_process() -> Vec<&'static str> {
    PROCESSES
        .iter()
        .flat_map(|process| process.transitions().iter().copied())
        .collect()
}

/// Across all processes, every transition leading into a state flagged as
/// needing provider attention. Deduplicated, first-seen order.
pub fn get_transitions_needing_provider_attention() -> Vec<&'static str> {
    let mut picked: Vec<&'static str> = Vec::new();
    for process in PROCESSES.iter() {
        for state in process.states_needing_provider_attention() {
            for transition in process.transitions_to_state(state) {
                if !picked.contains(&transition) {
                    picked.push(transition);
                }
            }
        }
    }
    picked
}

/// True if `process_name` (canonical or legacy) is the purchase process.
pub fn is_purchase_process(process_name: &str) -> bool {
    resolve_latest_process_name(process_name) == PURCHASE_PROCESS_NAME
}

/// [`is_purchase_process`] over a `"name/version"` alias; only the part
/// before `/` is significant.
pub fn is_purchase_process_alias(process_alias: &str) -> bool {
    is_purchase_process(alias_name(process_alias))
}

/// True if `process_name` (canonical or legacy) is the booking process.
pub fn is_booking_process(process_name: &str) -> bool {
    resolve_latest_process_name(process_name) == BOOKING_PROCESS_NAME
}

/// [`is_booking_process`] over a `"name/version"` alias; only the part
/// before `/` is significant.
pub fn is_booking_process_alias(process_alias: &str) -> bool {
    is_booking_process(alias_name(process_alias))
}

fn alias_name(process_alias: &str) -> &str {
    process_alias
        .split_once('/')
        .map_or(process_alias, |(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- lookup and alias tests ---

    #[test]
    fn every_registered_process_resolves_by_name() {
        for name in [
            PURCHASE_PROCESS_NAME,
            BOOKING_PROCESS_NAME,
            INQUIRY_PROCESS_NAME,
            BIKETRIBE_INQUIRY_PROCESS_NAME,
        ] {
            let process = get_process(name).unwrap();
            assert_eq!(process.name(), name);
        }
    }

    #[test]
    fn legacy_aliases_resolve_to_the_same_process() {
        let canonical = get_process(BOOKING_PROCESS_NAME).unwrap();
        for legacy in [
            "flex-default-process",
            "flex-hourly-default-process",
            "flex-booking-default-process",
        ] {
            let resolved = get_process(legacy).unwrap();
            assert_eq!(resolved.name(), canonical.name());
            assert_eq!(resolved.alias(), canonical.alias());
            assert_eq!(resolved.graph().id(), canonical.graph().id());
        }

        for legacy in ["flex-product-default-process", "default-buying-products"] {
            assert_eq!(get_process(legacy).unwrap().name(), PURCHASE_PROCESS_NAME);
        }
    }

    #[test]
    fn unknown_name_is_an_error_carrying_the_original_name() {
        let err = get_process("nightly-booking").unwrap_err();
        match err {
            TransactionError::UnknownProcess(name) => assert_eq!(name, "nightly-booking"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_names_pass_through_resolution_unchanged() {
        assert_eq!(
            resolve_latest_process_name("some-future-process"),
            "some-future-process"
        );
        assert_eq!(
            resolve_latest_process_name(INQUIRY_PROCESS_NAME),
            INQUIRY_PROCESS_NAME
        );
    }

    // --- aggregate query tests ---

    #[test]
    fn supported_info_lists_all_processes_without_graphs() {
        let info = get_supported_processes_info();
        assert_eq!(info.len(), 4);
        assert_eq!(info[0].name, PURCHASE_PROCESS_NAME);
        assert_eq!(info[1].alias, "default-booking/release-1");
        assert_eq!(info[3].name, BIKETRIBE_INQUIRY_PROCESS_NAME);
    }

    #[test]
    fn all_transitions_count_is_the_sum_over_processes() {
        let all = get_all_transitions_for_every_process();
        let expected: usize = get_supported_processes_info()
            .iter()
            .map(|info| get_process(info.name).unwrap().transitions().len())
            .sum();
        assert_eq!(all.len(), expected);
        // Shared names like transition/inquire are retained per process.
        let inquires = all.iter().filter(|t| **t == "transition/inquire").count();
        assert_eq!(inquires, 2);
    }

    #[test]
    fn provider_attention_transitions_are_deduplicated() {
        // Purchase flags "purchased" and booking flags "preauthorized";
        // both are entered through transition/confirm-payment.
        assert_eq!(
            get_transitions_needing_provider_attention(),
            vec!["transition/confirm-payment"]
        );
    }

    // --- name predicate tests ---

    #[test]
    fn purchase_and_booking_predicates() {
        assert!(is_purchase_process(PURCHASE_PROCESS_NAME));
        assert!(is_purchase_process("default-buying-products"));
        assert!(!is_purchase_process(BOOKING_PROCESS_NAME));

        assert!(is_booking_process(BOOKING_PROCESS_NAME));
        assert!(is_booking_process("flex-booking-default-process"));
        assert!(!is_booking_process(INQUIRY_PROCESS_NAME));
    }

    #[test]
    fn alias_predicates_use_the_name_part_only() {
        assert!(is_booking_process_alias("default-booking/release-1"));
        assert!(is_booking_process_alias("flex-default-process/release-3"));
        assert!(is_purchase_process_alias("default-purchase/release-1"));
        assert!(!is_purchase_process_alias("default-booking/release-1"));
        // No version suffix is fine too.
        assert!(is_booking_process_alias("default-booking"));
    }
}
