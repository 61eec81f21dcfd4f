//! Marketplace transaction processes: graph definitions, the process
//! registry, and the queries bound to each process's graph.

mod definition;
mod graph;
mod registry;

pub mod biketribe_inquiry;
pub mod booking;
pub mod inquiry;
pub mod purchase;

pub use definition::{Process, ProcessInfo, UnitType};
pub use graph::{Edge, GraphError, ProcessGraph, ProcessGraphBuilder, StateKind, StateNode};
pub use registry::{
    BIKETRIBE_INQUIRY_PROCESS_NAME, BOOKING_PROCESS_NAME, INQUIRY_PROCESS_NAME,
    PURCHASE_PROCESS_NAME, get_all_transitions_for_every_process, get_process,
    get_supported_processes_info, get_transitions_needing_provider_attention,
    is_booking_process, is_booking_process_alias, is_purchase_process,
    is_purchase_process_alias, resolve_latest_process_name,
};
