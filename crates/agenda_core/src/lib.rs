//! Core domain logic for the agenda list.
//! This crate is the single source of truth for entry-list invariants.

pub mod config;
pub mod ids;
pub mod list;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{AgendaConfig, ConfigError};
pub use ids::{CounterIdSource, IdSource, IdStrategy, UnknownIdStrategy, UuidIdSource};
pub use list::{
    add_entry, delete_entry, reorder_entries, update_entry, AddOutcome, ReorderError,
    LIMIT_REACHED_MESSAGE, MAX_ENTRIES,
};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingStatus,
};
pub use model::entry::{validate_entries, Entry, EntryId, EntryValidationError};
pub use service::agenda_service::{AddReport, AgendaSession};
pub use service::drag::DragGesture;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
