//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the agenda list operations to Dart via FRB.
//! - Own the single process-wide session the UI edits.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation returns the full list snapshot so the UI can replace
//!   its state wholesale.
//! - Text is trimmed here before it reaches core.

use agenda_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AgendaConfig, AgendaSession, Entry, EntryId, LIMIT_REACHED_MESSAGE, MAX_ENTRIES,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

const EMPTY_STATE_MESSAGE: &str = "No entries yet. Add tasks above";

static SESSION: OnceLock<Mutex<AgendaSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One agenda row as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    /// Stable entry ID in string form.
    pub id: String,
    /// Display text.
    pub text: String,
}

/// Response envelope for every list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaResponse {
    /// Whether the call was accepted. Blank text and unknown ids still
    /// succeed as no-ops.
    pub ok: bool,
    /// Set when an add was refused because the list is full.
    pub limit_reached: bool,
    /// Limit notice, empty-state hint, or error text. Empty otherwise.
    pub message: String,
    /// Full list snapshot after the call, top priority first.
    pub items: Vec<AgendaItem>,
    /// Fixed list capacity.
    pub capacity: u32,
}

/// Returns the current list.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_list() -> AgendaResponse {
    with_session(|session| ok_response(session))
}

/// Adds one entry from the input box.
///
/// # FFI contract
/// - Full list: `ok = true`, `limit_reached = true`, message is the limit notice.
/// - Blank text: `ok = true`, list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_add(text: String) -> AgendaResponse {
    with_session(|session| add_in(session, &text))
}

/// Replaces the text of one entry after inline edit.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_update(id: String, text: String) -> AgendaResponse {
    with_session(|session| update_in(session, &id, &text))
}

/// Deletes one entry by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_delete(id: String) -> AgendaResponse {
    with_session(|session| delete_in(session, &id))
}

/// Moves one entry after a completed drag gesture.
///
/// # FFI contract
/// - Out-of-range indices return `ok = false` and the unchanged list.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_reorder(source_index: u32, dest_index: u32) -> AgendaResponse {
    with_session(|session| reorder_in(session, source_index, dest_index))
}

/// Discards the session list, e.g. when the UI session ends.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_reset() -> AgendaResponse {
    with_session(|session| {
        session.clear();
        ok_response(session)
    })
}

fn add_in(session: &mut AgendaSession, text: &str) -> AgendaResponse {
    let report = session.add(text.trim());
    let mut response = ok_response(session);
    if report.limit_reached {
        response.limit_reached = true;
        response.message = LIMIT_REACHED_MESSAGE.to_string();
    }
    response
}

fn update_in(session: &mut AgendaSession, id: &str, text: &str) -> AgendaResponse {
    session.update(&EntryId::from(id.trim()), text.trim());
    ok_response(session)
}

fn delete_in(session: &mut AgendaSession, id: &str) -> AgendaResponse {
    session.delete(&EntryId::from(id.trim()));
    ok_response(session)
}

fn reorder_in(session: &mut AgendaSession, source: u32, dest: u32) -> AgendaResponse {
    match session.reorder(source as usize, dest as usize) {
        Ok(()) => ok_response(session),
        Err(err) => failure_response(session, format!("agenda_reorder failed: {err}")),
    }
}

fn ok_response(session: &AgendaSession) -> AgendaResponse {
    let message = if session.is_empty() {
        EMPTY_STATE_MESSAGE.to_string()
    } else {
        String::new()
    };
    AgendaResponse {
        ok: true,
        limit_reached: false,
        message,
        items: to_items(session.entries()),
        capacity: MAX_ENTRIES as u32,
    }
}

fn failure_response(session: &AgendaSession, message: String) -> AgendaResponse {
    AgendaResponse {
        ok: false,
        limit_reached: false,
        message,
        items: to_items(session.entries()),
        capacity: MAX_ENTRIES as u32,
    }
}

fn to_items(entries: &[Entry]) -> Vec<AgendaItem> {
    entries
        .iter()
        .map(|entry| AgendaItem {
            id: entry.id.to_string(),
            text: entry.text.clone(),
        })
        .collect()
}

fn with_session(f: impl FnOnce(&mut AgendaSession) -> AgendaResponse) -> AgendaResponse {
    let mut guard = lock_session();
    f(&mut guard)
}

fn lock_session() -> MutexGuard<'static, AgendaSession> {
    let session = SESSION.get_or_init(|| Mutex::new(build_session()));
    // Lists are swapped wholesale, so a poisoned guard still holds a valid list.
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_session() -> AgendaSession {
    let config = AgendaConfig::from_env().unwrap_or_else(|err| {
        warn!("event=session_init module=ffi status=fallback error={err}");
        AgendaConfig::default()
    });
    AgendaSession::with_id_source(config.id_strategy.build())
}
