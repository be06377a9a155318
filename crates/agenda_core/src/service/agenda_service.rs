//! Agenda session state.
//!
//! # Responsibility
//! - Hold the one working entry list for a UI session.
//! - Route every mutation through the pure list operations and swap in the
//!   returned list wholesale.
//! - Emit metadata-only diagnostic events for each mutation.
//!
//! # Invariants
//! - The owned list satisfies `validate_entries` after every call.
//! - Entry text never appears in log output.

use crate::ids::{CounterIdSource, IdSource};
use crate::list::{
    add_entry, delete_entry, reorder_entries, update_entry, ReorderError, MAX_ENTRIES,
};
use crate::logging::log_field;
use crate::model::entry::{is_blank, Entry, EntryId};
use log::{debug, info, warn};

/// Outcome of `AgendaSession::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    /// Id of the created entry, `None` when nothing was added.
    pub id: Option<EntryId>,
    /// Whether the add was refused because the list is full.
    pub limit_reached: bool,
}

/// Session-scoped owner of the working entry list.
pub struct AgendaSession {
    entries: Vec<Entry>,
    ids: Box<dyn IdSource + Send>,
}

impl AgendaSession {
    /// Creates an empty session using a counter id source.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(CounterIdSource::new()))
    }

    /// Creates an empty session using the provided id source.
    pub fn with_id_source(ids: Box<dyn IdSource + Send>) -> Self {
        Self {
            entries: Vec::new(),
            ids,
        }
    }

    /// Current entries in priority order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the next add would hit the capacity limit.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ENTRIES
    }

    /// Adds one entry at the end of the list.
    ///
    /// # Contract
    /// - Full list: nothing added, `limit_reached = true`.
    /// - Blank text: nothing added, `limit_reached = false`.
    pub fn add(&mut self, text: &str) -> AddReport {
        let outcome = add_entry(&self.entries, text, &mut self.ids);
        if outcome.limit_reached {
            warn!(
                "event=entry_add module=agenda status=limit len={} max={}",
                self.entries.len(),
                MAX_ENTRIES
            );
            return AddReport {
                id: None,
                limit_reached: true,
            };
        }

        if outcome.entries.len() == self.entries.len() {
            if is_blank(text) {
                debug!("event=entry_add module=agenda status=noop reason=blank_text");
            }
            return AddReport {
                id: None,
                limit_reached: false,
            };
        }

        self.entries = outcome.entries;
        let id = self.entries.last().map(|entry| entry.id.clone());
        info!(
            "event=entry_add module=agenda status=ok id={} len={}",
            log_field(id.as_ref().map(EntryId::as_str).unwrap_or_default()),
            self.entries.len()
        );
        AddReport {
            id,
            limit_reached: false,
        }
    }

    /// Removes the entry with `id`. Returns whether an entry was removed.
    pub fn delete(&mut self, id: &EntryId) -> bool {
        let next = delete_entry(&self.entries, id);
        let removed = next.len() != self.entries.len();
        self.entries = next;
        info!(
            "event=entry_delete module=agenda status={} id={} len={}",
            if removed { "ok" } else { "noop" },
            log_field(id.as_str()),
            self.entries.len()
        );
        removed
    }

    /// Replaces the text of the entry with `id`. Returns whether it changed.
    pub fn update(&mut self, id: &EntryId, text: &str) -> bool {
        let next = update_entry(&self.entries, id, text);
        let changed = next != self.entries;
        self.entries = next;
        info!(
            "event=entry_update module=agenda status={} id={}",
            if changed { "ok" } else { "noop" },
            log_field(id.as_str())
        );
        changed
    }

    /// Moves the entry at `source` to `dest`.
    ///
    /// # Errors
    /// Propagates `ReorderError` and leaves the list untouched.
    pub fn reorder(&mut self, source: usize, dest: usize) -> Result<(), ReorderError> {
        match reorder_entries(&self.entries, source, dest) {
            Ok(next) => {
                self.entries = next;
                info!(
                    "event=entry_reorder module=agenda status=ok source={} dest={}",
                    source, dest
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=entry_reorder module=agenda status=error source={} dest={} len={}",
                    source,
                    dest,
                    self.entries.len()
                );
                Err(err)
            }
        }
    }

    /// Discards all entries. The id source keeps its position so ids from
    /// before the clear are not handed out again.
    pub fn clear(&mut self) {
        self.entries.clear();
        info!("event=session_clear module=agenda status=ok");
    }
}

impl Default for AgendaSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AgendaSession;
    use crate::model::entry::validate_entries;

    #[test]
    fn clear_does_not_recycle_ids() {
        let mut session = AgendaSession::new();
        let first = session.add("A").id.unwrap();
        session.clear();
        let second = session.add("A").id.unwrap();

        assert_ne!(first, second);
        validate_entries(session.entries()).unwrap();
    }

    #[test]
    fn update_reports_noop_for_identical_text() {
        let mut session = AgendaSession::new();
        let id = session.add("same").id.unwrap();
        assert!(!session.update(&id, "same"));
        assert!(session.update(&id, "different"));
    }
}
