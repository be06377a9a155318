//! Pure agenda list operations.
//!
//! # Responsibility
//! - Add, delete, update and reorder entries without mutating the input list.
//! - Enforce the capacity and non-blank text invariants on every result.
//!
//! # Invariants
//! - Results never exceed `MAX_ENTRIES` entries.
//! - Blank text never creates an entry or overwrites existing text.
//! - Ids in a result are pairwise distinct when they were in the input.

use crate::ids::IdSource;
use crate::model::entry::{is_blank, Entry, EntryId};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed list capacity.
pub const MAX_ENTRIES: usize = 10;

/// Notice shown by the UI when an add is refused for capacity.
pub const LIMIT_REACHED_MESSAGE: &str = "If everything is a priority, nothing is a priority!";

/// Result of `add_entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// New list value; equal to the input when nothing was added.
    pub entries: Vec<Entry>,
    /// `true` only when the add was refused because the list is full.
    pub limit_reached: bool,
}

impl AddOutcome {
    fn unchanged(entries: &[Entry], limit_reached: bool) -> Self {
        Self {
            entries: entries.to_vec(),
            limit_reached,
        }
    }
}

/// Reorder contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    /// Source or destination index is outside `[0, len - 1]`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ReorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "reorder index {index} out of range for {len} entries")
            }
        }
    }
}

impl Error for ReorderError {}

/// Appends a new entry with a freshly minted id.
///
/// # Contract
/// - Full list: input unchanged, `limit_reached = true`, whatever `text` is.
/// - Blank `text`: input unchanged, `limit_reached = false`.
/// - Otherwise the new entry is last and keeps `text` as given.
/// - Empty ids and ids already present in `entries` are skipped. At most
///   `entries.len() + 1` ids are drawn; a source that exhausts them adds nothing.
pub fn add_entry(entries: &[Entry], text: &str, ids: &mut impl IdSource) -> AddOutcome {
    if entries.len() >= MAX_ENTRIES {
        return AddOutcome::unchanged(entries, true);
    }
    if is_blank(text) {
        return AddOutcome::unchanged(entries, false);
    }

    let max_draws = entries.len() + 1;
    let Some(id) = (0..max_draws)
        .map(|_| ids.next_id())
        .find(|candidate| !candidate.is_empty() && !contains_id(entries, candidate))
    else {
        warn!(
            "event=entry_add module=agenda status=error reason=id_source_exhausted draws={}",
            max_draws
        );
        return AddOutcome::unchanged(entries, false);
    };

    let mut next = Vec::with_capacity(entries.len() + 1);
    next.extend_from_slice(entries);
    next.push(Entry {
        id,
        text: text.to_string(),
    });
    AddOutcome {
        entries: next,
        limit_reached: false,
    }
}

/// Removes the entry with `id`, keeping the order of the rest.
///
/// Unknown ids leave the list unchanged.
pub fn delete_entry(entries: &[Entry], id: &EntryId) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| &entry.id != id)
        .cloned()
        .collect()
}

/// Replaces the text of the entry with `id`, keeping its id and position.
///
/// Blank `text` and unknown ids leave the list unchanged.
pub fn update_entry(entries: &[Entry], id: &EntryId, text: &str) -> Vec<Entry> {
    if is_blank(text) {
        return entries.to_vec();
    }
    entries
        .iter()
        .map(|entry| {
            if &entry.id == id {
                Entry {
                    id: entry.id.clone(),
                    text: text.to_string(),
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Moves the entry at `source` so it lands at `dest`.
///
/// `dest` is read against the list with the source entry already removed.
///
/// # Errors
/// `IndexOutOfRange` when either index is not in `[0, len - 1]`.
pub fn reorder_entries(
    entries: &[Entry],
    source: usize,
    dest: usize,
) -> Result<Vec<Entry>, ReorderError> {
    let len = entries.len();
    for index in [source, dest] {
        if index >= len {
            return Err(ReorderError::IndexOutOfRange { index, len });
        }
    }

    let mut next = entries.to_vec();
    if source != dest {
        let moved = next.remove(source);
        next.insert(dest, moved);
    }
    Ok(next)
}

fn contains_id(entries: &[Entry], id: &EntryId) -> bool {
    entries.iter().any(|entry| &entry.id == id)
}
