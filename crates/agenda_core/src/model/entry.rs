//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical agenda item and its identifier.
//! - Validate single entries and whole entry lists.
//!
//! # Invariants
//! - `id` is stable for the entry lifetime and never reused within a session.
//! - `text` is non-empty after trimming whitespace.
//! - A list holds at most `MAX_ENTRIES` entries with pairwise distinct ids.

use crate::list::MAX_ENTRIES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier of one agenda entry.
///
/// Serialized as a bare string so UI snapshots stay flat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wraps a raw identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation errors for entries and entry lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Entry id is an empty string.
    EmptyId,
    /// Entry text is empty or whitespace-only.
    BlankText,
    /// Two entries in one list share the same id.
    DuplicateId(EntryId),
    /// List holds more entries than the capacity allows.
    TooManyEntries { len: usize, max: usize },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "entry id must not be empty"),
            Self::BlankText => write!(f, "entry text must not be blank"),
            Self::DuplicateId(id) => write!(f, "duplicate entry id: {id}"),
            Self::TooManyEntries { len, max } => {
                write!(f, "entry list holds {len} entries; at most {max} allowed")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// One agenda item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryWire")]
pub struct Entry {
    /// Sole key for update/delete targeting.
    pub id: EntryId,
    /// Display text, kept exactly as the caller supplied it.
    pub text: String,
}

impl Entry {
    /// Creates a validated entry.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `BlankText` when `text` trims to nothing.
    pub fn new(
        id: impl Into<EntryId>,
        text: impl Into<String>,
    ) -> Result<Self, EntryValidationError> {
        let entry = Self {
            id: id.into(),
            text: text.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks single-entry invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_empty() {
            return Err(EntryValidationError::EmptyId);
        }
        if is_blank(&self.text) {
            return Err(EntryValidationError::BlankText);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct EntryWire {
    id: EntryId,
    text: String,
}

impl TryFrom<EntryWire> for Entry {
    type Error = EntryValidationError;

    fn try_from(value: EntryWire) -> Result<Self, Self::Error> {
        Entry::new(value.id, value.text)
    }
}

/// Checks all entry-list invariants: capacity, unique ids, non-blank text.
///
/// # Errors
/// Returns the first violation found, scanning from index 0.
pub fn validate_entries(entries: &[Entry]) -> Result<(), EntryValidationError> {
    if entries.len() > MAX_ENTRIES {
        return Err(EntryValidationError::TooManyEntries {
            len: entries.len(),
            max: MAX_ENTRIES,
        });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        entry.validate()?;
        if !seen.insert(&entry.id) {
            return Err(EntryValidationError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}

/// Returns whether `text` is empty after trimming whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
