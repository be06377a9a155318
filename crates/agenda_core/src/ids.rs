//! Entry identifier sources.
//!
//! # Responsibility
//! - Mint fresh `EntryId` values for newly added entries.
//! - Keep id generation decoupled from wall-clock time.
//!
//! # Invariants
//! - A single source never yields the same id twice.

use crate::model::entry::EntryId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Generator of fresh entry identifiers, injected into `add_entry`.
pub trait IdSource {
    fn next_id(&mut self) -> EntryId;
}

impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn next_id(&mut self) -> EntryId {
        (**self).next_id()
    }
}

impl<S: IdSource + ?Sized> IdSource for &mut S {
    fn next_id(&mut self) -> EntryId {
        (**self).next_id()
    }
}

/// Monotonic counter source. Ids are decimal strings: `"1"`, `"2"`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterIdSource {
    next: u64,
}

impl CounterIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts counting at `first`. Used when resuming after a known id range.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for CounterIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for CounterIdSource {
    fn next_id(&mut self) -> EntryId {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        EntryId::new(value.to_string())
    }
}

/// Random v4 UUID source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> EntryId {
        EntryId::new(Uuid::new_v4().to_string())
    }
}

/// Runtime-selectable id generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Monotonic counter starting at 1.
    #[default]
    Counter,
    /// Random v4 UUIDs.
    Uuid,
}

impl IdStrategy {
    /// Stable string id used in config values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Uuid => "uuid",
        }
    }

    /// Builds a fresh boxed source for this strategy.
    pub fn build(self) -> Box<dyn IdSource + Send> {
        match self {
            Self::Counter => Box::new(CounterIdSource::new()),
            Self::Uuid => Box::new(UuidIdSource),
        }
    }
}

/// Id strategy parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIdStrategy(pub String);

impl Display for UnknownIdStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported id strategy `{}`; expected counter|uuid",
            self.0
        )
    }
}

impl Error for UnknownIdStrategy {}

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "counter" => Ok(Self::Counter),
            "uuid" => Ok(Self::Uuid),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}
