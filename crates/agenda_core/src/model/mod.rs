//! Domain model for the agenda list.
//!
//! # Responsibility
//! - Define the entry record shared by list operations, session and UI layers.
//! - Own the invariants every entry list must satisfy.
//!
//! # Invariants
//! - Every entry is identified by a stable, non-empty `EntryId`.
//! - Entry text is never blank after trimming.

pub mod entry;
