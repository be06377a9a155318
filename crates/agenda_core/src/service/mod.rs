//! Agenda use-case services.
//!
//! # Responsibility
//! - Own the current entry list on behalf of the embedding UI.
//! - Turn raw drag gestures into reorder index pairs.

pub mod agenda_service;
pub mod drag;
