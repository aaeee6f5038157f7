//! Domain model for persisted note items.
//!
//! # Responsibility
//! - Define the record shape shared by storage, screen state and FFI.
//!
//! # Invariants
//! - Every item is identified by an `ItemId` generated at creation.
//! - Items are immutable once created; there is no update path.

pub mod item;
