//! Persistence facade over the key-value store.
//!
//! # Responsibility
//! - Mediate all access to the stored item list.
//! - Keep JSON encoding details away from screen and FFI layers.

pub mod item_repo;
