//! Screen state for hosts that render the item list.
//!
//! # Responsibility
//! - Hold transient input and the last list returned by the facade.
//! - Keep host UIs (Flutter, CLI) free of persistence logic.

pub mod items_screen;
