//! Core logic for QuickNote.
//! Owns the item model, the persisted list facade and screen state.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{new_item_id, Item, ItemId};
pub use repo::item_repo::{ItemRepository, KvItemRepository, RepoError, RepoResult, ITEMS_KEY};
pub use screen::items_screen::{ItemRow, ItemsScreen, ScreenOutcome};
pub use store::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
