//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the item save/load facade to Dart via FRB.
//! - Convert core errors into plain response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call opens the configured database; no connection is cached.
//! - Dart owns screen state; these calls only mediate storage.

use log::warn;
use quicknote_core::db::open_db;
use quicknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, Item, ItemRepository, KvItemRepository, RepoResult, SqliteKvStore,
};
use std::sync::OnceLock;

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One item as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Stable item ID in string form.
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
        }
    }
}

/// Response envelope for item save/load calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Full stored list on success; empty on failure.
    pub items: Vec<ItemView>,
    /// Human-readable diagnostics message.
    pub message: String,
}

impl ItemsResponse {
    fn from_result(operation: &str, result: Result<Vec<Item>, String>) -> Self {
        match result {
            Ok(items) => Self {
                ok: true,
                message: format!("{} item(s).", items.len()),
                items: items.into_iter().map(ItemView::from).collect(),
            },
            Err(err) => {
                warn!("event=ffi_call module=ffi status=error op={operation}");
                Self {
                    ok: false,
                    items: Vec::new(),
                    message: format!("{operation} failed: {err}"),
                }
            }
        }
    }
}

/// Loads every stored item.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Returns `ok=true` with an empty list when nothing was saved yet.
#[flutter_rust_bridge::frb(sync)]
pub fn items_load() -> ItemsResponse {
    ItemsResponse::from_result("items_load", with_item_repo(|repo| repo.load()))
}

/// Appends one item and returns the full updated list.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Inputs are stored as given; empty strings are accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn items_save(title: String, description: String) -> ItemsResponse {
    ItemsResponse::from_result(
        "items_save",
        with_item_repo(|repo| repo.save(&title, &description)),
    )
}

fn config() -> &'static CoreConfig {
    CONFIG.get_or_init(CoreConfig::from_env)
}

fn with_item_repo(
    f: impl FnOnce(&KvItemRepository<SqliteKvStore<'_>>) -> RepoResult<Vec<Item>>,
) -> Result<Vec<Item>, String> {
    let conn = open_db(&config().db_path).map_err(|err| format!("DB open failed: {err}"))?;
    let store = SqliteKvStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let repo = KvItemRepository::new(store);
    f(&repo).map_err(|err| err.to_string())
}
