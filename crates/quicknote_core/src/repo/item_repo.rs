//! Item persistence facade over a key-value store.
//!
//! # Responsibility
//! - Own every read/modify/write of the `items` key.
//! - Translate between the stored JSON array and `Vec<Item>`.
//!
//! # Invariants
//! - A missing key and an empty stored string both mean "no items".
//! - `save` appends; prior order is never changed.
//! - A stored value that fails to parse is never overwritten by `save`.
//! - `save` is read-modify-write without locking; overlapping saves on the
//!   same store can lose an append (last writer wins on the whole blob).
//! - Errors are logged here and then returned unchanged to the caller.

use crate::model::item::{new_item_id, Item, ItemId};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Store key holding the serialized item list.
pub const ITEMS_KEY: &str = "items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of a facade operation.
#[derive(Debug)]
pub enum RepoError {
    /// The store rejected a get or set.
    Store(StoreError),
    /// The stored value is not a valid item list.
    Decode(serde_json::Error),
    /// The item list could not be serialized.
    Encode(serde_json::Error),
}

impl RepoError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Store(_) => "store_failed",
            Self::Decode(_) => "items_decode_failed",
            Self::Encode(_) => "items_encode_failed",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "invalid stored item list: {err}"),
            Self::Encode(err) => write!(f, "failed to serialize item list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Save/load contract for the persisted item list.
pub trait ItemRepository {
    /// Appends a new item and returns the full updated list.
    fn save(&self, title: &str, description: &str) -> RepoResult<Vec<Item>>;
    /// Returns the full stored list, empty when nothing was saved yet.
    fn load(&self) -> RepoResult<Vec<Item>>;
}

/// `ItemRepository` storing the whole list as one JSON blob.
pub struct KvItemRepository<S: KeyValueStore> {
    store: S,
    next_id: fn() -> ItemId,
}

impl<S: KeyValueStore> KvItemRepository<S> {
    /// Creates a repository generating UUID v4 string ids.
    pub fn new(store: S) -> Self {
        Self::with_id_source(store, new_item_id)
    }

    /// Creates a repository with a caller-provided id generator.
    pub fn with_id_source(store: S, next_id: fn() -> ItemId) -> Self {
        Self { store, next_id }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_items(&self) -> RepoResult<Vec<Item>> {
        match self.store.get(ITEMS_KEY)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw).map_err(RepoError::Decode),
            _ => Ok(Vec::new()),
        }
    }

    fn write_items(&self, items: &[Item]) -> RepoResult<()> {
        let raw = serde_json::to_string(items).map_err(RepoError::Encode)?;
        self.store.set(ITEMS_KEY, &raw)?;
        Ok(())
    }
}

impl<S: KeyValueStore> ItemRepository for KvItemRepository<S> {
    fn save(&self, title: &str, description: &str) -> RepoResult<Vec<Item>> {
        let started_at = Instant::now();
        let item = Item::with_id((self.next_id)(), title, description);

        let result = self.read_items().and_then(|mut items| {
            items.push(item);
            self.write_items(&items)?;
            Ok(items)
        });

        log_outcome("items_save", started_at, &result);
        result
    }

    fn load(&self) -> RepoResult<Vec<Item>> {
        let started_at = Instant::now();
        let result = self.read_items();
        log_outcome("items_load", started_at, &result);
        result
    }
}

fn log_outcome(event: &str, started_at: Instant, result: &RepoResult<Vec<Item>>) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(items) => debug!(
            "event={event} module=repo status=ok count={} duration_ms={duration_ms}",
            items.len()
        ),
        Err(err) => error!(
            "event={event} module=repo status=error duration_ms={duration_ms} error_code={} error={err}",
            err.code()
        ),
    }
}
