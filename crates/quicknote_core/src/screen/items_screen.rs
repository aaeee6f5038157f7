//! Note entry screen state.
//!
//! # Responsibility
//! - Own the title/description inputs and the displayed item list.
//! - Drive `ItemRepository::load` on mount and `save` on the save action.
//!
//! # Invariants
//! - `mount` loads at most once per screen instance.
//! - A failed action leaves every field exactly as it was.
//! - Inputs are cleared only after a successful save.
//! - No validation runs on empty inputs.

use crate::model::item::Item;
use crate::repo::item_repo::ItemRepository;
use log::{error, info};

/// Result of one screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOutcome {
    /// The action ran and its result replaced screen state.
    Applied,
    /// The facade returned an error; state is unchanged.
    Failed,
    /// The action did not run (repeated mount).
    Skipped,
}

/// Render model for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// State behind the note entry screen.
pub struct ItemsScreen<R: ItemRepository> {
    repo: R,
    title: String,
    description: String,
    items: Vec<Item>,
    mounted: bool,
}

impl<R: ItemRepository> ItemsScreen<R> {
    /// Creates an unmounted screen with empty inputs and no items.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            title: String::new(),
            description: String::new(),
            items: Vec::new(),
            mounted: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Loads the stored list the first time the screen is shown.
    ///
    /// Later calls return `ScreenOutcome::Skipped` without touching storage.
    /// A failed load still counts as the one mount attempt.
    pub fn mount(&mut self) -> ScreenOutcome {
        if self.mounted {
            return ScreenOutcome::Skipped;
        }
        self.mounted = true;

        match self.repo.load() {
            Ok(items) => {
                info!(
                    "event=screen_mount module=screen status=ok count={}",
                    items.len()
                );
                self.items = items;
                ScreenOutcome::Applied
            }
            Err(err) => {
                error!(
                    "event=screen_mount module=screen status=error error_code={} error={err}",
                    err.code()
                );
                ScreenOutcome::Failed
            }
        }
    }

    /// Saves the current inputs as a new item.
    ///
    /// On success the returned list replaces the held one and both inputs
    /// are cleared.
    pub fn press_save(&mut self) -> ScreenOutcome {
        match self.repo.save(&self.title, &self.description) {
            Ok(items) => {
                info!(
                    "event=screen_save module=screen status=ok count={}",
                    items.len()
                );
                self.items = items;
                self.title.clear();
                self.description.clear();
                ScreenOutcome::Applied
            }
            Err(err) => {
                error!(
                    "event=screen_save module=screen status=error error_code={} error={err}",
                    err.code()
                );
                ScreenOutcome::Failed
            }
        }
    }

    /// Rows to render, in stored order.
    pub fn rows(&self) -> Vec<ItemRow<'_>> {
        self.items
            .iter()
            .map(|item| ItemRow {
                id: item.id.as_str(),
                title: item.title.as_str(),
                description: item.description.as_str(),
            })
            .collect()
    }
}
