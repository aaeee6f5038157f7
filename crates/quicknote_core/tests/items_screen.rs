use quicknote_core::{
    Item, ItemRepository, ItemsScreen, KvItemRepository, MemoryKvStore, RepoError, RepoResult,
    ScreenOutcome, StoreError, ITEMS_KEY,
};
use std::cell::{Cell, RefCell};

/// Scripted repository double that records calls.
#[derive(Default)]
struct ScriptedRepo {
    items: RefCell<Vec<Item>>,
    fail_load: Cell<bool>,
    fail_save: Cell<bool>,
    load_calls: Cell<u32>,
    saved_inputs: RefCell<Vec<(String, String)>>,
}

impl ItemRepository for &ScriptedRepo {
    fn save(&self, title: &str, description: &str) -> RepoResult<Vec<Item>> {
        self.saved_inputs
            .borrow_mut()
            .push((title.to_string(), description.to_string()));
        if self.fail_save.get() {
            return Err(RepoError::Store(StoreError::Unavailable(
                "set rejected".to_string(),
            )));
        }
        self.items.borrow_mut().push(Item::new(title, description));
        Ok(self.items.borrow().clone())
    }

    fn load(&self) -> RepoResult<Vec<Item>> {
        self.load_calls.set(self.load_calls.get() + 1);
        if self.fail_load.get() {
            return Err(RepoError::Store(StoreError::Unavailable(
                "get rejected".to_string(),
            )));
        }
        Ok(self.items.borrow().clone())
    }
}

#[test]
fn new_screen_starts_empty_and_unmounted() {
    let screen = ItemsScreen::new(KvItemRepository::new(MemoryKvStore::new()));
    assert!(!screen.is_mounted());
    assert_eq!(screen.title(), "");
    assert_eq!(screen.description(), "");
    assert!(screen.items().is_empty());
}

#[test]
fn mount_loads_stored_items_once() {
    let repo = ScriptedRepo::default();
    repo.items.borrow_mut().push(Item::new("stored", "before mount"));
    let mut screen = ItemsScreen::new(&repo);

    assert_eq!(screen.mount(), ScreenOutcome::Applied);
    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.mount(), ScreenOutcome::Skipped);
    assert_eq!(repo.load_calls.get(), 1);
}

#[test]
fn failed_mount_keeps_initial_empty_list() {
    let repo = ScriptedRepo::default();
    repo.items.borrow_mut().push(Item::new("hidden", "unreachable"));
    repo.fail_load.set(true);
    let mut screen = ItemsScreen::new(&repo);

    assert_eq!(screen.mount(), ScreenOutcome::Failed);
    assert!(screen.items().is_empty());
    assert!(screen.is_mounted());
}

#[test]
fn save_replaces_items_and_clears_inputs() {
    let store = MemoryKvStore::new();
    let mut screen = ItemsScreen::new(KvItemRepository::new(&store));
    screen.mount();

    screen.set_title("Milk");
    screen.set_description("Buy milk");
    assert_eq!(screen.press_save(), ScreenOutcome::Applied);

    assert_eq!(screen.title(), "");
    assert_eq!(screen.description(), "");
    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Milk");
    assert_eq!(rows[0].description, "Buy milk");
    assert_eq!(rows[0].id, screen.items()[0].id);
}

#[test]
fn failed_save_keeps_inputs_and_items() {
    let repo = ScriptedRepo::default();
    let mut screen = ItemsScreen::new(&repo);
    screen.mount();

    screen.set_title("first");
    screen.set_description("ok");
    assert_eq!(screen.press_save(), ScreenOutcome::Applied);

    repo.fail_save.set(true);
    screen.set_title("second");
    screen.set_description("rejected");
    assert_eq!(screen.press_save(), ScreenOutcome::Failed);

    assert_eq!(screen.title(), "second");
    assert_eq!(screen.description(), "rejected");
    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.items()[0].title, "first");
}

#[test]
fn empty_inputs_are_saved_without_validation() {
    let repo = ScriptedRepo::default();
    let mut screen = ItemsScreen::new(&repo);

    assert_eq!(screen.press_save(), ScreenOutcome::Applied);
    assert_eq!(
        repo.saved_inputs.borrow().as_slice(),
        &[(String::new(), String::new())]
    );
}

#[test]
fn corrupted_store_fails_mount_and_save_without_touching_state() {
    let store = MemoryKvStore::with_entries([(ITEMS_KEY, "[{broken")]);
    let mut screen = ItemsScreen::new(KvItemRepository::new(&store));

    assert_eq!(screen.mount(), ScreenOutcome::Failed);
    screen.set_title("t");
    assert_eq!(screen.press_save(), ScreenOutcome::Failed);
    assert_eq!(screen.title(), "t");
    assert!(screen.items().is_empty());
}

#[test]
fn second_screen_sees_items_saved_by_first() {
    let store = MemoryKvStore::new();
    {
        let mut first = ItemsScreen::new(KvItemRepository::new(&store));
        first.mount();
        first.set_title("a");
        first.set_description("b");
        first.press_save();
    }

    let mut second = ItemsScreen::new(KvItemRepository::new(&store));
    second.mount();
    assert_eq!(second.items().len(), 1);
    assert_eq!(second.items()[0].title, "a");
}
