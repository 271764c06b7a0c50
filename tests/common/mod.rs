use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use expensewise_core::clock::FixedClock;
use expensewise_core::ledger::{ChangeEvent, ExpenseArchive, ExpenseBook};
use expensewise_core::storage::{JsonFileStore, MemoryStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Calendar day the suites anchor on, a mid-month Saturday.
pub fn anchor_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid anchor day")
}

/// Hydrated book over an in-memory store and a fixed clock.
#[allow(dead_code)]
pub fn memory_book() -> (ExpenseBook, Arc<MemoryStore>, Arc<FixedClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::on(anchor_day()));
    let mut book = ExpenseBook::new(ExpenseArchive::new(store.clone()), clock.clone());
    book.init();
    (book, store, clock)
}

/// Hydrated book persisting into a unique temp directory. The store is
/// returned so another book can reopen the same files.
#[allow(dead_code)]
pub fn file_book() -> (ExpenseBook, Arc<JsonFileStore>, Arc<FixedClock>) {
    let temp = TempDir::new().expect("create temp dir");
    let store = Arc::new(JsonFileStore::new(temp.path()).expect("create file store"));
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let clock = Arc::new(FixedClock::on(anchor_day()));
    let mut book = ExpenseBook::new(ExpenseArchive::new(store.clone()), clock.clone());
    book.init();
    (book, store, clock)
}

/// Subscribes a collector to `book` and returns the shared event log.
#[allow(dead_code)]
pub fn record_events(book: &mut ExpenseBook) -> Arc<Mutex<Vec<ChangeEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    book.subscribe(move |event| {
        sink.lock().expect("event sink poisoned").push(event.clone());
    });
    events
}
