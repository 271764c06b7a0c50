//! Persistence adapter for the expense collection.
//!
//! The slot is externally editable, so nothing here fails outward: unreadable
//! content degrades to an empty collection and write problems are logged and
//! swallowed, leaving in-memory state authoritative for the session.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Expense;
use crate::storage::{SlotStore, EXPENSES_SLOT};

pub struct ExpenseArchive {
    store: Arc<dyn SlotStore>,
}

impl ExpenseArchive {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Hydrates the collection. Absent or damaged slots read as empty, and
    /// records that fail to deserialize are skipped one by one so a single
    /// tampered entry cannot empty the ledger.
    pub fn load(&self) -> Vec<Expense> {
        let raw = match self.store.read(EXPENSES_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(%error, "expense slot unreadable, starting empty");
                return Vec::new();
            }
        };
        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("expense slot does not hold an array, starting empty");
                return Vec::new();
            }
            Err(error) => {
                warn!(%error, "expense slot holds malformed JSON, starting empty");
                return Vec::new();
            }
        };
        let mut expenses = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Expense>(item) {
                Ok(expense) => expenses.push(expense),
                Err(error) => warn!(%error, "skipping unreadable expense record"),
            }
        }
        debug!(count = expenses.len(), "hydrated expense collection");
        expenses
    }

    /// Persists the full collection, newest first as held in memory.
    pub fn save(&self, expenses: &[Expense]) {
        let payload = match serde_json::to_string(expenses) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "could not serialize expense collection");
                return;
            }
        };
        if let Err(error) = self.store.write(EXPENSES_SLOT, &payload) {
            warn!(%error, "could not persist expense collection");
        } else {
            debug!(count = expenses.len(), "persisted expense collection");
        }
    }

    /// Removes the slot entirely. A later save recreates it.
    pub fn clear(&self) {
        if let Err(error) = self.store.remove(EXPENSES_SLOT) {
            warn!(%error, "could not remove expense slot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn archive_with_store() -> (ExpenseArchive, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let archive = ExpenseArchive::new(store.clone());
        (archive, store)
    }

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            category: "food".to_string(),
            bank: "cash".to_string(),
            date: "2025-03-15".to_string(),
            description: String::new(),
            created_at: "2025-03-15T09:00:00.000Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn missing_slot_loads_empty() {
        let (archive, _store) = archive_with_store();
        assert!(archive.load().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (archive, _store) = archive_with_store();
        let expenses = vec![expense("e-2", 10.0), expense("e-1", 20.0)];
        archive.save(&expenses);
        assert_eq!(archive.load(), expenses);
    }

    #[test]
    fn malformed_slot_loads_empty() {
        let (archive, store) = archive_with_store();
        store.write(EXPENSES_SLOT, "definitely not json").expect("write");
        assert!(archive.load().is_empty());

        store.write(EXPENSES_SLOT, r#"{"not":"an array"}"#).expect("write");
        assert!(archive.load().is_empty());
    }

    #[test]
    fn unreadable_records_are_skipped_individually() {
        let (archive, store) = archive_with_store();
        store
            .write(
                EXPENSES_SLOT,
                r#"[{"id":"good","amount":5},42,{"id":"also-good","amount":"7"}]"#,
            )
            .expect("write");
        let loaded = archive.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "good");
        assert_eq!(loaded[1].id, "also-good");
        assert_eq!(loaded[1].amount, 7.0);
    }

    #[test]
    fn clear_removes_the_slot() {
        let (archive, store) = archive_with_store();
        archive.save(&[expense("e-1", 1.0)]);
        archive.clear();
        assert_eq!(store.read(EXPENSES_SLOT).expect("read"), None);
    }
}
