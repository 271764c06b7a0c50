use std::collections::HashMap;
use std::sync::Mutex;

use super::{Result, SlotStore};

/// Session-scoped slot store held entirely in memory. Backs the OTP flow,
/// which must not outlive the process, and doubles as the test store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("slot map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .lock()
            .expect("slot map poisoned")
            .get(slot)
            .cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        self.slots
            .lock()
            .expect("slot map poisoned")
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.slots.lock().expect("slot map poisoned").remove(slot);
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        self.slots.lock().expect("slot map poisoned").clear();
        Ok(())
    }
}
