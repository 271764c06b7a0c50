//! Named durable slots, the crate's only persistence mechanism.

pub mod backup;
pub mod json_backend;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Slot holding the serialized expense collection.
pub const EXPENSES_SLOT: &str = "expensewise_expenses";
/// Slot holding the auth snapshot.
pub const AUTH_SLOT: &str = "expensewise_auth";
/// Session-scoped slot holding the pending OTP record.
pub const OTP_SLOT: &str = "expensewise_otp";

/// Abstraction over named durable slots.
///
/// Implementations tolerate concurrent writers only in the last-write-wins
/// sense; nothing here locks.
pub trait SlotStore: Send + Sync {
    /// Reads a slot. `None` when it has never been written or was removed.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replaces the slot contents.
    fn write(&self, slot: &str, payload: &str) -> Result<()>;

    /// Deletes the slot. Absent slots are not an error.
    fn remove(&self, slot: &str) -> Result<()>;

    /// Removes every slot in the profile.
    fn clear_all(&self) -> Result<()>;
}

pub use backup::{write_backup, BackupDocument, BackupUser};
pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
