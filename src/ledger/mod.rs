//! The expense ledger: persistence adapter, mutation surface, derived
//! monthly views, and the month-boundary edit policy.

pub mod aggregate;
pub mod archive;
pub mod book;
pub mod policy;

pub use aggregate::GroupTotals;
pub use archive::ExpenseArchive;
pub use book::{ChangeEvent, ExpenseBook};
