pub mod expense;
pub mod profile;

pub use expense::{AmountInput, Expense, ExpenseDraft, ExpensePatch};
pub use profile::{AuthSnapshot, LoginDetails, ProfilePatch, UserProfile};
