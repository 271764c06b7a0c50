//! Month-boundary edit eligibility.

use chrono::NaiveDate;

use crate::calendar::MonthKey;
use crate::domain::Expense;

/// An expense stays editable while its date sits in the calendar month
/// containing `today`; it locks the moment the month rolls over. Derived on
/// every check, never stored, and advisory only: callers gate their edit
/// surfaces on it, the mutations themselves do not.
pub fn editable(expense: &Expense, today: NaiveDate) -> bool {
    match expense.day() {
        Some(day) => MonthKey::of(day) == MonthKey::of(today),
        None => false,
    }
}
