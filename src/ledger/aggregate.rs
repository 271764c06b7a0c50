//! Grouping and totals over expense subsets.
//!
//! Buckets key on opaque strings; turning a key into display metadata is the
//! caller's job via the catalog tables. Iteration order of the returned maps
//! is unspecified, consumers sort what they present.

use std::collections::HashMap;

use crate::domain::Expense;

/// Accumulated figures for one grouping key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTotals {
    pub total: f64,
    pub count: usize,
    pub expenses: Vec<Expense>,
}

/// Buckets `expenses` by `key_of`, accumulating totals, counts, and members.
pub fn group_by<F>(expenses: &[Expense], key_of: F) -> HashMap<String, GroupTotals>
where
    F: Fn(&Expense) -> &str,
{
    let mut groups: HashMap<String, GroupTotals> = HashMap::new();
    for expense in expenses {
        let bucket = groups.entry(key_of(expense).to_string()).or_default();
        bucket.total += safe_amount(expense.amount);
        bucket.count += 1;
        bucket.expenses.push(expense.clone());
    }
    groups
}

/// Plain sum over a subset. Non-finite amounts count as zero; load-time
/// repair should already have removed them.
pub fn sum_amounts(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|expense| safe_amount(expense.amount))
        .sum()
}

fn safe_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}
