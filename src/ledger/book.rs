//! In-memory expense collection and its mutation and query surface.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::calendar::{self, MonthKey};
use crate::catalog::{DEFAULT_BANK, FALLBACK_KEY};
use crate::clock::Clock;
use crate::domain::{Expense, ExpenseDraft, ExpensePatch};
use crate::ledger::aggregate::{self, GroupTotals};
use crate::ledger::archive::ExpenseArchive;
use crate::ledger::policy;

/// Emitted to subscribers after every applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Loaded { count: usize },
    Added { id: String },
    Updated { id: String },
    Removed { id: String },
    Cleared,
}

type Listener = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Single-writer expense ledger.
///
/// Construct with [`ExpenseBook::new`], hydrate once with [`init`], then
/// mutate through the expense methods. Every derived view recomputes from
/// current state on each call; nothing is cached.
///
/// [`init`]: ExpenseBook::init
pub struct ExpenseBook {
    archive: ExpenseArchive,
    clock: Arc<dyn Clock>,
    expenses: Vec<Expense>,
    loaded: bool,
    listeners: Vec<Listener>,
}

impl ExpenseBook {
    pub fn new(archive: ExpenseArchive, clock: Arc<dyn Clock>) -> Self {
        Self {
            archive,
            clock,
            expenses: Vec::new(),
            loaded: false,
            listeners: Vec::new(),
        }
    }

    /// Hydrates the book from the archive. Until this runs the persistence
    /// guard holds: mutations stay in memory and never touch the slot, so an
    /// unhydrated book cannot wipe existing data.
    ///
    /// Loaded records are written straight back, which re-persists any
    /// repairs the lenient deserialization applied.
    pub fn init(&mut self) {
        self.expenses = self.archive.load();
        self.loaded = true;
        self.archive.save(&self.expenses);
        self.emit(ChangeEvent::Loaded {
            count: self.expenses.len(),
        });
    }

    /// True once [`init`](ExpenseBook::init) has hydrated the book.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Registers a listener fired after every applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&ChangeEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Inserts a new expense at the front of the collection and returns it.
    /// Absent draft fields fall back to the ledger defaults; an unreadable
    /// amount is written as zero rather than rejected.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: draft.amount.map(|input| input.coerce()).unwrap_or(0.0),
            category: non_empty(draft.category).unwrap_or_else(|| FALLBACK_KEY.to_string()),
            bank: non_empty(draft.bank).unwrap_or_else(|| DEFAULT_BANK.to_string()),
            date: non_empty(draft.date).unwrap_or_else(|| calendar::day_key(self.clock.today())),
            description: draft.description.unwrap_or_default(),
            created_at: self.clock.stamp(),
            updated_at: None,
        };
        debug!(id = %expense.id, amount = expense.amount, "adding expense");
        self.expenses.insert(0, expense.clone());
        self.persist();
        self.emit(ChangeEvent::Added {
            id: expense.id.clone(),
        });
        expense
    }

    /// Merges `patch` onto the matching record and stamps `updated_at`.
    /// An unreadable patched amount keeps the stored amount rather than
    /// zeroing it. Unknown ids are a logged no-op.
    pub fn update_expense(&mut self, id: &str, patch: ExpensePatch) {
        let now = self.clock.stamp();
        let index = match self.expenses.iter().position(|e| e.id == id) {
            Some(index) => index,
            None => {
                debug!(%id, "update for unknown expense ignored");
                return;
            }
        };
        {
            let expense = &mut self.expenses[index];
            if let Some(input) = patch.amount {
                if let Some(value) = input.parsed() {
                    expense.amount = value;
                }
            }
            if let Some(category) = patch.category {
                expense.category = category;
            }
            if let Some(bank) = patch.bank {
                expense.bank = bank;
            }
            if let Some(date) = patch.date {
                expense.date = date;
            }
            if let Some(description) = patch.description {
                expense.description = description;
            }
            expense.updated_at = Some(now);
        }
        debug!(%id, "updated expense");
        self.persist();
        self.emit(ChangeEvent::Updated { id: id.to_string() });
    }

    /// Removes the matching record. Deleting an id that is not present
    /// changes nothing and emits nothing.
    pub fn delete_expense(&mut self, id: &str) {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        if self.expenses.len() == before {
            return;
        }
        debug!(%id, "deleted expense");
        self.persist();
        self.emit(ChangeEvent::Removed { id: id.to_string() });
    }

    pub fn expense_by_id(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Empties the collection and removes the durable slot entirely, so a
    /// fresh load starts from nothing.
    pub fn clear_all(&mut self) {
        self.expenses.clear();
        self.archive.clear();
        self.emit(ChangeEvent::Cleared);
    }

    /// Whether the expense may still be edited under the month-boundary
    /// policy. Advisory: edit surfaces check it, the mutations do not.
    pub fn can_edit(&self, expense: &Expense) -> bool {
        policy::editable(expense, self.clock.today())
    }

    /// Every record, newest first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Records dated in the current local month, preserving order.
    pub fn current_month_expenses(&self) -> Vec<Expense> {
        let month = MonthKey::of(self.clock.today());
        self.expenses
            .iter()
            .filter(|expense| expense.day().map_or(false, |day| month.contains(day)))
            .cloned()
            .collect()
    }

    /// Records dated on the current local day.
    pub fn today_expenses(&self) -> Vec<Expense> {
        let today = self.clock.today();
        self.expenses
            .iter()
            .filter(|expense| expense.day() == Some(today))
            .cloned()
            .collect()
    }

    pub fn total_current_month(&self) -> f64 {
        aggregate::sum_amounts(&self.current_month_expenses())
    }

    pub fn total_today(&self) -> f64 {
        aggregate::sum_amounts(&self.today_expenses())
    }

    /// Current-month records bucketed by category key.
    pub fn expenses_by_category(&self) -> HashMap<String, GroupTotals> {
        aggregate::group_by(&self.current_month_expenses(), |expense| {
            expense.category_key()
        })
    }

    /// Current-month records bucketed by payment-method key.
    pub fn expenses_by_bank(&self) -> HashMap<String, GroupTotals> {
        aggregate::group_by(&self.current_month_expenses(), |expense| expense.bank_key())
    }

    fn persist(&self) {
        if !self.loaded {
            debug!("skipping persist before init");
            return;
        }
        self.archive.save(&self.expenses);
    }

    fn emit(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
