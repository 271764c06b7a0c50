//! The expense record and its write-side payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calendar;
use crate::catalog::FALLBACK_KEY;

/// A single ledger entry.
///
/// Field names mirror the durable slot layout so collections written by
/// earlier schema revisions load unchanged. Every field defaults on
/// deserialization because the slot is externally editable and partial
/// records must still hydrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub bank: String,
    /// Calendar day as `YYYY-MM-DD` text, kept verbatim as stored.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Expense {
    /// Strictly parsed calendar day, `None` when the stored text is not a
    /// date. Records without a parsable day drop out of the temporal views.
    pub fn day(&self) -> Option<NaiveDate> {
        calendar::parse_day(&self.date)
    }

    /// Category grouping key; records without one land in the catch-all
    /// bucket.
    pub fn category_key(&self) -> &str {
        if self.category.is_empty() {
            FALLBACK_KEY
        } else {
            &self.category
        }
    }

    /// Payment-method grouping key with the same catch-all fallback.
    pub fn bank_key(&self) -> &str {
        if self.bank.is_empty() {
            FALLBACK_KEY
        } else {
            &self.bank
        }
    }
}

/// Raw amount as a form submits it: a number, or text that may or may not
/// read as one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// The numeric value when one can be read out of the input.
    pub fn parsed(&self) -> Option<f64> {
        match self {
            AmountInput::Number(value) if value.is_finite() => Some(*value),
            AmountInput::Number(_) => None,
            AmountInput::Text(raw) => {
                raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
            }
        }
    }

    /// Numeric value with the write-side repair applied: anything unreadable
    /// becomes zero.
    pub fn coerce(&self) -> f64 {
        self.parsed().unwrap_or(0.0)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

/// Write payload for `add_expense`. Absent fields fall back to the ledger
/// defaults at insert time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseDraft {
    pub amount: Option<AmountInput>,
    pub category: Option<String>,
    pub bank: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl ExpenseDraft {
    /// Draft carrying only an amount, the minimum a form submits.
    pub fn new(amount: impl Into<AmountInput>) -> Self {
        Self {
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update merged onto a stored expense by `update_expense`. `None`
/// fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpensePatch {
    pub amount: Option<AmountInput>,
    pub category: Option<String>,
    pub bank: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl ExpensePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Load-time repair for amounts written by older revisions: numbers pass
/// through, numeric strings are parsed, everything else reads as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(repair_amount(&raw))
}

fn repair_amount(raw: &Value) -> f64 {
    match raw {
        Value::Number(number) => number
            .as_f64()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let expense = Expense {
            id: "e-1".to_string(),
            amount: 250.0,
            category: "food".to_string(),
            bank: "cash".to_string(),
            date: "2025-03-15".to_string(),
            description: String::new(),
            created_at: "2025-03-15T09:00:00.000Z".to_string(),
            updated_at: None,
        };
        let json = serde_json::to_string(&expense).expect("serialize expense");
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"updatedAt\""), "absent until first edit");

        let back: Expense = serde_json::from_str(&json).expect("parse expense");
        assert_eq!(back, expense);
    }

    #[test]
    fn updated_at_appears_once_set() {
        let expense = Expense {
            id: "e-1".to_string(),
            amount: 1.0,
            category: "food".to_string(),
            bank: "cash".to_string(),
            date: "2025-03-15".to_string(),
            description: String::new(),
            created_at: "2025-03-15T09:00:00.000Z".to_string(),
            updated_at: Some("2025-03-16T10:00:00.000Z".to_string()),
        };
        let json = serde_json::to_string(&expense).expect("serialize expense");
        assert!(json.contains("\"updatedAt\":\"2025-03-16T10:00:00.000Z\""));
    }

    #[test]
    fn loads_partial_records_with_defaults() {
        let expense: Expense = serde_json::from_str(r#"{"id":"e-9"}"#).expect("parse");
        assert_eq!(expense.id, "e-9");
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.category, "");
        assert_eq!(expense.category_key(), "other");
        assert_eq!(expense.bank_key(), "other");
        assert_eq!(expense.day(), None);
    }

    #[test]
    fn repairs_string_amounts_on_load() {
        let expense: Expense =
            serde_json::from_str(r#"{"id":"e-1","amount":"42.5"}"#).expect("parse");
        assert_eq!(expense.amount, 42.5);

        let broken: Expense =
            serde_json::from_str(r#"{"id":"e-2","amount":"lots"}"#).expect("parse");
        assert_eq!(broken.amount, 0.0);

        let null_amount: Expense =
            serde_json::from_str(r#"{"id":"e-3","amount":null}"#).expect("parse");
        assert_eq!(null_amount.amount, 0.0);
    }

    #[test]
    fn amount_input_coercion() {
        assert_eq!(AmountInput::from(250.0).coerce(), 250.0);
        assert_eq!(AmountInput::from("42.5").coerce(), 42.5);
        assert_eq!(AmountInput::from(" 42.5 ").coerce(), 42.5);
        assert_eq!(AmountInput::from("abc").coerce(), 0.0);
        assert_eq!(AmountInput::from("").coerce(), 0.0);
        assert_eq!(AmountInput::Number(f64::NAN).coerce(), 0.0);
    }

    #[test]
    fn amount_input_parsed_reports_unreadable_as_none() {
        assert_eq!(AmountInput::from("abc").parsed(), None);
        assert_eq!(AmountInput::from("150").parsed(), Some(150.0));
        assert_eq!(AmountInput::from(0.0).parsed(), Some(0.0));
    }

    #[test]
    fn draft_builder_fills_fields() {
        let draft = ExpenseDraft::new(120.0)
            .with_category("food")
            .with_bank("hdfc")
            .with_date("2025-03-15")
            .with_description("lunch");
        assert_eq!(draft.amount.as_ref().map(AmountInput::coerce), Some(120.0));
        assert_eq!(draft.category.as_deref(), Some("food"));
        assert_eq!(draft.bank.as_deref(), Some("hdfc"));
        assert_eq!(draft.date.as_deref(), Some("2025-03-15"));
        assert_eq!(draft.description.as_deref(), Some("lunch"));
    }

    #[test]
    fn drafts_deserialize_from_form_json() {
        let draft: ExpenseDraft =
            serde_json::from_str(r#"{"amount":"99","category":"food"}"#).expect("parse draft");
        assert_eq!(draft.amount.as_ref().map(AmountInput::coerce), Some(99.0));
        assert_eq!(draft.category.as_deref(), Some("food"));
        assert!(draft.bank.is_none());
    }
}
