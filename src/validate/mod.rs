//! Form-layer validation.
//!
//! The ledger itself repairs bad input because the slot is untrusted; trusted
//! forms call these checks first when they want rejection instead of repair.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::{AmountInput, ExpenseDraft};

/// Longest description a form accepts.
pub const DESCRIPTION_MAX: usize = 150;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static OTP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("otp pattern"));

pub fn valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn valid_otp(code: &str) -> bool {
    OTP_PATTERN.is_match(code)
}

/// Readable and strictly positive.
pub fn valid_amount(input: &AmountInput) -> bool {
    input.parsed().map_or(false, |value| value > 0.0)
}

/// Trimmed length between 2 and 50 characters.
pub fn valid_name(name: &str) -> bool {
    let length = name.trim().chars().count();
    (NAME_MIN..=NAME_MAX).contains(&length)
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// One rejected field and its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Everything wrong with a submitted expense form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expense input failed validation, {} field(s) rejected", .fields.len())]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn field(&self, name: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|entry| entry.field == name)
            .map(|entry| entry.message)
    }
}

/// Strict pre-check trusted forms run before `add_expense`.
pub fn validate_expense(draft: &ExpenseDraft) -> Result<(), ValidationErrors> {
    let mut fields = Vec::new();
    if !draft.amount.as_ref().map_or(false, valid_amount) {
        fields.push(FieldError {
            field: "amount",
            message: "Please enter a valid amount",
        });
    }
    if !draft.category.as_deref().map_or(false, required) {
        fields.push(FieldError {
            field: "category",
            message: "Please select a category",
        });
    }
    if !draft.date.as_deref().map_or(false, required) {
        fields.push(FieldError {
            field: "date",
            message: "Please select a date",
        });
    }
    if !draft.bank.as_deref().map_or(false, required) {
        fields.push(FieldError {
            field: "bank",
            message: "Please select a payment method",
        });
    }
    if draft
        .description
        .as_deref()
        .map_or(false, |text| text.chars().count() > DESCRIPTION_MAX)
    {
        fields.push(FieldError {
            field: "description",
            message: "Description must be 150 characters or less",
        });
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(valid_email("asha@example.com"));
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("asha@example"));
        assert!(!valid_email("asha example@x.co"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn otp_must_be_exactly_six_digits() {
        assert!(valid_otp("123456"));
        assert!(!valid_otp("12345"));
        assert!(!valid_otp("1234567"));
        assert!(!valid_otp("12345a"));
        assert!(!valid_otp(""));
    }

    #[test]
    fn amounts_must_be_positive_and_readable() {
        assert!(valid_amount(&AmountInput::from(10.0)));
        assert!(valid_amount(&AmountInput::from("0.01")));
        assert!(!valid_amount(&AmountInput::from(0.0)));
        assert!(!valid_amount(&AmountInput::from(-5.0)));
        assert!(!valid_amount(&AmountInput::from("abc")));
    }

    #[test]
    fn names_trim_before_length_check() {
        assert!(valid_name("Jo"));
        assert!(valid_name("  Jo  "));
        assert!(!valid_name("J"));
        assert!(!valid_name("   "));
        assert!(!valid_name(&"x".repeat(51)));
    }

    #[test]
    fn expense_check_collects_every_failure() {
        let errors = validate_expense(&ExpenseDraft::default()).expect_err("empty draft");
        assert_eq!(errors.fields.len(), 4);
        assert_eq!(errors.field("amount"), Some("Please enter a valid amount"));
        assert_eq!(errors.field("category"), Some("Please select a category"));
        assert_eq!(errors.field("date"), Some("Please select a date"));
        assert_eq!(errors.field("bank"), Some("Please select a payment method"));
    }

    #[test]
    fn complete_draft_passes() {
        let draft = ExpenseDraft::new(120.0)
            .with_category("food")
            .with_bank("cash")
            .with_date("2025-03-15");
        assert!(validate_expense(&draft).is_ok());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let draft = ExpenseDraft::new(1.0)
            .with_category("food")
            .with_bank("cash")
            .with_date("2025-03-15")
            .with_description("x".repeat(DESCRIPTION_MAX + 1));
        let errors = validate_expense(&draft).expect_err("too long");
        assert_eq!(errors.fields.len(), 1);
        assert_eq!(errors.fields[0].field, "description");
    }

    #[test]
    fn zero_amount_is_rejected_even_though_the_ledger_would_store_it() {
        let draft = ExpenseDraft::new("abc")
            .with_category("food")
            .with_bank("cash")
            .with_date("2025-03-15");
        let errors = validate_expense(&draft).expect_err("unreadable amount");
        assert_eq!(errors.field("amount"), Some("Please enter a valid amount"));
    }
}
