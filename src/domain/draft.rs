//! Draft - Transaction Form Model
//!
//! Holds what the transaction dialog collects and turns it into a
//! [`Transaction`] once every field validates.

use super::{Category, Transaction, TransactionKind, categories_for, find_category};
use crate::constants::ARGENTINA_UTC_OFFSET_SECS;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use snafu::Snafu;
use std::str::FromStr;

/// Reasons a draft cannot become a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum DraftError {
    #[snafu(display("amount must be a number greater than zero"))]
    InvalidAmount,
    #[snafu(display("date must be formatted as dd/mm/yyyy"))]
    InvalidDate,
    #[snafu(display("a category of the selected type is required"))]
    MissingCategory,
    #[snafu(display("description is required"))]
    MissingDescription,
}

impl DraftError {
    /// Key in the "dialog" translation namespace
    pub fn i18n_key(self) -> &'static str {
        match self {
            DraftError::InvalidAmount => "error_amount",
            DraftError::InvalidDate => "error_date",
            DraftError::MissingCategory => "error_category",
            DraftError::MissingDescription => "error_description",
        }
    }
}

/// Transaction being entered in the dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    kind: TransactionKind,
    category: Option<&'static str>,
    /// Raw amount text ("25000", "1.234,56", "ARS 10.50")
    pub amount: String,
    /// Raw date text (dd/mm/yyyy)
    pub date: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Switch kind; the chosen category is cleared since the option list changes.
    /// Returns whether anything changed.
    pub fn set_kind(&mut self, kind: TransactionKind) -> bool {
        if self.kind == kind {
            return false;
        }
        self.kind = kind;
        self.category = None;
        true
    }

    /// Category options for the current kind
    pub fn categories(&self) -> &'static [Category] {
        categories_for(self.kind)
    }

    pub fn category(&self) -> Option<&'static Category> {
        self.category.and_then(|value| find_category(self.kind, value))
    }

    /// Select a category by slug. Unknown slugs for the current kind are ignored.
    pub fn select_category(&mut self, value: &str) -> bool {
        match find_category(self.kind, value) {
            Some(category) => {
                self.category = Some(category.value);
                true
            }
            None => false,
        }
    }

    /// Fill the amount field from a quick-amount button
    pub fn apply_quick_amount(&mut self, amount: u64) {
        self.amount = amount.to_string();
    }

    /// Validate every field and build the transaction
    pub fn build(&self, id: impl Into<String>) -> Result<Transaction, DraftError> {
        let magnitude = parse_amount(&self.amount).ok_or(DraftError::InvalidAmount)?;
        let date = parse_date(&self.date).ok_or(DraftError::InvalidDate)?;
        let category = self.category().ok_or(DraftError::MissingCategory)?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        Ok(Transaction {
            id: id.into(),
            kind: self.kind,
            description: description.to_string(),
            amount: self.kind.signed(magnitude),
            date,
            category: category.label.to_string(),
        })
    }
}

/// Parse a positive amount written either as "1.234,56" or "1234.56"
///
/// A leading "ARS" or "$" is accepted. A dot followed by exactly three digits
/// groups thousands ("250.000" is 250000); a comma before a dot is rejected.
/// Result is rounded to cents.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("ARS")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$')
        .collect();

    let (int_part, frac_part) = match cleaned.split_once(',') {
        Some((_, frac)) if frac.contains(['.', ',']) => return None,
        Some((int, frac)) => (int, Some(frac)),
        None => match cleaned.rsplit_once('.') {
            Some((int, frac)) if frac.len() != 3 && !int.contains('.') => (int, Some(frac)),
            _ => (cleaned.as_str(), None),
        },
    };

    let mut normalized = ungroup_thousands(int_part)?;
    if let Some(frac) = frac_part {
        if !is_digits(frac) {
            return None;
        }
        normalized.push('.');
        normalized.push_str(frac);
    }

    let value = Decimal::from_str(&normalized).ok()?;
    (value > Decimal::ZERO).then(|| value.round_dp(2))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// "1.250.000" -> "1250000"; groups after the first must hold three digits
fn ungroup_thousands(int_part: &str) -> Option<String> {
    let mut groups = int_part.split('.');
    let first = groups.next()?;
    if !is_digits(first) {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        if first.len() > 3 || group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// Parse a dd/mm/yyyy (or yyyy-mm-dd) date as midnight in Argentine time
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()?;

    let offset = FixedOffset::east_opt(ARGENTINA_UTC_OFFSET_SECS)?;
    let local = offset.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()?;
    Some(local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;

    fn filled_expense() -> TransactionDraft {
        let mut draft = TransactionDraft::new(TransactionKind::Expense);
        draft.amount = "45.000,50".to_string();
        draft.date = "16/08/2025".to_string();
        draft.description = "  Compra de insumos ".to_string();
        assert!(draft.select_category("insumos"));
        draft
    }

    #[test]
    fn test_toggle_kind_swaps_categories() {
        let mut draft = TransactionDraft::default();
        assert_eq!(draft.kind(), TransactionKind::Expense);
        assert_eq!(draft.categories().len(), 6);

        assert!(draft.set_kind(TransactionKind::Income));
        let labels: Vec<_> = draft.categories().iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Ventas", "Consultoría", "Otros Ingresos"]);

        assert!(!draft.set_kind(TransactionKind::Income));
    }

    #[test]
    fn test_toggle_kind_clears_category() {
        let mut draft = filled_expense();
        assert_eq!(draft.category().map(|c| c.value), Some("insumos"));
        draft.set_kind(TransactionKind::Income);
        assert!(draft.category().is_none());
        assert!(!draft.select_category("insumos"));
    }

    #[test]
    fn test_build_expense_is_negative() {
        let tx = filled_expense().build("abc").expect("valid draft");
        assert_eq!(tx.id, "abc");
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, dec!(-45000.50));
        assert_eq!(tx.category, "Insumos");
        assert_eq!(tx.description, "Compra de insumos");
    }

    #[test]
    fn test_build_income_from_quick_amount() {
        let mut draft = TransactionDraft::new(TransactionKind::Income);
        draft.apply_quick_amount(25_000);
        draft.date = "2025-08-20".to_string();
        draft.description = "Factura #1300".to_string();
        draft.select_category("ventas");

        let tx = draft.build("id").expect("valid draft");
        assert_eq!(tx.amount, dec!(25000));
        assert!(tx.is_income());
    }

    #[test]
    fn test_build_reports_first_error() {
        let mut draft = filled_expense();
        draft.amount = "0".to_string();
        draft.date = "32/13/2025".to_string();
        assert_eq!(draft.build("x"), Err(DraftError::InvalidAmount));

        draft.amount = "100".to_string();
        assert_eq!(draft.build("x"), Err(DraftError::InvalidDate));

        draft.date = "01/09/2025".to_string();
        draft.description = "   ".to_string();
        assert_eq!(draft.build("x"), Err(DraftError::MissingDescription));

        let mut no_category = TransactionDraft::new(TransactionKind::Income);
        no_category.amount = "100".to_string();
        no_category.date = "01/09/2025".to_string();
        no_category.description = "x".to_string();
        assert_eq!(no_category.build("x"), Err(DraftError::MissingCategory));
    }

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("25000"), Some(dec!(25000)));
        assert_eq!(parse_amount("1.234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_amount("1.250.000"), Some(dec!(1250000)));
        assert_eq!(parse_amount("ARS 10.50"), Some(dec!(10.50)));
        assert_eq!(parse_amount("$ 99,999"), Some(dec!(100.00)));
        assert_eq!(parse_amount("250.000"), Some(dec!(250000)));
        assert_eq!(parse_amount("45.000"), Some(dec!(45000)));
        assert_eq!(parse_amount("250.000,00"), Some(dec!(250000)));
        assert_eq!(parse_amount("$ 1.250.000,75"), Some(dec!(1250000.75)));
        assert_eq!(parse_amount("1234.5"), Some(dec!(1234.5)));
        assert_eq!(parse_amount("1,234.56"), None);
        assert_eq!(parse_amount("12.34.56"), None);
        assert_eq!(parse_amount("1234.567,00"), None);
        assert_eq!(parse_amount(",50"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_parse_date_keeps_calendar_day_in_argentina() {
        let date = parse_date("18/08/2025").expect("valid date");
        let local = date.with_timezone(
            &FixedOffset::east_opt(ARGENTINA_UTC_OFFSET_SECS).expect("valid offset"),
        );
        assert_eq!((local.day(), local.month(), local.year()), (18, 8, 2025));
        assert!(parse_date("2025/08/18").is_none());
    }
}
