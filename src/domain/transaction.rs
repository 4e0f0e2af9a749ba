//! Transaction - Income and Expense Records

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Transaction kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Apply the kind's sign to a positive magnitude
    pub fn signed(self, magnitude: Decimal) -> Decimal {
        match self {
            TransactionKind::Income => magnitude.abs(),
            TransactionKind::Expense => -magnitude.abs(),
        }
    }

    /// Translation key suffix for tab labels
    pub fn key(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[TransactionKind::Income, TransactionKind::Expense]
    }
}

/// A single income or expense record
///
/// `amount` is signed: positive for income, negative for expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    /// Category display label (e.g. "Ventas")
    pub category: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// Transactions shown in the recent-transactions table, newest first
pub fn mock_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            kind: TransactionKind::Income,
            description: "Venta de servicios de consultoría".to_string(),
            amount: dec!(250000),
            date: utc(2025, 8, 18, 10, 30),
            category: "Ventas".to_string(),
        },
        Transaction {
            id: "2".to_string(),
            kind: TransactionKind::Expense,
            description: "Alquiler de oficina".to_string(),
            amount: dec!(-150000),
            date: utc(2025, 8, 17, 14, 0),
            category: "Alquiler".to_string(),
        },
        Transaction {
            id: "3".to_string(),
            kind: TransactionKind::Expense,
            description: "Compra de insumos".to_string(),
            amount: dec!(-45000),
            date: utc(2025, 8, 16, 11, 20),
            category: "Insumos".to_string(),
        },
        Transaction {
            id: "4".to_string(),
            kind: TransactionKind::Income,
            description: "Factura #1254".to_string(),
            amount: dec!(120000),
            date: utc(2025, 8, 15, 18, 45),
            category: "Ventas".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_amount_sign_matches_kind() {
        for tx in mock_transactions() {
            assert_eq!(tx.is_income(), tx.amount > Decimal::ZERO, "tx {}", tx.id);
        }
    }

    #[test]
    fn test_signed() {
        assert_eq!(TransactionKind::Income.signed(dec!(100)), dec!(100));
        assert_eq!(TransactionKind::Expense.signed(dec!(100)), dec!(-100));
        assert_eq!(TransactionKind::Expense.signed(dec!(-100)), dec!(-100));
    }

    #[test]
    fn test_default_kind_is_expense() {
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Income).expect("serialize");
        assert_eq!(json, "\"income\"");
    }
}
