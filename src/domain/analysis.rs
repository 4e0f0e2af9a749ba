//! Analysis - Metrics Derived from Recorded Transactions
//!
//! Unlike the fixed monthly [`Summary`](super::Summary), these figures are
//! computed from whatever transactions the ledger holds.

use super::Transaction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Total spent in one expense category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    /// Positive magnitude
    pub total: Decimal,
}

/// First and last transaction dates covered by an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Income, expense and margin figures over a set of transactions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinancialMetrics {
    pub total_income: Decimal,
    /// Positive magnitude
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    /// Percent of income, two decimals; zero when there is no income
    pub net_margin: Decimal,
    /// Largest category first
    pub expense_breakdown: Vec<CategoryTotal>,
    /// `None` when there are no transactions
    pub period: Option<Period>,
}

/// Compute the metrics for the given transactions
pub fn analyze<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> FinancialMetrics {
    let mut metrics = FinancialMetrics::default();
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();

    for tx in transactions {
        let amount = tx.amount.abs();
        if tx.is_income() {
            metrics.total_income += amount;
        } else {
            metrics.total_expenses += amount;
            *by_category.entry(tx.category.as_str()).or_default() += amount;
        }

        metrics.period = Some(match metrics.period {
            Some(period) => Period {
                start: period.start.min(tx.date),
                end: period.end.max(tx.date),
            },
            None => Period {
                start: tx.date,
                end: tx.date,
            },
        });
    }

    metrics.net_profit = metrics.total_income - metrics.total_expenses;
    if metrics.total_income > Decimal::ZERO {
        metrics.net_margin =
            (metrics.net_profit / metrics.total_income * Decimal::ONE_HUNDRED).round_dp(2);
    }

    metrics.expense_breakdown = by_category
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    // Stable sort keeps ties in alphabetical order
    metrics.expense_breakdown.sort_by(|a, b| b.total.cmp(&a.total));

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransactionKind, mock_transactions};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn tx(kind: TransactionKind, amount: Decimal, category: &str, day: u32) -> Transaction {
        Transaction {
            id: format!("{category}-{day}"),
            kind,
            description: String::new(),
            amount: kind.signed(amount),
            date: Utc
                .with_ymd_and_hms(2024, 1, day, 12, 0, 0)
                .single()
                .expect("valid date"),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_january_ledger() {
        let transactions = vec![
            tx(TransactionKind::Income, dec!(50000), "Ventas", 5),
            tx(TransactionKind::Expense, dec!(25000), "Gasto Fijo", 15),
            tx(TransactionKind::Income, dec!(30000), "Ventas", 20),
            tx(TransactionKind::Expense, dec!(40000), "Gasto Fijo", 25),
            tx(TransactionKind::Expense, dec!(5000), "Gasto Variable", 30),
        ];
        let metrics = analyze(&transactions);

        assert_eq!(metrics.total_income, dec!(80000));
        assert_eq!(metrics.total_expenses, dec!(70000));
        assert_eq!(metrics.net_profit, dec!(10000));
        assert_eq!(metrics.net_margin, dec!(12.5));
        assert_eq!(
            metrics.expense_breakdown,
            vec![
                CategoryTotal {
                    category: "Gasto Fijo".to_string(),
                    total: dec!(65000),
                },
                CategoryTotal {
                    category: "Gasto Variable".to_string(),
                    total: dec!(5000),
                },
            ]
        );

        let period = metrics.period.expect("non-empty ledger");
        assert_eq!(period.start, transactions[0].date);
        assert_eq!(period.end, transactions[4].date);
    }

    #[test]
    fn test_empty_ledger() {
        let metrics = analyze(&Vec::<Transaction>::new());
        assert_eq!(metrics, FinancialMetrics::default());
        assert!(metrics.period.is_none());
    }

    #[test]
    fn test_margin_is_zero_without_income() {
        let transactions = vec![tx(TransactionKind::Expense, dec!(1200), "Insumos", 3)];
        let metrics = analyze(&transactions);
        assert_eq!(metrics.net_profit, dec!(-1200));
        assert_eq!(metrics.net_margin, Decimal::ZERO);
    }

    #[test]
    fn test_mock_transactions() {
        let metrics = analyze(&mock_transactions());
        assert_eq!(metrics.total_income, dec!(370000));
        assert_eq!(metrics.total_expenses, dec!(195000));
        assert_eq!(metrics.net_profit, dec!(175000));
        assert_eq!(metrics.net_margin, dec!(47.30));
        let categories: Vec<_> = metrics
            .expense_breakdown
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Alquiler", "Insumos"]);
    }
}
