//! Ledger State
//!
//! In-memory transactions, the monthly summary and the weekly chart series.
//! Recording a transaction only touches the transaction list.

use crate::constants::RECENT_TRANSACTIONS_LIMIT;
use crate::domain::{
    ChartPoint, FinancialMetrics, Summary, Transaction, analyze, mock_transactions,
    mock_weekly_points,
};
use crate::helpers::BoundedDeque;
use gpui::Context;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LedgerState {
    transactions: BoundedDeque<Transaction>,
    summary: Summary,
    weekly: Vec<ChartPoint>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerState {
    /// Ledger seeded with mock data and a freshly randomized weekly series
    pub fn new() -> Self {
        Self::with_data(
            mock_transactions(),
            Summary::mock(),
            mock_weekly_points(&mut rand::thread_rng()),
        )
    }

    /// Build from a newest-first transaction list
    pub fn with_data(transactions: Vec<Transaction>, summary: Summary, weekly: Vec<ChartPoint>) -> Self {
        let mut deque = BoundedDeque::new(RECENT_TRANSACTIONS_LIMIT);
        deque.extend(transactions.into_iter().rev());
        Self {
            transactions: deque,
            summary,
            weekly,
        }
    }

    /// Transactions, newest first
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter_newest_first()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn weekly(&self) -> &[ChartPoint] {
        &self.weekly
    }

    /// Metrics over the held transactions; the summary is not consulted
    pub fn analysis(&self) -> FinancialMetrics {
        analyze(self.recent())
    }

    /// Prepend a transaction to the recent list
    pub fn record(&mut self, transaction: Transaction, cx: &mut Context<Self>) {
        info!(
            id = %transaction.id,
            kind = transaction.kind.key(),
            amount = %transaction.amount,
            "Transaction recorded"
        );
        self.push(transaction);
        cx.notify();
    }

    fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransactionDraft, TransactionKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn ledger() -> LedgerState {
        let weekly = mock_weekly_points(&mut StdRng::seed_from_u64(7));
        LedgerState::with_data(mock_transactions(), Summary::mock(), weekly)
    }

    #[test]
    fn test_seed_keeps_newest_first_order() {
        let ledger = ledger();
        let ids: Vec<_> = ledger.recent().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(ledger.weekly().len(), 7);
    }

    #[test]
    fn test_push_prepends_without_touching_summary() {
        let mut ledger = ledger();
        let mut draft = TransactionDraft::new(TransactionKind::Income);
        draft.amount = "25000".to_string();
        draft.date = "20/08/2025".to_string();
        draft.description = "Venta mostrador".to_string();
        assert!(draft.select_category("ventas"));

        ledger.push(draft.build("new").expect("valid draft"));

        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger.recent().next().map(|tx| tx.id.as_str()), Some("new"));
        assert_eq!(ledger.summary(), &Summary::mock());
    }

    #[test]
    fn test_analysis_follows_recorded_transactions() {
        let mut ledger = ledger();
        assert_eq!(ledger.analysis().total_income, dec!(370000));

        let mut income = mock_transactions().remove(0);
        income.id = "extra".to_string();
        income.amount = dec!(30000);
        ledger.push(income);

        let analysis = ledger.analysis();
        assert_eq!(analysis.total_income, dec!(400000));
        assert_eq!(analysis.net_profit, dec!(205000));
        assert_eq!(ledger.summary(), &Summary::mock());
    }

    #[test]
    fn test_oldest_evicted_at_capacity() {
        let mut ledger = ledger();
        let template = mock_transactions().remove(0);
        for i in 0..RECENT_TRANSACTIONS_LIMIT {
            let mut tx = template.clone();
            tx.id = format!("n{i}");
            ledger.push(tx);
        }
        assert_eq!(ledger.len(), RECENT_TRANSACTIONS_LIMIT);
        assert!(ledger.recent().all(|tx| tx.id.starts_with('n')));
    }
}
