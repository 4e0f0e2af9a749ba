//! Transaction Dialog State
//!
//! Open/closed flag, the draft being edited and the first validation error.

use crate::domain::{DraftError, Transaction, TransactionDraft, TransactionKind};
use crate::states::{LedgerState, UIEvent};
use gpui::{Context, Entity, EventEmitter};
use tracing::{debug, info};
use uuid::Uuid;

/// Text typed into the dialog inputs
#[derive(Debug, Clone, Default)]
pub struct DraftText {
    pub amount: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionDialogState {
    open: bool,
    draft: TransactionDraft,
    error: Option<DraftError>,
}

impl EventEmitter<UIEvent> for TransactionDialogState {}

impl TransactionDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<DraftError> {
        self.error
    }

    /// Open with a fresh draft of the given kind
    pub fn open(&mut self, kind: TransactionKind, cx: &mut Context<Self>) {
        debug!(kind = kind.key(), "Opening transaction dialog");
        self.reset(kind);
        self.open = true;
        cx.notify();
    }

    /// Close and discard the draft
    pub fn close(&mut self, cx: &mut Context<Self>) {
        if !self.open {
            return;
        }
        self.open = false;
        self.reset(TransactionKind::default());
        cx.notify();
    }

    pub fn set_kind(&mut self, kind: TransactionKind, cx: &mut Context<Self>) {
        if self.draft.set_kind(kind) {
            self.error = None;
            cx.notify();
        }
    }

    pub fn select_category(&mut self, value: &str, cx: &mut Context<Self>) {
        if self.draft.select_category(value) {
            cx.notify();
        }
    }

    /// Fill the amount from a quick-amount button; returns the text for the input
    pub fn apply_quick_amount(&mut self, amount: u64, cx: &mut Context<Self>) -> String {
        self.draft.apply_quick_amount(amount);
        cx.notify();
        self.draft.amount.clone()
    }

    /// Validate and record into the ledger; on failure the error stays visible
    pub fn submit(
        &mut self,
        text: DraftText,
        ledger: &Entity<LedgerState>,
        cx: &mut Context<Self>,
    ) -> Result<Transaction, DraftError> {
        let transaction = match self.validate(text) {
            Ok(transaction) => transaction,
            Err(e) => {
                debug!(error = %e, "Transaction draft rejected");
                cx.notify();
                return Err(e);
            }
        };

        ledger.update(cx, |ledger, cx| ledger.record(transaction.clone(), cx));
        cx.emit(UIEvent::TransactionRecorded {
            id: transaction.id.as_str().into(),
        });
        info!(id = %transaction.id, "Transaction dialog submitted");

        self.open = false;
        self.reset(TransactionKind::default());
        cx.notify();
        Ok(transaction)
    }

    fn validate(&mut self, text: DraftText) -> Result<Transaction, DraftError> {
        self.draft.amount = text.amount;
        self.draft.date = text.date;
        self.draft.description = text.description;

        let result = self.draft.build(Uuid::new_v4().to_string());
        self.error = result.as_ref().err().copied();
        result
    }

    fn reset(&mut self, kind: TransactionKind) {
        self.draft = TransactionDraft::new(kind);
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(amount: &str, date: &str, description: &str) -> DraftText {
        DraftText {
            amount: amount.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_defaults_to_closed_expense() {
        let state = TransactionDialogState::new();
        assert!(!state.is_open());
        assert_eq!(state.draft().kind(), TransactionKind::Expense);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_validate_reports_first_error() {
        let mut state = TransactionDialogState::new();
        let err = state.validate(text("", "", "")).expect_err("empty draft");
        assert_eq!(err, DraftError::InvalidAmount);
        assert_eq!(state.error(), Some(DraftError::InvalidAmount));

        let err = state
            .validate(text("1000", "16/08/2025", "Luz"))
            .expect_err("no category");
        assert_eq!(err, DraftError::MissingCategory);
    }

    #[test]
    fn test_validate_success_assigns_uuid() {
        let mut state = TransactionDialogState::new();
        assert!(state.draft.select_category("servicios"));
        let tx = state
            .validate(text("12500", "16/08/2025", "Factura de luz"))
            .expect("valid draft");
        assert!(Uuid::parse_str(&tx.id).is_ok());
        assert!(tx.amount.is_sign_negative());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_reset_clears_error_and_category() {
        let mut state = TransactionDialogState::new();
        assert!(state.draft.select_category("servicios"));
        let _ = state.validate(text("abc", "", ""));
        state.reset(TransactionKind::Income);
        assert!(state.error().is_none());
        assert!(state.draft().category().is_none());
        assert_eq!(state.draft().kind(), TransactionKind::Income);
    }
}
