//! Dashboard
//!
//! Composes, top to bottom: welcome banner, currency banner, summary cards,
//! action buttons, weekly chart, ledger analysis and recent transactions,
//! with the transaction dialog drawn over them.

mod action_buttons;
mod currency_banner;
mod ledger_analysis;
mod recent_transactions;
mod summary_cards;
mod transaction_dialog;
mod weekly_chart;
mod welcome;

pub use action_buttons::*;
pub use currency_banner::*;
pub use ledger_analysis::*;
pub use recent_transactions::*;
pub use summary_cards::*;
pub use transaction_dialog::*;
pub use weekly_chart::*;
pub use welcome::*;

use crate::constants::DASHBOARD_MAX_WIDTH;
use crate::states::{LedgerState, PymeGlobalStore, TransactionDialogState};
use gpui::{App, Context, Entity, Hsla, Subscription, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, v_flex};

/// Color role for amounts and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Muted,
}

impl Tone {
    pub fn color(self, cx: &App) -> Hsla {
        match self {
            Tone::Positive => cx.theme().success,
            Tone::Negative => cx.theme().danger,
            Tone::Muted => cx.theme().muted_foreground,
        }
    }
}

pub struct DashboardView {
    ledger: Entity<LedgerState>,
    dialog_state: Entity<TransactionDialogState>,
    currency_banner: Entity<CurrencyBanner>,
    dialog: Entity<TransactionDialog>,
    _subscriptions: Vec<Subscription>,
}

impl DashboardView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<PymeGlobalStore>().clone();
        let quotes = store.quotes();
        let ledger = store.ledger();
        let dialog_state = store.dialog();

        let settings = store.read(cx).quotes().clone();
        quotes.update(cx, |quotes, cx| quotes.refresh(&settings, cx));

        let currency_banner = cx.new(|cx| CurrencyBanner::new(quotes, cx));
        let dialog = cx.new(|cx| {
            TransactionDialog::new(dialog_state.clone(), ledger.clone(), window, cx)
        });

        let subscriptions = vec![
            cx.observe(&ledger, |_this, _model, cx| cx.notify()),
            // Locale changes
            cx.observe(&store.preferences(), |_this, _model, cx| cx.notify()),
        ];

        Self {
            ledger,
            dialog_state,
            currency_banner,
            dialog,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for DashboardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let ledger = self.ledger.read(cx);
        let summary = *ledger.summary();
        let weekly = ledger.weekly().to_vec();
        let analysis = ledger.analysis();
        let rows = transaction_rows(ledger.recent());

        div()
            .relative()
            .size_full()
            .child(
                div()
                    .id("dashboard-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .child(
                        v_flex()
                            .w_full()
                            .max_w(px(DASHBOARD_MAX_WIDTH))
                            .mx_auto()
                            .p_6()
                            .gap_6()
                            .bg(cx.theme().background)
                            .child(WelcomeBanner)
                            .child(self.currency_banner.clone())
                            .child(SummaryCards::new(summary))
                            .child(ActionButtons::new(self.dialog_state.clone()))
                            .child(WeeklyChart::new(weekly))
                            .child(LedgerAnalysis::new(analysis))
                            .child(RecentTransactions::new(rows)),
                    ),
            )
            .child(self.dialog.clone())
    }
}
