//! Recent Transactions
//!
//! Table of the in-memory transactions, newest first.

use super::Tone;
use crate::assets::CustomIconName;
use crate::domain::Transaction;
use crate::helpers::{format_ars, format_date};
use crate::states::i18n_dashboard;
use gpui::{App, FontWeight, SharedString, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label, v_flex};

const CATEGORY_COLUMN_WIDTH: f32 = 180.0;
const DATE_COLUMN_WIDTH: f32 = 110.0;
const AMOUNT_COLUMN_WIDTH: f32 = 160.0;

/// Display data for one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount: String,
    pub tone: Tone,
}

impl TransactionRow {
    pub fn icon(&self) -> CustomIconName {
        match self.tone {
            Tone::Positive => CustomIconName::CircleArrowUp,
            _ => CustomIconName::CircleArrowDown,
        }
    }
}

pub fn transaction_rows<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<TransactionRow> {
    transactions
        .into_iter()
        .map(|tx| TransactionRow {
            id: tx.id.clone(),
            description: tx.description.clone(),
            category: tx.category.clone(),
            date: format_date(&tx.date),
            amount: format_ars(tx.amount),
            tone: if tx.is_income() {
                Tone::Positive
            } else {
                Tone::Negative
            },
        })
        .collect()
}

#[derive(IntoElement)]
pub struct RecentTransactions {
    rows: Vec<TransactionRow>,
}

impl RecentTransactions {
    pub fn new(rows: Vec<TransactionRow>) -> Self {
        Self { rows }
    }

    fn render_header(cx: &App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        let header = |key: &str| {
            Label::new(i18n_dashboard(cx, key))
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(muted)
        };

        h_flex()
            .w_full()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(div().flex_1().min_w_0().child(header("col_description")))
            .child(div().w(px(CATEGORY_COLUMN_WIDTH)).child(header("col_category")))
            .child(div().w(px(DATE_COLUMN_WIDTH)).child(header("col_date")))
            .child(
                h_flex()
                    .w(px(AMOUNT_COLUMN_WIDTH))
                    .justify_end()
                    .child(header("col_amount")),
            )
    }

    fn render_row(row: TransactionRow, cx: &App) -> impl IntoElement {
        let color = row.tone.color(cx);
        let hover_bg = cx.theme().secondary;
        let icon = Icon::from(row.icon()).size_4().text_color(color);

        h_flex()
            .id(SharedString::from(row.id))
            .w_full()
            .px_3()
            .py_3()
            .items_center()
            .border_b_1()
            .border_color(cx.theme().border)
            .hover(|style| style.bg(hover_bg))
            .child(
                h_flex()
                    .flex_1()
                    .min_w_0()
                    .gap_2()
                    .child(icon)
                    .child(
                        Label::new(row.description)
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_ellipsis(),
                    ),
            )
            .child(
                div().w(px(CATEGORY_COLUMN_WIDTH)).child(
                    div()
                        .px_2()
                        .py_0p5()
                        .rounded_md()
                        .border_1()
                        .border_color(cx.theme().border)
                        .text_xs()
                        .child(row.category),
                ),
            )
            .child(
                div()
                    .w(px(DATE_COLUMN_WIDTH))
                    .child(Label::new(row.date).text_sm()),
            )
            .child(
                h_flex().w(px(AMOUNT_COLUMN_WIDTH)).justify_end().child(
                    Label::new(row.amount)
                        .text_sm()
                        .font_weight(FontWeight::BOLD)
                        .text_color(color),
                ),
            )
    }
}

impl RenderOnce for RecentTransactions {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let body = if self.rows.is_empty() {
            div()
                .p_4()
                .child(
                    Label::new(i18n_dashboard(cx, "no_transactions"))
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element()
        } else {
            v_flex()
                .children(self.rows.into_iter().map(|row| Self::render_row(row, cx)))
                .into_any_element()
        };

        v_flex()
            .w_full()
            .gap_4()
            .child(
                Label::new(i18n_dashboard(cx, "recent_transactions"))
                    .text_xl()
                    .font_weight(FontWeight::BOLD),
            )
            .child(
                v_flex()
                    .w_full()
                    .rounded_lg()
                    .border_1()
                    .border_color(cx.theme().border)
                    .child(Self::render_header(cx))
                    .child(body),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock_transactions;

    #[test]
    fn test_mock_rows_and_tones() {
        let transactions = mock_transactions();
        let rows = transaction_rows(&transactions);

        assert_eq!(rows.len(), 4);
        let tones: Vec<_> = rows.iter().map(|row| row.tone).collect();
        assert_eq!(
            tones,
            vec![Tone::Positive, Tone::Negative, Tone::Negative, Tone::Positive]
        );
        assert_eq!(rows[0].icon(), CustomIconName::CircleArrowUp);
        assert_eq!(rows[1].icon(), CustomIconName::CircleArrowDown);
    }

    #[test]
    fn test_row_formatting() {
        let transactions = mock_transactions();
        let rows = transaction_rows(&transactions);

        assert_eq!(rows[0].amount, "$\u{a0}250.000,00");
        assert_eq!(rows[0].date, "18/08/2025");
        assert_eq!(rows[1].amount, "-$\u{a0}150.000,00");
        assert_eq!(rows[1].category, "Alquiler");
        assert_eq!(rows[3].description, "Factura #1254");
    }

    #[test]
    fn test_empty_ledger_has_no_rows() {
        assert!(transaction_rows(&Vec::<Transaction>::new()).is_empty());
    }
}
