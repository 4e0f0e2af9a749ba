//! Ledger Analysis
//!
//! Totals, net profit, margin and the expense breakdown computed from the
//! recorded transactions. Sits apart from the fixed summary cards.

use super::Tone;
use crate::assets::CustomIconName;
use crate::components::Card;
use crate::domain::{FinancialMetrics, Period};
use crate::helpers::{format_ars, format_date, format_percent};
use crate::states::i18n_dashboard;
use gpui::{App, FontWeight, Window, div, prelude::*, px, relative};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label, v_flex};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const CATEGORY_LABEL_WIDTH: f32 = 160.0;
const AMOUNT_LABEL_WIDTH: f32 = 140.0;

/// One headline figure of the analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFigure {
    pub label_key: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// One expense category with its share of total expenses in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: String,
    pub amount: String,
    pub share: f32,
}

fn sign_tone(value: Decimal) -> Tone {
    if value.is_sign_negative() && !value.is_zero() {
        Tone::Negative
    } else {
        Tone::Positive
    }
}

pub fn analysis_figures(metrics: &FinancialMetrics) -> [AnalysisFigure; 4] {
    [
        AnalysisFigure {
            label_key: "analysis_income",
            value: format_ars(metrics.total_income),
            tone: Tone::Positive,
        },
        AnalysisFigure {
            label_key: "analysis_expenses",
            value: format_ars(metrics.total_expenses),
            tone: Tone::Negative,
        },
        AnalysisFigure {
            label_key: "analysis_net_profit",
            value: format_ars(metrics.net_profit),
            tone: sign_tone(metrics.net_profit),
        },
        AnalysisFigure {
            label_key: "analysis_net_margin",
            value: format_percent(metrics.net_margin),
            tone: sign_tone(metrics.net_margin),
        },
    ]
}

pub fn breakdown_rows(metrics: &FinancialMetrics) -> Vec<BreakdownRow> {
    metrics
        .expense_breakdown
        .iter()
        .map(|entry| {
            let share = if metrics.total_expenses.is_zero() {
                0.0
            } else {
                (entry.total / metrics.total_expenses).to_f32().unwrap_or(0.0)
            };
            BreakdownRow {
                category: entry.category.clone(),
                amount: format_ars(entry.total),
                share: share.clamp(0.0, 1.0),
            }
        })
        .collect()
}

/// "15/08/2025 al 18/08/2025"
pub fn period_text(period: &Period, separator: &str) -> String {
    format!(
        "{} {} {}",
        format_date(&period.start),
        separator,
        format_date(&period.end)
    )
}

#[derive(IntoElement)]
pub struct LedgerAnalysis {
    metrics: FinancialMetrics,
}

impl LedgerAnalysis {
    pub fn new(metrics: FinancialMetrics) -> Self {
        Self { metrics }
    }

    fn render_figure(figure: AnalysisFigure, cx: &App) -> impl IntoElement {
        v_flex()
            .flex_1()
            .min_w_0()
            .gap_1()
            .child(
                Label::new(i18n_dashboard(cx, figure.label_key))
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                Label::new(figure.value)
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(figure.tone.color(cx)),
            )
    }

    fn render_breakdown_row(row: BreakdownRow, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_3()
            .items_center()
            .child(
                div()
                    .w(px(CATEGORY_LABEL_WIDTH))
                    .child(Label::new(row.category).text_sm().text_ellipsis()),
            )
            .child(
                div()
                    .flex_1()
                    .h(px(6.0))
                    .rounded_full()
                    .bg(cx.theme().muted)
                    .child(
                        div()
                            .h_full()
                            .w(relative(row.share))
                            .rounded_full()
                            .bg(cx.theme().danger),
                    ),
            )
            .child(
                h_flex()
                    .w(px(AMOUNT_LABEL_WIDTH))
                    .justify_end()
                    .child(Label::new(row.amount).text_sm()),
            )
    }
}

impl RenderOnce for LedgerAnalysis {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        let caption = match &self.metrics.period {
            Some(period) => period_text(period, &i18n_dashboard(cx, "analysis_period_to")),
            None => i18n_dashboard(cx, "analysis_no_period").to_string(),
        };
        let rows = breakdown_rows(&self.metrics);

        let breakdown = if rows.is_empty() {
            Label::new(i18n_dashboard(cx, "analysis_no_expenses"))
                .text_sm()
                .text_color(muted)
                .into_any_element()
        } else {
            v_flex()
                .gap_2()
                .children(rows.into_iter().map(|row| Self::render_breakdown_row(row, cx)))
                .into_any_element()
        };

        Card::new(i18n_dashboard(cx, "analysis_title"))
            .caption(caption)
            .icon(Icon::from(CustomIconName::DollarSign).size_4().text_color(muted))
            .child(
                h_flex().w_full().gap_4().children(
                    analysis_figures(&self.metrics).map(|figure| Self::render_figure(figure, cx)),
                ),
            )
            .child(
                Label::new(i18n_dashboard(cx, "analysis_breakdown"))
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD),
            )
            .child(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{analyze, mock_transactions};

    #[test]
    fn test_mock_figures() {
        let metrics = analyze(&mock_transactions());
        let values: Vec<_> = analysis_figures(&metrics)
            .into_iter()
            .map(|figure| (figure.value, figure.tone))
            .collect();
        assert_eq!(
            values,
            vec![
                ("$\u{a0}370.000,00".to_string(), Tone::Positive),
                ("$\u{a0}195.000,00".to_string(), Tone::Negative),
                ("$\u{a0}175.000,00".to_string(), Tone::Positive),
                ("47,30\u{a0}%".to_string(), Tone::Positive),
            ]
        );
    }

    #[test]
    fn test_loss_is_negative_tone() {
        let mut metrics = analyze(&mock_transactions());
        metrics.net_profit = -metrics.net_profit;
        metrics.net_margin = -metrics.net_margin;
        let figures = analysis_figures(&metrics);
        assert_eq!(figures[2].tone, Tone::Negative);
        assert_eq!(figures[3].tone, Tone::Negative);
    }

    #[test]
    fn test_breakdown_shares() {
        let rows = breakdown_rows(&analyze(&mock_transactions()));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Alquiler");
        assert_eq!(rows[0].amount, "$\u{a0}150.000,00");
        assert!((rows[0].share - 150.0 / 195.0).abs() < 1e-4);
        assert!((rows[1].share - 45.0 / 195.0).abs() < 1e-4);
    }

    #[test]
    fn test_period_text() {
        let metrics = analyze(&mock_transactions());
        let period = metrics.period.expect("mock ledger has dates");
        assert_eq!(period_text(&period, "al"), "15/08/2025 al 18/08/2025");
    }
}
