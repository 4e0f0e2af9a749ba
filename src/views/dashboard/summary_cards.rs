//! Summary Cards
//!
//! The four monthly metrics. Values come straight from [`Summary`] and are
//! never derived from the transaction list.

use super::Tone;
use crate::assets::CustomIconName;
use crate::components::Card;
use crate::domain::Summary;
use crate::helpers::{format_ars, format_count};
use crate::states::i18n_dashboard;
use gpui::{App, FontWeight, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label};

/// Display data for one summary card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title_key: &'static str,
    pub value: String,
    pub caption_key: &'static str,
    pub icon: CustomIconName,
    pub icon_tone: Tone,
}

pub fn metric_cards(summary: &Summary) -> [MetricCard; 4] {
    [
        MetricCard {
            title_key: "income_month",
            value: format_ars(summary.income),
            caption_key: "income_delta",
            icon: CustomIconName::TrendingUp,
            icon_tone: Tone::Positive,
        },
        MetricCard {
            title_key: "expenses_month",
            value: format_ars(summary.expenses),
            caption_key: "expenses_delta",
            icon: CustomIconName::TrendingDown,
            icon_tone: Tone::Negative,
        },
        MetricCard {
            title_key: "balance",
            value: format_ars(summary.balance),
            caption_key: "balance_caption",
            icon: CustomIconName::DollarSign,
            icon_tone: Tone::Muted,
        },
        MetricCard {
            title_key: "transactions",
            value: format_count(summary.transactions),
            caption_key: "transactions_caption",
            icon: CustomIconName::ArrowLeftRight,
            icon_tone: Tone::Muted,
        },
    ]
}

#[derive(IntoElement)]
pub struct SummaryCards {
    summary: Summary,
}

impl SummaryCards {
    pub fn new(summary: Summary) -> Self {
        Self { summary }
    }
}

impl RenderOnce for SummaryCards {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        h_flex()
            .w_full()
            .gap_4()
            .children(metric_cards(&self.summary).map(|card| {
                let icon = Icon::from(card.icon).size_4().text_color(card.icon_tone.color(cx));
                div().flex_1().min_w_0().child(
                    Card::new(i18n_dashboard(cx, card.title_key))
                        .icon(icon)
                        .child(
                            h_flex().child(
                                Label::new(card.value)
                                    .text_size(px(24.0))
                                    .font_weight(FontWeight::BOLD),
                            ),
                        )
                        .child(
                            Label::new(i18n_dashboard(cx, card.caption_key))
                                .text_xs()
                                .text_color(muted),
                        ),
                )
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mock_summary_cards() {
        let values: Vec<_> = metric_cards(&Summary::mock())
            .into_iter()
            .map(|card| card.value)
            .collect();
        assert_eq!(
            values,
            vec![
                "$\u{a0}1.250.000,75",
                "$\u{a0}785.450,50",
                "$\u{a0}464.550,25",
                "+124",
            ]
        );
    }

    #[test]
    fn test_balance_is_shown_as_given() {
        let summary = Summary {
            income: dec!(10),
            expenses: dec!(3),
            balance: dec!(999),
            transactions: 0,
        };
        let cards = metric_cards(&summary);
        assert_eq!(cards[2].value, "$\u{a0}999,00");
        assert_eq!(cards[3].value, "+0");
        assert_eq!(cards[0].icon_tone, Tone::Positive);
        assert_eq!(cards[1].icon_tone, Tone::Negative);
    }
}
