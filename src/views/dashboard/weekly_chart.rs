//! Weekly Chart
//!
//! Bar chart of the weekly transaction totals, drawn with plain divs.

use crate::components::Card;
use crate::constants::{CHART_HEIGHT, CHART_TICK_COUNT};
use crate::domain::{BarScale, ChartPoint};
use crate::helpers::{format_ars, format_thousands_tick};
use crate::states::i18n_dashboard;
use gpui::{App, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, label::Label, tooltip::Tooltip, v_flex};
use rust_decimal::Decimal;

/// Height of the day label row under the bars
const LABEL_ROW_HEIGHT: f32 = 20.0;

/// Tooltip text for a bar, e.g. "Lun: $ 25.000,00"
pub fn bar_tooltip(point: &ChartPoint) -> String {
    format!("{}: {}", point.label, format_ars(Decimal::from(point.total)))
}

#[derive(IntoElement)]
pub struct WeeklyChart {
    points: Vec<ChartPoint>,
}

impl WeeklyChart {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self { points }
    }
}

impl RenderOnce for WeeklyChart {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let scale = BarScale::new(&self.points, CHART_TICK_COUNT);
        let plot_height = CHART_HEIGHT - LABEL_ROW_HEIGHT;
        let muted = cx.theme().muted_foreground;
        let primary = cx.theme().primary;

        // Y axis, top to bottom
        let axis = v_flex()
            .h(px(plot_height))
            .justify_between()
            .items_end()
            .children(
                scale
                    .ticks
                    .iter()
                    .map(|tick| Label::new(format_thousands_tick(*tick)).text_xs().text_color(muted)),
            );

        let bars = self.points.iter().enumerate().map(|(ix, point)| {
            let tooltip = bar_tooltip(point);
            let bar_height = plot_height * scale.ratio(point.total);

            v_flex()
                .flex_1()
                .items_center()
                .child(
                    v_flex()
                        .w_full()
                        .h(px(plot_height))
                        .justify_end()
                        .child(
                            div()
                                .id(("weekly-bar", ix))
                                .w_full()
                                .h(px(bar_height))
                                .rounded_t_sm()
                                .bg(primary)
                                .tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx)),
                        ),
                )
                .child(
                    h_flex()
                        .h(px(LABEL_ROW_HEIGHT))
                        .items_end()
                        .child(Label::new(point.label).text_xs().text_color(muted)),
                )
        });

        let legend = h_flex()
            .justify_center()
            .items_center()
            .gap_2()
            .child(div().size_3().rounded_sm().bg(primary))
            .child(Label::new(i18n_dashboard(cx, "chart_legend")).text_xs().text_color(muted));

        Card::new(i18n_dashboard(cx, "weekly_summary"))
            .child(
                h_flex()
                    .w_full()
                    .h(px(CHART_HEIGHT))
                    .items_start()
                    .gap_3()
                    .child(axis)
                    .child(h_flex().flex_1().h_full().items_start().gap_4().children(bars)),
            )
            .child(legend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_tooltip() {
        let point = ChartPoint {
            label: "Mié",
            total: 25_000,
        };
        assert_eq!(bar_tooltip(&point), "Mié: $\u{a0}25.000,00");
    }
}
