use crate::states::i18n_dashboard;
use gpui::{App, FontWeight, Window, prelude::*};
use gpui_component::{ActiveTheme, h_flex, label::Label};

/// Informational banner at the top of the dashboard
#[derive(IntoElement)]
pub struct WelcomeBanner;

impl RenderOnce for WelcomeBanner {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let info = cx.theme().info;

        h_flex()
            .w_full()
            .p_4()
            .gap_1()
            .rounded_lg()
            .bg(info.opacity(0.1))
            .child(
                Label::new(i18n_dashboard(cx, "welcome_label"))
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(info),
            )
            .child(
                Label::new(i18n_dashboard(cx, "welcome_message"))
                    .text_sm()
                    .text_color(info),
            )
    }
}
