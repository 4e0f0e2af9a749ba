//! Landing Page
//!
//! Headline, subtitle and the three call-to-action buttons.

use crate::states::{PymeGlobalStore, Route, UIEvent, i18n_landing};
use gpui::{ClickEvent, Context, EventEmitter, FontWeight, Window, prelude::*, px};
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use tracing::info;

pub struct LandingView;

impl EventEmitter<UIEvent> for LandingView {}

impl LandingView {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    fn open_dashboard(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let store = cx.global::<PymeGlobalStore>().clone();
        store.update(cx, |state, cx| state.go_to(Route::Dashboard, cx));
    }

    fn contact(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        info!("Contact requested from landing page");
        let message = i18n_landing(cx, "contact_toast").to_string();
        cx.emit(UIEvent::toast(message));
    }
}

impl Render for LandingView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_6()
            .p_8()
            .child(
                Label::new(i18n_landing(cx, "title"))
                    .text_size(px(40.0))
                    .font_weight(FontWeight::BOLD),
            )
            .child(
                Label::new(i18n_landing(cx, "subtitle"))
                    .text_lg()
                    .text_color(muted),
            )
            .child(
                h_flex()
                    .gap_3()
                    .pt_2()
                    .child(
                        Button::new("landing-start")
                            .label(i18n_landing(cx, "start"))
                            .primary()
                            .large()
                            .on_click(cx.listener(Self::open_dashboard)),
                    )
                    .child(
                        Button::new("landing-demo")
                            .label(i18n_landing(cx, "demo"))
                            .large()
                            .on_click(cx.listener(Self::open_dashboard)),
                    )
                    .child(
                        Button::new("landing-contact")
                            .label(i18n_landing(cx, "contact"))
                            .outline()
                            .large()
                            .on_click(cx.listener(Self::contact)),
                    ),
            )
    }
}
