//! Sidebar Navigation Component
//!
//! Fixed-width navigation sidebar switching between the landing page and the dashboard.

use crate::assets::CustomIconName;
use crate::constants::SIDEBAR_WIDTH;
use crate::helpers::{DASHBOARD_KEYSTROKE, LANDING_KEYSTROKE, humanize_keystroke};
use crate::states::{PymeGlobalStore, Route, i18n_sidebar};
use gpui::{Context, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

/// Sidebar navigation component
pub struct PymeSidebar {
    /// Current route for highlighting
    current_route: Route,
    _subscriptions: Vec<Subscription>,
}

impl PymeSidebar {
    /// Create a new sidebar
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<PymeGlobalStore>();
        let preferences = store.preferences();
        let current_route = store.read(cx).route();

        // Subscribe to route and locale changes
        let subscriptions = vec![cx.observe(&preferences, |this, model, cx| {
            this.current_route = model.read(cx).route();
            cx.notify();
        })];

        Self {
            current_route,
            _subscriptions: subscriptions,
        }
    }

    /// Render a navigation button
    fn render_nav_button(
        &self,
        id: &'static str,
        route: Route,
        icon: CustomIconName,
        label_key: &'static str,
        keystroke: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let is_active = self.current_route == route;
        let label = i18n_sidebar(cx, label_key);
        let tooltip_label = format!("{label} ({})", humanize_keystroke(keystroke));
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let btn = Button::new(id)
            .ghost()
            .w_full()
            .h(px(56.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(Icon::from(icon))
                    .child(Label::new(label).text_xs()),
            )
            .on_click(move |_, _, cx| {
                cx.update_global::<PymeGlobalStore, ()>(|store, cx| {
                    store.update(cx, |state, cx| {
                        state.go_to(route, cx);
                    });
                });
            });

        div()
            .id(id)
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for PymeSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .child(
                v_flex()
                    .flex_1()
                    .pt_2()
                    .gap_1()
                    .child(self.render_nav_button(
                        "nav-landing",
                        Route::Landing,
                        CustomIconName::House,
                        "landing",
                        LANDING_KEYSTROKE,
                        cx,
                    ))
                    .child(self.render_nav_button(
                        "nav-dashboard",
                        Route::Dashboard,
                        CustomIconName::LayoutDashboard,
                        "dashboard",
                        DASHBOARD_KEYSTROKE,
                        cx,
                    )),
            )
    }
}
