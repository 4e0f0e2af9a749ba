//! Main Content Area
//!
//! Routes to the landing page or the dashboard and shows toast messages.

use crate::states::{PymeGlobalStore, Route, UIEvent, i18n_dialog};
use crate::views::{DashboardView, LandingView};
use gpui::{
    AnyElement, ClickEvent, Context, Entity, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const TOAST_DURATION: Duration = Duration::from_secs(4);

struct Toast {
    message: Arc<str>,
    is_error: bool,
}

/// Main content container component
pub struct PymeContent {
    current_route: Route,
    landing: Entity<LandingView>,
    /// Created on first visit
    dashboard: Option<Entity<DashboardView>>,
    toast: Option<Toast>,
    toast_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl PymeContent {
    /// Create a new content view
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<PymeGlobalStore>().clone();
        let current_route = store.read(cx).route();
        let landing = cx.new(|cx| LandingView::new(window, cx));

        let mut subscriptions = Vec::new();

        // Subscribe to route changes
        subscriptions.push(cx.observe(&store.preferences(), |this, model, cx| {
            this.current_route = model.read(cx).route();
            cx.notify();
        }));

        subscriptions.push(cx.subscribe(&landing, |this, _, event: &UIEvent, cx| {
            this.handle_event(event, cx);
        }));

        subscriptions.push(cx.subscribe(&store.dialog(), |this, _, event: &UIEvent, cx| {
            this.handle_event(event, cx);
        }));

        subscriptions.push(cx.subscribe(&store.quotes(), |this, _, event: &UIEvent, cx| {
            this.handle_event(event, cx);
        }));

        Self {
            current_route,
            landing,
            dashboard: None,
            toast: None,
            toast_task: None,
            _subscriptions: subscriptions,
        }
    }

    fn handle_event(&mut self, event: &UIEvent, cx: &mut Context<Self>) {
        match event {
            UIEvent::Toast { message, is_error } => {
                info!(%message, is_error, "Toast");
                self.show_toast(message.clone(), *is_error, cx);
            }
            UIEvent::TransactionRecorded { id } => {
                info!(%id, "Transaction recorded toast");
                let message = Arc::from(i18n_dialog(cx, "recorded").to_string());
                self.show_toast(message, false, cx);
            }
        }
    }

    fn show_toast(&mut self, message: Arc<str>, is_error: bool, cx: &mut Context<Self>) {
        self.toast = Some(Toast { message, is_error });
        // Replacing the task drops the previous timer
        self.toast_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(TOAST_DURATION).await;
            let _ = this.update(cx, |this, cx| {
                this.toast = None;
                cx.notify();
            });
        }));
        cx.notify();
    }

    fn dismiss_toast(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.toast = None;
        self.toast_task = None;
        cx.notify();
    }

    /// Get or create the page view for the current route
    fn render_page(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        match self.current_route {
            Route::Landing => self.landing.clone().into_any_element(),
            Route::Dashboard => {
                let dashboard = match &self.dashboard {
                    Some(dashboard) => dashboard.clone(),
                    None => {
                        let dashboard = cx.new(|cx| DashboardView::new(window, cx));
                        self.dashboard = Some(dashboard.clone());
                        dashboard
                    }
                };
                dashboard.into_any_element()
            }
        }
    }

    fn render_toast(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let toast = self.toast.as_ref()?;
        let accent = if toast.is_error {
            cx.theme().danger
        } else {
            cx.theme().success
        };

        Some(
            div().absolute().bottom_4().right_4().child(
                h_flex()
                    .gap_3()
                    .pl_4()
                    .pr_2()
                    .py_2()
                    .max_w(px(420.0))
                    .rounded_md()
                    .shadow_lg()
                    .border_1()
                    .border_l_4()
                    .border_color(accent)
                    .bg(cx.theme().popover)
                    .child(Label::new(toast.message.to_string()).text_sm())
                    .child(
                        Button::new("toast-dismiss")
                            .icon(IconName::Close)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(Self::dismiss_toast)),
                    ),
            ),
        )
    }
}

impl Render for PymeContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.render_page(window, cx);

        div()
            .relative()
            .flex_1()
            .h_full()
            .overflow_hidden()
            .bg(cx.theme().background)
            .child(page)
            .children(self.render_toast(cx))
    }
}
