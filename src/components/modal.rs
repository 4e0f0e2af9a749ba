//! Modal Component
//!
//! Centered panel over a dimmed backdrop, with header, body and footer.

use crate::constants::DIALOG_WIDTH;
use gpui::{
    AnyElement, App, ClickEvent, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

type CloseHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    description: Option<SharedString>,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Muted text under the title
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer element, laid out right-aligned
    pub fn footer(mut self, child: impl IntoElement) -> Self {
        self.footer.push(child.into_any_element());
        self
    }

    /// Set the close handler; shows the close button
    pub fn on_close(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let header = h_flex()
            .items_start()
            .justify_between()
            .gap_4()
            .child(
                v_flex()
                    .gap_1()
                    .child(
                        Label::new(self.title)
                            .text_size(px(18.0))
                            .font_weight(FontWeight::SEMIBOLD),
                    )
                    .when_some(self.description, |this, description| {
                        this.child(
                            Label::new(description)
                                .text_sm()
                                .text_color(theme.muted_foreground),
                        )
                    }),
            )
            .when_some(self.on_close, |this, handler| {
                this.child(
                    Button::new("modal-close")
                        .icon(IconName::Close)
                        .ghost()
                        .xsmall()
                        .on_click(handler),
                )
            });

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(gpui::black().opacity(0.5))
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .w(px(DIALOG_WIDTH))
                    .max_w_full()
                    .p_6()
                    .gap_4()
                    .rounded_lg()
                    .shadow_lg()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.background)
                    .child(header)
                    .children(self.children)
                    .when(!self.footer.is_empty(), |this| {
                        this.child(h_flex().pt_2().justify_end().gap_2().children(self.footer))
                    }),
            )
    }
}
