//! Card Component
//!
//! Bordered panel with a title row and an optional trailing icon.
//! The icon is rendered as given; callers size and color it.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, prelude::*, px,
};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label, v_flex};

#[derive(IntoElement)]
pub struct Card {
    title: SharedString,
    caption: Option<SharedString>,
    icon: Option<Icon>,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Muted line under the title
    pub fn caption(mut self, caption: impl Into<SharedString>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let muted = theme.muted_foreground;

        v_flex()
            .w_full()
            .p(px(20.0))
            .gap_3()
            .rounded(px(10.0))
            .border_1()
            .border_color(theme.border)
            .bg(theme.background)
            .shadow_sm()
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        v_flex()
                            .gap_1()
                            .child(Label::new(self.title).text_sm().font_weight(FontWeight::SEMIBOLD))
                            .when_some(self.caption, |this, caption| {
                                this.child(Label::new(caption).text_xs().text_color(muted))
                            }),
                    )
                    .when_some(self.icon, |this, icon| this.child(icon)),
            )
            .children(self.children)
    }
}
